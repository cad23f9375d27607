//! Named aspect-ratio ticks for the slider.
//!
//! The tick list is the preset table plus, once an image is loaded, an
//! `"original"` entry for the image's natural ratio. Presets that would sit
//! on top of the original tick are dropped.

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::scale::to_log_position;

/// Name of the entry carrying the image's natural aspect ratio.
pub const ORIGINAL: &str = "original";

/// Presets within this distance (in ratio units) of the original are dropped.
pub const POSITION_REPLACEMENT_THRESHOLD: f64 = 1.0 / 50.0;

/// Preset table, portrait 9:16 to landscape 4:1, sorted by value.
pub const PRESETS: [(&str, f64); 14] = [
    ("9:16", 9.0 / 16.0),
    ("3:5", 3.0 / 5.0),
    ("2:3", 2.0 / 3.0),
    ("5:7", 5.0 / 7.0),
    ("3:4", 3.0 / 4.0),
    ("4:5", 4.0 / 5.0),
    ("1:1", 1.0),
    ("5:4", 5.0 / 4.0),
    ("4:3", 4.0 / 3.0),
    ("7:5", 7.0 / 5.0),
    ("3:2", 3.0 / 2.0),
    ("5:3", 5.0 / 3.0),
    ("16:9", 16.0 / 9.0),
    ("4:1", 4.0),
];

const PRESET_MIN: f64 = PRESETS[0].1;
const PRESET_MAX: f64 = PRESETS[PRESETS.len() - 1].1;

/// One tick on the aspect-ratio slider.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AspectRatioEntry {
    /// Preset label such as `"16:9"`, or [`ORIGINAL`].
    pub name: &'static str,
    /// Width ÷ height.
    pub value: f64,
    /// Normalized location on the log-scale track.
    pub position: f64,
}

impl AspectRatioEntry {
    /// Whether this is the image's natural ratio rather than a preset.
    pub fn is_original(&self) -> bool {
        self.name == ORIGINAL
    }
}

/// Build the sorted tick list, optionally including the image's natural ratio.
///
/// With a natural ratio outside the preset range the log domain is widened to
/// include it, so every position is recomputed against
/// `[min(9:16, natural), max(4:1, natural)]`.
pub fn build_aspect_ratio_list(natural_aspect_ratio: Option<f64>) -> Vec<AspectRatioEntry> {
    let Some(original) = natural_aspect_ratio else {
        return PRESETS
            .iter()
            .map(|&(name, value)| AspectRatioEntry {
                name,
                value,
                position: to_log_position(value, PRESET_MIN, PRESET_MAX),
            })
            .collect();
    };

    let min = PRESET_MIN.min(original);
    let max = PRESET_MAX.max(original);

    let mut entries: Vec<AspectRatioEntry> = PRESETS
        .iter()
        .filter(|&&(_, value)| {
            value < original - POSITION_REPLACEMENT_THRESHOLD
                || value > original + POSITION_REPLACEMENT_THRESHOLD
        })
        .map(|&(name, value)| AspectRatioEntry {
            name,
            value,
            position: to_log_position(value, min, max),
        })
        .collect();

    entries.push(AspectRatioEntry {
        name: ORIGINAL,
        value: original,
        position: to_log_position(original, min, max),
    });
    entries.sort_by(|a, b| a.value.total_cmp(&b.value));
    entries
}

/// Memoizes the most recent tick list.
///
/// Asking again for the same natural ratio hands back the same [`Arc`], so
/// callers can skip re-rendering with a pointer comparison.
#[derive(Clone, Debug, Default)]
pub struct AspectRatioListCache {
    last: Option<(Option<u64>, Arc<[AspectRatioEntry]>)>,
}

impl AspectRatioListCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tick list for `natural_aspect_ratio`, rebuilt only when the input changed.
    pub fn get(&mut self, natural_aspect_ratio: Option<f64>) -> Arc<[AspectRatioEntry]> {
        let key = natural_aspect_ratio.map(f64::to_bits);
        if let Some((cached_key, list)) = &self.last
            && *cached_key == key
        {
            return Arc::clone(list);
        }

        tracing::trace!(?natural_aspect_ratio, "rebuilding aspect ratio list");
        let list: Arc<[AspectRatioEntry]> = build_aspect_ratio_list(natural_aspect_ratio).into();
        self.last = Some((key, Arc::clone(&list)));
        list
    }
}
