//! Points, sizes and rectangles in CSS pixels.

/// A pointer location in CSS pixels (client coordinates).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Width × height in CSS pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width ÷ height. Only meaningful when [`is_measurable`](Self::is_measurable).
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// True when both sides are finite and strictly positive.
    ///
    /// Elements measure as zero before layout has run.
    pub fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Axis-aligned rectangle as reported by `getBoundingClientRect()`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether the rect has a usable, finite area and position.
    pub fn is_measurable(&self) -> bool {
        self.origin().is_finite() && self.size().is_measurable()
    }
}

/// Size of an image of `image_ratio` painted with `object-fit: cover` into `container`.
///
/// One side matches the container exactly and the other overflows it (or
/// matches too when the ratios agree). Returns `container` unchanged for an
/// unusable ratio.
pub fn cover_size(container: Size, image_ratio: f64) -> Size {
    if !(image_ratio.is_finite() && image_ratio > 0.0) || !container.is_measurable() {
        return container;
    }
    if image_ratio > container.aspect_ratio() {
        // Image is wider: height constrains.
        Size::new(container.height * image_ratio, container.height)
    } else {
        // Image is taller (or equal): width constrains.
        Size::new(container.width, container.width / image_ratio)
    }
}
