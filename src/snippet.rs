//! Copy-pasteable `<img>` markup for the current object position.
//!
//! # Example
//!
//! ```
//! use focalcrop::ObjectPosition;
//! use focalcrop::snippet::{CodeSnippetLanguage, code_snippet};
//!
//! let position = ObjectPosition::new(30.0, 60.0);
//! let html = code_snippet(CodeSnippetLanguage::Html, "cat.jpg", position);
//! assert!(html.contains("object-position: 30% 60%;"));
//!
//! let tailwind = code_snippet(CodeSnippetLanguage::Tailwind, "cat.jpg", position);
//! assert!(tailwind.contains("object-[30%_60%]"));
//! ```

#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

use crate::position::ObjectPosition;

/// Markup flavour of a snippet.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum CodeSnippetLanguage {
    /// Plain HTML with an inline `style` attribute.
    #[default]
    Html,
    /// JSX with a `style` object.
    React,
    /// HTML with Tailwind utility classes.
    Tailwind,
    /// JSX with Tailwind utility classes.
    ReactTailwind,
}

impl CodeSnippetLanguage {
    /// Whether the snippet is JSX.
    pub fn uses_react(self) -> bool {
        matches!(self, Self::React | Self::ReactTailwind)
    }

    /// Whether the snippet uses Tailwind classes.
    pub fn uses_tailwind(self) -> bool {
        matches!(self, Self::Tailwind | Self::ReactTailwind)
    }
}

/// Language selected by the React and Tailwind checkboxes.
pub fn language_from_options(react: bool, tailwind: bool) -> CodeSnippetLanguage {
    match (react, tailwind) {
        (true, true) => CodeSnippetLanguage::ReactTailwind,
        (true, false) => CodeSnippetLanguage::React,
        (false, true) => CodeSnippetLanguage::Tailwind,
        (false, false) => CodeSnippetLanguage::Html,
    }
}

/// Syntax-highlighting grammar for a snippet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CodeBlockLanguage {
    Jsx,
    Html,
}

/// Grammar to highlight `language` with.
pub fn code_block_language(language: CodeSnippetLanguage) -> CodeBlockLanguage {
    if language.uses_react() {
        CodeBlockLanguage::Jsx
    } else {
        CodeBlockLanguage::Html
    }
}

/// Render the `<img>` snippet for `src` cropped at `position`.
pub fn code_snippet(language: CodeSnippetLanguage, src: &str, position: ObjectPosition) -> String {
    let position = position.to_string();
    match language {
        CodeSnippetLanguage::Html => html(src, &position),
        CodeSnippetLanguage::React => react(src, &position),
        CodeSnippetLanguage::Tailwind => tailwind(src, &position, "class"),
        CodeSnippetLanguage::ReactTailwind => tailwind(src, &position, "className"),
    }
}

fn html(src: &str, position: &str) -> String {
    format!(
        r#"<img
  src="{src}"
  style="
    width: 100%;
    height: 100%;
    object-fit: cover;
    object-position: {position};
  "
/>"#
    )
}

fn react(src: &str, position: &str) -> String {
    format!(
        r#"<img
  src="{src}"
  style={{{{
    width: '100%',
    height: '100%',
    objectFit: 'cover',
    objectPosition: '{position}',
  }}}}
/>"#
    )
}

/// Tailwind arbitrary values can't contain spaces; `_` stands in for them.
fn tailwind(src: &str, position: &str, class_attribute: &str) -> String {
    let class = position.replace(' ', "_");
    format!(
        r#"<img
  src="{src}"
  {class_attribute}="
    w-full
    h-full
    object-cover
    object-[{class}]
  "
/>"#
    )
}
