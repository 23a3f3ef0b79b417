//! Asset types and their MIME mapping.
//!
//! Only markup, stylesheets, and scripts are embedded; every other
//! extension is ignored by the compiler.

use std::path::Path;

/// MIME type constants, as sent in `Content-Type`.
pub mod types {
    pub const HTML: &str = "text/html";
    pub const CSS: &str = "text/css";
    pub const JAVASCRIPT: &str = "application/javascript";
}

/// Kind of embeddable web asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetType {
    Html,
    Css,
    JavaScript,
}

impl AssetType {
    pub const ALL: [Self; 3] = [Self::Html, Self::Css, Self::JavaScript];

    /// Classify by file extension (case-insensitive, without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case("html") {
            Some(Self::Html)
        } else if ext.eq_ignore_ascii_case("css") {
            Some(Self::Css)
        } else if ext.eq_ignore_ascii_case("js") {
            Some(Self::JavaScript)
        } else {
            None
        }
    }

    /// Classify by the extension of `path`.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    pub const fn mime(self) -> &'static str {
        match self {
            Self::Html => types::HTML,
            Self::Css => types::CSS,
            Self::JavaScript => types::JAVASCRIPT,
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Css => "css",
            Self::JavaScript => "js",
        }
    }
}
