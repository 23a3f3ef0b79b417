//! `[output]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [output]
//! dir = "src"                  # Where generated files are written
//! format = "rust"              # rust | c
//! runtime = "pagepack"         # Crate path referenced by generated Rust
//! ```
//!
//! With `format = "c"` the output matches Arduino-style firmware:
//! `web_pages.h`, `web_pages.cpp`, `page_router.h`, `page_router.cpp`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::compiler::{DEFAULT_RUNTIME, OutputFormat};

/// Generated source settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory for generated files.
    pub dir: PathBuf,

    /// Language of the generated files.
    pub format: OutputFormat,

    /// Crate path used for `Page` and `find_page` in generated Rust
    /// (e.g., `pagepack` or `crate::web`).
    pub runtime: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: "src".into(),
            format: OutputFormat::default(),
            runtime: DEFAULT_RUNTIME.to_owned(),
        }
    }
}

impl OutputConfig {
    /// Check that `runtime` is a `::`-separated path of identifiers.
    pub fn validate(&self) -> Result<(), String> {
        let valid = self.runtime.split("::").all(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        });

        if valid {
            Ok(())
        } else {
            Err(format!(
                "output.runtime `{}` is not a Rust path (e.g., `pagepack` or `crate::web`)",
                self.runtime
            ))
        }
    }
}
