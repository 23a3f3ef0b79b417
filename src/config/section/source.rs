//! `[source]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [source]
//! web = "src/web"              # Raw sources, input of `pagepack minify`
//! minified = "src/web/build"   # Minified assets, input of `pagepack compile`
//! ```
//!
//! Relative paths are resolved against the directory holding `pagepack.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Web asset directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Raw (unminified) web sources.
    pub web: PathBuf,

    /// Minified assets to embed.
    pub minified: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            web: "src/web".into(),
            minified: "src/web/build".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use std::path::PathBuf;

    #[test]
    fn test_source_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.source.web, PathBuf::from("src/web"));
        assert_eq!(config.source.minified, PathBuf::from("src/web/build"));
    }

    #[test]
    fn test_source_partial_override() {
        let config = test_parse_config("[source]\nminified = \"data/www\"");
        assert_eq!(config.source.minified, PathBuf::from("data/www"));
        assert_eq!(config.source.web, PathBuf::from("src/web"));
    }
}
