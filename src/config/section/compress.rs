//! `[compress]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [compress]
//! marker = "nogz"              # `app.nogz.js` is embedded uncompressed as `/app.js`
//! ```
//!
//! Every other asset is gzip-compressed at maximum level.

use serde::{Deserialize, Serialize};

use crate::compiler::name::DEFAULT_MARKER;

/// Compression settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressConfig {
    /// File name segment that opts an asset out of compression.
    pub marker: String,
}

impl Default for CompressConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_owned(),
        }
    }
}

impl CompressConfig {
    /// The marker must be a non-empty run of `[A-Za-z0-9_]`.
    pub fn validate(&self) -> Result<(), String> {
        if self.marker.is_empty() {
            return Err("compress.marker must not be empty".into());
        }
        if !self
            .marker
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(format!(
                "compress.marker `{}` may only contain letters, digits, and `_`",
                self.marker
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_compress_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.compress.marker, "nogz");
    }

    #[test]
    fn test_marker_validation() {
        let mut compress = CompressConfig::default();
        assert!(compress.validate().is_ok());

        compress.marker = "raw_2".into();
        assert!(compress.validate().is_ok());

        for bad in ["", ".nogz", "no gz", "a/b"] {
            compress.marker = bad.into();
            assert!(compress.validate().is_err(), "{bad:?} should be rejected");
        }
    }
}
