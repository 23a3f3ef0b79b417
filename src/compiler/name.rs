//! Naming rules: file name → URL, symbol, and compression flag.
//!
//! All functions here are pure. The opt-out convention is checked once per
//! file and recorded as an explicit [`Compression`] value.
//!
//! | File name        | URL          | Symbol          | Compression |
//! |------------------|--------------|-----------------|-------------|
//! | `index.html`     | `/`          | `INDEX_HTML_GZ` | gzip        |
//! | `style.css`      | `/style.css` | `STYLE_CSS_GZ`  | gzip        |
//! | `app.nogz.js`    | `/app.js`    | `APP_NOGZ_JS`   | stored      |
//! | `chess-ui.js`    | `/chess-ui.js` | `CHESS_UI_JS_GZ` | gzip     |

use super::CompileError;

/// The file that is served at `/`.
pub const INDEX_FILE: &str = "index.html";

/// Suffix appended to the symbol of compressed assets.
pub const GZIP_SYMBOL_SUFFIX: &str = "_GZ";

/// Default compression opt-out marker (`app.nogz.js`).
pub const DEFAULT_MARKER: &str = "nogz";

/// How an asset's bytes are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    /// gzip at maximum level
    Gzip,
    /// raw bytes, unchanged
    Stored,
}

impl Compression {
    #[inline]
    pub const fn is_gzip(self) -> bool {
        matches!(self, Self::Gzip)
    }
}

/// Naming decisions for one asset file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetName {
    pub url: String,
    pub symbol: String,
    pub compression: Compression,
}

impl AssetName {
    /// Derive URL, symbol, and compression from a file name.
    pub fn derive(file_name: &str, marker: &str) -> Result<Self, CompileError> {
        let marker_at = find_marker(file_name, marker)?;
        let compression = if marker_at.is_some() {
            Compression::Stored
        } else {
            Compression::Gzip
        };

        let url = derive_url(file_name, marker_at.map(|at| at..at + marker.len() + 1));
        let symbol = derive_symbol(file_name, compression);
        if !is_identifier(&symbol) {
            return Err(CompileError::InvalidSymbol {
                file: file_name.to_owned(),
                symbol,
            });
        }

        Ok(Self {
            url,
            symbol,
            compression,
        })
    }
}

/// Locate the `.{marker}` segment in a file name.
///
/// Returns the byte offset of the dot before the marker. The marker must
/// be an isolated infix: preceded by a non-empty stem and followed by
/// another `.`. Any other occurrence of `.{marker}` (repeated, glued to
/// other text, or trailing) is rejected instead of guessed at.
///
/// A name containing the marker text without a leading dot (`nogz.js`)
/// does not carry the marker.
pub fn find_marker(file_name: &str, marker: &str) -> Result<Option<usize>, CompileError> {
    let needle = format!(".{marker}");
    let mut hits = file_name.match_indices(&needle).map(|(at, _)| at);

    let Some(at) = hits.next() else {
        return Ok(None);
    };

    let end = at + needle.len();
    let isolated = at > 0 && file_name[end..].starts_with('.');
    if !isolated || hits.next().is_some() {
        return Err(CompileError::InvalidMarker {
            file: file_name.to_owned(),
            marker: marker.to_owned(),
        });
    }

    Ok(Some(at))
}

/// URL an asset is served at.
///
/// `marker` is the byte range of the `.{marker}` segment to drop, if any.
pub fn derive_url(file_name: &str, marker: Option<std::ops::Range<usize>>) -> String {
    if file_name == INDEX_FILE {
        return "/".to_owned();
    }

    match marker {
        Some(range) => format!("/{}{}", &file_name[..range.start], &file_name[range.end..]),
        None => format!("/{file_name}"),
    }
}

/// Compiled symbol for an asset's bytes.
///
/// Uppercases the full file name (marker included), maps `.` and `-`
/// to `_`, and appends `_GZ` for compressed assets.
pub fn derive_symbol(file_name: &str, compression: Compression) -> String {
    let mut symbol: String = file_name
        .to_uppercase()
        .chars()
        .map(|c| if c == '.' || c == '-' { '_' } else { c })
        .collect();
    if compression.is_gzip() {
        symbol.push_str(GZIP_SYMBOL_SUFFIX);
    }
    symbol
}

/// `[A-Z_][A-Z0-9_]*`, valid in both Rust and C.
fn is_identifier(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_uppercase() || c == '_')
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(name: &str) -> AssetName {
        AssetName::derive(name, DEFAULT_MARKER).unwrap()
    }

    #[test]
    fn test_index_maps_to_root() {
        let name = derive("index.html");
        assert_eq!(name.url, "/");
        assert_eq!(name.symbol, "INDEX_HTML_GZ");
        assert_eq!(name.compression, Compression::Gzip);
    }

    #[test]
    fn test_plain_asset() {
        let name = derive("style.css");
        assert_eq!(name.url, "/style.css");
        assert_eq!(name.symbol, "STYLE_CSS_GZ");
        assert!(name.compression.is_gzip());
    }

    #[test]
    fn test_marker_disables_compression() {
        let name = derive("app.nogz.js");
        assert_eq!(name.url, "/app.js");
        assert_eq!(name.symbol, "APP_NOGZ_JS");
        assert_eq!(name.compression, Compression::Stored);
    }

    #[test]
    fn test_compressed_and_stored_share_url() {
        assert_eq!(derive("app.js").url, derive("app.nogz.js").url);
        assert_ne!(derive("app.js").symbol, derive("app.nogz.js").symbol);
    }

    #[test]
    fn test_dash_becomes_underscore() {
        let name = derive("chess-ui.min.js");
        assert_eq!(name.url, "/chess-ui.min.js");
        assert_eq!(name.symbol, "CHESS_UI_MIN_JS_GZ");
    }

    #[test]
    fn test_stored_index_is_not_root() {
        let name = derive("index.nogz.html");
        assert_eq!(name.url, "/index.html");
        assert_eq!(name.compression, Compression::Stored);
    }

    #[test]
    fn test_marker_text_without_dot_is_plain() {
        let name = derive("nogz.js");
        assert_eq!(name.url, "/nogz.js");
        assert!(name.compression.is_gzip());

        let name = derive("appnogz.js");
        assert_eq!(name.url, "/appnogz.js");
        assert!(name.compression.is_gzip());
    }

    #[test]
    fn test_marker_must_be_isolated() {
        for bad in [
            "app.nogzip.js",
            "app.nogz.nogz.js",
            "a.nogz.b.nogz.js",
            ".nogz.js",
            "app.js.nogz",
        ] {
            let err = AssetName::derive(bad, DEFAULT_MARKER).unwrap_err();
            assert!(
                matches!(err, CompileError::InvalidMarker { .. }),
                "{bad} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn test_custom_marker() {
        let name = AssetName::derive("app.raw.js", "raw").unwrap();
        assert_eq!(name.url, "/app.js");
        assert_eq!(name.compression, Compression::Stored);

        let name = AssetName::derive("app.nogz.js", "raw").unwrap();
        assert_eq!(name.url, "/app.nogz.js");
        assert!(name.compression.is_gzip());
    }

    #[test]
    fn test_invalid_symbol() {
        for bad in ["my page.html", "1app.js", "über.css", "a+b.js"] {
            let err = AssetName::derive(bad, DEFAULT_MARKER).unwrap_err();
            assert!(
                matches!(err, CompileError::InvalidSymbol { .. }),
                "{bad} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn test_underscore_is_valid() {
        let name = derive("_boot.js");
        assert_eq!(name.symbol, "_BOOT_JS_GZ");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("A"));
        assert!(is_identifier("_A1"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("9A"));
        assert!(!is_identifier("A B"));
    }
}
