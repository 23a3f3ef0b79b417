//! Generated source rendering.
//!
//! Two output formats share the same table order and byte data:
//!
//! | Format | Files                                                    |
//! |--------|----------------------------------------------------------|
//! | `rust` | `pages.rs`                                               |
//! | `c`    | `web_pages.h`, `web_pages.cpp`, `page_router.h`, `page_router.cpp` |
//!
//! Rendering is a pure function of the compiled assets; nothing time- or
//! host-dependent ends up in the text.

mod c;
mod rust;

use serde::{Deserialize, Serialize};

use super::CompiledAsset;

/// Banner placed at the top of every generated file.
const GENERATED_BANNER: &str = "@generated by pagepack from the minified web assets. Do not edit.";

/// Bytes per line in rendered arrays.
const BYTES_PER_LINE: usize = 12;

/// Language of the generated source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Single `pages.rs` using the pagepack runtime types
    #[default]
    Rust,
    /// C/C++ sources for Arduino-style firmware
    C,
}

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: &'static str,
    pub contents: String,
}

impl Artifact {
    fn new(file_name: &'static str, contents: String) -> Self {
        Self {
            file_name,
            contents,
        }
    }
}

/// Render all artifacts for `assets` (already in table order).
///
/// `runtime` is the crate path the Rust output refers to; the C output
/// ignores it.
pub fn render(assets: &[CompiledAsset], format: OutputFormat, runtime: &str) -> Vec<Artifact> {
    match format {
        OutputFormat::Rust => rust::render(assets, runtime),
        OutputFormat::C => c::render(assets),
    }
}

/// Short blake3 digest over every artifact's name and contents.
///
/// Two runs over identical inputs report the same digest.
pub fn digest(artifacts: &[Artifact]) -> String {
    let mut hasher = blake3::Hasher::new();
    for artifact in artifacts {
        hasher.update(artifact.file_name.as_bytes());
        hasher.update(&[0]);
        hasher.update(artifact.contents.as_bytes());
        hasher.update(&[0]);
    }
    hex::encode(&hasher.finalize().as_bytes()[..8])
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::compiler::compile_source;
    use crate::compiler::name::DEFAULT_MARKER;
    use crate::compiler::scan::SourceAsset;
    use crate::page::AssetType;

    pub fn asset(name: &str, bytes: &[u8]) -> CompiledAsset {
        let source = SourceAsset {
            path: name.into(),
            file_name: name.to_owned(),
            kind: AssetType::from_path(name.as_ref()).unwrap(),
            bytes: bytes.to_vec(),
        };
        compile_source(source, DEFAULT_MARKER).unwrap()
    }

    #[test]
    fn test_render_file_sets() {
        let assets = [asset("index.html", b"<p>")];

        let names: Vec<_> = render(&assets, OutputFormat::Rust, "pagepack")
            .iter()
            .map(|a| a.file_name)
            .collect();
        assert_eq!(names, ["pages.rs"]);

        let names: Vec<_> = render(&assets, OutputFormat::C, "pagepack")
            .iter()
            .map(|a| a.file_name)
            .collect();
        assert_eq!(
            names,
            ["web_pages.h", "web_pages.cpp", "page_router.h", "page_router.cpp"]
        );
    }

    #[test]
    fn test_digest_tracks_content() {
        let a = render(&[asset("a.js", b"1")], OutputFormat::Rust, "pagepack");
        let b = render(&[asset("a.js", b"2")], OutputFormat::Rust, "pagepack");
        assert_eq!(digest(&a), digest(&a.clone()));
        assert_ne!(digest(&a), digest(&b));
        assert_eq!(digest(&a).len(), 16);
    }

    #[test]
    fn test_output_format_parses_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }
        let parsed: Wrapper = toml::from_str("format = \"c\"").unwrap();
        assert_eq!(parsed.format, OutputFormat::C);
        let parsed: Wrapper = toml::from_str("format = \"rust\"").unwrap();
        assert_eq!(parsed.format, OutputFormat::Rust);
    }
}
