//! Build-time asset compiler.
//!
//! Turns a directory of minified web assets into generated source that
//! embeds each asset's bytes and an ordered [`Page`] table.
//!
//! # Pipeline
//!
//! ```text
//! src/web/build/            scan      name       compress     emit        write
//! ├── app.nogz.js   ──►  SourceAsset ──► AssetName ──► bytes ──► Artifact ──► pages.rs
//! ├── index.html                                     (gzip -9)
//! └── style.css
//! ```
//!
//! Identical inputs always produce byte-identical artifacts: the table
//! follows file name order, gzip headers carry no timestamp, and the
//! generated text has no build-specific content.
//!
//! # Staleness
//!
//! If the source directory is missing or empty, nothing is written and the
//! previously generated files stay in place ([`CompileOutcome::Stale`]).

mod compress;
mod emit;
mod error;
pub mod name;
mod scan;
mod validate;
mod write;

use std::path::{Path, PathBuf};

use crate::page::{AssetType, Page};
use crate::{debug, log, warn};

pub use compress::{GZIP_LEVEL, gzip};
pub use emit::{Artifact, OutputFormat, digest, render};
pub use error::CompileError;
pub use name::{AssetName, Compression};
pub use scan::{SourceAsset, StaleReason, check_source_dir, scan_assets};
pub use validate::check_unique;
pub use write::{WriteStatus, WrittenFile, write_artifacts};

/// Default crate path used by generated Rust code.
pub const DEFAULT_RUNTIME: &str = "pagepack";

/// One asset ready for emission.
#[derive(Debug, Clone)]
pub struct CompiledAsset {
    /// Source file path
    pub source: PathBuf,
    /// Source file name (decides table order)
    pub file_name: String,
    pub url: String,
    pub symbol: String,
    /// Stored bytes (gzip stream or raw file)
    pub data: Vec<u8>,
    /// Size of the minified input
    pub raw_len: usize,
    pub kind: AssetType,
    pub compression: Compression,
}

impl CompiledAsset {
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn mime(&self) -> &'static str {
        self.kind.mime()
    }

    #[inline]
    pub fn gzip(&self) -> bool {
        self.compression.is_gzip()
    }

    /// Runtime descriptor borrowing this asset.
    pub fn page(&self) -> Page<'_> {
        Page::new(&self.url, &self.data, self.mime(), self.gzip())
    }
}

/// Inputs of one compiler run.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Directory of minified assets
    pub source: PathBuf,
    /// Directory receiving generated files
    pub output: PathBuf,
    pub format: OutputFormat,
    /// Crate path of the runtime in generated Rust (e.g., "pagepack")
    pub runtime: String,
    /// Compression opt-out marker (e.g., "nogz")
    pub marker: String,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub enum CompileOutcome {
    Generated(CompileReport),
    /// Nothing was written; previously generated files are kept.
    Stale(StaleReason),
}

/// Summary of generated output.
#[derive(Debug, Clone)]
pub struct CompileReport {
    pub assets: usize,
    pub raw_bytes: usize,
    pub stored_bytes: usize,
    /// Short blake3 digest over all artifacts
    pub digest: String,
    pub files: Vec<WrittenFile>,
}

/// Run the full pipeline: scan, compile, emit, write.
pub fn compile(options: &CompileOptions) -> Result<CompileOutcome, CompileError> {
    if let Some(reason) = check_source_dir(&options.source)? {
        warn!(
            "{} ({}); keeping last generated output in {}",
            reason,
            options.source.display(),
            options.output.display()
        );
        return Ok(CompileOutcome::Stale(reason));
    }

    let assets = compile_dir(&options.source, &options.marker)?;
    let artifacts = render(&assets, options.format, &options.runtime);
    let digest = digest(&artifacts);
    let files = write_artifacts(&options.output, &artifacts)?;

    let report = CompileReport {
        assets: assets.len(),
        raw_bytes: assets.iter().map(|a| a.raw_len).sum(),
        stored_bytes: assets.iter().map(CompiledAsset::len).sum(),
        digest,
        files,
    };

    log!(
        "compile";
        "generated {} web asset{} ({} → {} bytes, digest {})",
        report.assets,
        if report.assets == 1 { "" } else { "s" },
        report.raw_bytes,
        report.stored_bytes,
        report.digest
    );

    Ok(CompileOutcome::Generated(report))
}

/// Compile every asset in `dir` without emitting anything.
///
/// Returns assets in table order. Fails on invalid names and on symbol or
/// URL collisions.
pub fn compile_dir(dir: &Path, marker: &str) -> Result<Vec<CompiledAsset>, CompileError> {
    let assets = scan_assets(dir)?
        .into_iter()
        .map(|source| compile_source(source, marker))
        .collect::<Result<Vec<_>, _>>()?;

    check_unique(&assets)?;
    Ok(assets)
}

/// Name and (optionally) compress a single asset.
pub fn compile_source(source: SourceAsset, marker: &str) -> Result<CompiledAsset, CompileError> {
    let AssetName {
        url,
        symbol,
        compression,
    } = AssetName::derive(&source.file_name, marker)?;

    let raw_len = source.bytes.len();
    let data = match compression {
        Compression::Gzip => {
            gzip(&source.bytes).map_err(|err| CompileError::Compress(source.path.clone(), err))?
        }
        Compression::Stored => source.bytes,
    };

    debug!(
        "compile";
        "{} → {} ({}, {} → {} bytes)",
        source.file_name,
        url,
        if compression.is_gzip() { "gzip" } else { "stored" },
        raw_len,
        data.len()
    );

    Ok(CompiledAsset {
        source: source.path,
        file_name: source.file_name,
        url,
        symbol,
        data,
        raw_len,
        kind: source.kind,
        compression,
    })
}
