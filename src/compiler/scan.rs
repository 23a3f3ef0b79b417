//! Source directory scanning (read-only).

use std::fs;
use std::path::{Path, PathBuf};

use crate::debug;
use crate::page::AssetType;

use super::CompileError;

/// A minified file picked up for embedding.
#[derive(Debug, Clone)]
pub struct SourceAsset {
    pub path: PathBuf,
    pub file_name: String,
    pub kind: AssetType,
    pub bytes: Vec<u8>,
}

/// Why a source directory cannot be compiled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaleReason {
    /// Directory does not exist
    Missing,
    /// Directory exists but has no entries
    Empty,
}

impl std::fmt::Display for StaleReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => f.write_str("source directory not found"),
            Self::Empty => f.write_str("source directory is empty"),
        }
    }
}

/// Check whether `dir` has anything to compile.
///
/// Returns `Some(reason)` when the directory is absent or has no entries
/// at all. A directory holding only non-asset files is not stale: it
/// compiles to an empty table.
pub fn check_source_dir(dir: &Path) -> Result<Option<StaleReason>, CompileError> {
    if !dir.is_dir() {
        return Ok(Some(StaleReason::Missing));
    }

    let mut entries =
        fs::read_dir(dir).map_err(|err| CompileError::Io(dir.to_path_buf(), err))?;
    if entries.next().is_none() {
        return Ok(Some(StaleReason::Empty));
    }

    Ok(None)
}

/// Read every embeddable asset directly inside `dir`.
///
/// Subdirectories and files with other extensions are skipped. The result
/// is sorted by file name, which fixes the order of the page table.
pub fn scan_assets(dir: &Path) -> Result<Vec<SourceAsset>, CompileError> {
    let entries = fs::read_dir(dir).map_err(|err| CompileError::Io(dir.to_path_buf(), err))?;
    let mut assets = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|err| CompileError::Io(dir.to_path_buf(), err))?;
        let path = entry.path();

        if !path.is_file() {
            debug!("scan"; "skipping non-file {}", path.display());
            continue;
        }

        let Some(kind) = AssetType::from_path(&path) else {
            debug!("scan"; "skipping {}", path.display());
            continue;
        };

        let file_name = entry
            .file_name()
            .into_string()
            .map_err(|_| CompileError::NonUtf8Name(path.clone()))?;
        let bytes = fs::read(&path).map_err(|err| CompileError::Io(path.clone(), err))?;

        assets.push(SourceAsset {
            path,
            file_name,
            kind,
            bytes,
        });
    }

    assets.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(assets)
}
