//! Writing generated artifacts to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::debug;

use super::{Artifact, CompileError};

/// What happened to one output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Written,
    /// Existing file already had identical content; left untouched
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub status: WriteStatus,
}

/// Write each artifact into `dir`, skipping files whose content is already
/// identical so their modification time is preserved.
///
/// Changed files are first staged next to their targets and only renamed
/// into place once every one of them was written, so a failed run leaves
/// the previous generation intact.
pub fn write_artifacts(dir: &Path, artifacts: &[Artifact]) -> Result<Vec<WrittenFile>, CompileError> {
    fs::create_dir_all(dir).map_err(|err| CompileError::Write(dir.to_path_buf(), err))?;

    let mut files = Vec::with_capacity(artifacts.len());
    let mut staged = Vec::new();

    for artifact in artifacts {
        let path = dir.join(artifact.file_name);

        let status = if file_content_matches(&path, &artifact.contents) {
            debug!("write"; "{} unchanged, skipping write", path.display());
            WriteStatus::Unchanged
        } else {
            let tmp = staging_path(dir, artifact.file_name);
            if let Err(err) = fs::write(&tmp, &artifact.contents) {
                discard(&staged);
                fs::remove_file(&tmp).ok();
                return Err(CompileError::Write(tmp, err));
            }
            staged.push((tmp, path.clone()));
            WriteStatus::Written
        };

        files.push(WrittenFile { path, status });
    }

    for (tmp, path) in &staged {
        fs::rename(tmp, path).map_err(|err| CompileError::Write(path.clone(), err))?;
        debug!("write"; "wrote {}", path.display());
    }

    Ok(files)
}

/// Hidden sibling used while a generation is being written.
fn staging_path(dir: &Path, file_name: &str) -> PathBuf {
    dir.join(format!(".{file_name}.tmp"))
}

fn discard(staged: &[(PathBuf, PathBuf)]) {
    for (tmp, _) in staged {
        fs::remove_file(tmp).ok();
    }
}

/// Check if file content is the same as new content
fn file_content_matches(path: &Path, content: &str) -> bool {
    path.exists() && fs::read(path).is_ok_and(|existing| existing == content.as_bytes())
}
