//! Minification of raw web sources before embedding.
//!
//! Uses oxc for JavaScript, lightningcss for CSS, and minify-html for
//! markup (with inline styles and scripts). Anything else is copied as-is.
//!
//! ```text
//! src/web/             src/web/build/
//! ├── index.html  ──►  index.html   (minify-html)
//! ├── style.css   ──►  style.css    (lightningcss)
//! ├── app.nogz.js ──►  app.nogz.js  (oxc)
//! └── favicon.ico ──►  favicon.ico  (copied)
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;
use thiserror::Error;

use crate::page::AssetType;
use crate::{debug, log, warn};

#[derive(Debug, Error)]
pub enum MinifyError {
    #[error("IO error when reading `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("IO error when writing `{0}`")]
    Write(PathBuf, #[source] std::io::Error),
}

/// Result of a minify run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinifyReport {
    /// Files rewritten by a minifier
    pub minified: usize,
    /// Files copied unchanged (unknown type)
    pub copied: usize,
    /// Files a minifier rejected; copied unchanged
    pub failed: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinifyOutcome {
    Done(MinifyReport),
    /// Source directory is missing; the output directory is left as-is.
    Skipped,
}

/// Minify JavaScript source code.
pub fn minify_js(source: &str) -> Option<String> {
    let allocator = Allocator::default();
    let source_type = SourceType::mjs();
    let ret = Parser::new(&allocator, source, source_type).parse();
    if !ret.errors.is_empty() {
        return None;
    }
    let mut program = ret.program;
    let options = MinifierOptions {
        mangle: Some(MangleOptions::default()),
        compress: Some(CompressOptions::smallest()),
    };
    let ret = Minifier::new(options).minify(&allocator, &mut program);
    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code;
    Some(code)
}

/// Minify CSS source code.
pub fn minify_css(source: &str) -> Option<String> {
    let stylesheet = StyleSheet::parse(source, ParserOptions::default()).ok()?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .ok()?;
    Some(result.code)
}

/// Minify HTML markup, including inline `<style>` and `<script>`.
pub fn minify_html(source: &[u8]) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    cfg.minify_js = true;
    cfg.remove_bangs = true;
    cfg.remove_processing_instructions = true;
    minify_html::minify(source, &cfg)
}

/// Minify content by asset type.
///
/// Returns `None` if the minifier rejected the input.
pub fn minify_bytes(kind: AssetType, content: &[u8]) -> Option<Vec<u8>> {
    match kind {
        AssetType::Html => Some(minify_html(content)),
        AssetType::Css => minify_css(std::str::from_utf8(content).ok()?).map(String::into_bytes),
        AssetType::JavaScript => {
            minify_js(std::str::from_utf8(content).ok()?).map(String::into_bytes)
        }
    }
}

/// Minify every regular file directly inside `src` into `dst`.
///
/// File names are kept, so naming conventions such as the compression
/// opt-out marker survive. A missing `src` is not an error: the step is
/// skipped and whatever is already in `dst` stays.
pub fn minify_dir(src: &Path, dst: &Path) -> Result<MinifyOutcome, MinifyError> {
    if !src.is_dir() {
        warn!(
            "web sources not found at {}; keeping existing files in {}",
            src.display(),
            dst.display()
        );
        return Ok(MinifyOutcome::Skipped);
    }

    fs::create_dir_all(dst).map_err(|err| MinifyError::Write(dst.to_path_buf(), err))?;

    let mut files = Vec::new();
    for entry in fs::read_dir(src).map_err(|err| MinifyError::Read(src.to_path_buf(), err))? {
        let path = entry
            .map_err(|err| MinifyError::Read(src.to_path_buf(), err))?
            .path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    let mut report = MinifyReport::default();
    for path in files {
        let Some(name) = path.file_name() else {
            continue;
        };
        let out = dst.join(name);
        let content = fs::read(&path).map_err(|err| MinifyError::Read(path.clone(), err))?;

        let minified = match AssetType::from_path(&path) {
            Some(kind) => match minify_bytes(kind, &content) {
                Some(minified) => {
                    report.minified += 1;
                    debug!(
                        "minify";
                        "{}: {} → {} bytes",
                        path.display(),
                        content.len(),
                        minified.len()
                    );
                    minified
                }
                None => {
                    report.failed += 1;
                    warn!("could not minify {}; copying unchanged", path.display());
                    content
                }
            },
            None => {
                report.copied += 1;
                content
            }
        };

        fs::write(&out, minified).map_err(|err| MinifyError::Write(out.clone(), err))?;
    }

    log!(
        "minify";
        "{} minified, {} copied, {} failed",
        report.minified,
        report.copied,
        report.failed
    );

    Ok(MinifyOutcome::Done(report))
}
