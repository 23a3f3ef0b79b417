//! `route` and `list` commands: inspect the page table without firmware.

use anyhow::{Context, Result};
use owo_colors::Style;

use crate::compiler::{self, CompiledAsset};
use crate::config::PackConfig;
use crate::page::{Page, PageTable};
use crate::logger::paint;
use crate::warn;

/// Compile the minified directory in memory.
fn compile_table(config: &PackConfig) -> Result<Vec<CompiledAsset>> {
    let dir = &config.source.minified;
    if let Some(reason) = compiler::check_source_dir(dir)? {
        warn!("{} ({}); table is empty", reason, dir.display());
        return Ok(Vec::new());
    }
    compiler::compile_dir(dir, &config.compress.marker)
        .with_context(|| format!("Failed to compile {}", dir.display()))
}

/// Resolve each request path and print the matching page.
///
/// Returns the number of paths that did not resolve.
pub fn run_route(config: &PackConfig, paths: &[String]) -> Result<usize> {
    let assets = compile_table(config)?;
    let pages: Vec<Page<'_>> = assets.iter().map(CompiledAsset::page).collect();
    let table = PageTable::new(&pages);

    let mut missing = 0;
    for path in paths {
        let page = table.find(path);
        if page.is_none() {
            missing += 1;
        }
        println!("{}", describe(path, page));
    }
    Ok(missing)
}

/// Print the page table in lookup order.
pub fn run_list(config: &PackConfig) -> Result<()> {
    let assets = compile_table(config)?;
    for asset in &assets {
        println!(
            "{} {:<28} {:>8}  {:<24} {}",
            paint(format!("{:<24}", asset.url), Style::new().bold()),
            asset.symbol,
            asset.len(),
            asset.mime(),
            if asset.gzip() { "gzip" } else { "stored" }
        );
    }
    Ok(())
}

fn describe(path: &str, page: Option<&Page<'_>>) -> String {
    match page {
        Some(page) => format!(
            "{} {path} → {} ({}, {} bytes{})",
            paint("✓", Style::new().green()),
            page.url,
            page.mime,
            page.len(),
            page.content_encoding()
                .map(|enc| format!(", {enc}"))
                .unwrap_or_default()
        ),
        None => format!("{} {path} → not found", paint("✗", Style::new().red())),
    }
}
