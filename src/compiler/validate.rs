//! Collision checks over the whole asset set.

use rustc_hash::FxHashMap;

use super::{CompileError, CompiledAsset};

/// Fail on the first duplicate symbol or URL.
///
/// Duplicate symbols would break the generated source; duplicate URLs
/// would make one asset unreachable behind the other.
pub fn check_unique(assets: &[CompiledAsset]) -> Result<(), CompileError> {
    let mut symbols: FxHashMap<&str, &str> = FxHashMap::default();
    let mut urls: FxHashMap<&str, &str> = FxHashMap::default();

    for asset in assets {
        if let Some(first) = symbols.insert(&asset.symbol, &asset.file_name) {
            return Err(CompileError::DuplicateSymbol {
                symbol: asset.symbol.clone(),
                first: first.to_owned(),
                second: asset.file_name.clone(),
            });
        }
        if let Some(first) = urls.insert(&asset.url, &asset.file_name) {
            return Err(CompileError::DuplicateUrl {
                url: asset.url.clone(),
                first: first.to_owned(),
                second: asset.file_name.clone(),
            });
        }
    }

    Ok(())
}
