//! `pages.rs` for firmware written in Rust.
//!
//! The file is meant to be pulled in with
//! `include!(concat!(env!("OUT_DIR"), "/pages.rs"))` or checked in as a
//! module.

use super::{Artifact, BYTES_PER_LINE, GENERATED_BANNER};
use crate::compiler::CompiledAsset;

pub(super) const FILE_NAME: &str = "pages.rs";

pub(super) fn render(assets: &[CompiledAsset], runtime: &str) -> Vec<Artifact> {
    let mut out = String::new();
    out.push_str(&format!("// {GENERATED_BANNER}\n\n"));

    for asset in assets {
        out.push_str(&render_data(asset));
        out.push('\n');
    }

    out.push_str("/// Embedded pages, in file name order.\n");
    if assets.is_empty() {
        out.push_str(&format!(
            "pub static PAGES: [{runtime}::Page<'static>; 0] = [];\n"
        ));
    } else {
        out.push_str(&format!(
            "pub static PAGES: [{runtime}::Page<'static>; {}] = [\n",
            assets.len()
        ));
        for asset in assets {
            out.push_str(&format!(
                "    {runtime}::Page::new({:?}, &{}, {:?}, {}),\n",
                asset.url,
                asset.symbol,
                asset.mime(),
                asset.gzip()
            ));
        }
        out.push_str("];\n");
    }

    out.push_str(&format!(
        "\n\
         /// Resolve a decoded request path to an embedded page.\n\
         pub fn find_page(path: &str) -> Option<&'static {runtime}::Page<'static>> {{\n    \
         {runtime}::find_page(&PAGES, path)\n\
         }}\n"
    ));

    vec![Artifact::new(FILE_NAME, out)]
}

fn render_data(asset: &CompiledAsset) -> String {
    let len = asset.len();
    let mut out = format!("pub static {}: [u8; {len}] = [", asset.symbol);

    if asset.is_empty() {
        out.push_str("];\n");
    } else {
        out.push('\n');
        for line in asset.data.chunks(BYTES_PER_LINE) {
            let bytes: Vec<_> = line.iter().map(|b| format!("0x{b:02x},")).collect();
            out.push_str(&format!("    {}\n", bytes.join(" ")));
        }
        out.push_str("];\n");
    }

    out.push_str(&format!("pub const {}_LEN: usize = {len};\n", asset.symbol));
    out
}
