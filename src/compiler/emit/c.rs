//! C/C++ sources for Arduino-style firmware.
//!
//! - `web_pages.h`: `extern` declarations for each asset and its length
//! - `web_pages.cpp`: `PROGMEM` byte arrays
//! - `page_router.h`: the `Page` record and `findPage` prototype
//! - `page_router.cpp`: the ordered `pages[]` table and `findPage`

use super::{Artifact, BYTES_PER_LINE, GENERATED_BANNER};
use crate::compiler::CompiledAsset;

const PAGES_H: &str = "web_pages.h";
const PAGES_CPP: &str = "web_pages.cpp";
const ROUTER_H: &str = "page_router.h";
const ROUTER_CPP: &str = "page_router.cpp";

const ROUTER_HEADER: &str = "\
#ifndef PAGE_ROUTER_H
#define PAGE_ROUTER_H

#include <stddef.h>
#include <stdint.h>

struct Page
{
  const char *path;
  const uint8_t *data;
  size_t length;
  const char *mime;
  bool gzip;
};

const Page *findPage(const char *path);

#endif
";

const FIND_PAGE: &str = "\
const Page *findPage(const char *path)
{
  size_t plen = strlen(path);

  for (auto &p : pages)
  {
    const char *ppath = p.path;
    size_t flen = strlen(ppath);

    // 1) Exact match: \"/foo.js\" == \"/foo.js\"
    if (plen == flen && memcmp(path, ppath, plen) == 0)
      return &p;

    // 2) Extensionless match: \"/foo\" == \"/foo.<ext>\"
    const char *dot = strchr(ppath, '.');
    if (!dot)
      continue;

    size_t baseLen = dot - ppath;

    if (plen == baseLen && memcmp(path, ppath, baseLen) == 0)
      return &p;
  }

  return nullptr;
}
";

const FIND_PAGE_EMPTY: &str = "\
const Page *findPage(const char *path)
{
  (void)path;
  return nullptr;
}
";

pub(super) fn render(assets: &[CompiledAsset]) -> Vec<Artifact> {
    vec![
        Artifact::new(PAGES_H, render_pages_header(assets)),
        Artifact::new(PAGES_CPP, render_pages_source(assets)),
        Artifact::new(ROUTER_H, format!("// {GENERATED_BANNER}\n\n{ROUTER_HEADER}")),
        Artifact::new(ROUTER_CPP, render_router(assets)),
    ]
}

fn render_pages_header(assets: &[CompiledAsset]) -> String {
    let mut out = format!("// {GENERATED_BANNER}\n\n");
    out.push_str("#ifndef WEB_PAGES_H\n#define WEB_PAGES_H\n\n#include <Arduino.h>\n\n");
    for asset in assets {
        out.push_str(&format!(
            "extern const uint8_t {sym}[];\nextern const size_t {sym}_LEN;\n\n",
            sym = asset.symbol
        ));
    }
    out.push_str("#endif\n");
    out
}

fn render_pages_source(assets: &[CompiledAsset]) -> String {
    let mut out = format!("// {GENERATED_BANNER}\n\n");
    out.push_str(&format!("#include <Arduino.h>\n#include \"{PAGES_H}\"\n\n"));

    for asset in assets {
        out.push_str(&format!("const uint8_t {}[] PROGMEM = {{\n", asset.symbol));
        if asset.is_empty() {
            // zero-length arrays are not valid C++; length stays 0
            out.push_str("0x00,");
        }
        for (i, byte) in asset.data.iter().enumerate() {
            out.push_str(&format!("0x{byte:02x},"));
            if i % BYTES_PER_LINE == BYTES_PER_LINE - 1 {
                out.push('\n');
            }
        }
        out.push_str("\n};\n");
        out.push_str(&format!(
            "const size_t {}_LEN = {};\n\n",
            asset.symbol,
            asset.len()
        ));
    }

    out
}

fn render_router(assets: &[CompiledAsset]) -> String {
    let mut out = format!("// {GENERATED_BANNER}\n\n");
    out.push_str(&format!(
        "#include <string.h>\n#include \"{ROUTER_H}\"\n#include \"{PAGES_H}\"\n\n"
    ));

    if assets.is_empty() {
        out.push_str(FIND_PAGE_EMPTY);
        return out;
    }

    out.push_str("static const Page pages[] = {\n");
    for asset in assets {
        out.push_str(&format!(
            "  {{ \"{}\", {sym}, {sym}_LEN, \"{}\", {} }},\n",
            escape(&asset.url),
            asset.mime(),
            asset.gzip(),
            sym = asset.symbol
        ));
    }
    out.push_str("};\n\n");
    out.push_str(FIND_PAGE);
    out
}

/// Escape a string for a C string literal.
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::emit::tests::asset;

    fn file<'a>(artifacts: &'a [Artifact], name: &str) -> &'a str {
        &artifacts
            .iter()
            .find(|a| a.file_name == name)
            .unwrap()
            .contents
    }

    #[test]
    fn test_header_declares_symbols() {
        let artifacts = render(&[asset("index.html", b"<p>"), asset("app.nogz.js", b"f()")]);
        let header = file(&artifacts, PAGES_H);
        assert!(header.contains("extern const uint8_t INDEX_HTML_GZ[];\nextern const size_t INDEX_HTML_GZ_LEN;\n"));
        assert!(header.contains("extern const uint8_t APP_NOGZ_JS[];\n"));
        assert!(header.trim_end().ends_with("#endif"));
    }

    #[test]
    fn test_source_bytes_layout() {
        let artifacts = render(&[asset("a.nogz.js", &[1; 13])]);
        let source = file(&artifacts, PAGES_CPP);
        let expected = format!(
            "const uint8_t A_NOGZ_JS[] PROGMEM = {{\n{}\n0x01,\n}};\nconst size_t A_NOGZ_JS_LEN = 13;\n",
            "0x01,".repeat(12)
        );
        assert!(source.contains(&expected), "{source}");
    }

    #[test]
    fn test_router_table() {
        let artifacts = render(&[asset("app.nogz.js", b"f()"), asset("index.html", b"<p>")]);
        let router = file(&artifacts, ROUTER_CPP);
        let app = router
            .find("{ \"/app.js\", APP_NOGZ_JS, APP_NOGZ_JS_LEN, \"application/javascript\", false },")
            .unwrap();
        let index = router
            .find("{ \"/\", INDEX_HTML_GZ, INDEX_HTML_GZ_LEN, \"text/html\", true },")
            .unwrap();
        assert!(app < index);
        assert!(router.contains("const Page *findPage(const char *path)"));
    }

    #[test]
    fn test_empty_table_still_defines_find_page() {
        let artifacts = render(&[]);
        let router = file(&artifacts, ROUTER_CPP);
        assert!(!router.contains("pages[]"));
        assert!(router.contains("return nullptr;"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("/a\"b\\c"), "/a\\\"b\\\\c");
    }
}
