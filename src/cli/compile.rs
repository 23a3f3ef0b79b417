//! `minify`, `compile`, and `build` commands.

use anyhow::{Context, Result};

use crate::compiler::{self, CompileOutcome, WriteStatus};
use crate::config::PackConfig;
use crate::minify::{self, MinifyOutcome};
use crate::{debug, log};

/// Minify raw web sources into the minified directory.
pub fn run_minify(config: &PackConfig) -> Result<MinifyOutcome> {
    minify::minify_dir(&config.source.web, &config.source.minified).with_context(|| {
        format!(
            "Failed to minify {} into {}",
            config.source.web.display(),
            config.source.minified.display()
        )
    })
}

/// Generate embedded asset sources.
pub fn run_compile(config: &PackConfig) -> Result<CompileOutcome> {
    let options = config.compile_options();
    let outcome = compiler::compile(&options)
        .with_context(|| format!("Failed to compile {}", options.source.display()))?;

    if let CompileOutcome::Generated(report) = &outcome {
        for file in &report.files {
            match file.status {
                WriteStatus::Written => log!("compile"; "wrote {}", file.path.display()),
                WriteStatus::Unchanged => {
                    debug!("compile"; "{} is up to date", file.path.display())
                }
            }
        }
    }

    Ok(outcome)
}

/// Minify, then compile.
pub fn run_build(config: &PackConfig) -> Result<CompileOutcome> {
    run_minify(config)?;
    run_compile(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    fn make_config(temp: &TempDir) -> PackConfig {
        let root = temp.path();
        let mut config = PackConfig {
            root: root.to_path_buf(),
            ..PackConfig::default()
        };
        config.source.web = root.join("src/web");
        config.source.minified = root.join("src/web/build");
        config.output.dir = root.join("src");
        config
    }

    #[test]
    fn test_build_end_to_end() {
        let temp = TempDir::new().unwrap();
        let config = make_config(&temp);
        let web = &config.source.web;
        fs::create_dir_all(web).unwrap();
        fs::write(web.join("index.html"), "<!doctype html>\n<html>\n<body>\n  <p>board</p>\n</body>\n</html>\n").unwrap();
        fs::write(web.join("style.css"), "p {\n  color: green;\n}\n").unwrap();
        fs::write(web.join("app.nogz.js"), "const a = 1;\nconsole.log(a);\n").unwrap();

        let outcome = run_build(&config).unwrap();
        let CompileOutcome::Generated(report) = outcome else {
            panic!("expected generated output");
        };
        assert_eq!(report.assets, 3);

        let code = fs::read_to_string(config.output.dir.join("pages.rs")).unwrap();
        assert!(code.contains("pagepack::Page::new(\"/\", &INDEX_HTML_GZ, \"text/html\", true)"));
        assert!(code.contains("&APP_NOGZ_JS, \"application/javascript\", false"));
    }

    #[test]
    fn test_build_without_sources_keeps_output() {
        let temp = TempDir::new().unwrap();
        let mut config = make_config(&temp);
        config.output.format = OutputFormat::C;
        fs::create_dir_all(&config.output.dir).unwrap();
        fs::write(config.output.dir.join("web_pages.cpp"), "// last known good").unwrap();

        let outcome = run_build(&config).unwrap();
        assert!(matches!(outcome, CompileOutcome::Stale(_)));
        assert_eq!(
            fs::read_to_string(config.output.dir.join("web_pages.cpp")).unwrap(),
            "// last known good"
        );
    }
}
