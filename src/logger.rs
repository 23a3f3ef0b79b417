//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `warn!` for non-fatal conditions (stale inputs, skipped files)
//! - `debug!` for output only shown with `--verbose`
//!
//! # Example
//!
//! ```ignore
//! log!("compile"; "generated {} web assets", count);
//! warn!("no minified files in {}", dir.display());
//! debug!("scan"; "skipping {}", name);
//! ```

use owo_colors::{OwoColorize, Stream, Style};
use std::{
    fmt::Display,
    io::{Write, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macros
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a warning (yellow `[warn]` prefix)
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        $crate::logger::log("warn", &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "compile" => paint(prefix, Style::new().bright_blue().bold()),
        "minify" => paint(prefix, Style::new().bright_green().bold()),
        "error" => paint(prefix, Style::new().bright_red().bold()),
        "warn" => paint(prefix, Style::new().yellow().bold()),
        _ => paint(prefix, Style::new().bright_yellow().bold()),
    }
}

/// Style `text` for stdout, honoring `--color` and TTY detection.
pub fn paint<T: Display>(text: T, style: Style) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.style(style))
        .to_string()
}

/// Print a fatal error with its cause chain.
pub fn error(err: &anyhow::Error) {
    let mut message = format!("{} {err}", paint("✗", Style::new().red()));
    for cause in err.chain().skip(1) {
        let label = paint("caused by:", Style::new().dimmed());
        message.push_str(&format!("\n  {label} {cause}"));
    }
    log("error", &message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_contains_module() {
        owo_colors::set_override(false);
        assert_eq!(colorize_prefix("compile", "compile"), "[compile]");
        assert_eq!(colorize_prefix("Route", "route"), "[Route]");
    }

    #[test]
    fn test_paint_respects_color_override() {
        owo_colors::set_override(false);
        assert_eq!(paint("✗", Style::new().red()), "✗");
        assert_eq!(paint(42, Style::new().bold()), "42");
    }

    #[test]
    fn test_verbose_toggle() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
