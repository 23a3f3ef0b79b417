//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::compiler::OutputFormat;

/// Embed minified web assets into device firmware
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: pagepack.toml)
    #[arg(short = 'C', long, default_value = "pagepack.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Raw web sources directory (input of `minify`)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub web: Option<PathBuf>,

    /// Minified assets directory (input of `compile`)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub minified: Option<PathBuf>,

    /// Output directory for generated sources
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Minify raw web sources into the minified directory
    #[command(visible_alias = "m")]
    Minify,

    /// Generate embedded asset sources from the minified directory
    #[command(visible_alias = "c")]
    Compile {
        #[command(flatten)]
        args: CompileArgs,
    },

    /// Minify, then compile
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        args: CompileArgs,
    },

    /// Resolve request paths against the compiled page table
    #[command(visible_alias = "r")]
    Route {
        /// Request paths to resolve (e.g., `/`, `/style`, `/app.js`)
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<String>,
    },

    /// Print the compiled page table in lookup order
    #[command(visible_alias = "l")]
    List,
}

/// Compiler arguments shared by Compile and Build.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct CompileArgs {
    /// Generated source language
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Crate path referenced by generated Rust (e.g., `crate::web`)
    #[arg(long)]
    pub runtime: Option<String>,

    /// Compression opt-out marker (e.g., `nogz` for `app.nogz.js`)
    #[arg(long)]
    pub marker: Option<String>,
}
