//! pagepack - embed minified web assets into device firmware.
//!
//! The build-time [`compiler`] turns a directory of minified assets into
//! generated source holding each asset's bytes and an ordered table of
//! [`Page`] descriptors. At run time the firmware resolves request paths
//! against that table with [`find_page`].

pub mod logger;

pub mod cli;
pub mod compiler;
pub mod config;
pub mod minify;
pub mod page;

pub use page::{AssetType, Page, PageTable, find_page};
