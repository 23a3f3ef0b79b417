//! Configuration section definitions.
//!
//! Each module corresponds to a section in `pagepack.toml`:
//!
//! | Module     | TOML Section   | Purpose                                 |
//! |------------|----------------|-----------------------------------------|
//! | `source`   | `[source]`     | Raw and minified web asset directories  |
//! | `output`   | `[output]`     | Generated source location and format    |
//! | `compress` | `[compress]`   | Compression opt-out marker              |

mod compress;
mod output;
mod source;

pub use compress::CompressConfig;
pub use output::OutputConfig;
pub use source::SourceConfig;
