//! Native enumeration of the importable modules and packages that sit
//! directly inside one directory.
//!
//! ```no_run
//! use pymodscan::{scan_directory, DEFAULT_SUFFIXES};
//! use std::path::Path;
//!
//! for module in scan_directory(Path::new("lib"), &DEFAULT_SUFFIXES) {
//!     println!("{} (package: {})", module.name, module.is_package);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod scan;
pub mod types;

pub use config::Config;
pub use error::ConfigError;
pub use scan::{
    module_stem, scan_directory, scan_directory_with_defaults, scan_importer, sort_entries,
};
pub use types::{Importer, ModuleEntry, DEFAULT_SUFFIXES};
