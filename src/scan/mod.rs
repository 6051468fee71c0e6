mod access;
mod stem;
mod walker;

pub use stem::module_stem;
pub use walker::{scan_directory, scan_directory_with_defaults, scan_importer, sort_entries};
