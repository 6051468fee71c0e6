use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Source and compiled suffixes used when the caller supplies none
pub const DEFAULT_SUFFIXES: [&str; 2] = [".py", ".pyc"];

/// Name of the marker file that turns a directory into a package
pub const PACKAGE_MARKER: &str = "__init__.py";

/// Stem of the marker file; never reported as a module on its own
pub const INIT_STEM: &str = "__init__";

/// One importable unit found directly inside a scanned directory
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleEntry {
    /// Module stem, or the directory name for a package
    pub name: String,
    /// True when backed by a directory holding `__init__.py`
    pub is_package: bool,
}

impl ModuleEntry {
    pub fn module(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_package: false,
        }
    }

    pub fn package(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_package: true,
        }
    }

    /// Raw `(name, is_package)` shape
    pub fn into_pair(self) -> (String, bool) {
        (self.name, self.is_package)
    }
}

impl From<ModuleEntry> for (String, bool) {
    fn from(entry: ModuleEntry) -> Self {
        entry.into_pair()
    }
}

/// A search location handed over by a higher-level discovery component.
///
/// Only the directory matters to the scanner; an importer without one
/// contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Importer {
    pub path: Option<PathBuf>,
}

impl Importer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}
