use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use super::access::has_read_permission;
use super::stem::module_stem;
use crate::types::{Importer, ModuleEntry, DEFAULT_SUFFIXES, INIT_STEM, PACKAGE_MARKER};

/// List the modules and packages directly inside `path`.
///
/// Never fails: a missing path, a non-directory, an unreadable directory or
/// an I/O error part-way through all produce an empty or truncated result.
/// Entries come back in directory-iteration order.
pub fn scan_directory<S: AsRef<str>>(path: &Path, suffixes: &[S]) -> Vec<ModuleEntry> {
    let mut modules = Vec::new();

    let metadata = match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => metadata,
        Ok(_) => {
            debug!("Not a directory: {}", path.display());
            return modules;
        }
        Err(e) => {
            debug!("Cannot stat {}: {}", path.display(), e);
            return modules;
        }
    };

    if !has_read_permission(&metadata) {
        debug!("No read permission bits on {}", path.display());
        return modules;
    }

    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Cannot open {}: {}", path.display(), e);
            return modules;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                // Abandon the rest of the listing but keep what we have
                debug!("Listing of {} aborted: {}", path.display(), e);
                break;
            }
        };

        let filename = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                debug!("Skipping non-UTF-8 entry {:?}", raw);
                continue;
            }
        };

        match classify_entry(&entry.path(), &filename, suffixes) {
            Ok(Some(module)) => modules.push(module),
            Ok(None) => {}
            Err(e) => {
                debug!("Scan of {} aborted at {}: {}", path.display(), filename, e);
                break;
            }
        }
    }

    debug!("Found {} modules in {}", modules.len(), path.display());
    modules
}

/// [`scan_directory`] with [`DEFAULT_SUFFIXES`]
pub fn scan_directory_with_defaults(path: &Path) -> Vec<ModuleEntry> {
    scan_directory(path, &DEFAULT_SUFFIXES)
}

/// Scan the directory an importer points at; nothing if it has none.
pub fn scan_importer<S: AsRef<str>>(importer: &Importer, suffixes: &[S]) -> Vec<ModuleEntry> {
    match importer.path.as_deref() {
        Some(path) => scan_directory(path, suffixes),
        None => {
            debug!("Importer has no path");
            Vec::new()
        }
    }
}

/// Sort by name, packages ahead of a same-named module
pub fn sort_entries(entries: &mut [ModuleEntry]) {
    entries.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then_with(|| b.is_package.cmp(&a.is_package))
    });
}

/// Errors other than not-found while probing the entry abort the scan.
fn classify_entry<S: AsRef<str>>(
    entry_path: &Path,
    filename: &str,
    suffixes: &[S],
) -> io::Result<Option<ModuleEntry>> {
    let stem = module_stem(filename, suffixes);

    if stem.is_empty() && is_package_dir(entry_path, filename)? {
        Ok(Some(ModuleEntry::package(filename)))
    } else if stem == INIT_STEM {
        Ok(None)
    } else if !stem.is_empty() && !stem.contains('.') {
        Ok(Some(ModuleEntry::module(stem)))
    } else {
        Ok(None)
    }
}

fn is_package_dir(entry_path: &Path, filename: &str) -> io::Result<bool> {
    let is_dir = stat_is(entry_path, |m| m.is_dir())?;
    if !is_dir || filename.contains('.') {
        return Ok(false);
    }
    stat_is(&entry_path.join(PACKAGE_MARKER), |m| m.is_file())
}

/// Follows symlinks; a missing target reads as `false`.
fn stat_is(path: &Path, check: impl FnOnce(&fs::Metadata) -> bool) -> io::Result<bool> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(check(&metadata)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
