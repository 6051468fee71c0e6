use anyhow::Result;
use console::{style, Emoji};
use std::path::Path;

use crate::config::Config;
use crate::emit::JsonOutput;
use crate::scan::{scan_directory, sort_entries};
use crate::types::ModuleEntry;

static PACKAGE: Emoji<'_, '_> = Emoji("📦 ", "");
static MODULE: Emoji<'_, '_> = Emoji("📄 ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "");

/// Scan `path` with the configured suffixes and print the result.
///
/// A missing or unreadable directory prints an empty listing, not an error.
pub fn run_scan(path: &Path, config: &Config) -> Result<()> {
    let mut modules = scan_directory(path, &config.scan.suffixes);

    if config.output.sort {
        sort_entries(&mut modules);
    }

    if config.output.json {
        let output = JsonOutput::new(path, &config.scan.suffixes, modules);
        println!("{}", output.to_json());
        return Ok(());
    }

    for module in &modules {
        println!("{}", format_entry(module));
    }

    let packages = modules.iter().filter(|m| m.is_package).count();
    println!(
        "\n{}{}",
        INFO,
        style(format!(
            "modules: {}, packages: {} in {}",
            modules.len() - packages,
            packages,
            path.display()
        ))
        .dim()
    );

    Ok(())
}

fn format_entry(module: &ModuleEntry) -> String {
    if module.is_package {
        format!("{}{}/", PACKAGE, style(&module.name).cyan().bold())
    } else {
        format!("{}{}", MODULE, style(&module.name).green())
    }
}
