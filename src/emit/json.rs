use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

use crate::types::ModuleEntry;

#[derive(Serialize)]
pub struct JsonOutput {
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub path: String,
    pub suffixes: Vec<String>,
    pub modules: Vec<ModuleEntry>,
    pub module_count: usize,
    pub package_count: usize,
}

impl JsonOutput {
    pub fn new(path: &Path, suffixes: &[String], modules: Vec<ModuleEntry>) -> Self {
        let package_count = modules.iter().filter(|m| m.is_package).count();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            path: path.display().to_string(),
            suffixes: suffixes.to_vec(),
            module_count: modules.len() - package_count,
            package_count,
            modules,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
