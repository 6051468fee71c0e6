mod args;
mod scan;

pub use args::Args;
pub use scan::run_scan;
