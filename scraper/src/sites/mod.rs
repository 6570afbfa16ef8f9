//! Per-site listing scrapers.

pub mod github;
pub mod microsoft;
pub mod tech;

use std::fs;
use std::path::Path;
use tracing::warn;

/// Saves a listing page that produced no job cards, for selector debugging.
pub(crate) fn dump_debug_page(path: &Path, html: &str) {
    match fs::write(path, html) {
        Ok(()) => println!("📁 Page content saved to {}", path.display()),
        Err(e) => warn!("could not save debug page {}: {}", path.display(), e),
    }
}
