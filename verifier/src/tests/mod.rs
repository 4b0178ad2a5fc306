use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub mod expectations_tests;
pub mod fixtures;
pub mod page_tests;

/// Workspace-level directory for pages that failed their checks
pub fn failures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("target")
        .join("check-failures")
}

/// Save a page that failed its checks so it can be inspected later
pub fn save_failed_html(html: &str, test_name: &str) -> Result<PathBuf> {
    let failures_dir = failures_dir();
    fs::create_dir_all(&failures_dir)?;

    let file_path = failures_dir.join(format!("{}.html", test_name));
    fs::write(&file_path, html)?;

    println!("Saved failed HTML to {}", file_path.display());
    Ok(file_path)
}
