use std::fs;
use std::path::{Path, PathBuf};

/// The page shipped at the repository root
pub fn page_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(crate::DEFAULT_PAGE)
}

/// Load the shipped page
pub fn load_page_fixture() -> String {
    let path = page_path();
    fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to load page fixture: {}", path.display()))
}

/// Load a saved snapshot of a deployed page
pub fn load_snapshot_html(dir: &Path, snapshot_name: &str) -> Option<String> {
    let path = dir.join(format!("{}.html", snapshot_name));
    fs::read_to_string(path).ok()
}
