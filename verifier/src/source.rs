use reqwest::blocking::Client;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, VerifyError};

/// Reads the page from disk. A missing or unreadable page fails the whole run.
pub fn load_page(path: &Path) -> Result<String> {
    log::debug!("Reading page from {}", path.display());
    fs::read_to_string(path).map_err(|e| VerifyError::io(path, e))
}

pub fn fetch_html(url: &str) -> Result<String> {
    log::debug!("Fetching page from {}", url);
    let client = Client::new();
    let response = client.get(url).send()?.error_for_status()?;
    Ok(response.text()?)
}

/// Where regression snapshots of deployed pages are kept. Anchored to the
/// crate, so it does not depend on the directory the binary is run from.
pub fn snapshots_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src/tests/fixtures/snapshots")
}

/// Writes `html` as `<dir>/<name>.html`, creating `dir` if needed.
pub fn save_snapshot(dir: &Path, name: &str, html: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| VerifyError::io(dir, e))?;
    let path = dir.join(format!("{}.html", name));
    fs::write(&path, html).map_err(|e| VerifyError::io(&path, e))?;
    log::debug!("Saved snapshot {}", path.display());
    Ok(path)
}

/// Names of the `.html` snapshots in `dir`, sorted. A missing directory has
/// no snapshots.
pub fn snapshot_names(dir: &Path) -> Result<Vec<String>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| VerifyError::io(dir, e))? {
        let path = entry.map_err(|e| VerifyError::io(dir, e))?.path();
        if path.extension().map_or(false, |ext| ext == "html") {
            if let Some(stem) = path.file_stem() {
                names.push(stem.to_string_lossy().to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}
