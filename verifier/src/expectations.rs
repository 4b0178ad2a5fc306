//! What the size chart page is expected to contain.
//!
//! The defaults describe the page shipped in this repository. A JSON file can
//! override any subset of fields; missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, VerifyError};
use crate::seed::{default_seed, duplicate_size, SeedRecord};

/// Default location of the page, relative to the repository root.
pub const DEFAULT_PAGE: &str = "index.html";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Expectations {
    /// `id` attribute of the size table.
    pub table_id: String,
    /// Header cell labels, in column order.
    pub headers: Vec<String>,
    /// Seed records embedded in the page script.
    pub seed: Vec<SeedRecord>,
    /// Class shared by the unit toggle buttons.
    pub toggle_class: String,
    /// `data-unit` values, one toggle button each.
    pub units: Vec<String>,
    /// Class marking measurement guide articles.
    pub guide_class: String,
    pub guide_count: usize,
    /// Literal naming the snapshot/export library.
    pub library: String,
}

impl Default for Expectations {
    fn default() -> Self {
        Expectations {
            table_id: "sizeTable".to_string(),
            headers: ["Size", "LP", "L.Paha", "Hip", "PC", "FR"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            seed: default_seed(),
            toggle_class: "unit-toggle".to_string(),
            units: vec!["cm".to_string(), "in".to_string()],
            guide_class: "guide-item".to_string(),
            guide_count: 5,
            library: "html2canvas".to_string(),
        }
    }
}

impl Expectations {
    pub fn from_json(json: &str) -> Result<Self> {
        let expectations: Expectations = serde_json::from_str(json)?;
        expectations.validate()?;
        Ok(expectations)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| VerifyError::io(path, e))?;
        log::debug!("Loaded expectations from {}", path.display());
        Self::from_json(&json)
    }

    /// Each size label may be seeded at most once, and each unit toggled by
    /// exactly one button.
    pub fn validate(&self) -> Result<()> {
        if let Some(size) = duplicate_size(&self.seed) {
            return Err(VerifyError::InconsistentExpectations(format!(
                "size {} is listed more than once",
                size
            )));
        }

        for (i, unit) in self.units.iter().enumerate() {
            if self.units[..i].contains(unit) {
                return Err(VerifyError::InconsistentExpectations(format!(
                    "unit {} is listed more than once",
                    unit
                )));
            }
        }

        if self.table_id.is_empty() {
            return Err(VerifyError::InconsistentExpectations(
                "table_id must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
