use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, VerifyError};
use crate::expectations::Expectations;
use crate::headers::extract_table_headers;
use crate::patterns;
use crate::seed::SeedRecord;

/// Result of a single named check.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CheckOutcome {
    pub name: String,
    pub passed: bool,
    /// Why the check failed; `None` when it passed.
    pub message: Option<String>,
}

impl CheckOutcome {
    fn pass(name: impl Into<String>) -> Self {
        CheckOutcome {
            name: name.into(),
            passed: true,
            message: None,
        }
    }

    fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        CheckOutcome {
            name: name.into(),
            passed: false,
            message: Some(message.into()),
        }
    }

    fn from_condition(name: impl Into<String>, ok: bool, message: impl FnOnce() -> String) -> Self {
        if ok {
            Self::pass(name)
        } else {
            Self::fail(name, message())
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Report {
    /// Path or URL the page was read from.
    pub source: String,
    pub checked_at: String,
    pub outcomes: Vec<CheckOutcome>,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> + '_ {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    pub fn outcome(&self, name: &str) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }
}

pub fn check_headers(html: &str, expected: &Expectations) -> CheckOutcome {
    let found = extract_table_headers(html, &expected.table_id);
    CheckOutcome::from_condition("table_headers", found == expected.headers, || {
        format!(
            "Headers of #{} do not match: expected {:?}, found {:?}",
            expected.table_id, expected.headers, found
        )
    })
}

pub fn check_seed_record(html: &str, record: &SeedRecord) -> Result<CheckOutcome> {
    let name = format!("seed_record[{}]", record.size);

    let block = match patterns::find_record_block(html, record.size)? {
        Some(block) => block,
        None => {
            return Ok(CheckOutcome::fail(
                name,
                format!("Entry for size {} not found", record.size),
            ))
        }
    };

    let mut problems = Vec::new();
    for (key, value) in record.fields() {
        if !patterns::field_matches(block, key, value)? {
            problems.push(format!(
                "Field {} for size {} missing or incorrect (expected {})",
                key, record.size, value
            ));
        }
    }

    if problems.is_empty() {
        Ok(CheckOutcome::pass(name))
    } else {
        Ok(CheckOutcome::fail(name, problems.join("; ")))
    }
}

pub fn check_toggle_count(html: &str, expected: &Expectations) -> Result<CheckOutcome> {
    let count = patterns::count_unit_toggles(html, &expected.toggle_class)?;
    Ok(CheckOutcome::from_condition(
        "unit_toggle_count",
        count == expected.units.len(),
        || {
            format!(
                "Expected {} unit toggle buttons, found {}",
                expected.units.len(),
                count
            )
        },
    ))
}

pub fn check_unit_toggle(html: &str, expected: &Expectations, unit: &str) -> Result<CheckOutcome> {
    let present = patterns::has_unit_toggle(html, &expected.toggle_class, unit)?;
    Ok(CheckOutcome::from_condition(
        format!("unit_toggle[{}]", unit),
        present,
        || format!("Unit toggle button for {} missing", unit.to_uppercase()),
    ))
}

pub fn check_guide_count(html: &str, expected: &Expectations) -> Result<CheckOutcome> {
    let count = patterns::count_guide_items(html, &expected.guide_class)?;
    Ok(CheckOutcome::from_condition(
        "guide_items",
        count == expected.guide_count,
        || {
            format!(
                "Expected {} {} articles, found {}",
                expected.guide_count, expected.guide_class, count
            )
        },
    ))
}

pub fn check_library(html: &str, expected: &Expectations) -> CheckOutcome {
    CheckOutcome::from_condition(
        "library_reference",
        patterns::contains_literal(html, &expected.library),
        || format!("No reference to {} found", expected.library),
    )
}

/// Runs every check against `html`. A failing check never stops the others;
/// only a pattern that fails to compile aborts the run.
pub fn run_checks(html: &str, source: &str, expected: &Expectations) -> Result<Report> {
    let mut outcomes = vec![check_headers(html, expected)];

    for record in &expected.seed {
        outcomes.push(check_seed_record(html, record)?);
    }

    outcomes.push(check_toggle_count(html, expected)?);
    for unit in &expected.units {
        outcomes.push(check_unit_toggle(html, expected, unit)?);
    }

    outcomes.push(check_guide_count(html, expected)?);
    outcomes.push(check_library(html, expected));

    for outcome in &outcomes {
        match &outcome.message {
            None => log::debug!("{} passed", outcome.name),
            Some(message) => log::warn!("{} failed: {}", outcome.name, message),
        }
    }

    let report = Report {
        source: source.to_string(),
        checked_at: Utc::now().to_rfc3339(),
        outcomes,
    };
    log::info!(
        "{}: {} of {} checks passed",
        source,
        report.outcomes.len() - report.failures().count(),
        report.outcomes.len()
    );
    Ok(report)
}

pub fn save_report(report: &Report, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).map_err(|e| VerifyError::io(path, e))
}

/// Prints one line per check, plus the failure message for failed checks.
pub fn print_report(report: &Report) {
    println!("Checking {}", report.source);
    for outcome in &report.outcomes {
        match &outcome.message {
            None => println!("  ✅ {}", outcome.name),
            Some(message) => println!("  ❌ {}: {}", outcome.name, message),
        }
    }

    let failed = report.failures().count();
    if failed == 0 {
        println!("\nAll {} checks passed", report.outcomes.len());
    } else {
        println!("\n{} of {} checks failed", failed, report.outcomes.len());
    }
}
