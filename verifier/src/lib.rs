pub mod checks;
pub mod error;
pub mod expectations;
pub mod headers;
pub mod page;
pub mod patterns;
pub mod seed;
pub mod source;

#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::checks::{print_report, run_checks, save_report, CheckOutcome, Report};
pub use crate::error::{Result, VerifyError};
pub use crate::expectations::{Expectations, DEFAULT_PAGE};
pub use crate::headers::extract_table_headers;
pub use crate::page::PageSummary;
pub use crate::seed::{default_seed, SeedRecord, SizeLabel};
pub use crate::source::{fetch_html, load_page, save_snapshot, snapshot_names, snapshots_dir};
