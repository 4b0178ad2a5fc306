use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use size_chart_verifier::{
    fetch_html, load_page, print_report, run_checks, save_report, Expectations, PageSummary,
    DEFAULT_PAGE,
};

/// Check the size chart page for its table headers, seed data, unit toggles,
/// measurement guides and export library
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Page to check
    #[arg(default_value = DEFAULT_PAGE, conflicts_with = "url")]
    page: PathBuf,

    /// Fetch the page from a URL instead of reading a file
    #[arg(long)]
    url: Option<String>,

    /// JSON file overriding the expected values
    #[arg(long)]
    expectations: Option<PathBuf>,

    /// Write the check results as JSON to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print a JSON summary of the page structure before checking
    #[arg(long)]
    inspect: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let expectations = match &cli.expectations {
        Some(path) => Expectations::load(path)
            .with_context(|| format!("Failed to load expectations from {}", path.display()))?,
        None => Expectations::default(),
    };

    let (html, source) = match &cli.url {
        Some(url) => (
            fetch_html(url).with_context(|| format!("Failed to fetch {}", url))?,
            url.clone(),
        ),
        None => (
            load_page(&cli.page).context("Failed to read page")?,
            cli.page.display().to_string(),
        ),
    };

    if cli.inspect {
        let summary = PageSummary::parse(&html, &expectations)?;
        let json =
            serde_json::to_string_pretty(&summary).context("Failed to serialize page summary")?;
        println!("{}\n", json);
    }

    let report = run_checks(&html, &source, &expectations)?;
    print_report(&report);

    if let Some(path) = &cli.report {
        save_report(&report, path)?;
        println!("Report saved to {}", path.display());
    }

    if !report.passed() {
        std::process::exit(1);
    }

    Ok(())
}
