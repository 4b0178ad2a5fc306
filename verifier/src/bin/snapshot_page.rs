use anyhow::{Context, Result};
use std::env;
use size_chart_verifier::{
    fetch_html, print_report, run_checks, save_snapshot, snapshots_dir, Expectations, PageSummary,
};

fn main() -> Result<()> {
    env_logger::init();

    // Get URL and snapshot name from command line arguments
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Please provide a URL and a snapshot name");
        eprintln!("Usage: cargo run --bin snapshot_page <URL> <snapshot_name>");
        std::process::exit(1);
    }

    let url = &args[1];
    let name = &args[2];

    println!("Fetching HTML from {}...", url);
    let html = fetch_html(url).with_context(|| format!("Failed to fetch {}", url))?;

    let file_path =
        save_snapshot(&snapshots_dir(), name, &html).context("Failed to save snapshot")?;

    println!(
        "Saved HTML to {} for regression testing",
        file_path.display()
    );

    let expectations = Expectations::default();

    let summary = PageSummary::parse(&html, &expectations)?;
    println!("\nPage structure:");
    println!("  - Title: {}", summary.title.as_deref().unwrap_or("(none)"));
    println!("  - Headers: {}", summary.headers.join(", "));
    println!("  - Unit toggles: {}", summary.unit_toggles.join(", "));
    println!("  - Guide articles: {}", summary.guides.len());
    println!("  - Scripts: {}", summary.script_sources.len());
    println!();

    let report = run_checks(&html, url, &expectations)?;
    print_report(&report);

    if !report.passed() {
        println!("\nThis snapshot fails and will keep failing the regression tests until the page is fixed.");
    }

    Ok(())
}
