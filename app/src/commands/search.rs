//! Keyword search across every stored target.

use crate::report::{ConsoleReporter, HtmlReporter};
use crate::state::AppState;
use anyhow::Context;
use careerwatch_browser::ChromiumLauncher;
use careerwatch_core::Keyword;
use careerwatch_scanner::{
    CancellationToken, HttpFetcher, KeywordProbe, ProbeSettings, RunSummary, ScanOrchestrator,
};
use console::style;
use std::sync::Arc;

pub const NO_URLS_HINT: &str =
    "No URLs added yet. Add some with 'careerwatch add <company> <url>' or the Manage URLs menu.";

/// Search all stored targets for `keyword`, printing each result and writing
/// the HTML report. Returns `None` when there was nothing to search.
pub async fn run(state: &AppState, keyword: &str) -> anyhow::Result<Option<RunSummary>> {
    let keyword = Keyword::new(keyword).context("invalid keyword")?;

    let targets = state.store.load()?;
    if targets.is_empty() {
        println!("{}", style(NO_URLS_HINT).yellow());
        return Ok(None);
    }

    let config = &state.config;
    let probe = KeywordProbe::new(
        Arc::new(HttpFetcher::new(&config.fetch)?),
        Arc::new(ChromiumLauncher::new(
            config.browser.clone(),
            config.fetch.clone(),
        )),
        ProbeSettings::from_config(config),
    );
    let concurrency = usize::try_from(config.scanning.concurrent_scans).unwrap_or(1);
    let orchestrator = ScanOrchestrator::new(probe).with_max_concurrent_scans(concurrency);

    let cancel = CancellationToken::new();
    let _interrupt_guard = state.interrupts.begin(&cancel);

    println!("Searching {} URL(s) for '{}'...", targets.len(), keyword);

    let mut sinks = (ConsoleReporter::new(), HtmlReporter::new(&keyword));
    let summary = orchestrator
        .run(&targets, &keyword, &mut sinks, &cancel)
        .await;

    let (_, html) = sinks;
    let report_path = &config.storage.report_path;
    html.write_to(report_path)
        .with_context(|| format!("failed to write report to {}", report_path.display()))?;

    println!(
        "\nChecked {}: {} found, {} not found, {} error(s). Report: {}",
        summary.total,
        style(summary.found).green(),
        style(summary.not_found).yellow(),
        style(summary.errors).red(),
        report_path.display()
    );

    Ok(Some(summary))
}
