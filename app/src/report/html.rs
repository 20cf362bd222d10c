use askama::Template;
use careerwatch_core::Keyword;
use careerwatch_scanner::{Evaluation, ResultSink, RunSummary};
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;

/// One `<li>` in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub company: String,
    pub url: String,
    /// CSS class: `found`, `not-found` or `error`.
    pub status: &'static str,
    pub message: String,
}

#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate<'a> {
    keyword: &'a str,
    generated_at: String,
    summary: RunSummary,
    entries: &'a [ReportEntry],
}

/// Accumulates evaluations and renders them into a standalone HTML page.
#[derive(Debug)]
pub struct HtmlReporter {
    keyword: Keyword,
    started_at: DateTime<Local>,
    summary: RunSummary,
    entries: Vec<ReportEntry>,
}

impl HtmlReporter {
    pub fn new(keyword: &Keyword) -> Self {
        Self {
            keyword: keyword.clone(),
            started_at: Local::now(),
            summary: RunSummary::default(),
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    pub fn render(&self) -> Result<String, askama::Error> {
        ReportTemplate {
            keyword: self.keyword.as_str(),
            generated_at: self.started_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            summary: self.summary,
            entries: &self.entries,
        }
        .render()
    }

    /// Render and write the report, creating parent directories as needed.
    pub fn write_to(&self, path: &Path) -> anyhow::Result<()> {
        let html = self.render()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, html)?;
        tracing::info!("Wrote report with {} entries to {}", self.entries.len(), path.display());
        Ok(())
    }
}

impl ResultSink for HtmlReporter {
    fn record(&mut self, evaluation: &Evaluation) {
        self.summary.record(evaluation);
        self.entries.push(ReportEntry {
            company: evaluation.target.company.clone(),
            url: evaluation.target.url.clone(),
            status: evaluation.result.label(),
            message: super::message(evaluation),
        });
    }
}
