use careerwatch_app::report::{format_line, message, ConsoleReporter, HtmlReporter};
use careerwatch_core::{Keyword, Target};
use careerwatch_scanner::{Evaluation, MatchResult, ResultSink, ScanError};
use std::time::Duration;
use tempfile::TempDir;

fn evaluation(company: &str, url: &str, result: MatchResult) -> Evaluation {
    Evaluation {
        target: Target::new(company, url),
        keyword: Keyword::new("rust").unwrap(),
        result,
        attempts: Vec::new(),
        elapsed: Duration::from_millis(10),
    }
}

fn transport_error(url: &str) -> MatchResult {
    MatchResult::FetchError(ScanError::Transport {
        url: url.to_string(),
        status: Some(503),
        reason: "HTTP 503".to_string(),
    })
}

#[test]
fn test_console_lines_without_colour() {
    console::set_colors_enabled(false);

    let found = evaluation("Acme", "https://acme.example/jobs", MatchResult::Found);
    assert_eq!(
        format_line(&found),
        "[Acme] Found 'rust' on https://acme.example/jobs"
    );

    let missing = evaluation("Globex", "https://globex.example/jobs", MatchResult::NotFound);
    assert_eq!(
        format_line(&missing),
        "[Globex] No 'rust' found on https://globex.example/jobs"
    );

    let failed = evaluation(
        "Initech",
        "https://initech.example/jobs",
        transport_error("https://initech.example/jobs"),
    );
    let line = format_line(&failed);
    assert!(line.starts_with("[Initech] Error fetching https://initech.example/jobs: "));
    assert!(line.contains("HTTP 503"));
}

#[test]
fn test_message_matches_console_text() {
    let found = evaluation("Acme", "https://acme.example/jobs", MatchResult::Found);
    assert_eq!(message(&found), "Found 'rust' on https://acme.example/jobs");
}

#[test]
fn test_console_reporter_counts_lines() {
    console::set_colors_enabled(false);
    let mut reporter = ConsoleReporter::new();
    reporter.record(&evaluation("Acme", "https://acme.example/jobs", MatchResult::Found));
    reporter.record(&evaluation("Acme", "https://acme.example/jobs", MatchResult::NotFound));
    assert_eq!(reporter.lines(), 2);
}

#[test]
fn test_html_report_entries_in_order() {
    let keyword = Keyword::new("rust").unwrap();
    let mut reporter = HtmlReporter::new(&keyword);

    reporter.record(&evaluation("Acme", "https://acme.example/jobs", MatchResult::Found));
    reporter.record(&evaluation("Globex", "https://globex.example/jobs", MatchResult::NotFound));
    reporter.record(&evaluation(
        "Initech",
        "https://initech.example/jobs",
        transport_error("https://initech.example/jobs"),
    ));

    let statuses: Vec<_> = reporter.entries().iter().map(|e| e.status).collect();
    assert_eq!(statuses, vec!["found", "not-found", "error"]);

    let summary = reporter.summary();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.found, 1);
    assert_eq!(summary.not_found, 1);
    assert_eq!(summary.errors, 1);

    let html = reporter.render().unwrap();
    assert!(html.contains("Checked: 3"));
    assert!(html.contains("Errors: 1"));
    let found_at = html.find(r#"<li class="found">"#).unwrap();
    let missing_at = html.find(r#"<li class="not-found">"#).unwrap();
    let error_at = html.find(r#"<li class="error">"#).unwrap();
    assert!(found_at < missing_at && missing_at < error_at);
}

#[test]
fn test_html_report_escapes_markup() {
    let keyword = Keyword::new("rust").unwrap();
    let mut reporter = HtmlReporter::new(&keyword);
    reporter.record(&evaluation(
        "R&D <Labs>",
        "https://labs.example/jobs",
        MatchResult::Found,
    ));

    let html = reporter.render().unwrap();
    assert!(html.contains("R&amp;D &lt;Labs&gt;"));
    assert!(!html.contains("<Labs>"));
}

#[test]
fn test_html_report_written_to_nested_path() {
    let tmp = TempDir::new().expect("create temp dir");
    let path = tmp.path().join("out").join("report.html");

    let keyword = Keyword::new("rust").unwrap();
    let mut reporter = HtmlReporter::new(&keyword);
    reporter.record(&evaluation("Acme", "https://acme.example/jobs", MatchResult::Found));
    reporter.write_to(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<!DOCTYPE html>"));
    assert!(written.contains("https://acme.example/jobs"));
}
