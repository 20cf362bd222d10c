mod common;

use careerwatch_core::{Keyword, Target};
use careerwatch_scanner::{
    CancellationToken, Evaluation, KeywordProbe, MatchResult, ResultSink, RunSummary,
    ScanOrchestrator,
};
use common::{instant_settings, FakeLauncher, RoutedFetcher};

fn targets() -> Vec<Target> {
    vec![
        Target::new("Acme", "http://acme.test/careers"),
        Target::new("Globex", "http://globex.test/jobs"),
        Target::new("Broken", "not a url"),
        Target::new("Initech", "http://initech.test/careers"),
    ]
}

fn orchestrator(concurrency: usize) -> ScanOrchestrator {
    // Earlier targets respond slower so a reordering stream would show.
    let fetcher = RoutedFetcher::new(&[
        ("http://acme.test/careers", 300, "<li>Backend Engineer</li>"),
        ("http://globex.test/jobs", 200, "<p>Sales roles only</p>"),
        ("http://initech.test/careers", 10, "<li>Engineer II</li>"),
    ]);
    let launcher = FakeLauncher::content("<p>Sales roles only</p>");
    let probe = KeywordProbe::new(fetcher, launcher, instant_settings());
    ScanOrchestrator::new(probe).with_max_concurrent_scans(concurrency)
}

/// Collects (company, label) pairs in the order they arrive.
#[derive(Default)]
struct Recorder {
    seen: Vec<(String, &'static str)>,
}

impl ResultSink for Recorder {
    fn record(&mut self, evaluation: &Evaluation) {
        self.seen
            .push((evaluation.target.company.clone(), evaluation.result.label()));
    }
}

fn expected() -> Vec<(String, &'static str)> {
    vec![
        ("Acme".to_string(), "found"),
        ("Globex".to_string(), "not-found"),
        ("Broken".to_string(), "error"),
        ("Initech".to_string(), "found"),
    ]
}

#[tokio::test(start_paused = true)]
async fn test_sequential_run_reports_every_target() {
    let mut recorder = Recorder::default();
    let summary = orchestrator(1)
        .run(
            &targets(),
            &Keyword::new("engineer").unwrap(),
            &mut recorder,
            &CancellationToken::new(),
        )
        .await;

    assert_eq!(recorder.seen, expected());
    assert_eq!(
        summary,
        RunSummary {
            total: 4,
            found: 2,
            not_found: 1,
            errors: 1,
        }
    );
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_run_preserves_order() {
    let mut recorder = Recorder::default();
    orchestrator(4)
        .run(
            &targets(),
            &Keyword::new("engineer").unwrap(),
            &mut recorder,
            &CancellationToken::new(),
        )
        .await;

    assert_eq!(recorder.seen, expected());
}

#[tokio::test(start_paused = true)]
async fn test_fan_out_to_two_sinks() {
    let mut found = Vec::new();
    let mut errors = 0usize;

    {
        let mut sinks = (
            |e: &Evaluation| {
                if e.result.is_found() {
                    found.push(e.target.company.clone());
                }
            },
            |e: &Evaluation| {
                if matches!(e.result, MatchResult::FetchError(_)) {
                    errors += 1;
                }
            },
        );
        orchestrator(2)
            .run(
                &targets(),
                &Keyword::new("engineer").unwrap(),
                &mut sinks,
                &CancellationToken::new(),
            )
            .await;
    }

    assert_eq!(found, vec!["Acme".to_string(), "Initech".to_string()]);
    assert_eq!(errors, 1);
}

#[tokio::test]
async fn test_cancelled_run_still_reports_each_target() {
    let cancel = CancellationToken::new();
    cancel.cancel();

    let mut recorder = Recorder::default();
    let summary = orchestrator(1)
        .run(
            &targets(),
            &Keyword::new("engineer").unwrap(),
            &mut recorder,
            &cancel,
        )
        .await;

    assert_eq!(recorder.seen.len(), 4);
    assert_eq!(summary.errors, 4);
}
