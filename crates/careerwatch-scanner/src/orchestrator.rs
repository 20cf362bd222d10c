//! Run orchestrator for evaluating a list of targets.
//!
//! This module provides the `ScanOrchestrator`, which feeds every target
//! through the [`KeywordProbe`] and streams each evaluation to a
//! [`ResultSink`] in input order, whatever the concurrency setting.

use crate::probe::{Evaluation, KeywordProbe, MatchResult};
use crate::sink::ResultSink;
use careerwatch_core::{Keyword, Target};
use futures::stream::{self, StreamExt};
use tokio_util::sync::CancellationToken;

/// Default number of targets evaluated at once.
const DEFAULT_MAX_CONCURRENT_SCANS: usize = 1;

/// Outcome counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub found: usize,
    pub not_found: usize,
    pub errors: usize,
}

impl RunSummary {
    /// Count one evaluation.
    pub fn record(&mut self, evaluation: &Evaluation) {
        self.total += 1;
        match evaluation.result {
            MatchResult::Found => self.found += 1,
            MatchResult::NotFound => self.not_found += 1,
            MatchResult::FetchError(_) => self.errors += 1,
        }
    }
}

/// Orchestrates keyword probes across a list of targets.
pub struct ScanOrchestrator {
    probe: KeywordProbe,
    max_concurrent_scans: usize,
}

impl ScanOrchestrator {
    /// Create a new orchestrator that evaluates targets sequentially.
    #[must_use]
    pub fn new(probe: KeywordProbe) -> Self {
        Self {
            probe,
            max_concurrent_scans: DEFAULT_MAX_CONCURRENT_SCANS,
        }
    }

    /// Set the maximum number of targets evaluated at once.
    #[must_use]
    pub fn with_max_concurrent_scans(mut self, max: usize) -> Self {
        self.max_concurrent_scans = max.max(1);
        self
    }

    /// Evaluate every target against `keyword`.
    ///
    /// Each target yields exactly one evaluation; a failing target never
    /// stops the run. Once `cancel` fires, the remaining targets are reported
    /// as cancelled rather than skipped.
    pub async fn run<S>(
        &self,
        targets: &[Target],
        keyword: &Keyword,
        sink: &mut S,
        cancel: &CancellationToken,
    ) -> RunSummary
    where
        S: ResultSink,
    {
        tracing::info!(
            "Searching {} target(s) for '{}' ({} at a time)",
            targets.len(),
            keyword,
            self.max_concurrent_scans
        );

        let mut summary = RunSummary::default();
        let mut evaluations = stream::iter(targets)
            .map(|target| self.probe.fetch_and_match(target, keyword, cancel))
            .buffered(self.max_concurrent_scans);

        while let Some(evaluation) = evaluations.next().await {
            summary.record(&evaluation);
            sink.record(&evaluation);
        }

        tracing::info!(
            "Run complete: {} found, {} not found, {} errors",
            summary.found,
            summary.not_found,
            summary.errors
        );

        summary
    }
}
