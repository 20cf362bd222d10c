use careerwatch_scanner::{Evaluation, MatchResult, ResultSink};
use console::style;

/// Prints one coloured line per evaluation to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    lines: usize,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines printed so far.
    pub fn lines(&self) -> usize {
        self.lines
    }
}

impl ResultSink for ConsoleReporter {
    fn record(&mut self, evaluation: &Evaluation) {
        println!("{}", format_line(evaluation));
        self.lines += 1;
    }
}

/// `[Company] <message>` with green/yellow/red status and the URL underlined.
pub fn format_line(evaluation: &Evaluation) -> String {
    let company = style(format!("[{}]", evaluation.target.company)).bold();
    let keyword = &evaluation.keyword;
    let url = style(&evaluation.target.url).underlined();

    match &evaluation.result {
        MatchResult::Found => format!(
            "{company} {} {url}",
            style(format!("Found '{keyword}' on")).green()
        ),
        MatchResult::NotFound => format!(
            "{company} {} {url}",
            style(format!("No '{keyword}' found on")).yellow()
        ),
        MatchResult::FetchError(cause) => format!(
            "{company} {} {url}{}",
            style("Error fetching").red(),
            style(format!(": {cause}")).red()
        ),
    }
}
