//! Result reporting: coloured console lines and the HTML report file.

mod console;
mod html;

pub use self::console::{format_line, ConsoleReporter};
pub use self::html::{HtmlReporter, ReportEntry};

use careerwatch_scanner::{Evaluation, MatchResult};

/// Plain-text message for an evaluation, without company prefix or styling.
pub fn message(evaluation: &Evaluation) -> String {
    let keyword = &evaluation.keyword;
    let url = &evaluation.target.url;
    match &evaluation.result {
        MatchResult::Found => format!("Found '{keyword}' on {url}"),
        MatchResult::NotFound => format!("No '{keyword}' found on {url}"),
        MatchResult::FetchError(cause) => format!("Error fetching {url}: {cause}"),
    }
}
