//! Console output formatter for flow answers and fact sheets

use crate::repl::FlowAnswer;
use colored::Colorize;
use handoff_domain::{ActivitySuggestion, CountryReport, HandoffOutcome};

/// Formats answers for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one flow answer.
    ///
    /// With progress enabled the mood has already been announced, so only
    /// the suggestion is printed; without it the mood is included.
    pub fn format_answer(answer: &FlowAnswer, show_progress: bool) -> String {
        match answer {
            FlowAnswer::Text(text) => text.clone(),
            FlowAnswer::Handoff(outcome) => Self::format_handoff(outcome, !show_progress),
        }
    }

    pub fn format_handoff(outcome: &HandoffOutcome, include_mood: bool) -> String {
        let mut lines = Vec::new();
        if include_mood {
            lines.push(format!("Mood: {}", outcome.mood()));
        }
        if let ActivitySuggestion::Suggested(text) = &outcome.suggestion {
            lines.push(format!("Agent 2's Suggestion: {}", text));
        }
        lines.join("\n")
    }

    /// Format the offline fact sheet of the `lookup` command
    pub fn format_report(report: &CountryReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&report.country));
        output.push('\n');
        output.push_str(&format!("{:<12}{}\n", "Capital:".cyan().bold(), report.capital));
        output.push_str(&format!("{:<12}{}\n", "Language:".cyan().bold(), report.language));
        output.push_str(&format!(
            "{:<12}{}\n",
            "Population:".cyan().bold(),
            report.population
        ));

        if !report.is_known() {
            output.push_str(&format!(
                "\n{}\n",
                "Not in the lookup table.".yellow()
            ));
        }

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(40);
        format!("{}\n{:^40}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}
