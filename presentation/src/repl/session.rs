//! Read-answer-print loop for one flow

use super::flow::Flow;
use super::line_source::{LineSource, ReadOutcome, is_exit};
use super::runner::{FlowAnswer, FlowRunner};
use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ConsoleProgress;
use handoff_application::{FlowProgressNotifier, NoProgress};
use std::io::{self, Write};
use tracing::debug;

/// Interactive loop for a single flow.
///
/// Prompts, answers, prints the separator, and repeats until `exit` or end
/// of input. `exit` is checked before anything reaches the model.
pub struct FlowRepl<'a> {
    runner: &'a FlowRunner,
    flow: Flow,
    show_progress: bool,
}

impl<'a> FlowRepl<'a> {
    pub fn new(runner: &'a FlowRunner, flow: Flow) -> Self {
        Self {
            runner,
            flow,
            show_progress: true,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn with_config(self, config: &ReplConfig) -> Self {
        self.with_progress(config.show_progress)
    }

    /// Run the loop. Returns the number of inputs answered.
    pub async fn run<S, W>(&self, source: &mut S, out: &mut W) -> io::Result<usize>
    where
        S: LineSource + ?Sized,
        W: Write,
    {
        for line in self.flow.welcome() {
            writeln!(out, "{}", line)?;
        }

        let mut answered = 0;
        loop {
            match source.read_line(self.flow.prompt())? {
                ReadOutcome::Line(line) => {
                    if is_exit(&line) {
                        debug!("{} loop: exit", self.flow);
                        break;
                    }
                    self.answer_one(&line, out).await?;
                    answered += 1;
                }
                ReadOutcome::Interrupted => {
                    writeln!(out, "^C")?;
                }
                ReadOutcome::Eof => break,
            }
        }

        Ok(answered)
    }

    /// Answer a single input and print the separator
    pub async fn answer_one<W: Write>(&self, input: &str, out: &mut W) -> io::Result<()> {
        let answer = if self.show_progress {
            let progress = ConsoleProgress::new();
            self.answer_with(input, &progress).await
        } else {
            self.answer_with(input, &NoProgress).await
        };

        let text = ConsoleFormatter::format_answer(&answer, self.show_progress);
        if !text.is_empty() {
            writeln!(out, "{}", text)?;
        }
        writeln!(out, "{}", self.flow.separator())?;
        out.flush()
    }

    async fn answer_with(
        &self,
        input: &str,
        progress: &dyn FlowProgressNotifier,
    ) -> FlowAnswer {
        self.runner.answer(self.flow, input, progress).await
    }
}
