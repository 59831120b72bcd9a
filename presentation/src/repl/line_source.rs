//! Line input for the interactive loops.
//!
//! [`ReedlineSource`] reads from the terminal; [`ScriptedLines`] replays a
//! fixed list, which is how the loops are driven in tests.

use reedline::{
    FileBackedHistory, Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus,
    Reedline, Signal,
};
use std::borrow::Cow;
use std::collections::VecDeque;
use std::io;
use std::path::Path;
use tracing::warn;

const HISTORY_CAPACITY: usize = 1000;

/// Result of one read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// Ctrl-C: the current line is abandoned
    Interrupted,
    /// Ctrl-D or end of input
    Eof,
}

/// Source of operator input lines
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<ReadOutcome>;
}

/// `exit` in any case, surrounding whitespace ignored.
///
/// `" exit"` and `"exit\n"` also end the loop; they are never sent to the model.
pub fn is_exit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("exit")
}

/// Terminal line editor backed by reedline
pub struct ReedlineSource {
    editor: Reedline,
}

impl ReedlineSource {
    /// Create an editor, persisting history to `history_file` when given.
    ///
    /// A history file that cannot be opened is logged and skipped.
    pub fn new(history_file: Option<&Path>) -> Self {
        let mut editor = Reedline::create();

        if let Some(path) = history_file {
            ensure_parent_dir(path);
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.to_path_buf()) {
                Ok(history) => editor = editor.with_history(Box::new(history)),
                Err(e) => warn!("History disabled ({}): {}", path.display(), e),
            }
        }

        Self { editor }
    }
}

/// Create the directory holding `path`. Failures are logged, not returned.
fn ensure_parent_dir(path: &Path) -> bool {
    let Some(parent) = path.parent() else {
        return true;
    };
    match std::fs::create_dir_all(parent) {
        Ok(()) => true,
        Err(e) => {
            warn!("Cannot create history directory {}: {}", parent.display(), e);
            false
        }
    }
}

impl LineSource for ReedlineSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<ReadOutcome> {
        let prompt = FlowPrompt(prompt);
        Ok(match self.editor.read_line(&prompt)? {
            Signal::Success(line) => ReadOutcome::Line(line),
            Signal::CtrlC => ReadOutcome::Interrupted,
            Signal::CtrlD => ReadOutcome::Eof,
            #[allow(unreachable_patterns)]
            _ => ReadOutcome::Interrupted,
        })
    }
}

/// Plain prompt: the flow's question, no indicator
struct FlowPrompt<'a>(&'a str);

impl Prompt for FlowPrompt<'_> {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.0)
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("... ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!("({}reverse-search: {}) ", prefix, history_search.term))
    }
}

/// Replays a fixed list of reads, then reports end of input
#[derive(Debug, Default)]
pub struct ScriptedLines {
    reads: VecDeque<ReadOutcome>,
    prompts: Vec<String>,
}

impl ScriptedLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_reads(lines.into_iter().map(|l| ReadOutcome::Line(l.into())))
    }

    pub fn from_reads(reads: impl IntoIterator<Item = ReadOutcome>) -> Self {
        Self {
            reads: reads.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, one per read
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Reads not consumed yet
    pub fn remaining(&self) -> usize {
        self.reads.len()
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&mut self, prompt: &str) -> io::Result<ReadOutcome> {
        self.prompts.push(prompt.to_string());
        Ok(self.reads.pop_front().unwrap_or(ReadOutcome::Eof))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_exit() {
        assert!(is_exit("exit"));
        assert!(is_exit("EXIT"));
        assert!(is_exit("  Exit \n"));
        assert!(is_exit(" exit"));
        assert!(!is_exit("exit now"));
        assert!(!is_exit("quit"));
        assert!(!is_exit(""));
    }

    #[test]
    fn test_ensure_parent_dir_creates_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let history = dir.path().join("a").join("b").join("history.txt");

        assert!(ensure_parent_dir(&history));
        assert!(dir.path().join("a").join("b").is_dir());
    }

    #[test]
    fn test_ensure_parent_dir_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        assert!(!ensure_parent_dir(&blocker.join("history.txt")));
    }

    #[test]
    fn test_scripted_lines() {
        let mut source = ScriptedLines::new(["France"]);
        assert_eq!(
            source.read_line("> ").unwrap(),
            ReadOutcome::Line("France".to_string())
        );
        assert_eq!(source.read_line("> ").unwrap(), ReadOutcome::Eof);
        assert_eq!(source.prompts().len(), 2);
    }
}
