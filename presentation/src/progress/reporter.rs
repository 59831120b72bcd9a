//! Progress reporting for the agent flows

use colored::Colorize;
use handoff_application::FlowProgressNotifier;
use handoff_domain::{AgentRole, MoodAssessment, MoodLabel, ToolCall, ToolResult};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Prints the flow's status lines and shows a spinner while an open-ended
/// agent is waiting on the model.
pub struct ConsoleProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start_spinner(&self, message: String) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut spinner) = self.spinner.lock()
            && let Some(previous) = spinner.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn stop_spinner(&self) {
        if let Ok(mut spinner) = self.spinner.lock()
            && let Some(pb) = spinner.take()
        {
            pb.finish_and_clear();
        }
    }

    /// `name(key=value, ...)` with keys sorted
    fn describe_call(call: &ToolCall) -> String {
        let mut args: Vec<_> = call
            .arguments
            .iter()
            .map(|(k, v)| match v.as_str() {
                Some(s) => format!("{}={}", k, s),
                None => format!("{}={}", k, v),
            })
            .collect();
        args.sort();
        format!("{}({})", call.tool_name, args.join(", "))
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ConsoleProgress {
    fn drop(&mut self) {
        self.stop_spinner();
    }
}

impl FlowProgressNotifier for ConsoleProgress {
    fn on_agent_start(&self, role: AgentRole) {
        match role {
            AgentRole::MoodAnalyzer => println!("Agent 1 (Mood Analyzer) is at work..."),
            AgentRole::ActivitySuggester | AgentRole::ProductAdvisor => {
                self.start_spinner(format!("{} is thinking...", role.display_name()))
            }
            AgentRole::CountryInfo => {}
        }
    }

    fn on_agent_complete(&self, _role: AgentRole, _success: bool) {
        self.stop_spinner();
    }

    fn on_country_lookup(&self, country: &str) {
        println!("\n 🔎  {}\n", format!("Retrieving info for {}...", country).cyan());
    }

    fn on_tool_call(&self, call: &ToolCall, turn: usize) {
        println!(
            "  {} {} {}",
            "->".cyan(),
            Self::describe_call(call),
            format!("(turn {})", turn).dimmed()
        );
    }

    fn on_tool_result(&self, result: &ToolResult) {
        if result.is_success() {
            println!(
                "     {} {}",
                "v".green(),
                result.output().unwrap_or_default()
            );
        } else {
            println!("     {} {}", "x".red(), result.response_text());
        }
    }

    fn on_mood_message(&self, message: &str) {
        println!("\nUser Message: \"{}\"", message);
    }

    fn on_mood_detected(&self, assessment: &MoodAssessment) {
        println!("Mood Detected: {}", assessment.label.to_string().bold());
    }

    fn on_handoff(&self, mood: MoodLabel) {
        println!(
            "Mood is '{}'. {}",
            mood,
            "Handoff to Agent 2 (Activity Suggester)...".yellow()
        );
    }

    fn on_no_handoff(&self, mood: MoodLabel) {
        println!(
            "Mood is '{}'. No specific activity suggestion needed for this mood.",
            mood
        );
    }
}
