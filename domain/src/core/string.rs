//! String helpers shared by progress output and log lines.

/// Collapse `s` onto a single line and cap it at `max_chars` characters.
///
/// Whitespace runs (including newlines) become one space. When the text is
/// cut, a trailing `...` is appended; the result never exceeds
/// `max_chars + 3` characters.
pub fn one_line_preview(s: &str, max_chars: usize) -> String {
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let cut: String = collapsed.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}
