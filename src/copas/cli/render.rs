//! Terminal rendering.
//!
//! Every `render_*` function returns a `String`; the `print_*` wrappers write it to stdout.
//! Coloring is decided once per call through `use_color`, so the plain output can be
//! tested without touching the global `colored` override.

use chrono::{DateTime, Utc};
use colored::Colorize;
use copas::api::{CmdMessage, ListStats, MessageLevel};
use copas::index::DisplaySnippet;
use copas::model::ELLIPSIS;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const LEFT_PAD: &str = "  ";

/// One card per snippet: index, flattened preview and age.
pub fn render_snippet_list(
    snippets: &[DisplaySnippet],
    preview_chars: usize,
    use_color: bool,
) -> String {
    let mut output = String::new();

    for ds in snippets {
        let idx_str = format!("{}. ", ds.index);
        let time_ago = format_time_ago(ds.snippet.created_at);

        let fixed_width = LEFT_PAD.width() + idx_str.width() + TIME_WIDTH + 2;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let preview = truncate_to_width(&preview(&ds.snippet.content, preview_chars), available);
        let padding = available.saturating_sub(preview.width());

        let (idx_display, time_display) = if use_color {
            (
                idx_str.yellow().to_string(),
                time_ago.dimmed().italic().to_string(),
            )
        } else {
            (idx_str, time_ago)
        };

        output.push_str(&format!(
            "{}{}{}{}  {}\n",
            LEFT_PAD,
            idx_display,
            preview,
            " ".repeat(padding),
            time_display
        ));
    }

    output
}

/// `N snippet(s)`, with `(M shown)` while a search narrows the view.
pub fn render_stats(stats: &ListStats, use_color: bool) -> String {
    let noun = if stats.total == 1 {
        "snippet"
    } else {
        "snippets"
    };
    let mut line = format!("{} {}", stats.total, noun);
    if stats.is_filtered() && stats.shown != stats.total {
        line.push_str(&format!(" ({} shown)", stats.shown));
    }

    if use_color {
        format!("\n{}\n", line.dimmed())
    } else {
        format!("\n{}\n", line)
    }
}

/// Full content of each snippet, separated by rules.
pub fn render_full_snippets(snippets: &[DisplaySnippet], use_color: bool) -> String {
    let mut output = String::new();

    for (i, ds) in snippets.iter().enumerate() {
        if i > 0 {
            output.push_str("\n================================\n\n");
        }
        let index = format!("{}.", ds.index);
        if use_color {
            output.push_str(&format!("{} {}\n", index.yellow(), ds.snippet.title.bold()));
        } else {
            output.push_str(&format!("{} {}\n", index, ds.snippet.title));
        }
        output.push_str("--------------------------------\n");
        output.push_str(&ds.snippet.content);
        output.push('\n');
    }

    output
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message);
    }
    let mut output = lines.join("\n");
    output.push('\n');
    output
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    let mut output = String::new();
    for message in messages {
        let line = if use_color {
            match message.level {
                MessageLevel::Info => message.content.dimmed().to_string(),
                MessageLevel::Success => message.content.green().to_string(),
                MessageLevel::Warning => message.content.yellow().to_string(),
                MessageLevel::Error => message.content.red().to_string(),
            }
        } else {
            message.content.clone()
        };
        output.push_str(&line);
        output.push('\n');
    }
    output
}

pub fn print_messages(messages: &[CmdMessage], use_color: bool) {
    print!("{}", render_messages(messages, use_color));
}

/// Content on one line, cut at `max_chars` characters with a trailing ellipsis.
fn preview(content: &str, max_chars: usize) -> String {
    let flat: String = content
        .chars()
        .map(|c| if c == '\n' || c == '\r' || c == '\t' { ' ' } else { c })
        .collect();
    if flat.chars().count() > max_chars {
        let mut cut: String = flat.chars().take(max_chars).collect();
        cut.push(ELLIPSIS);
        cut
    } else {
        flat
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push(ELLIPSIS);
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);

    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
