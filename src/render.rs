//! TUI rendering traits for eventfinder types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to eventfinder-core types using owo_colors.

use eventfinder_core::Outcome;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Outcome {
    fn render(&self) -> String {
        match self {
            Outcome::Answer { text } => highlight_first_line(text, |l| l.bold().to_string()),
            Outcome::Suggestions { text, option_count } => {
                let hint = format!(
                    "Reply with a number (1-{}) for details.",
                    option_count
                );
                format!(
                    "{}\n{}",
                    highlight_first_line(text, |l| l.yellow().to_string()),
                    hint.dimmed()
                )
            }
            Outcome::NoMatch { text } => text.red().to_string(),
            Outcome::NothingToConfirm { text } => text.dimmed().to_string(),
        }
    }
}

/// Style the heading line of a multi-line answer, leaving the list as is.
fn highlight_first_line(text: &str, style: impl Fn(&str) -> String) -> String {
    match text.split_once('\n') {
        Some((first, rest)) => format!("{}\n{}", style(first), rest),
        None => style(text),
    }
}
