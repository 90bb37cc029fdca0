//! Option parsing for model responses
//!
//! Expected format, one option per line:
//! ```text
//! [enthusiastic agreement] Yes!! Let's go tonight
//! [gentle refusal] hmm... maybe another day
//! [playful teasing] only if you're paying
//! ```
//!
//! Models do not always comply, so each line runs through an ordered chain
//! of recovery strategies. The last strategy always succeeds, which makes
//! parsing infallible.

use super::{ReplyOption, ReplyOptions};

/// Number of options produced per generation cycle
pub const OPTION_COUNT: usize = 3;
/// Label of the padding option
pub const PLACEHOLDER_LABEL: &str = "continue";
/// Content of the padding option
pub const PLACEHOLDER_CONTENT: &str = "...";
/// Characters kept from an unstructured line when it becomes a label
pub const TRUNCATED_LABEL_CHARS: usize = 5;
/// Marker appended to a truncated label
pub const ELLIPSIS: &str = "..";

/// Recovery strategies, tried in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryStrategy {
    /// `[label] content`
    Bracketed,
    /// `label content`, split on the first space
    SpaceSplit,
    /// First characters of the line as label, whole line as content
    Truncated,
}

impl RecoveryStrategy {
    pub const CHAIN: [RecoveryStrategy; 3] = [
        RecoveryStrategy::Bracketed,
        RecoveryStrategy::SpaceSplit,
        RecoveryStrategy::Truncated,
    ];

    /// Apply this strategy to a trimmed, non-empty line.
    ///
    /// Returns `None` when the strategy does not fit the line. Any option
    /// returned has a non-empty label and content.
    pub fn apply(self, line: &str) -> Option<ReplyOption> {
        match self {
            RecoveryStrategy::Bracketed => parse_bracketed(line),
            RecoveryStrategy::SpaceSplit => parse_space_split(line),
            RecoveryStrategy::Truncated => parse_truncated(line),
        }
    }
}

fn parse_bracketed(line: &str) -> Option<ReplyOption> {
    let rest = line.strip_prefix('[')?;
    let (label, content) = rest.split_once(']')?;
    let content = content.trim_start();

    if label.is_empty() || content.is_empty() {
        return None;
    }

    Some(ReplyOption::new(label, content))
}

fn parse_space_split(line: &str) -> Option<ReplyOption> {
    let (label, content) = line.split_once(' ')?;

    if label.is_empty() || content.is_empty() {
        return None;
    }

    Some(ReplyOption::new(label, content))
}

fn parse_truncated(line: &str) -> Option<ReplyOption> {
    if line.is_empty() {
        return None;
    }

    let head: String = line.chars().take(TRUNCATED_LABEL_CHARS).collect();
    Some(ReplyOption::new(format!("{}{}", head, ELLIPSIS), line))
}

/// Recover one option from a line using the first strategy that applies
pub fn parse_line(line: &str) -> Option<(ReplyOption, RecoveryStrategy)> {
    RecoveryStrategy::CHAIN
        .into_iter()
        .find_map(|strategy| strategy.apply(line).map(|option| (option, strategy)))
}

/// Parse exactly three options from a raw model response.
///
/// Only the first three non-empty lines are considered; extra lines are
/// dropped and missing slots are padded with the placeholder option.
pub fn parse_options(response: &str) -> ReplyOptions {
    let mut parsed = response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(OPTION_COUNT)
        .filter_map(|line| {
            let (option, strategy) = parse_line(line)?;
            if strategy != RecoveryStrategy::Bracketed {
                log::debug!("Recovered option with {:?}: {:?}", strategy, line);
            }
            Some(option)
        });

    std::array::from_fn(|_| parsed.next().unwrap_or_else(ReplyOption::placeholder))
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
