use std::num::IntErrorKind;

use crate::command::NameCommand;

/// What to do with the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Set the name to the literal text of the command.
    Replace,
    Shuffle,
    Sort,
    /// Generate a new name from the character pools.
    Random,
}

impl Action {
    /// Classify a raw action word. Matching is exact and case-sensitive;
    /// every other word is a literal replacement name.
    pub fn classify(raw: &str) -> Self {
        match raw {
            "shuffle" => Action::Shuffle,
            "sort" => Action::Sort,
            "rand" | "random" => Action::Random,
            _ => Action::Replace,
        }
    }

    /// Whether the action falls back to the current profile name.
    pub fn uses_current_name(self) -> bool {
        matches!(self, Action::Shuffle | Action::Sort)
    }
}

/// One name transformation, built per invocation and consumed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformRequest {
    pub action: Action,
    /// Literal name for Replace, explicit source for Shuffle and Sort.
    pub source_text: Option<String>,
    /// Pool hint for Random.
    pub resource_hint: Option<String>,
    /// Requested length for Random. Clamped by the engine.
    pub length_hint: Option<i64>,
}

impl TransformRequest {
    pub fn replace(text: impl Into<String>) -> Self {
        Self {
            action: Action::Replace,
            source_text: Some(text.into()),
            resource_hint: None,
            length_hint: None,
        }
    }

    pub fn shuffle(source: Option<String>) -> Self {
        Self {
            action: Action::Shuffle,
            source_text: source,
            resource_hint: None,
            length_hint: None,
        }
    }

    pub fn sort(source: Option<String>) -> Self {
        Self {
            action: Action::Sort,
            source_text: source,
            resource_hint: None,
            length_hint: None,
        }
    }

    pub fn random(length: Option<i64>, hint: Option<String>) -> Self {
        Self {
            action: Action::Random,
            source_text: None,
            resource_hint: hint,
            length_hint: length,
        }
    }

    /// Build a request from a parsed command.
    ///
    /// Shuffle and Sort read option 0 as the source text. Random reads option
    /// 0 as the length and option 1 as the pool hint; a length too large for
    /// an `i64` saturates, anything else that is not an integer is dropped.
    /// Replace uses the action word itself.
    pub fn from_command(cmd: &NameCommand) -> Self {
        let first = cmd.options.first().cloned();
        match Action::classify(&cmd.action) {
            Action::Replace => Self::replace(cmd.action.clone()),
            Action::Shuffle => Self::shuffle(first),
            Action::Sort => Self::sort(first),
            Action::Random => {
                let length = first.as_deref().and_then(parse_length);
                Self::random(length, cmd.options.get(1).cloned())
            }
        }
    }
}

fn parse_length(text: &str) -> Option<i64> {
    match text.trim().parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}
