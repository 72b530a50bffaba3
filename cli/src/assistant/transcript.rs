//! # Conversation Transcript
//!
//! File: cli/src/assistant/transcript.rs
//!
//! The visible chat history. Turns are only ever appended: there is no API to
//! edit or remove one, and `Turn` exposes read-only accessors.
//!
use chrono::{DateTime, Local};
use std::fmt;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => write!(f, "user"),
            Speaker::Assistant => write!(f, "assistant"),
        }
    }
}

/// One immutable entry in the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    speaker: Speaker,
    text: String,
    at: DateTime<Local>,
}

impl Turn {
    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// When the turn was appended.
    pub fn at(&self) -> DateTime<Local> {
        self.at
    }
}

/// Append-only, ordered list of turns.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Push Turn (`push`)
    ///
    /// Appends a turn stamped with the current local time. This is the only
    /// way to change a transcript.
    ///
    /// ## Arguments
    ///
    /// * `speaker`: Who produced the turn.
    /// * `text`: The turn's text, stored as given.
    ///
    /// ## Returns
    ///
    /// * `&Turn`: The newly appended turn.
    pub fn push(&mut self, speaker: Speaker, text: impl Into<String>) -> &Turn {
        self.turns.push(Turn {
            speaker,
            text: text.into(),
            at: Local::now(),
        });
        &self.turns[self.turns.len() - 1]
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.turns.iter()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Turn;
    type IntoIter = std::slice::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
