//! # Canned Response Selection
//!
//! File: cli/src/assistant/responder.rs
//!
//! ## Overview
//!
//! The `Responder` maps free-text user input to exactly one canned reply.
//! It holds two ordered tables and a default:
//!
//! 1. **Rules**: `(trigger, response)` pairs. The first rule whose trigger
//!    occurs anywhere in the lowercased input wins. When several triggers are
//!    present, declaration order decides, never specificity or match length.
//! 2. **Fallback tier**: consulted only when no rule matches, again in order.
//! 3. **Default response**: returned when nothing else matches. It is a
//!    required field, so selection is total.
//!
//! Selection is a pure function of the input and the tables: no session
//! memory, no context from earlier turns.
//!
//! ## Examples
//!
//! ```rust
//! use smartsdlc::assistant::responder::Responder;
//!
//! let responder = Responder::default();
//! let reply = responder.select("Can you help me with requirements?");
//! assert!(reply.starts_with("I can help you extract and structure requirements"));
//! ```
//!
use crate::assistant::samples;
use crate::core::error::{SmartSdlcError, Result};
use anyhow::anyhow;

/// An immutable `(trigger, response)` pair. Triggers are stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    trigger: String,
    response: String,
}

impl Rule {
    /// Builds a rule, lowercasing the trigger.
    ///
    /// Fails for blank triggers, which would match every input.
    pub fn new(trigger: &str, response: &str) -> Result<Self> {
        if trigger.trim().is_empty() {
            return Err(anyhow!(SmartSdlcError::InvalidRule(format!(
                "trigger for response '{}' is empty",
                preview(response)
            ))));
        }
        Ok(Self::from_static(trigger, response))
    }

    fn from_static(trigger: &str, response: &str) -> Self {
        Self {
            trigger: trigger.to_lowercase(),
            response: response.to_string(),
        }
    }

    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    fn matches(&self, normalized_input: &str) -> bool {
        normalized_input.contains(self.trigger.as_str())
    }
}

/// Which table produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier<'a> {
    /// A primary rule matched: its position and trigger.
    Rule { index: usize, trigger: &'a str },
    /// A fallback entry matched: its position and trigger.
    Fallback { index: usize, trigger: &'a str },
    /// Nothing matched.
    Default,
}

/// A selected reply together with the tier that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    pub tier: Tier<'a>,
    pub response: &'a str,
}

/// The ordered rule table, fallback tier and default reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Responder {
    rules: Vec<Rule>,
    fallbacks: Vec<Rule>,
    default_response: String,
}

impl Responder {
    /// # New Responder (`new`)
    ///
    /// Builds a responder from custom tables. The tables are fixed for the
    /// responder's lifetime.
    ///
    /// ## Arguments
    ///
    /// * `rules`: Primary rules, in priority order.
    /// * `fallbacks`: Consulted in order only when no rule matches.
    /// * `default_response`: Returned when nothing matches.
    ///
    /// ## Returns
    ///
    /// * `Responder`: A selector that answers every input.
    pub fn new(rules: Vec<Rule>, fallbacks: Vec<Rule>, default_response: &str) -> Self {
        Self {
            rules,
            fallbacks,
            default_response: default_response.to_string(),
        }
    }

    /// # Select Reply (`select`)
    ///
    /// Picks the canned reply for `input`. Matching is a case-insensitive
    /// substring search; the first declared rule that matches wins, then the
    /// first matching fallback, then the default.
    ///
    /// ## Arguments
    ///
    /// * `input`: Free-text user input. Empty input gets the default reply.
    ///
    /// ## Returns
    ///
    /// * `&str`: Exactly one reply. Selection never fails and has no side effects.
    pub fn select(&self, input: &str) -> &str {
        self.explain(input).response
    }

    /// # Explain Selection (`explain`)
    ///
    /// Same decision as `select`, plus the tier that made it.
    ///
    /// ## Returns
    ///
    /// * `Selection`: The reply and its `Tier` (rule or fallback position and
    ///   trigger, or `Default`).
    pub fn explain(&self, input: &str) -> Selection<'_> {
        let normalized = input.to_lowercase();

        if let Some((index, rule)) = first_match(&self.rules, &normalized) {
            return Selection {
                tier: Tier::Rule {
                    index,
                    trigger: rule.trigger(),
                },
                response: rule.response(),
            };
        }
        if let Some((index, rule)) = first_match(&self.fallbacks, &normalized) {
            return Selection {
                tier: Tier::Fallback {
                    index,
                    trigger: rule.trigger(),
                },
                response: rule.response(),
            };
        }
        Selection {
            tier: Tier::Default,
            response: &self.default_response,
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn fallbacks(&self) -> &[Rule] {
        &self.fallbacks
    }

    pub fn default_response(&self) -> &str {
        &self.default_response
    }
}

impl Default for Responder {
    /// The built-in SmartSDLC tables.
    fn default() -> Self {
        let rules = samples::CHAT_RULES
            .iter()
            .map(|(trigger, response)| Rule::from_static(trigger, response))
            .collect();
        let fallbacks = samples::CHAT_FALLBACKS
            .iter()
            .map(|(trigger, response)| Rule::from_static(trigger, response))
            .collect();
        Self::new(rules, fallbacks, samples::CHAT_DEFAULT_RESPONSE)
    }
}

fn first_match<'r>(rules: &'r [Rule], normalized_input: &str) -> Option<(usize, &'r Rule)> {
    rules
        .iter()
        .enumerate()
        .find(|(_, rule)| rule.matches(normalized_input))
}

fn preview(text: &str) -> String {
    let mut short: String = text.chars().take(24).collect();
    if short.len() < text.len() {
        short.push_str("...");
    }
    short
}
