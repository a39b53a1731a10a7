//! Single-pass break insertion over the rule table

use crate::rules::{PunctuationRule, BREAK, DEFAULT_RULES};

/// Inserts a line break after each delimiter in its rule table
///
/// The table is held per instance so additional delimiters extend the
/// segmenter without touching the pass itself.
pub struct Segmenter {
    rules: Vec<PunctuationRule>,
}

impl Segmenter {
    /// Create a segmenter with the default rule table
    pub fn new() -> Self {
        Self::with_rules(DEFAULT_RULES.to_vec())
    }

    /// Create a segmenter with an explicit rule table
    pub fn with_rules(rules: Vec<PunctuationRule>) -> Self {
        Self { rules }
    }

    /// The active rule table, in application order
    pub fn rules(&self) -> &[PunctuationRule] {
        &self.rules
    }

    /// Insert a line break after every delimiter occurrence
    ///
    /// A delimiter already followed by a line break is left alone, so
    /// re-segmenting already segmented text is a no-op. All other characters
    /// pass through unchanged.
    pub fn segment(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + text.len() / 16);
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match self.rule_for(c) {
                Some(rule) if chars.peek() != Some(&BREAK) => out.push_str(rule.replacement),
                _ => out.push(c),
            }
        }
        out
    }

    fn rule_for(&self, c: char) -> Option<&PunctuationRule> {
        self.rules.iter().find(|rule| rule.matches(c))
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}
