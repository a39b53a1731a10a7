//! Punctuation rule table

/// A delimiter character mapped to its replacement text
///
/// The replacement is always the delimiter itself followed by a line break,
/// so applying a rule never re-triggers it or any other rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PunctuationRule {
    /// Character that triggers a break
    pub delimiter: char,
    /// Text substituted for the delimiter
    pub replacement: &'static str,
}

/// Break character inserted after each delimiter
pub const BREAK: char = '\n';

/// The fixed rule set, in application order
pub const DEFAULT_RULES: [PunctuationRule; 4] = [
    PunctuationRule {
        delimiter: '。',
        replacement: "。\n",
    },
    PunctuationRule {
        delimiter: '！',
        replacement: "！\n",
    },
    PunctuationRule {
        delimiter: '？',
        replacement: "？\n",
    },
    PunctuationRule {
        delimiter: '；',
        replacement: "；\n",
    },
];

impl PunctuationRule {
    /// Whether `c` triggers this rule
    pub fn matches(&self, c: char) -> bool {
        self.delimiter == c
    }
}
