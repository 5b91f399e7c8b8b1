//! Keyword side effects of a chat message.

use crate::ambience::Ambience;
use regex::{Regex, RegexBuilder};

pub const BREAK_PATTERN: &str = "scroll|doom|tired|late|stressed";

// Checked in order; the first hit picks the track
pub const AMBIENCE_PATTERNS: [(&str, Ambience); 3] = [
    ("rain|focus", Ambience::Rain),
    ("bowl|meditate", Ambience::Bowls),
    ("ocean|calm|relax", Ambience::Ocean),
];

/// What a message asks the widget to do besides replying.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Intent {
    pub take_break: bool,
    pub ambience: Option<Ambience>,
}

impl Intent {
    pub fn is_empty(&self) -> bool {
        !self.take_break && self.ambience.is_none()
    }
}

pub struct IntentMatcher {
    break_re: Regex,
    ambience_res: Vec<(Regex, Ambience)>,
}

impl IntentMatcher {
    pub fn new() -> Result<Self, regex::Error> {
        let break_re = case_insensitive(BREAK_PATTERN)?;
        let ambience_res = AMBIENCE_PATTERNS
            .iter()
            .map(|(p, a)| case_insensitive(p).map(|re| (re, *a)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            break_re,
            ambience_res,
        })
    }

    pub fn analyze(&self, text: &str) -> Intent {
        Intent {
            take_break: self.break_re.is_match(text),
            ambience: self
                .ambience_res
                .iter()
                .find(|(re, _)| re.is_match(text))
                .map(|(_, a)| *a),
        }
    }
}

fn case_insensitive(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}
