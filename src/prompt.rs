//! Prompt and feedback text
//!
//! The prompt names the target ("I spy a RED Circle") and records where the
//! color name sits so a renderer can tint just that word.

use std::ops::Range;

use crate::sim::{Color, Combination};

/// The "I spy" line shown for a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    /// Byte range of the color name within `text`
    pub highlight: Range<usize>,
    pub color: Color,
}

impl Prompt {
    pub fn for_target(target: &Combination) -> Self {
        let name = target.color.name();
        let lead = format!("I spy {} ", article_for(name));
        let start = lead.len();
        let text = format!("{lead}{name} {}", target.shape);
        Self {
            text,
            highlight: start..start + name.len(),
            color: target.color,
        }
    }

    /// Text before, inside and after the highlighted color name
    pub fn parts(&self) -> (&str, &str, &str) {
        let Range { start, end } = self.highlight;
        (&self.text[..start], &self.text[start..end], &self.text[end..])
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

fn article_for(word: &str) -> &'static str {
    match word.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// Banner shown after a correct pick
pub fn feedback_text(score: u64) -> String {
    format!("Correct!\nPoints: {score}")
}
