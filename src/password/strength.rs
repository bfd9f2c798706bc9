//! Password strength heuristic
//!
//! Scores a password 0-4 from its length, the character classes it uses
//! and two common weak patterns. This is a rough guide for the record
//! form, not an entropy estimate.

use std::fmt;
use serde::{Serialize, Serializer};

/// Highest score
pub const MAX_SCORE: u8 = 4;

/// Strength label shown next to the meter
///
/// Serializes as the display text (`"Very weak"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    NoPassword,
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    /// Label for a clamped score
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthLabel::VeryWeak,
            1 => StrengthLabel::Weak,
            2 => StrengthLabel::Fair,
            3 => StrengthLabel::Good,
            _ => StrengthLabel::Strong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::NoPassword => "No password provided",
            StrengthLabel::VeryWeak => "Very weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StrengthLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Result of a strength evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    /// Score in `0..=4`
    pub score: u8,
    pub label: StrengthLabel,
}

/// Evaluate the strength of a password
///
/// - length >= 12 adds 2, length >= 8 adds 1
/// - each class present (lowercase, uppercase, digit, symbol) adds 1
/// - a character repeated 3+ times in a row subtracts 1
/// - an alphabet or digit run of 3 (`abc`, `789`, `321`) subtracts 1
///
/// The result is clamped to `0..=4`.
pub fn evaluate_strength(password: &str) -> StrengthReport {
    if password.is_empty() {
        return StrengthReport {
            score: 0,
            label: StrengthLabel::NoPassword,
        };
    }

    let chars: Vec<char> = password.chars().collect();
    let mut score: i32 = 0;

    if chars.len() >= 12 {
        score += 2;
    } else if chars.len() >= 8 {
        score += 1;
    }

    score += character_class_count(&chars) as i32;

    if has_repeated_chars(&chars) {
        score -= 1;
    }
    if has_sequence(&chars) {
        score -= 1;
    }

    let score = score.clamp(0, MAX_SCORE as i32) as u8;
    StrengthReport {
        score,
        label: StrengthLabel::from_score(score),
    }
}

/// Number of classes present among lowercase, uppercase, digit and symbol
///
/// Anything other than an ASCII letter or digit counts as a symbol.
fn character_class_count(chars: &[char]) -> usize {
    let lower = chars.iter().any(|c| c.is_ascii_lowercase());
    let upper = chars.iter().any(|c| c.is_ascii_uppercase());
    let digit = chars.iter().any(|c| c.is_ascii_digit());
    let symbol = chars.iter().any(|c| !c.is_ascii_alphanumeric());

    [lower, upper, digit, symbol].iter().filter(|&&present| present).count()
}

/// Same character three or more times in a row
fn has_repeated_chars(chars: &[char]) -> bool {
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

/// Three consecutive letters (ascending) or digits (either direction)
///
/// Letters are compared case-insensitively.
fn has_sequence(chars: &[char]) -> bool {
    chars.windows(3).any(|w| {
        let [a, b, c] = [w[0], w[1], w[2]].map(|ch| ch.to_ascii_lowercase());

        if a.is_ascii_lowercase() && b.is_ascii_lowercase() && c.is_ascii_lowercase() {
            return step(a, b) == 1 && step(b, c) == 1;
        }

        if a.is_ascii_digit() && b.is_ascii_digit() && c.is_ascii_digit() {
            let (s1, s2) = (step(a, b), step(b, c));
            return s1 == s2 && s1.abs() == 1;
        }

        false
    })
}

fn step(from: char, to: char) -> i32 {
    to as i32 - from as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let report = evaluate_strength("");
        assert_eq!(report.score, 0);
        assert_eq!(report.label, StrengthLabel::NoPassword);
        assert_eq!(report.label.to_string(), "No password provided");
    }

    #[test]
    fn test_strong() {
        let report = evaluate_strength("Tr0ub4dor&3xyz");
        assert_eq!(report.score, 4);
        assert_eq!(report.label.to_string(), "Strong");
    }

    #[test]
    fn test_repeated_penalty() {
        let repeated = evaluate_strength("aaaaaaaaaaaa");
        let varied = evaluate_strength("qwfpgjluyxmz");
        assert_eq!(repeated.score, 2);
        assert_eq!(varied.score, 3);
        assert!(repeated.score < varied.score);
    }

    #[test]
    fn test_sequence_penalty() {
        // 8 chars (+1), lower + digit (+2), "789" (-1)
        assert_eq!(evaluate_strength("kqzw7890").score, 2);
        // same without the run
        assert_eq!(evaluate_strength("kqzw7290").score, 3);
    }

    #[test]
    fn test_sequences() {
        let seq = |s: &str| has_sequence(&s.chars().collect::<Vec<_>>());
        assert!(seq("abc"));
        assert!(seq("xXYZ"));
        assert!(seq("012"));
        assert!(seq("987"));
        assert!(seq("a321"));
        assert!(!seq("cba"));
        assert!(!seq("ab1"));
        assert!(!seq("135"));
        assert!(!seq("9ab"));
        assert!(!seq("yz0"));
    }

    #[test]
    fn test_repeats() {
        let rep = |s: &str| has_repeated_chars(&s.chars().collect::<Vec<_>>());
        assert!(rep("xaaay"));
        assert!(rep("!!!"));
        assert!(!rep("aabbaa"));
        assert!(!rep("ab"));
    }

    #[test]
    fn test_character_classes() {
        let count = |s: &str| character_class_count(&s.chars().collect::<Vec<_>>());
        assert_eq!(count("abc"), 1);
        assert_eq!(count("aB"), 2);
        assert_eq!(count("aB3"), 3);
        assert_eq!(count("aB3 "), 4);
        assert_eq!(count("é"), 1);
    }

    #[test]
    fn test_labels() {
        assert_eq!(evaluate_strength("a").label, StrengthLabel::Weak);
        assert_eq!(evaluate_strength("aaa").label, StrengthLabel::VeryWeak);
        assert_eq!(evaluate_strength("aA").label, StrengthLabel::Fair);
        assert_eq!(evaluate_strength("aA1").label, StrengthLabel::Good);
        assert_eq!(StrengthLabel::from_score(4).as_str(), "Strong");
    }

    #[test]
    fn test_report_serializes_display_label() {
        let json = serde_json::to_value(evaluate_strength("a")).unwrap();
        assert_eq!(json, serde_json::json!({ "score": 1, "label": "Weak" }));

        let json = serde_json::to_value(StrengthLabel::VeryWeak).unwrap();
        assert_eq!(json, "Very weak");
        let json = serde_json::to_value(StrengthLabel::NoPassword).unwrap();
        assert_eq!(json, "No password provided");
    }

    #[test]
    fn test_length_bonus() {
        // short, 8+, 12+ with a single class and no patterns
        assert_eq!(evaluate_strength("qwfp").score, 1);
        assert_eq!(evaluate_strength("qwfpgjlu").score, 2);
        assert_eq!(evaluate_strength("qwfpgjluyxmz").score, 3);
    }

    #[test]
    fn test_length_counts_characters() {
        // 8 multi-byte characters earn the 8+ bonus, not the 12+ one
        assert_eq!(evaluate_strength("ééééèèèè").score, 1);
        assert_eq!(evaluate_strength("éèéèéèéè").score, 2);
    }

    #[test]
    fn test_score_clamped() {
        let report = evaluate_strength("aaa");
        assert_eq!(report.score, 0);
        assert!(evaluate_strength("Zq9!Zq9!Zq9!Zq9!").score <= MAX_SCORE);
    }
}
