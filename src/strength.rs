//  ____              _____
// |  _ \__      __   |  ___|__  _ __ __ _  ___
// | |_) \ \ /\ / /   | |_ / _ \| '__/ _` |/ _ \
// |  __/ \ V  V /    |  _| (_) | | | (_| |  __/
// |_|     \_/\_/     |_|  \___/|_|  \__, |\___|
//                                   |___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password strength assessment

use std::fmt;
use unicode_segmentation::UnicodeSegmentation;
use zxcvbn::zxcvbn;

use crate::charset::{CharsetConfig, is_ambiguous};

pub const SUGGEST_LENGTH: &str = "Increase length to at least 12 characters";
pub const SUGGEST_UPPERCASE: &str = "Add uppercase letters";
pub const SUGGEST_LOWERCASE: &str = "Add lowercase letters";
pub const SUGGEST_DIGIT: &str = "Add digits";
pub const SUGGEST_SPECIAL: &str = "Add special characters";
pub const SUGGEST_REPEATS: &str = "Avoid repeated characters";
pub const SUGGEST_SEQUENCES: &str = "Avoid sequential characters";

const DIGIT_RUN: &str = "1234567890";
const ALPHA_RUN: &str = "abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 6 => StrengthLabel::VeryStrong,
            s if s >= 4 => StrengthLabel::Strong,
            s if s >= 2 => StrengthLabel::Medium,
            _ => StrengthLabel::Weak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthAssessment {
    pub score: i32,
    pub label: StrengthLabel,
    pub suggestions: Vec<String>,
}

/// Heuristic scorer. Holds the special set it recognises, nothing else.
#[derive(Debug, Clone)]
pub struct StrengthAssessor {
    special: Vec<char>,
}

impl Default for StrengthAssessor {
    fn default() -> Self {
        Self::new(&CharsetConfig::default())
    }
}

impl StrengthAssessor {
    pub fn new(config: &CharsetConfig) -> Self {
        Self { special: config.special().to_vec() }
    }

    /// Score a password.
    ///
    /// Length bonus: +2 at 12 or more, +1 at 8 or more. One point each for
    /// uppercase, lowercase and digits, two for a character from the special
    /// set. Minus one for any run of three identical characters and minus one
    /// for any ascending run of three digits or letters.
    pub fn assess(&self, password: &str) -> StrengthAssessment {
        let mut score = 0;
        let mut suggestions = Vec::new();

        let length = password.graphemes(true).count();
        if length >= 12 {
            score += 2;
        } else if length >= 8 {
            score += 1;
        } else {
            suggestions.push(SUGGEST_LENGTH.to_string());
        }

        let checks: [(bool, i32, &str); 4] = [
            (password.chars().any(|c| c.is_ascii_uppercase()), 1, SUGGEST_UPPERCASE),
            (password.chars().any(|c| c.is_ascii_lowercase()), 1, SUGGEST_LOWERCASE),
            (password.chars().any(|c| c.is_ascii_digit()), 1, SUGGEST_DIGIT),
            (password.chars().any(|c| self.special.contains(&c)), 2, SUGGEST_SPECIAL),
        ];
        for (present, points, suggestion) in checks {
            if present {
                score += points;
            } else {
                suggestions.push(suggestion.to_string());
            }
        }

        if has_repeated_run(password) {
            score -= 1;
            suggestions.push(SUGGEST_REPEATS.to_string());
        }
        if has_sequential_run(password) {
            score -= 1;
            suggestions.push(SUGGEST_SEQUENCES.to_string());
        }

        StrengthAssessment {
            score,
            label: StrengthLabel::from_score(score),
            suggestions,
        }
    }
}

/// Three or more identical characters in a row.
pub fn has_repeated_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

/// Ascending run of three: `123` .. `890`, or `abc` .. `xyz` in either case.
pub fn has_sequential_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().map(|c| c.to_ascii_lowercase()).collect();
    chars.windows(3).any(|w| {
        let triple: String = w.iter().collect();
        (w.iter().all(|c| c.is_ascii_digit()) && DIGIT_RUN.contains(&triple))
            || (w.iter().all(|c| c.is_ascii_lowercase()) && ALPHA_RUN.contains(&triple))
    })
}

pub fn check_url_safe(password: &str) -> bool {
    password.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
}

pub fn check_confusing_chars(password: &str) -> Vec<char> {
    password.chars().filter(|c| is_ambiguous(*c)).collect()
}

// zxcvbn 估算结果
#[derive(Debug, Clone)]
pub struct GuessEstimate {
    pub score: u8,
    pub guesses_log10: f64,
    pub crack_time: String,
    pub suggestions: Vec<String>,
}

/// Guessability estimate from zxcvbn, reported next to the heuristic score.
pub fn estimate_guessability(password: &str) -> GuessEstimate {
    let result = zxcvbn(password, &[]);
    let suggestions = result.feedback().map_or_else(
        Vec::new,
        |f| f.suggestions().iter().map(|s| s.to_string()).collect(),
    );
    GuessEstimate {
        score: u8::from(result.score()),
        guesses_log10: result.guesses_log10(),
        crack_time: result.crack_times().offline_slow_hashing_1e4_per_second().to_string(),
        suggestions,
    }
}
