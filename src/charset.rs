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
// Character classes and universe builder

use std::fmt;
use log::debug;

use crate::error::PassGenError;

pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGIT_CHARS: &str = "0123456789";
pub const DEFAULT_SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?~";
pub const URL_SAFE_SPECIAL_CHARS: &str = "-._~";

/// 容易混淆的字符
pub const AMBIGUOUS_CHARS: [char; 5] = ['0', 'O', 'l', 'I', '1'];

pub fn is_ambiguous(c: char) -> bool {
    AMBIGUOUS_CHARS.contains(&c)
}

// 字符类别，顺序即生成时的遍历顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digit => "digit",
            CharacterClass::Special => "special",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable character tables handed to the generator and the assessor.
///
/// Built once from configuration; nothing in the crate keeps process-wide
/// character tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharsetConfig {
    uppercase: Vec<char>,
    lowercase: Vec<char>,
    digits: Vec<char>,
    special: Vec<char>,
}

impl Default for CharsetConfig {
    fn default() -> Self {
        Self::from_special(DEFAULT_SPECIAL_CHARS.chars().collect())
    }
}

impl CharsetConfig {
    /// URL-safe special set (`-._~`)
    pub fn url_safe() -> Self {
        Self::from_special(URL_SAFE_SPECIAL_CHARS.chars().collect())
    }

    /// Replace the special set with a caller-supplied string.
    ///
    /// Only printable ASCII punctuation is accepted. Duplicates are dropped and
    /// the first-seen order is kept. An empty string gives an empty special class.
    pub fn with_custom_special(special: &str) -> Result<Self, PassGenError> {
        let mut chars = Vec::with_capacity(special.len());
        for c in special.chars() {
            if !c.is_ascii_punctuation() {
                return Err(PassGenError::configuration(format!(
                    "Invalid special character {:?}: only printable ASCII punctuation is allowed",
                    c
                )));
            }
            if !chars.contains(&c) {
                chars.push(c);
            }
        }
        Ok(Self::from_special(chars))
    }

    fn from_special(special: Vec<char>) -> Self {
        Self {
            uppercase: UPPERCASE_CHARS.chars().collect(),
            lowercase: LOWERCASE_CHARS.chars().collect(),
            digits: DIGIT_CHARS.chars().collect(),
            special,
        }
    }

    pub fn members(&self, class: CharacterClass) -> &[char] {
        match class {
            CharacterClass::Uppercase => &self.uppercase,
            CharacterClass::Lowercase => &self.lowercase,
            CharacterClass::Digit => &self.digits,
            CharacterClass::Special => &self.special,
        }
    }

    pub fn special(&self) -> &[char] {
        &self.special
    }
}

/// 字符池：全部可用字符 + 每个类别各自的字符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterUniverse {
    universe: Vec<char>,
    classes: Vec<(CharacterClass, Vec<char>)>,
}

impl CharacterUniverse {
    /// Concatenation of every enabled class, ambiguous characters removed.
    pub fn chars(&self) -> &[char] {
        &self.universe
    }

    /// Enabled classes in canonical order, each already stripped. May contain
    /// empty entries when stripping or a custom special set emptied a class.
    pub fn classes(&self) -> &[(CharacterClass, Vec<char>)] {
        &self.classes
    }

    /// Classes that must each contribute a character when all are required.
    pub fn required_classes(&self) -> impl Iterator<Item = &(CharacterClass, Vec<char>)> {
        self.classes.iter().filter(|(_, members)| !members.is_empty())
    }

    pub fn required_count(&self) -> usize {
        self.required_classes().count()
    }
}

/// Build the character universe for a set of enabled classes.
///
/// Enabled classes are visited in [`CharacterClass::ALL`] order regardless of
/// the order they were passed in; duplicates collapse.
pub fn build_universe(
    config: &CharsetConfig,
    enabled: &[CharacterClass],
    exclude_ambiguous: bool,
) -> Result<CharacterUniverse, PassGenError> {
    if enabled.is_empty() {
        return Err(PassGenError::configuration(
            "At least one character class must be enabled",
        ));
    }

    let mut universe = Vec::new();
    let mut classes = Vec::new();
    for class in CharacterClass::ALL.into_iter().filter(|c| enabled.contains(c)) {
        let members: Vec<char> = config
            .members(class)
            .iter()
            .copied()
            .filter(|c| !(exclude_ambiguous && is_ambiguous(*c)))
            .collect();
        universe.extend_from_slice(&members);
        classes.push((class, members));
    }

    if universe.is_empty() {
        return Err(PassGenError::configuration(
            "Character pool is empty after removing ambiguous characters",
        ));
    }

    debug!(
        "character universe built: {} classes, {} characters (exclude_ambiguous={})",
        classes.len(),
        universe.len(),
        exclude_ambiguous
    );

    Ok(CharacterUniverse { universe, classes })
}
