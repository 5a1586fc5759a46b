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
// Password generator

use std::fmt;
use log::debug;

use crate::charset::{CharacterClass, CharacterUniverse, CharsetConfig, build_universe};
use crate::entropy::IndexSource;
use crate::error::PassGenError;
use crate::strength::{StrengthAssessment, StrengthAssessor};

pub const MAX_PASSWORD_LENGTH: usize = 1024;

// 密码生成请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: Vec<CharacterClass>,
    pub exclude_ambiguous: bool,
    pub require_all: bool,
    pub count: usize,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: 16,
            classes: CharacterClass::ALL.to_vec(),
            exclude_ambiguous: false,
            require_all: true,
            count: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPassword {
    pub password: Password,
    pub assessment: StrengthAssessment,
}

/// In-place Fisher–Yates shuffle driven by an [`IndexSource`].
///
/// Only swaps, so the multiset of elements is unchanged.
pub fn shuffle<T, S: IndexSource>(items: &mut [T], source: &mut S) -> Result<(), PassGenError> {
    for i in (1..items.len()).rev() {
        let j = source.next_index(i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}

pub struct PasswordGenerator {
    config: CharsetConfig,
    assessor: StrengthAssessor,
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new(CharsetConfig::default())
    }
}

impl PasswordGenerator {
    pub fn new(config: CharsetConfig) -> Self {
        let assessor = StrengthAssessor::new(&config);
        Self { config, assessor }
    }

    pub fn assessor(&self) -> &StrengthAssessor {
        &self.assessor
    }

    /// Check every constraint of a request and build its universe.
    pub fn prepare(&self, request: &GenerationRequest) -> Result<CharacterUniverse, PassGenError> {
        if request.length == 0 || request.length > MAX_PASSWORD_LENGTH {
            return Err(PassGenError::configuration(format!(
                "Password length must be between 1 and {}",
                MAX_PASSWORD_LENGTH
            )));
        }
        let universe = build_universe(&self.config, &request.classes, request.exclude_ambiguous)?;
        if request.require_all && request.length < universe.required_count() {
            return Err(PassGenError::configuration(format!(
                "Password length must be at least {} to include all required character sets",
                universe.required_count()
            )));
        }
        Ok(universe)
    }

    /// Generate a single password.
    pub fn generate<S: IndexSource>(
        &self,
        request: &GenerationRequest,
        source: &mut S,
    ) -> Result<Password, PassGenError> {
        let universe = self.prepare(request)?;
        generate_from_universe(&universe, request, source)
    }

    /// Generate `request.count` passwords, each with its assessment.
    ///
    /// Constraints are checked before the first draw; any failure discards the
    /// whole batch.
    pub fn generate_batch<S: IndexSource>(
        &self,
        request: &GenerationRequest,
        source: &mut S,
    ) -> Result<Vec<GeneratedPassword>, PassGenError> {
        let universe = self.prepare(request)?;
        let mut batch = Vec::with_capacity(request.count);
        for _ in 0..request.count {
            let password = generate_from_universe(&universe, request, source)?;
            let assessment = self.assessor.assess(password.as_str());
            batch.push(GeneratedPassword { password, assessment });
        }
        debug!("generated batch of {} passwords (length {})", batch.len(), request.length);
        Ok(batch)
    }
}

/// Core algorithm over an already validated universe.
///
/// One draw per required class in class order, the rest from the whole
/// universe with replacement, then a shuffle of the result.
fn generate_from_universe<S: IndexSource>(
    universe: &CharacterUniverse,
    request: &GenerationRequest,
    source: &mut S,
) -> Result<Password, PassGenError> {
    let mut password_chars = Vec::with_capacity(request.length);

    if request.require_all {
        for (_, members) in universe.required_classes() {
            password_chars.push(members[source.next_index(members.len())?]);
        }
    }

    let pool = universe.chars();
    while password_chars.len() < request.length {
        password_chars.push(pool[source.next_index(pool.len())?]);
    }

    shuffle(&mut password_chars, source)?;

    Ok(Password(password_chars.into_iter().collect()))
}
