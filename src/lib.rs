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
// A secure password generator written in Rust.

pub mod charset;
pub mod commands;
pub mod configtool;
pub mod entropy;
pub mod error;
pub mod export;
pub mod logging;
pub mod passgen;
pub mod setclip;
pub mod strength;

pub use charset::{CharacterClass, CharsetConfig};
pub use entropy::{IndexSource, RngIndexSource};
pub use error::PassGenError;
pub use passgen::{GeneratedPassword, GenerationRequest, Password, PasswordGenerator};
pub use strength::{StrengthAssessment, StrengthAssessor, StrengthLabel};
