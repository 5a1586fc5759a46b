use anyhow::Result;
use clap::Args;
use std::io::Write;

use crate::strength::{self, StrengthAssessor};

#[derive(Debug, Clone, Default, Args)]
pub struct TestpassArgs {
    /// Password to test (prompted without echo when omitted)
    pub password: Option<String>,

    /// Check if password is URL-safe
    #[arg(short = 's', long, default_value_t = false)]
    pub check_url_safe: bool,

    /// Check for visually confusing characters
    #[arg(short = 'c', long, default_value_t = false)]
    pub check_confusion: bool,
}

pub fn test_password<W: Write>(
    password: &str,
    args: &TestpassArgs,
    assessor: &StrengthAssessor,
    out: &mut W,
) -> Result<()> {
    let assessment = assessor.assess(password);
    writeln!(out, "Password strength: {} (score: {})", assessment.label, assessment.score)?;
    if !assessment.suggestions.is_empty() {
        writeln!(out, "Suggestions: {}", assessment.suggestions.join("; "))?;
    }

    let estimate = strength::estimate_guessability(password);
    writeln!(
        out,
        "zxcvbn: {}/4, ~10^{:.1} guesses, offline crack time {}",
        estimate.score, estimate.guesses_log10, estimate.crack_time
    )?;
    if !estimate.suggestions.is_empty() {
        writeln!(out, "zxcvbn suggestions: {}", estimate.suggestions.join(" "))?;
    }

    if args.check_url_safe {
        let is_safe = strength::check_url_safe(password);
        writeln!(out, "URL-safe: {}", if is_safe { "Yes" } else { "No" })?;
    }

    if args.check_confusion {
        let confusing = strength::check_confusing_chars(password);
        if !confusing.is_empty() {
            writeln!(out, "Potentially confusing characters: {:?}", confusing)?;
        } else {
            writeln!(out, "No confusing characters detected")?;
        }
    }
    Ok(())
}
