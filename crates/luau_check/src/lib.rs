//! Heuristic Luau syntax pre-check.
//!
//! This crate does not parse Luau. It counts delimiters and block keywords and
//! scans for a fixed list of typos so that obvious mistakes are caught before a
//! script is pasted into Roblox Studio. Every result is advisory.
//!
//! Known imprecision, kept on purpose so findings stay stable:
//! - delimiters are counted, not matched, so `)(` passes when counts agree;
//! - `for ... do` and `while ... do` count as two block openers against one
//!   `end`;
//! - string escapes and long strings (`[[ ... ]]`) are not understood.

mod balance;
mod patterns;
mod report;
mod strip;

pub use report::{CheckReport, Finding, DEFAULT_LABEL};
pub use strip::strip_comments_and_strings;

/// Input accepted by the checker. `code` may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyntaxCheckInput {
    pub code: String,
    pub label: Option<String>,
}

impl SyntaxCheckInput {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn check(&self) -> CheckReport {
        check(&self.code, self.label.as_deref())
    }
}

/// Runs every check over `code` and returns the findings in a fixed order:
/// delimiters, block openers vs `end`, `repeat` vs `until`, then typo patterns.
#[must_use]
pub fn check(code: &str, label: Option<&str>) -> CheckReport {
    let mut findings = balance::delimiter_findings(code);

    let stripped = strip_comments_and_strings(code);
    findings.extend(balance::block_findings(&stripped));
    findings.extend(patterns::pattern_findings(code));

    CheckReport::new(label.unwrap_or(DEFAULT_LABEL), findings)
}
