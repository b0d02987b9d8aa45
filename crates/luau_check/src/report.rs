use std::fmt;

pub const DEFAULT_LABEL: &str = "script";

/// One advisory message about a suspected structural problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    message: String,
}

impl Finding {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of one check. `ok` is true exactly when `findings` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub label: String,
    pub ok: bool,
    pub findings: Vec<Finding>,
}

impl CheckReport {
    #[must_use]
    pub fn new(label: impl Into<String>, findings: Vec<Finding>) -> Self {
        Self {
            label: label.into(),
            ok: findings.is_empty(),
            findings,
        }
    }

    /// Plain-text summary handed back to the agent as the tool result.
    #[must_use]
    pub fn render(&self) -> String {
        if self.findings.is_empty() {
            return format!(
                "{}: Looks good! No syntax issues found. Ready to paste into Roblox Studio.",
                self.label
            );
        }

        let count = self.findings.len();
        let plural = if count > 1 { "s" } else { "" };
        let numbered = self
            .findings
            .iter()
            .enumerate()
            .map(|(index, finding)| format!("{}. {finding}", index + 1))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "{}: Found {count} potential issue{plural}. Easy fixes!\n\n{numbered}",
            self.label
        )
    }
}
