/// Fixed lead-in of every block reason.
pub const BLOCK_PREFIX: &str = "BLOCKED: ";

/// Fixed remediation appended to every block reason.
pub const REMEDIATION: &str =
    "Use 'git stash' to save changes before running destructive commands.";

/// The classifier's final output for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Let the host run the command.
    Continue,
    /// Stop the command; `reason` is shown to the caller.
    Block { reason: String },
}

impl Verdict {
    /// Build a block verdict from a rule explanation and the evaluated command.
    pub fn block(explanation: &str, command: &str) -> Self {
        Verdict::Block {
            reason: format!("{BLOCK_PREFIX}{explanation}\nCommand: {command}\n\n{REMEDIATION}"),
        }
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Verdict::Block { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Verdict::Continue => None,
            Verdict::Block { reason } => Some(reason),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Continue => "CONTINUE",
            Verdict::Block { .. } => "BLOCK",
        }
    }
}

/// Which table a matched rule came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTable {
    Safe,
    Destructive,
}

impl RuleTable {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleTable::Safe => "safe",
            RuleTable::Destructive => "destructive",
        }
    }
}

/// The rule that decided a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleHit {
    pub table: RuleTable,
    pub name: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_reason_layout() {
        let v = Verdict::block("explanation.", "git reset --hard");
        assert_eq!(
            v.reason(),
            Some(
                "BLOCKED: explanation.\nCommand: git reset --hard\n\n\
                 Use 'git stash' to save changes before running destructive commands."
            )
        );
        assert!(v.is_block());
        assert_eq!(v.label(), "BLOCK");
    }

    #[test]
    fn continue_has_no_reason() {
        assert_eq!(Verdict::Continue.reason(), None);
        assert!(!Verdict::Continue.is_block());
        assert_eq!(Verdict::Continue.label(), "CONTINUE");
    }
}
