use std::sync::LazyLock;

use fancy_regex::Regex;

use super::{Rule, first_match, search};

/// A pattern that forces "continue" regardless of destructive matches.
pub struct SafeRule {
    name: &'static str,
    regex: Regex,
}

impl Rule for SafeRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn matches(&self, command: &str) -> bool {
        search(self.name, &self.regex, command)
    }
}

macro_rules! safe {
    ($name:literal, $re:literal) => {
        SafeRule {
            name: $name,
            regex: Regex::new(concat!("(?i)", $re))
                .expect(concat!("safe rule '", $name, "' should compile")),
        }
    };
}

static SAFE_RULES: LazyLock<Vec<SafeRule>> = LazyLock::new(|| {
    vec![
        safe!("checkout-new-branch", r"git\s+checkout\s+-b"),
        // Target starts with a letter, so never `--` or `.`
        safe!("checkout-switch-branch", r"git\s+checkout\s+[a-zA-Z]"),
        safe!("clean-dry-run-long", r"git\s+clean\s+.*--dry-run"),
        safe!("clean-dry-run-short", r"git\s+clean\s+.*-n"),
        safe!("restore-staged", r"git\s+restore\s+--staged"),
        safe!("reset-without-hard", r"git\s+reset\s+(?!.*--hard)"),
        safe!("stash-non-destructive", r"git\s+stash\s+(?!drop|clear)"),
    ]
});

/// The safe-override table, in evaluation order.
pub fn safe_rules() -> &'static [SafeRule] {
    &SAFE_RULES
}

/// First safe-override rule that matches `command`, if any.
pub fn first_safe_match(command: &str) -> Option<&'static SafeRule> {
    first_match(safe_rules(), command)
}
