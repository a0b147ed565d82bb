//! Static rule tables: safe overrides and destructive patterns.
//!
//! Both tables are compiled once on first use and never mutated. Every
//! pattern is matched case-insensitively anywhere in the command text
//! (search, not full-string match). Several patterns need lookahead, so
//! they are compiled with `fancy_regex` rather than `regex`.

/// Destructive command patterns; the first match blocks the command.
pub mod destructive;
/// Benign shapes that would otherwise trip a destructive pattern.
pub mod safe;

use fancy_regex::Regex;

pub use destructive::{DestructiveRule, destructive_rules, first_destructive_match};
pub use safe::{SafeRule, first_safe_match, safe_rules};

/// A named pattern in one of the rule tables.
pub trait Rule: Send + Sync {
    /// Stable identifier used in the decision log.
    fn name(&self) -> &'static str;

    /// Whether the pattern occurs anywhere in `command`.
    fn matches(&self, command: &str) -> bool;
}

/// Return the first rule in `table` order that matches `command`.
pub fn first_match<'a, R: Rule>(table: &'a [R], command: &str) -> Option<&'a R> {
    table.iter().find(|rule| rule.matches(command))
}

/// Run `regex` against `command`, treating a runtime error as no match.
///
/// fancy_regex can give up on pathological input (backtrack limit); the
/// guard fails open in that case.
fn search(name: &str, regex: &Regex, command: &str) -> bool {
    match regex.is_match(command) {
        Ok(matched) => matched,
        Err(e) => {
            log::warn!("rule {name} could not be evaluated: {e}");
            false
        }
    }
}
