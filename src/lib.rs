//! git-safety-guard: a PreToolUse hook for Claude Code that blocks
//! destructive git and `rm` commands.
//!
//! Each invocation classifies one Bash command against two fixed tables:
//! safe overrides are checked first and always let the command through,
//! then destructive rules block on the first match. Anything else, including
//! input that cannot be decoded, continues.
//!
//! # Architecture
//!
//! - **[`hook`]** — Wire format: request decoding, verdict encoding.
//! - **[`parse`]** — Command extraction: one level of `<shell> -c "..."` unwrapping.
//! - **[`rules`]** — The safe-override and destructive rule tables.
//! - **[`eval`]** — Classifier pipeline and verdict types.
//! - **[`config`]** — Configuration loading: embedded defaults + user overlay merge.
//! - **[`logging`]** — Decision logging to `~/.local/share/git-safety-guard/decisions.log`.

/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Classifier pipeline, per-command context, verdicts.
pub mod eval;
/// Hook request and response encoding.
pub mod hook;
/// File-based decision logging.
pub mod logging;
/// Shell-wrapper unwrapping.
pub mod parse;
/// Static safe-override and destructive rule tables.
pub mod rules;

use eval::{Classifier, Verdict};

/// Classify a single command string.
///
/// This is the main entry point for tests and simple usage.
pub fn evaluate(command: &str) -> Verdict {
    Classifier::new().classify(command).verdict
}

/// Run the whole hook pipeline on raw request text.
///
/// Malformed input fails open: it yields [`Verdict::Continue`], never an error.
pub fn handle_input(text: &str) -> Verdict {
    match hook::parse_input(text) {
        Ok(input) => Classifier::new().evaluate(&input),
        Err(e) => {
            log::debug!("unparseable hook input, continuing: {e}");
            Verdict::Continue
        }
    }
}
