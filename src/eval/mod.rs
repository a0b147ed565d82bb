pub mod context;
pub mod decision;

pub use context::CommandContext;
pub use decision::{BLOCK_PREFIX, REMEDIATION, RuleHit, RuleTable, Verdict};

use crate::hook::HookInput;
use crate::logging;
use crate::rules::{self, Rule};

/// Outcome of classifying one command, with enough detail to log it.
#[derive(Debug, Clone)]
pub struct Classification<'a> {
    pub context: CommandContext<'a>,
    pub verdict: Verdict,
    /// The safe or destructive rule that decided the verdict, if any.
    pub matched: Option<RuleHit>,
}

/// The command classifier: safe overrides first, then destructive rules.
///
/// Stateless; the rule tables are process-wide statics.
#[derive(Debug, Default, Clone, Copy)]
pub struct Classifier;

impl Classifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a command string, unwrapping one `<shell> -c "..."` layer.
    pub fn classify<'a>(&self, raw: &'a str) -> Classification<'a> {
        let context = CommandContext::from_command(raw);

        if let Some(rule) = rules::first_safe_match(context.command) {
            return Classification {
                context,
                verdict: Verdict::Continue,
                matched: Some(RuleHit {
                    table: RuleTable::Safe,
                    name: rule.name(),
                }),
            };
        }

        if let Some(rule) = rules::first_destructive_match(context.command) {
            return Classification {
                verdict: Verdict::block(rule.reason, context.command),
                context,
                matched: Some(RuleHit {
                    table: RuleTable::Destructive,
                    name: rule.name(),
                }),
            };
        }

        Classification {
            context,
            verdict: Verdict::Continue,
            matched: None,
        }
    }

    /// Evaluate a decoded hook request.
    ///
    /// Only the shell tool is classified; every other tool continues
    /// without inspection. Shell classifications are logged.
    pub fn evaluate(&self, input: &HookInput) -> Verdict {
        if !input.is_shell_tool() {
            log::debug!(
                "skipping tool {}",
                input.tool_name.as_deref().unwrap_or("<none>")
            );
            return Verdict::Continue;
        }

        let result = self.classify(input.command());
        logging::log_decision(&result);
        result.verdict
    }
}
