use crate::parse::{self, ShellWrapper};

/// Context for classifying a single command string.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext<'a> {
    /// The command exactly as received in `tool_input.command`.
    pub raw: &'a str,
    /// The `<shell> -c "..."` wrapper that was peeled off, if any.
    pub wrapper: Option<ShellWrapper<'a>>,
    /// The text the rule tables are matched against.
    pub command: &'a str,
}

impl<'a> CommandContext<'a> {
    /// Build a context from raw command text, unwrapping one shell wrapper.
    ///
    /// `command` is the wrapper payload when there is one, else `raw`.
    pub fn from_command(raw: &'a str) -> Self {
        let wrapper = parse::unwrap_shell(raw);
        let command = wrapper.map_or(raw, |w| w.payload);
        Self {
            raw,
            wrapper,
            command,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_command() {
        let ctx = CommandContext::from_command("git status");
        assert_eq!(ctx.command, "git status");
        assert_eq!(ctx.wrapper, None);
    }

    #[test]
    fn wrapped_command() {
        let ctx = CommandContext::from_command(r#"bash -c "git stash clear""#);
        assert_eq!(ctx.raw, r#"bash -c "git stash clear""#);
        assert_eq!(ctx.command, "git stash clear");
        assert_eq!(ctx.wrapper.map(|w| w.interpreter), Some("bash"));
    }

    #[test]
    fn nested_wrapper_peeled_once() {
        let ctx = CommandContext::from_command(r#"sh -c "bash -c 'git reset --hard'""#);
        assert_eq!(ctx.command, "bash -c ");
    }

    #[test]
    fn unquoted_wrapper_kept_whole() {
        let ctx = CommandContext::from_command("bash -c ls");
        assert_eq!(ctx.command, "bash -c ls");
        assert_eq!(ctx.wrapper, None);
    }
}
