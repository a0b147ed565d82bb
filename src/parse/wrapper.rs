use std::sync::LazyLock;

use fancy_regex::Regex;

use super::types::ShellWrapper;

/// `bash|sh|zsh`, `-c`, then the shortest quoted argument.
///
/// The payload stops at the first quote of either kind, so a nested
/// wrapper like `sh -c "bash -c '...'"` yields `bash -c ` and is not
/// unwrapped any further.
static SHELL_WRAPPER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(bash|sh|zsh)\s+-c\s+["'](.+?)["']"#)
        .expect("shell wrapper pattern should compile")
});

/// Find the first `<shell> -c "<payload>"` invocation anywhere in `command`.
pub fn unwrap_shell(command: &str) -> Option<ShellWrapper<'_>> {
    let caps = match SHELL_WRAPPER.captures(command) {
        Ok(caps) => caps?,
        Err(e) => {
            log::warn!("shell wrapper match failed: {e}");
            return None;
        }
    };
    let interpreter = caps.get(1)?.as_str();
    let payload = caps.get(2)?.as_str();
    Some(ShellWrapper {
        interpreter,
        payload,
    })
}
