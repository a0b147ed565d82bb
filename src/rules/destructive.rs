use std::sync::LazyLock;

use fancy_regex::Regex;

use super::{Rule, first_match, search};

/// A command shape that causes irreversible data loss.
pub struct DestructiveRule {
    name: &'static str,
    regex: Regex,
    /// Human-readable explanation shown in the block reason.
    pub reason: &'static str,
}

impl Rule for DestructiveRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn matches(&self, command: &str) -> bool {
        search(self.name, &self.regex, command)
    }
}

macro_rules! destructive {
    ($name:literal, $re:literal, $reason:literal) => {
        DestructiveRule {
            name: $name,
            regex: Regex::new(concat!("(?i)", $re))
                .expect(concat!("destructive rule '", $name, "' should compile")),
            reason: $reason,
        }
    };
}

static DESTRUCTIVE_RULES: LazyLock<Vec<DestructiveRule>> = LazyLock::new(|| {
    vec![
        destructive!(
            "reset-hard",
            r"git\s+reset\s+.*--hard",
            r#"git reset --hard destroys uncommitted changes. Use "git stash" first."#
        ),
        destructive!(
            "checkout-discard-path",
            r"git\s+checkout\s+--\s+",
            r#"git checkout -- discards uncommitted changes. Use "git stash" first."#
        ),
        destructive!(
            "checkout-discard-all",
            r"git\s+checkout\s+\.\s*$",
            r#"git checkout . discards all uncommitted changes. Use "git stash" first."#
        ),
        destructive!(
            "restore-worktree",
            r"git\s+restore\s+(?!.*--staged).*\S",
            r#"git restore discards uncommitted changes. Use --staged or "git stash" first."#
        ),
        // Any short-flag cluster containing f: -f, -fd, -xdf
        destructive!(
            "clean-force",
            r"git\s+clean\s+.*-[a-zA-Z]*f",
            "git clean -f permanently removes untracked files. Use --dry-run first."
        ),
        destructive!(
            "push-force",
            r"git\s+push\s+.*(-f|--force)",
            "git push --force overwrites remote history. This is dangerous."
        ),
        destructive!(
            "branch-force-delete",
            r"git\s+branch\s+.*-D",
            "git branch -D force deletes a branch. Use -d for safe deletion."
        ),
        destructive!(
            "stash-drop-clear",
            r"git\s+stash\s+(drop|clear)",
            "git stash drop/clear permanently removes stashed changes."
        ),
        destructive!(
            "rebase-main",
            r"git\s+rebase\s+.*(main|master)",
            "Rebasing onto main/master can be destructive. Be careful."
        ),
        // /tmp and /var/tmp are exempt; relative and $TMPDIR paths are not
        destructive!(
            "rm-recursive-force",
            r"rm\s+(-rf|-fr|--recursive\s+--force)\s+(?!/tmp)(?!/var/tmp)\.?/",
            "rm -rf can permanently delete important files."
        ),
    ]
});

/// The destructive table, in evaluation order.
pub fn destructive_rules() -> &'static [DestructiveRule] {
    &DESTRUCTIVE_RULES
}

/// First destructive rule that matches `command`; table order breaks ties.
pub fn first_destructive_match(command: &str) -> Option<&'static DestructiveRule> {
    first_match(destructive_rules(), command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(cmd: &str) -> Option<&'static str> {
        first_destructive_match(cmd).map(|r| r.name())
    }

    #[test]
    fn table_has_ten_rules_with_reasons() {
        assert_eq!(destructive_rules().len(), 10);
        assert!(destructive_rules().iter().all(|r| !r.reason.is_empty()));
    }

    #[test]
    fn reset_hard() {
        assert_eq!(hit("git reset --hard"), Some("reset-hard"));
        assert_eq!(hit("git reset HEAD~2 --hard"), Some("reset-hard"));
    }

    #[test]
    fn checkout_discard_path() {
        assert_eq!(hit("git checkout -- src/main.rs"), Some("checkout-discard-path"));
    }

    #[test]
    fn checkout_discard_all() {
        assert_eq!(hit("git checkout ."), Some("checkout-discard-all"));
        assert_eq!(hit("git checkout .  "), Some("checkout-discard-all"));
    }

    #[test]
    fn checkout_dot_prefix_is_not_discard_all() {
        assert_eq!(hit("git checkout ./src"), None);
    }

    #[test]
    fn restore_worktree() {
        assert_eq!(hit("git restore src/lib.rs"), Some("restore-worktree"));
        assert_eq!(hit("git restore ."), Some("restore-worktree"));
    }

    #[test]
    fn restore_staged_not_destructive() {
        assert_eq!(hit("git restore --staged src/lib.rs"), None);
        assert_eq!(hit("git restore src/lib.rs --staged"), None);
    }

    #[test]
    fn clean_force() {
        assert_eq!(hit("git clean -f"), Some("clean-force"));
        assert_eq!(hit("git clean -fd"), Some("clean-force"));
        assert_eq!(hit("git clean -xdf"), Some("clean-force"));
        assert_eq!(hit("git clean -d -f"), Some("clean-force"));
    }

    #[test]
    fn push_force() {
        assert_eq!(hit("git push --force origin main"), Some("push-force"));
        assert_eq!(hit("git push origin main -f"), Some("push-force"));
    }

    #[test]
    fn plain_push_not_destructive() {
        assert_eq!(hit("git push origin main"), None);
    }

    #[test]
    fn branch_force_delete() {
        assert_eq!(hit("git branch -D feature-x"), Some("branch-force-delete"));
    }

    #[test]
    fn stash_drop_clear() {
        assert_eq!(hit("git stash drop"), Some("stash-drop-clear"));
        assert_eq!(hit("git stash clear"), Some("stash-drop-clear"));
    }

    #[test]
    fn rebase_main() {
        assert_eq!(hit("git rebase main"), Some("rebase-main"));
        assert_eq!(hit("git rebase origin/master"), Some("rebase-main"));
    }

    #[test]
    fn rebase_other_branch_not_destructive() {
        assert_eq!(hit("git rebase develop"), None);
    }

    #[test]
    fn rm_recursive_force() {
        assert_eq!(hit("rm -rf ./build"), Some("rm-recursive-force"));
        assert_eq!(hit("rm -fr /home/user/project"), Some("rm-recursive-force"));
        assert_eq!(hit("rm --recursive --force /opt/app"), Some("rm-recursive-force"));
        assert_eq!(hit("rm -rf /"), Some("rm-recursive-force"));
    }

    #[test]
    fn rm_temp_paths_exempt() {
        assert_eq!(hit("rm -rf /tmp/build"), None);
        assert_eq!(hit("rm -rf /var/tmp/cache"), None);
    }

    #[test]
    fn rm_without_slash_not_matched() {
        assert_eq!(hit("rm -rf build"), None);
        assert_eq!(hit("rm -r ./build"), None);
    }

    #[test]
    fn first_match_wins() {
        // Matches both reset-hard and push-force; reset-hard is listed first.
        assert_eq!(
            hit("git reset --hard && git push --force"),
            Some("reset-hard")
        );
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(hit("GIT RESET --HARD"), Some("reset-hard"));
        assert_eq!(hit("RM -RF ./build"), Some("rm-recursive-force"));
    }

    #[test]
    fn read_only_commands() {
        assert_eq!(hit("git status"), None);
        assert_eq!(hit("git log --oneline"), None);
        assert_eq!(hit("ls -la"), None);
    }
}
