//! git-safety-guard: PreToolUse hook for Claude Code.
//!
//! Reads one JSON request from stdin and writes exactly one JSON verdict
//! to stdout: `{"continue":true}` or `{"decision":"block","reason":...}`.
//! Always exits 0; anything it cannot read or decode is allowed through.

use std::io::Read;

use git_safety_guard::config::Config;
use git_safety_guard::eval::Verdict;
use git_safety_guard::{handle_input, hook, logging};

fn main() {
    let config = Config::load();
    logging::init(&config.logging);

    let mut input = String::new();
    let verdict = match std::io::stdin().read_to_string(&mut input) {
        Ok(_) => handle_input(&input),
        Err(e) => {
            log::warn!("failed to read stdin, continuing: {e}");
            Verdict::Continue
        }
    };

    println!("{}", hook::render(&verdict));
}
