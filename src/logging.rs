use std::fs::OpenOptions;
use std::str::FromStr;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::config::LoggingConfig;
use crate::eval::Classification;

/// Longest command prefix written to the decision log.
const MAX_LOGGED_COMMAND: usize = 200;

/// Install a file logger per `config`.
///
/// Best-effort: a missing HOME, an unwritable directory or an already
/// installed logger leaves logging disabled. Never writes to stdout, which
/// carries the verdict.
pub fn init(config: &LoggingConfig) -> bool {
    if !config.enabled {
        return false;
    }
    let level = LevelFilter::from_str(&config.level).unwrap_or(LevelFilter::Info);
    if level == LevelFilter::Off {
        return false;
    }

    let path = config.file_path();
    if let Some(dir) = path.parent() {
        let _ = std::fs::create_dir_all(dir);
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return false;
    };

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    WriteLogger::init(level, log_config, file).is_ok()
}

/// Record one classified shell command at info level.
pub fn log_decision(result: &Classification) {
    log::info!("{}", decision_line(result));
}

/// `VERDICT<TAB>table:rule<TAB>command<TAB>reason`, all on one line.
fn decision_line(result: &Classification) -> String {
    let rule = result
        .matched
        .map(|hit| format!("{}:{}", hit.table.as_str(), hit.name))
        .unwrap_or_else(|| "-".into());
    let cmd: String = result
        .context
        .raw
        .chars()
        .take(MAX_LOGGED_COMMAND)
        .collect::<String>()
        .replace('\n', "\\n");
    // Compact single-line reason (replace newlines with "; ")
    let reason = result
        .verdict
        .reason()
        .map(|r| r.split('\n').filter(|s| !s.is_empty()).collect::<Vec<_>>().join("; "))
        .unwrap_or_default();
    let mut line = format!("{}\t{rule}\t{cmd}\t{reason}", result.verdict.label());
    if let Some(w) = result.context.wrapper {
        line.push_str(&format!("\t(unwrapped {} -c)", w.interpreter));
    }
    line
}
