use crate::{CliError, Result as CliErrorResult};

use std::fmt::{self, Display};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Install the global logger.
///
/// `log_file` of `None` logs to stdout; `colored` is ignored for files.
#[track_caller]
pub fn initialize(
    level_filter: LevelFilter,
    log_file: Option<PathBuf>,
    colored: bool,
) -> CliErrorResult<()> {
    let dispatch = match log_file {
        Some(ref log_path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
                .map_err(|e| {
                    CliError::logger(format!(
                        "Failed to open log file {}: {e}",
                        log_path.display()
                    ))
                })?;
            Dispatch::new().format(formatter(None)).chain(file)
        }
        None => {
            let colors = colored.then(level_colors);
            Dispatch::new()
                .format(formatter(colors))
                .chain(std::io::stdout())
        }
    };

    Dispatch::new()
        .level(level_filter)
        .chain(dispatch)
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={level_filter:?}, file={}",
            path.display()
        ),
        None => info!("Logger initialized: level={level_filter:?}, stdout"),
    }

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

fn formatter(
    colors: Option<ColoredLevelConfig>,
) -> impl Fn(FormatCallback<'_>, &fmt::Arguments<'_>, &Record<'_>) + Send + Sync + 'static {
    move |out, message, record| {
        let line = match &colors {
            Some(colors) => render(
                SystemTime::now(),
                colors.color(record.level()),
                message,
                record.file(),
                record.line(),
            ),
            None => render(
                SystemTime::now(),
                record.level(),
                message,
                record.file(),
                record.line(),
            ),
        };
        out.finish(format_args!("{line}"));
    }
}

/// `[<rfc3339> - LEVEL] message [file:line]`
pub(crate) fn render(
    now: SystemTime,
    level: impl Display,
    message: impl Display,
    file: Option<&str>,
    line: Option<u32>,
) -> String {
    format!(
        "[{} - {level}] {message} [{}:{}]",
        humantime::format_rfc3339(now),
        file.unwrap_or("unknown"),
        line.unwrap_or(0)
    )
}
