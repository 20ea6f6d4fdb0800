//! Minimal stderr logger for the command line.

use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::{OwoColorize as _, Stream};

struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let label = record.level().as_str().to_lowercase();
        let label = match record.level() {
            Level::Error => label
                .if_supports_color(Stream::Stderr, |s| s.red())
                .to_string(),
            Level::Warn => label
                .if_supports_color(Stream::Stderr, |s| s.yellow())
                .to_string(),
            Level::Info => label
                .if_supports_color(Stream::Stderr, |s| s.green())
                .to_string(),
            Level::Debug | Level::Trace => label
                .if_supports_color(Stream::Stderr, |s| s.dimmed())
                .to_string(),
        };

        eprintln!("{}: {}", label, record.args());
    }

    fn flush(&self) {}
}

pub fn level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Installs the logger. Fails if another logger is already set.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(StderrLogger { level }))?;
    log::set_max_level(level);

    Ok(())
}
