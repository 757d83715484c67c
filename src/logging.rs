//! Stderr logging for both binaries. Lines carry the emitting module so
//! board, generator and game events can be told apart, e.g.
//! `INFO [seabattle::board] cruiser A1B1C1 sunk`.

use log::{LevelFilter, Log, Metadata, Record};

const LEVEL_VAR: &str = "SEABATTLE_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn format_record(record: &Record) -> String {
    format!("{} [{}] {}", record.level(), record.target(), record.args())
}

/// Unset or unparsable values fall back to `warn`, keeping the console
/// board free of log noise.
fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger, with its level read from `SEABATTLE_LOG`.
/// Calling it again is harmless.
pub fn init_logging() {
    let level = parse_level(std::env::var(LEVEL_VAR).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn level_defaults_to_warn() {
        assert_eq!(parse_level(None), LevelFilter::Warn);
        assert_eq!(parse_level(Some("loud")), LevelFilter::Warn);
        assert_eq!(parse_level(Some(" debug ")), LevelFilter::Debug);
        assert_eq!(parse_level(Some("OFF")), LevelFilter::Off);
    }

    #[test]
    fn record_names_its_target() {
        let line = format_record(
            &Record::builder()
                .level(Level::Info)
                .target("seabattle::board")
                .args(format_args!("cruiser {} sunk", "A1B1C1"))
                .build(),
        );
        assert_eq!(line, "INFO [seabattle::board] cruiser A1B1C1 sunk");
    }
}
