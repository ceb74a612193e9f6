use log::{LevelFilter, Log, Metadata, Record, SetLoggerError, set_logger, set_max_level};

const MAX_LEVEL: LevelFilter = LevelFilter::Info;

static LOGGER: Logger = Logger;

/// Routes the `log` facade to standard error so standard output only ever
/// carries node lines.
pub fn init_logger() -> Result<(), SetLoggerError> {
    set_logger(&LOGGER)?;
    set_max_level(MAX_LEVEL);
    Ok(())
}

struct Logger;

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= MAX_LEVEL
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.target(), record.level(), record.args());
        }
    }

    fn flush(&self) {}
}
