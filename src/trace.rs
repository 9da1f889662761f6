//! Diagnostic log sink.
//!
//! Installs a `log` backend that appends to a fixed relative file. Writes
//! from concurrent contexts are serialized through the mutex, so lines
//! never interleave. If the file cannot be opened the game runs without
//! diagnostics; that is reported on stdout and nothing more.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};

const LOG_PATH: &str = "term-tetra.log";

struct FileSink {
    file: Mutex<File>,
}

impl Log for FileSink {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        // Best-effort: a failed write drops the line, never the game.
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Open the log file and install the sink. Call once, before the event
/// loop starts.
pub fn init() {
    match OpenOptions::new().create(true).append(true).open(LOG_PATH) {
        Ok(file) => {
            let sink = Box::new(FileSink {
                file: Mutex::new(file),
            });
            if log::set_boxed_logger(sink).is_ok() {
                log::set_max_level(LevelFilter::Debug);
            }
        }
        Err(err) => {
            println!("could not open {}: {}", LOG_PATH, err);
        }
    }
}
