use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::warn;

use crate::trace::trace::TraceEvent;

/// JSONL sink for the generation trace of one run.
///
/// Events are appended, one JSON object per line, so several runs can share
/// a file.
pub struct TraceLogger {
    out: BufWriter<File>,
}

impl TraceLogger {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            out: BufWriter::new(file),
        })
    }

    pub fn log(&mut self, event: &TraceEvent) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        self.out.write_all(b"\n")
    }

    /// Write every event and flush. Returns how many were written.
    pub fn log_all(&mut self, events: &[TraceEvent]) -> io::Result<usize> {
        for event in events {
            self.log(event)?;
        }
        self.out.flush()?;
        Ok(events.len())
    }
}

/// Append `events` to the trace file at `path`.
///
/// Tracing never fails a generation run: errors are logged and `0` is
/// returned.
pub fn write_trace(path: &str, events: &[TraceEvent]) -> usize {
    let result = TraceLogger::open(path).and_then(|mut logger| logger.log_all(events));
    match result {
        Ok(n) => n,
        Err(e) => {
            warn!("could not write trace file '{}': {}", path, e);
            0
        }
    }
}
