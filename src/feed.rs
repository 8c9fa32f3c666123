use std::convert::Infallible;
use std::io::{self, Write};
use std::time::Duration;

use thiserror::Error;

use crate::sensors::{Sensor, SensorError};

#[derive(Error, Debug)]
pub enum FeedError {
    #[error(transparent)]
    Sensor(#[from] SensorError),

    #[error("failed to write to stdout")]
    Write(#[source] io::Error),
}

impl FeedError {
    /// The reader on the other end of the pipe went away.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, FeedError::Write(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Poll a sensor and emit one line per tick.
pub struct Feed<S> {
    sensor: S,
    interval: Duration,
    buf: String,
}

impl<S: Sensor> Feed<S> {
    pub fn new(sensor: S, interval: Duration) -> Self {
        let buf = String::with_capacity(sensor.max_len());
        tracing::debug!(capacity = buf.capacity(), "buffer allocated");
        tracing::debug!(
            secs = interval.as_secs(),
            nanos = interval.subsec_nanos(),
            "interval"
        );
        Self {
            sensor,
            interval,
            buf,
        }
    }

    /// Read once, write the line, flush.
    pub fn tick<W: Write>(&mut self, out: &mut W) -> Result<(), FeedError> {
        self.sensor.read(&mut self.buf)?;
        writeln!(out, "{}", self.buf).map_err(FeedError::Write)?;
        out.flush().map_err(FeedError::Write)
    }

    /// Tick forever. Returns only on the first sensor or write failure.
    pub fn run<W: Write>(mut self, mut out: W) -> Result<Infallible, FeedError> {
        loop {
            self.tick(&mut out)?;
            if !self.interval.is_zero() {
                std::thread::sleep(self.interval);
            }
        }
    }
}

/// Let writes to a closed pipe fail with `EPIPE` instead of killing the process.
pub fn ignore_sigpipe() {
    // SAFETY: installs the predefined SIG_IGN disposition; no handler code runs.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_IGN);
    }
}
