pub mod battery;
pub mod clock;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use battery::Battery;
pub use clock::Clock;

/// A source polled once per tick.
pub trait Sensor {
    /// Replace the contents of `buf` with the rendered reading.
    fn read(&mut self, buf: &mut String) -> Result<(), SensorError>;

    /// Longest rendering this sensor produces, in bytes.
    fn max_len(&self) -> usize;
}

#[derive(Error, Debug)]
pub enum SensorError {
    #[error("failed to open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: end of file before any value", .path.display())]
    Empty { path: PathBuf },

    #[error("{}: no integer found", .path.display())]
    NoInteger { path: PathBuf },

    #[error("failed to render reading")]
    Format(#[from] std::fmt::Error),
}
