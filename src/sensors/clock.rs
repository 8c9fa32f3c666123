use std::fmt::Write as _;

use chrono::{DateTime, Local, TimeZone};

use super::{Sensor, SensorError};
use crate::util::truncate_to_boundary;

/// Room for 21 bytes of text, as in a 22-byte C buffer with its terminator.
pub const MAX_LEN: usize = 21;

pub struct Clock {
    format: String,
}

impl Clock {
    /// `format` must already be validated, see `config::parse_time_format`.
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    /// Render `now`, keeping the longest prefix that fits in `MAX_LEN` bytes.
    pub fn render<Tz>(&self, now: &DateTime<Tz>, buf: &mut String) -> std::fmt::Result
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        buf.clear();
        write!(buf, "{}", now.format(&self.format))?;
        truncate_to_boundary(buf, MAX_LEN);
        Ok(())
    }
}

impl Sensor for Clock {
    fn read(&mut self, buf: &mut String) -> Result<(), SensorError> {
        self.render(&Local::now(), buf)?;
        Ok(())
    }

    fn max_len(&self) -> usize {
        MAX_LEN
    }
}
