use std::fmt::Write as _;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::{Sensor, SensorError};
use crate::util::parse_leading_int;

pub const POWER_SUPPLY_DIR: &str = "/sys/class/power_supply";

const PREFIX: &str = "⚡";
const POSTFIX: &str = "%";
const WIDTH: usize = 3;

/// Longest line for a 0-100 capacity, e.g. "⚡100%".
pub const MAX_LEN: usize = PREFIX.len() + WIDTH + POSTFIX.len();

pub struct Battery {
    path: PathBuf,
}

impl Battery {
    pub fn new(name: &str) -> Self {
        Self::with_root(POWER_SUPPLY_DIR, name)
    }

    pub fn with_root(root: impl AsRef<Path>, name: &str) -> Self {
        Self {
            path: root.as_ref().join(name).join("capacity"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open, read and close the capacity file.
    pub fn read_capacity(&self) -> Result<i64, SensorError> {
        let mut file = File::open(&self.path).map_err(|source| SensorError::Open {
            path: self.path.clone(),
            source,
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|source| SensorError::Read {
                path: self.path.clone(),
                source,
            })?;
        // Only the leading integer matters; junk after it must not fail the read.
        let contents = String::from_utf8_lossy(&bytes);

        if contents.trim().is_empty() {
            return Err(SensorError::Empty {
                path: self.path.clone(),
            });
        }
        parse_leading_int(&contents).ok_or_else(|| SensorError::NoInteger {
            path: self.path.clone(),
        })
    }
}

impl Sensor for Battery {
    fn read(&mut self, buf: &mut String) -> Result<(), SensorError> {
        let capacity = self.read_capacity()?;
        tracing::trace!(capacity, "battery read");
        render(capacity, buf)?;
        Ok(())
    }

    fn max_len(&self) -> usize {
        MAX_LEN
    }
}

/// Render a capacity as "⚡ 82%". Values wider than three digits widen the field.
pub fn render(capacity: i64, buf: &mut String) -> std::fmt::Result {
    buf.clear();
    write!(buf, "{PREFIX}{capacity:>WIDTH$}{POSTFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn rendered(capacity: i64) -> String {
        let mut buf = String::new();
        render(capacity, &mut buf).unwrap();
        buf
    }

    fn battery_with(contents: &str) -> (tempfile::TempDir, Battery) {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("BAT0")).unwrap();
        fs::write(dir.path().join("BAT0/capacity"), contents).unwrap();
        let battery = Battery::with_root(dir.path(), "BAT0");
        (dir, battery)
    }

    #[test]
    fn render_examples() {
        assert_eq!(rendered(82), "⚡ 82%");
        assert_eq!(rendered(7), "⚡  7%");
        assert_eq!(rendered(100), "⚡100%");
        assert_eq!(rendered(0), "⚡  0%");
    }

    #[test]
    fn render_full_range_fits() {
        for cap in 0..=100 {
            let line = rendered(cap);
            assert!(line.starts_with(PREFIX));
            assert!(line.ends_with(POSTFIX));
            let field = &line[PREFIX.len()..line.len() - POSTFIX.len()];
            assert_eq!(field.len(), WIDTH);
            assert_eq!(field.trim_start().parse::<i64>().unwrap(), cap);
            assert!(line.len() <= MAX_LEN);
        }
    }

    #[test]
    fn render_reuses_buffer() {
        let mut buf = String::with_capacity(MAX_LEN);
        render(100, &mut buf).unwrap();
        render(5, &mut buf).unwrap();
        assert_eq!(buf, "⚡  5%");
    }

    #[test]
    fn default_path() {
        let battery = Battery::new("BAT1");
        assert_eq!(
            battery.path(),
            Path::new("/sys/class/power_supply/BAT1/capacity")
        );
    }

    #[test]
    fn reads_sysfs_style_file() {
        let (_dir, mut battery) = battery_with("82\n");
        let mut buf = String::new();
        battery.read(&mut buf).unwrap();
        assert_eq!(buf, "⚡ 82%");
    }

    #[test]
    fn trailing_content_ignored() {
        let (_dir, battery) = battery_with("57 Discharging\n");
        assert_eq!(battery.read_capacity().unwrap(), 57);
    }

    #[test]
    fn non_utf8_trailer_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("BAT0")).unwrap();
        fs::write(dir.path().join("BAT0/capacity"), b"64 \xff\xfe\n").unwrap();
        let battery = Battery::with_root(dir.path(), "BAT0");
        assert_eq!(battery.read_capacity().unwrap(), 64);
    }

    #[test]
    fn non_utf8_before_digits_is_no_integer() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("BAT0")).unwrap();
        fs::write(dir.path().join("BAT0/capacity"), b"\xff64\n").unwrap();
        let battery = Battery::with_root(dir.path(), "BAT0");
        assert!(matches!(
            battery.read_capacity(),
            Err(SensorError::NoInteger { .. })
        ));
    }

    #[test]
    fn rereads_every_tick() {
        let (dir, mut battery) = battery_with("50\n");
        let mut buf = String::new();
        battery.read(&mut buf).unwrap();
        assert_eq!(buf, "⚡ 50%");

        fs::write(dir.path().join("BAT0/capacity"), "49\n").unwrap();
        battery.read(&mut buf).unwrap();
        assert_eq!(buf, "⚡ 49%");
    }

    #[test]
    fn missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let battery = Battery::with_root(dir.path(), "BAT9");
        let err = battery.read_capacity().unwrap_err();
        match &err {
            SensorError::Open { path, source } => {
                assert_eq!(path, battery.path());
                assert_eq!(source.raw_os_error(), Some(libc::ENOENT));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("BAT9/capacity"));
    }

    #[test]
    fn empty_file() {
        let (_dir, battery) = battery_with("");
        assert!(matches!(
            battery.read_capacity(),
            Err(SensorError::Empty { .. })
        ));
        let (_dir, battery) = battery_with(" \n");
        assert!(matches!(
            battery.read_capacity(),
            Err(SensorError::Empty { .. })
        ));
    }

    #[test]
    fn non_numeric_file() {
        let (_dir, battery) = battery_with("Full\n");
        assert!(matches!(
            battery.read_capacity(),
            Err(SensorError::NoInteger { .. })
        ));
    }

    #[test]
    fn leaves_buffer_alone_on_error() {
        let (_dir, mut battery) = battery_with("abc");
        let mut buf = String::from("⚡ 10%");
        assert!(battery.read(&mut buf).is_err());
        assert_eq!(buf, "⚡ 10%");
    }
}
