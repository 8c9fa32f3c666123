use std::time::Duration;

use chrono::format::{Item, StrftimeItems};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

pub const DEFAULT_BATTERY: &str = "BAT0";
pub const DEFAULT_TIME_FORMAT: &str = "(%a %b %d %H:%M:%S)";

// Values are taken as plain strings so `-h` is honoured wherever it appears.
// They are checked once clap has finished, in `TryFrom<..Args>`.

#[derive(Parser, Debug, Clone)]
#[command(
    name = "barfeed-battery",
    about = "Print battery charge once per interval, for a status bar"
)]
pub struct BatteryArgs {
    /// Battery name under /sys/class/power_supply/
    #[arg(
        short = 'b',
        value_name = "NAME",
        default_value = DEFAULT_BATTERY,
        allow_hyphen_values = true
    )]
    pub battery: String,

    /// Seconds between readings, fractions allowed
    #[arg(
        short = 'i',
        value_name = "SECONDS",
        default_value = "1.0",
        allow_hyphen_values = true
    )]
    pub interval: String,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "barfeed-time",
    about = "Print the local time once per interval, for a status bar"
)]
pub struct TimeArgs {
    /// strftime-style format string
    #[arg(
        short = 'f',
        value_name = "FORMAT",
        default_value = DEFAULT_TIME_FORMAT,
        allow_hyphen_values = true
    )]
    pub format: String,

    /// Seconds between readings, fractions allowed
    #[arg(
        short = 'i',
        value_name = "SECONDS",
        default_value = "1.0",
        allow_hyphen_values = true
    )]
    pub interval: String,
}

#[derive(Debug, Clone)]
pub struct BatteryConfig {
    pub battery: String,
    pub interval: Duration,
}

#[derive(Debug, Clone)]
pub struct TimeConfig {
    pub format: String,
    pub interval: Duration,
}

impl TryFrom<BatteryArgs> for BatteryConfig {
    type Error = String;

    fn try_from(args: BatteryArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            battery: args.battery,
            interval: parse_interval(&args.interval)?,
        })
    }
}

impl TryFrom<TimeArgs> for TimeConfig {
    type Error = String;

    fn try_from(args: TimeArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            format: parse_time_format(&args.format)?,
            interval: parse_interval(&args.interval)?,
        })
    }
}

/// Parse the process arguments into a checked config, or exit.
///
/// Help goes to stdout with status 0. Every other failure, including a bad
/// interval or format, goes to stderr with status 1.
pub fn parse_or_exit<A, C>() -> C
where
    A: Parser,
    C: TryFrom<A, Error = String>,
{
    let args = A::try_parse().unwrap_or_else(|err| exit_with(&err));
    C::try_from(args)
        .unwrap_or_else(|msg| exit_with(&A::command().error(ErrorKind::ValueValidation, msg)))
}

fn exit_with(err: &clap::Error) -> ! {
    let code = if err.use_stderr() { 1 } else { 0 };
    // Nothing sensible left to do if the terminal itself is gone.
    let _ = err.print();
    std::process::exit(code);
}

/// Fractional seconds to a `Duration`. Zero is allowed and means "don't sleep".
pub fn parse_interval(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("`{s}` is not a number of seconds"))?;
    Duration::try_from_secs_f64(secs)
        .map_err(|_| format!("`{s}` must be a finite, non-negative number of seconds"))
}

/// Accept only templates chrono can render. glibc's `%E`/`%O` modifiers are
/// not among them.
pub fn parse_time_format(s: &str) -> Result<String, String> {
    if StrftimeItems::new(s).any(|item| matches!(item, Item::Error)) {
        return Err(format!("`{s}` contains an invalid format specifier"));
    }
    Ok(s.to_string())
}
