use barfeed::config::{self, BatteryArgs, BatteryConfig};
use barfeed::feed::{self, Feed};
use barfeed::logger;
use barfeed::sensors::Battery;
use color_eyre::eyre::WrapErr;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cfg: BatteryConfig = config::parse_or_exit::<BatteryArgs, _>();
    logger::init()?;
    tracing::debug!(?cfg, "parsed options");

    let battery = Battery::new(&cfg.battery);
    tracing::debug!(path = %battery.path().display(), "capacity source");
    feed::ignore_sigpipe();

    let stdout = std::io::stdout().lock();
    match Feed::new(battery, cfg.interval).run(stdout) {
        Ok(never) => match never {},
        Err(e) if e.is_broken_pipe() => {
            tracing::debug!("stdout closed, exiting");
            Ok(())
        }
        Err(e) => Err(e).wrap_err("battery feed stopped"),
    }
}
