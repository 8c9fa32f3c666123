use barfeed::config::{self, TimeArgs, TimeConfig};
use barfeed::feed::{self, Feed};
use barfeed::logger;
use barfeed::sensors::Clock;
use color_eyre::eyre::WrapErr;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cfg: TimeConfig = config::parse_or_exit::<TimeArgs, _>();
    logger::init()?;
    tracing::debug!(?cfg, "parsed options");

    feed::ignore_sigpipe();

    let stdout = std::io::stdout().lock();
    match Feed::new(Clock::new(cfg.format), cfg.interval).run(stdout) {
        Ok(never) => match never {},
        Err(e) if e.is_broken_pipe() => {
            tracing::debug!("stdout closed, exiting");
            Ok(())
        }
        Err(e) => Err(e).wrap_err("time feed stopped"),
    }
}
