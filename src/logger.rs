use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Output goes to stderr so stdout carries
/// nothing but data lines. `RUST_LOG` overrides the default `warn` level.
pub fn init() -> color_eyre::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(true)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("failed to install logger: {e}"))?;
    Ok(())
}
