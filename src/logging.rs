use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Logs go to stderr so they never interleave with menu output on stdout.
/// `RUST_LOG` wins over the built-in level when set.
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
