use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Logs go to stderr so stdout carries only
/// the report. `RUST_LOG` takes precedence over `verbose`.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::new(format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        )))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if args.size == 0 {
        anyhow::bail!("--size must be greater than 0");
    }

    if args.terms.iter().any(|term| term.trim().is_empty()) {
        anyhow::bail!("search terms must not be empty");
    }

    if let Err(e) = url::Url::parse(&args.endpoint) {
        anyhow::bail!("--endpoint is not a valid URL: {}", e);
    }

    Ok(())
}
