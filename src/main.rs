use anyhow::Context;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they do not interleave with the wizard screens.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("renocost=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = renocost::AppConfig::from_env().context("failed to load configuration")?;
    tracing::debug!(?config, "configuration loaded");

    renocost::ui::run(&config).context("wizard session failed")?;
    Ok(())
}
