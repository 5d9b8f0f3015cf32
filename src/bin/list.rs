use anyhow::{Context, Result};
use briefing_index::{config::Config, index::output::write_json, listing};
use tracing::{error, info};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let Some(entries) = listing::build_listing(
        config.archive_dir(),
        config.list_base_url(),
        config.title_prefix(),
    ) else {
        error!("Archive directory '{}' not found", config.archive_dir().display());
        return Ok(());
    };

    write_json(&entries, config.list_output()).with_context(|| {
        format!("failed to write listing to {}", config.list_output().display())
    })?;

    info!(
        "Listing written to {}: {} entries",
        config.list_output().display(),
        entries.len()
    );
    Ok(())
}
