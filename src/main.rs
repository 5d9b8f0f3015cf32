use anyhow::{Context, Result};
use briefing_index::{config::Config, index};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env()?;
    let markers = config.load_markers()?;

    info!("Building search index from {}", config.archive_dir().display());
    let search_index = index::build_index(config.archive_dir(), &markers, config.parallel());

    index::write_index(&search_index, config.index_output()).with_context(|| {
        format!("failed to write index to {}", config.index_output().display())
    })?;

    info!(
        "Index written to {}: {} articles ({} picks)",
        config.index_output().display(),
        search_index.total,
        search_index.picks
    );
    Ok(())
}
