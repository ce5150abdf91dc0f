mod config;
mod error;
mod render;

use tokio::io::AsyncReadExt;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use config::Config;
use error::AppError;

/// `RUST_LOG` directives, falling back to `info` when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

async fn read_payload(config: &Config) -> Result<String, AppError> {
    match &config.input {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|error| AppError::Io {
                source_name: path.display().to_string(),
                error,
            }),
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .map_err(|error| AppError::Io {
                    source_name: "stdin".to_string(),
                    error,
                })?;
            Ok(buf)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the item listing.
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&std::env::var("RUST_LOG").unwrap_or_default()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = Config::from_env(std::env::args().nth(1))?;
    info!(
        input = %config.input.as_ref().map_or_else(|| "stdin".into(), |p| p.display().to_string()),
        sources = ?config.sources,
        since = %config.since,
        until = %config.until,
        order_by = %config.order_by,
        descending = config.descending,
        max_number = config.max_number,
        policy = ?config.policy,
        "configuration loaded"
    );

    let payload = read_payload(&config).await?;
    let items = feed_model::decode_items(&payload, config.policy)
        .map_err(AppError::from)
        .inspect_err(|e| tracing::error!(error = %e, "failed to decode payload"))?;
    let decoded = items.len();
    let mut items = feed_model::filter_items(
        items,
        &config.sources,
        Some(config.since),
        Some(config.until),
    );
    info!(decoded, kept = items.len(), "payload decoded and filtered");

    feed_model::sort_items(&mut items, config.order_by, config.descending);
    for item in items.iter().take(config.max_number) {
        println!("{}", render::render_line(item, config.order_by));
    }

    Ok(())
}
