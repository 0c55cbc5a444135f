use anyhow::{Context, Result};
use clap::Parser;
use emotrack::{
    create_router, Analyzer, AppState, ClassifierAdapter, Config, HttpEmotionModel,
    HttpInsightGenerator, InsightGenerator, SessionStore,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(name = "emotrack", about = "Interview emotion analysis service")]
struct Args {
    /// Config file path, without extension
    #[arg(long, default_value = "config/emotrack")]
    config: String,

    /// Override the configured HTTP port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;
    let port = args.port.unwrap_or(cfg.service.http.port);

    info!("{} v0.1.0", cfg.service.name);
    info!("Classifier endpoint: {}", cfg.classifier.endpoint);

    let model = HttpEmotionModel::new(
        cfg.classifier.endpoint.clone(),
        Duration::from_secs(cfg.classifier.timeout_secs),
    )?;
    let analyzer = Arc::new(Analyzer::new(
        SessionStore::new(),
        ClassifierAdapter::new(Box::new(model)),
    ));

    let insight: Option<Arc<dyn InsightGenerator>> = match &cfg.insight.endpoint {
        Some(endpoint) => Some(Arc::new(HttpInsightGenerator::new(
            endpoint.clone(),
            Duration::from_secs(cfg.insight.timeout_secs),
        )?)),
        None => {
            info!("No insight endpoint configured; reports will omit insight text");
            None
        }
    };

    let state = AppState::new(analyzer, insight, cfg.reports.output_dir.clone().into());
    let router = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, port);
    info!("HTTP server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, router)
        .await
        .context("HTTP server error")?;

    Ok(())
}
