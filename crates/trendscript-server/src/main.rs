mod api;
mod history;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use trendscript_generator::{ContentGenerator, GeneratorSettings, OpenAiProvider};
use trendscript_trends::TrendService;

use crate::api::{build_app, AppState};
use crate::history::ContentHistory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = trendscript_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let provider = OpenAiProvider::new(&config.openai_api_key, &config.llm_base_url)?;
    let generator = Arc::new(ContentGenerator::new(
        provider,
        GeneratorSettings::from_app_config(&config),
    ));
    let trends = if config.trend_enrichment {
        TrendService::with_analysis(Arc::clone(&generator))
    } else {
        TrendService::offline()
    };

    let app = build_app(AppState {
        generator,
        trends: Arc::new(trends),
        history: ContentHistory::new(config.history_capacity),
    });

    tracing::info!(
        env = %config.env,
        bind_addr = %config.bind_addr,
        model = %config.llm_model,
        trend_enrichment = config.trend_enrichment,
        "starting TrendScript API"
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("TrendScript API shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
