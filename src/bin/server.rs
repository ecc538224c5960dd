use std::{error::Error, net::SocketAddr, process::ExitCode, sync::Arc};

use axum_server::Handle;
use clap::Parser;
use time::OffsetDateTime;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use finboard::{
    AppState, Config, FinanceApi, HttpFinanceApi, InMemoryFinanceApi, add_tracing_layer,
    build_router, graceful_shutdown, setup_logging,
};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    if let Err(error) = setup_logging(config.log_file.as_deref()) {
        eprintln!("Could not open log file: {error}");
        return ExitCode::FAILURE;
    }

    match serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn finance_api(config: &Config) -> Result<Arc<dyn FinanceApi>, Box<dyn Error>> {
    if config.demo {
        tracing::info!("Serving sample data from memory");
        let today = OffsetDateTime::now_utc().date();
        return Ok(Arc::new(InMemoryFinanceApi::with_sample_data(today)));
    }

    let api_url = config
        .api_url
        .as_deref()
        .ok_or("--api-url is required unless --demo is set")?;

    Ok(Arc::new(HttpFinanceApi::new(
        api_url,
        config.api_token.as_deref(),
    )?))
}

async fn serve(config: Config) -> Result<(), Box<dyn Error>> {
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));

    let state = AppState::new(
        finance_api(&config)?,
        &config.timezone,
        config.recent_transactions,
    )?;

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state));

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    tracing::info!("HTTP server listening on {}", addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
