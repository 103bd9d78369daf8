//! Relchart entrypoint: serves the similarity chart, or writes it to a file with `--render`.

use std::net::SocketAddr;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use relchart::chart::assemble;
use relchart::config::Config;
use relchart::dataset::load_records;
use relchart::gateway::{HandlerState, check_health, create_router_with_state};
use relchart::render::{FigureOptions, html_page};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check().await);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    let records = load_records(&config.dataset_path, config.load_options())?;
    tracing::info!(
        dataset = %config.dataset_path.display(),
        records = records.len(),
        "Dataset loaded"
    );

    let figure_options = FigureOptions::new(config.chart_title.clone());

    if std::env::args().any(|arg| arg == "--render") {
        let spec = assemble(&records, &config.policies)?;
        let page = html_page(&spec, &figure_options);
        tokio::fs::write(&config.output_path, page).await?;
        tracing::info!(
            output = %config.output_path.display(),
            points = spec.points.len(),
            "Chart written"
        );
        return Ok(());
    }

    let addr: SocketAddr = config.socket_addr().parse()?;
    let state = HandlerState::new(records, config.policies.clone(), figure_options);
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Relchart shutdown complete");
    Ok(())
}

async fn run_health_check() -> i32 {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("health check: {}", e);
            return 1;
        }
    };

    if check_health(&config.health_url(), HEALTH_CHECK_TIMEOUT).await {
        0
    } else {
        1
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
