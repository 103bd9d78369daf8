//! Test server harness.

use std::net::SocketAddr;
use std::time::Duration;

use relchart::gateway::{HandlerState, create_router_with_state};
use relchart::model::SimilarityRecord;
use relchart::render::FigureOptions;
use relchart::scoring::PolicyTable;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

pub struct TestServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
}

async fn wait_for_server_ready(addr: SocketAddr) -> Result<(), ServerStartupError> {
    let timeout = Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS);
    let interval = Duration::from_millis(STARTUP_POLL_INTERVAL_MS);
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => tokio::time::sleep(interval).await,
        }
    }
}

/// Spawns the gateway on an ephemeral port with the given inputs.
pub async fn spawn_test_server(
    records: Vec<SimilarityRecord>,
    policies: PolicyTable,
) -> Result<TestServer, ServerStartupError> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let app = create_router_with_state(HandlerState::new(
        records,
        policies,
        FigureOptions::default(),
    ));

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await;
    });

    wait_for_server_ready(addr).await?;

    Ok(TestServer {
        addr,
        _server_handle: handle,
        shutdown_tx: Some(shutdown_tx),
    })
}
