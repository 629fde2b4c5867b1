//! In-process test server.
//!
//! Binds the gateway to an ephemeral loopback port and runs it in a
//! background task, with direct roster access for state assertions.

use std::net::SocketAddr;
use std::sync::Arc;

use tintd::network::Gateway;
use tintd::router::Router;
use tintd::state::Roster;
use tokio::task::JoinHandle;

/// A running server instance.
pub struct TestServer {
    addr: SocketAddr,
    roster: Arc<Roster>,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Bind an ephemeral port and start accepting connections.
    pub async fn spawn() -> anyhow::Result<Self> {
        let roster = Arc::new(Roster::new());
        let router = Arc::new(Router::new(Arc::clone(&roster)));

        let gateway = Gateway::bind(
            "127.0.0.1:0".parse().expect("loopback address"),
            Arc::clone(&roster),
            router,
        )
        .await?;
        let addr = gateway.local_addr()?;

        let handle = tokio::spawn(async move {
            let _ = gateway.run().await;
        });

        Ok(Self {
            addr,
            roster,
            handle,
        })
    }

    /// The server address.
    pub fn address(&self) -> String {
        self.addr.to_string()
    }

    /// Direct access to the session registry for assertions.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Connect a new test client to this server.
    pub async fn connect(&self) -> anyhow::Result<super::client::TestClient> {
        super::client::TestClient::connect(&self.address()).await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
