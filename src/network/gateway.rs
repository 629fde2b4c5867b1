//! Gateway - TCP listener that accepts incoming connections.
//!
//! The gateway binds one listener and spawns a Connection task per accepted
//! client. Accepting is strictly sequential; session ids are handed out from
//! the roster's atomic counter at accept time.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::network::Connection;
use crate::router::Router;
use crate::state::Roster;

/// Accepts incoming TCP connections and spawns session tasks.
pub struct Gateway {
    listener: TcpListener,
    roster: Arc<Roster>,
    router: Arc<Router>,
}

impl Gateway {
    /// Bind the listener. An unbindable address is the only fatal startup
    /// error.
    pub async fn bind(
        addr: SocketAddr,
        roster: Arc<Roster>,
        router: Arc<Router>,
    ) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "listener bound");
        Ok(Self {
            listener,
            roster,
            router,
        })
    }

    /// The address actually bound. Distinct from the configured address when
    /// binding port 0.
    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections forever. A failed accept is logged and the loop
    /// continues; it never takes the server down.
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    let id = self.roster.next_id();
                    info!(%addr, id, "connection accepted");

                    let connection = Connection::new(
                        id,
                        stream,
                        addr,
                        Arc::clone(&self.roster),
                        Arc::clone(&self.router),
                    );
                    tokio::spawn(async move {
                        connection.run().await;
                        info!(id, "connection closed");
                    });
                }
                Err(e) => {
                    error!(error = %e, "failed to accept connection");
                }
            }
        }
    }
}
