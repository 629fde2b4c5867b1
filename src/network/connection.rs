//! Connection - drives one client's session from accept to disconnect.
//!
//! Each connection runs in its own tokio task. The task owns both halves of
//! the socket: inbound lines are read through `LineCodec`, outbound
//! [`Styled`] messages are drained from the session's queue and written
//! through `PackCodec`. Other tasks never touch the socket; they reach this
//! client only through its queue.

use std::net::SocketAddr;
use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use tint_proto::{Color, LineCodec, PackCodec, Styled};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_util::codec::{FramedRead, FramedWrite};
use tracing::{debug, warn};

use crate::commands::{self, Context};
use crate::router::Router;
use crate::state::{Roster, Session};

/// Outbound queue depth per session. Deep enough for the longest multi-line
/// reply plus a busy room; a client that stops reading loses messages past
/// this point until its transport errors out.
const OUTBOUND_QUEUE: usize = 256;

/// A single client connection handler.
pub struct Connection {
    id: u64,
    stream: TcpStream,
    addr: SocketAddr,
    roster: Arc<Roster>,
    router: Arc<Router>,
}

impl Connection {
    /// Create a connection handler for an accepted stream.
    pub fn new(
        id: u64,
        stream: TcpStream,
        addr: SocketAddr,
        roster: Arc<Roster>,
        router: Arc<Router>,
    ) -> Self {
        Self {
            id,
            stream,
            addr,
            roster,
            router,
        }
    }

    /// Run the session: register it, send the welcome message, then loop
    /// until the transport reports an error or end-of-stream. The session is
    /// removed from the roster on the way out; no departure message is
    /// broadcast.
    pub async fn run(self) {
        debug!(id = self.id, addr = %self.addr, "session starting");

        let local_addr = self.stream.local_addr().ok();
        let (read_half, write_half) = self.stream.into_split();
        let mut lines = FramedRead::new(read_half, LineCodec::new());
        let mut sink = FramedWrite::new(write_half, PackCodec::new());

        let (tx, mut outgoing) = mpsc::channel::<Styled>(OUTBOUND_QUEUE);
        let session = Arc::new(Session::new(self.id, tx));
        self.roster.add(Arc::clone(&session));

        let welcome = match local_addr {
            Some(addr) => format!("SERVER: Connected to server at: {}", addr),
            None => "SERVER: Connected to server".to_string(),
        };
        self.router.send_to(&session, welcome, Color::Green);

        loop {
            tokio::select! {
                line = lines.next() => match line {
                    Some(Ok(line)) => {
                        let line = line.trim();
                        if line.is_empty() {
                            continue;
                        }

                        let ctx = Context {
                            session: &session,
                            roster: &self.roster,
                            router: &self.router,
                        };
                        if !commands::dispatch(&ctx, line) {
                            self.router.spawn_broadcast(line, &session);
                        }
                    }
                    Some(Err(e)) => {
                        warn!(id = self.id, error = %e, "read error");
                        break;
                    }
                    None => {
                        debug!(id = self.id, "client closed connection");
                        break;
                    }
                },
                message = outgoing.recv() => match message {
                    Some(message) => {
                        if let Err(e) = sink.send(message).await {
                            warn!(id = self.id, error = %e, "write error");
                            break;
                        }
                    }
                    // The session itself holds a sender, so this only fires
                    // once the session is gone.
                    None => break,
                },
            }
        }

        self.roster.remove(self.id);
    }
}
