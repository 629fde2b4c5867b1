//! Per-connection session state.

use parking_lot::RwLock;
use tint_proto::{Color, Styled};
use tokio::sync::mpsc;

/// Server-side state for one connected client.
///
/// The connection task exclusively owns the socket's write half; everyone
/// else delivers to this session by queueing a [`Styled`] message on its
/// outbound channel. One queued message becomes one `pack()` invocation and
/// one full write.
pub struct Session {
    id: u64,
    nick: RwLock<String>,
    color: RwLock<Color>,
    outbound: mpsc::Sender<Styled>,
}

impl Session {
    /// Create a session with no nickname and the default color.
    pub fn new(id: u64, outbound: mpsc::Sender<Styled>) -> Self {
        Self {
            id,
            nick: RwLock::new(String::new()),
            color: RwLock::new(Color::White),
            outbound,
        }
    }

    /// The unique identifier assigned at accept time.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The current nickname. Empty until the client sets one.
    pub fn nick(&self) -> String {
        self.nick.read().clone()
    }

    /// Replace the nickname. Uniqueness is validated by the `/nick` handler
    /// before this is called.
    pub fn set_nick(&self, nick: &str) {
        *self.nick.write() = nick.to_string();
    }

    /// The color this session's chat messages are rendered in.
    pub fn color(&self) -> Color {
        *self.color.read()
    }

    /// Replace the chat color.
    pub fn set_color(&self, color: Color) {
        *self.color.write() = color;
    }

    /// How this session is named in message prefixes and announcements:
    /// the nickname if one is set, otherwise the numeric id.
    pub fn label(&self) -> String {
        let nick = self.nick.read();
        if nick.is_empty() {
            self.id.to_string()
        } else {
            nick.clone()
        }
    }

    /// Queue a message for delivery without blocking.
    ///
    /// Returns `false` when the message was dropped: the session's outbound
    /// queue is full (stalled client) or its connection task has already
    /// exited. Neither case is retried; a dead transport is noticed by the
    /// session's own connection task, which then retires it.
    pub fn send(&self, message: Styled) -> bool {
        self.outbound.try_send(message).is_ok()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("nick", &*self.nick.read())
            .field("color", &*self.color.read())
            .finish()
    }
}
