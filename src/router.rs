//! Message formatting and fan-out.
//!
//! The router builds the formatted text for chat and whispers and delivers
//! `Styled` messages to one session or to every session in a roster
//! snapshot. Delivery never blocks: a full or closed recipient queue drops
//! that one message and delivery continues with the remaining recipients.

use std::sync::Arc;

use tint_proto::{Color, Styled};
use tracing::debug;

use crate::state::{Roster, Session};

/// Marker prefix distinguishing whispers from public chat.
const WHISPER_MARKER: &str = "<PRIVATE MESSAGE>";

/// Builds formatted messages and routes them to sessions.
pub struct Router {
    roster: Arc<Roster>,
}

impl Router {
    /// Create a router over the given roster.
    pub fn new(roster: Arc<Roster>) -> Self {
        Self { roster }
    }

    /// Format a chat line as `<nick>: <text>`, falling back to the sender's
    /// id when no nickname is set. Surrounding whitespace is trimmed.
    pub fn format_broadcast(text: &str, sender: &Session) -> String {
        format!("{}: {}", sender.label(), text.trim())
    }

    /// Format a private message: the broadcast format wrapped with the
    /// whisper marker.
    pub fn format_whisper(text: &str, sender: &Session) -> String {
        format!("{} {}: {}", WHISPER_MARKER, sender.label(), text.trim())
    }

    /// Deliver one message to one session.
    pub fn send_to(&self, session: &Session, text: impl Into<String>, color: Color) {
        let message = Styled::new(text, color);
        if !session.send(message) {
            debug!(id = session.id(), "dropped message for unreachable session");
        }
    }

    /// Deliver the identical message to every session in the current roster
    /// snapshot. One unreachable recipient never prevents delivery to the
    /// rest.
    pub fn broadcast(&self, text: impl Into<String>, color: Color) {
        let message = Styled::new(text, color);
        deliver(&self.roster.all(), &message);
    }

    /// Fan a chat line out without blocking the sender's read loop.
    ///
    /// The message is formatted and the roster snapshot taken here, before
    /// the task is spawned, so a session connecting or disconnecting during
    /// delivery cannot change who receives this line.
    pub fn spawn_broadcast(&self, line: &str, sender: &Session) {
        let message = Styled::new(Self::format_broadcast(line, sender), sender.color());
        let snapshot = self.roster.all();
        tokio::spawn(async move {
            deliver(&snapshot, &message);
        });
    }
}

fn deliver(snapshot: &[Arc<Session>], message: &Styled) {
    for session in snapshot {
        if !session.send(message.clone()) {
            debug!(id = session.id(), "dropped message for unreachable session");
        }
    }
}
