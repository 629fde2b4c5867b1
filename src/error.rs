//! Error handling for command processing.
//!
//! Command errors are never fatal: each one converts to exactly one red
//! notice delivered to the issuing session, which stays connected.

use thiserror::Error;

/// Errors produced while executing an in-band command.
///
/// The `Display` text of each variant is the exact wire text sent back to
/// the issuer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("SERVER: Could not change nickname to: {0} - nicknames must start with a letter!")]
    InvalidNick(String),

    #[error("SERVER: Could not change nickname to: {0} - already in use")]
    NickInUse(String),

    #[error("SERVER: Sorry: {0} was not a valid color choice")]
    UnknownColor(String),

    #[error("SERVER: Could not send private message to: {0} - no such user")]
    NoSuchUser(String),

    #[error("SERVER: Usage: {usage}")]
    MissingArg {
        /// The command that was missing arguments.
        command: &'static str,
        /// Usage line shown to the issuer.
        usage: &'static str,
    },
}

impl CommandError {
    /// Static error code, used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidNick(_) => "invalid_nick",
            Self::NickInUse(_) => "nick_in_use",
            Self::UnknownColor(_) => "unknown_color",
            Self::NoSuchUser(_) => "no_such_user",
            Self::MissingArg { .. } => "missing_arg",
        }
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), CommandError>;
