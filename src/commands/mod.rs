//! The command interpreter.
//!
//! One trimmed line of input either decodes into a [`Command`] and is
//! executed, or it is ordinary chat text. Decoding happens once, into a
//! tagged variant, and dispatch is a single `match` - the recognition order
//! documented on [`Command::parse`] is fixed.

mod color;
mod help;
mod nick;
mod whisper;
mod who;

use std::sync::Arc;

use tint_proto::Color;
use tracing::debug;

use crate::error::CommandError;
use crate::router::Router;
use crate::state::{Roster, Session};

/// Everything a command handler needs: the issuing session, the roster and
/// the router, all borrowed for the duration of one line.
pub struct Context<'a> {
    /// The session that sent the line.
    pub session: &'a Arc<Session>,
    /// The session registry.
    pub roster: &'a Arc<Roster>,
    /// Message formatting and delivery.
    pub router: &'a Router,
}

/// A recognized in-band command, decoded from one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/help`
    Help,
    /// `/w <target> <body>` or `/whisper <target> <body>`
    Whisper {
        /// Nickname or numeric session id.
        target: String,
        /// The message body, interior spacing preserved.
        body: String,
    },
    /// `/who`
    Who,
    /// `/nick <name>`
    Nick {
        /// The requested nickname.
        new_nick: String,
    },
    /// `/color <name>`
    Color {
        /// The requested palette color name.
        name: String,
    },
}

impl Command {
    /// Decode a trimmed line.
    ///
    /// Returns `None` when the line is not a command and should be treated
    /// as chat text. Recognition is first-match-wins in the order: `/help`,
    /// `/w`|`/whisper`, `/who`, `/nick`, `/color`. `/help` and `/who` are
    /// exact matches - with trailing arguments the line is chat, as is any
    /// slash word outside the five above. A recognized command with missing
    /// arguments decodes to an error, which is still consumed.
    pub fn parse(line: &str) -> Option<Result<Command, CommandError>> {
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line, ""),
        };

        match word {
            "/help" if rest.trim().is_empty() => Some(Ok(Command::Help)),
            "/w" | "/whisper" => Some(Self::parse_whisper(rest)),
            "/who" if rest.trim().is_empty() => Some(Ok(Command::Who)),
            "/nick" => Some(Self::parse_single_arg(rest, "/nick", "/nick <desirednickname>")
                .map(|new_nick| Command::Nick { new_nick })),
            "/color" => Some(Self::parse_single_arg(rest, "/color", "/color <desiredcolor>")
                .map(|name| Command::Color { name })),
            _ => None,
        }
    }

    fn parse_whisper(rest: &str) -> Result<Command, CommandError> {
        let rest = rest.trim_start();
        let (target, body) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        if target.is_empty() || body.trim().is_empty() {
            return Err(CommandError::MissingArg {
                command: "/whisper",
                usage: "/w OR /whisper <nickname> <message>",
            });
        }
        Ok(Command::Whisper {
            target: target.to_string(),
            body: body.to_string(),
        })
    }

    fn parse_single_arg(
        rest: &str,
        command: &'static str,
        usage: &'static str,
    ) -> Result<String, CommandError> {
        match rest.split_whitespace().next() {
            Some(arg) => Ok(arg.to_string()),
            None => Err(CommandError::MissingArg { command, usage }),
        }
    }
}

/// Execute one trimmed line. Returns `true` when the line was consumed as a
/// command; the caller broadcasts it as chat otherwise. Command errors are
/// reported to the issuing session here, as one red notice each.
pub fn dispatch(ctx: &Context<'_>, line: &str) -> bool {
    let parsed = match Command::parse(line) {
        Some(parsed) => parsed,
        None => return false,
    };

    let result = match parsed {
        Ok(Command::Help) => help::handle(ctx),
        Ok(Command::Whisper { target, body }) => whisper::handle(ctx, &target, &body),
        Ok(Command::Who) => who::handle(ctx),
        Ok(Command::Nick { new_nick }) => nick::handle(ctx, &new_nick),
        Ok(Command::Color { name }) => color::handle(ctx, &name),
        Err(err) => Err(err),
    };

    if let Err(err) = result {
        debug!(id = ctx.session.id(), code = err.code(), "command rejected");
        ctx.router.send_to(ctx.session, err.to_string(), Color::Red);
    }
    true
}


#[cfg(test)]
mod tests {
    use super::testutil::{connect, drain, fixture};
    use super::*;

    #[test]
    fn parse_exact_commands() {
        assert_eq!(Command::parse("/help"), Some(Ok(Command::Help)));
        assert_eq!(Command::parse("/who"), Some(Ok(Command::Who)));
    }

    #[test]
    fn parse_exact_commands_with_arguments_are_chat() {
        assert_eq!(Command::parse("/help me"), None);
        assert_eq!(Command::parse("/who goes there"), None);
    }

    #[test]
    fn parse_nick_and_color_take_first_token() {
        assert_eq!(
            Command::parse("/nick bob"),
            Some(Ok(Command::Nick {
                new_nick: "bob".to_string()
            }))
        );
        // Extra tokens after the argument are ignored.
        assert_eq!(
            Command::parse("/nick bob trailing"),
            Some(Ok(Command::Nick {
                new_nick: "bob".to_string()
            }))
        );
        assert_eq!(
            Command::parse("/color Blue"),
            Some(Ok(Command::Color {
                name: "Blue".to_string()
            }))
        );
    }

    #[test]
    fn parse_missing_arguments_decode_to_errors() {
        assert!(matches!(
            Command::parse("/nick"),
            Some(Err(CommandError::MissingArg { command: "/nick", .. }))
        ));
        assert!(matches!(
            Command::parse("/color"),
            Some(Err(CommandError::MissingArg { command: "/color", .. }))
        ));
        assert!(matches!(
            Command::parse("/w"),
            Some(Err(CommandError::MissingArg { command: "/whisper", .. }))
        ));
        assert!(matches!(
            Command::parse("/w bob"),
            Some(Err(CommandError::MissingArg { command: "/whisper", .. }))
        ));
    }

    #[test]
    fn parse_whisper_preserves_body_spacing() {
        let cmd = Command::parse("/whisper alice hello  there").unwrap().unwrap();
        assert_eq!(
            cmd,
            Command::Whisper {
                target: "alice".to_string(),
                body: "hello  there".to_string(),
            }
        );
    }

    #[test]
    fn parse_unrecognized_lines_are_chat() {
        assert_eq!(Command::parse("hello world"), None);
        assert_eq!(Command::parse("/nickabc"), None);
        assert_eq!(Command::parse("/quit"), None);
        assert_eq!(Command::parse("w alice hi"), None);
    }

    #[tokio::test]
    async fn dispatch_reports_errors_to_issuer() {
        let (roster, router) = fixture();
        let (session, mut rx) = connect(&roster, 1);
        let ctx = Context {
            session: &session,
            roster: &roster,
            router: &router,
        };

        assert!(dispatch(&ctx, "/color purple"));

        let notices = drain(&mut rx);
        assert_eq!(notices.len(), 1);
        assert_eq!(
            notices[0].text,
            "SERVER: Sorry: purple was not a valid color choice"
        );
        assert_eq!(notices[0].color, Color::Red);
    }

    #[tokio::test]
    async fn dispatch_passes_chat_through() {
        let (roster, router) = fixture();
        let (session, mut rx) = connect(&roster, 1);
        let ctx = Context {
            session: &session,
            roster: &roster,
            router: &router,
        };

        assert!(!dispatch(&ctx, "just chatting"));
        assert!(drain(&mut rx).is_empty());
    }
}
