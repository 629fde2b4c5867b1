//! `/help` - send the command listing to the issuer.

use tint_proto::Color;

use super::Context;
use crate::error::HandlerResult;

const HELP_LINES: [&str; 8] = [
    "",
    "SERVER: COMMANDS LIST:",
    "SERVER: /help - Print this message",
    "SERVER: /who - Displays connected users",
    "SERVER: /nick <desirednickname> - Change nickname",
    "SERVER: /color <desiredcolor> - Change text color",
    "SERVER: /w OR /whisper <nickname> <message> - Sends private message to user",
    "",
];

pub fn handle(ctx: &Context<'_>) -> HandlerResult {
    for line in HELP_LINES {
        ctx.router.send_to(ctx.session, line, Color::Blue);
    }
    Ok(())
}
