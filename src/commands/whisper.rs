//! `/w` and `/whisper` - private message to one session.

use tint_proto::Color;

use super::Context;
use crate::error::{CommandError, HandlerResult};
use crate::router::Router;

pub fn handle(ctx: &Context<'_>, target: &str, body: &str) -> HandlerResult {
    // Nickname match first: a numeric display name always beats a session id.
    let recipient = ctx.roster.find_by_nick(target).or_else(|| {
        target
            .parse::<u64>()
            .ok()
            .and_then(|id| ctx.roster.find_by_id(id))
    });

    let Some(recipient) = recipient else {
        return Err(CommandError::NoSuchUser(target.to_string()));
    };

    let text = Router::format_whisper(body, ctx.session);
    ctx.router.send_to(&recipient, text, ctx.session.color());
    ctx.router.send_to(ctx.session, "SERVER: Sent", Color::Blue);
    Ok(())
}
