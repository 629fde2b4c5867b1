//! `/nick` - change the issuer's display name.
//!
//! Validation order, first failure wins: the name must start with a letter;
//! it must not be worn by another session, shadow a session id, or be the
//! reserved word "server". A successful rename is announced to everyone.

use tint_proto::Color;
use tracing::info;

use super::Context;
use crate::error::{CommandError, HandlerResult};
use crate::state::Roster;

pub fn handle(ctx: &Context<'_>, new_nick: &str) -> HandlerResult {
    if !new_nick
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
    {
        return Err(CommandError::InvalidNick(new_nick.to_string()));
    }

    // Validate-and-commit runs under the roster's rename lock so two
    // sessions cannot race into the same name. The announcement is built
    // inside but broadcast after the lock is released.
    let announcement = {
        let _guard = ctx.roster.rename_guard();

        if nick_taken(ctx.roster, new_nick, ctx.session.id())
            || new_nick.eq_ignore_ascii_case("server")
        {
            return Err(CommandError::NickInUse(new_nick.to_string()));
        }

        let old = ctx.session.nick();
        ctx.session.set_nick(new_nick);

        if old.is_empty() {
            format!(
                "SERVER: User with id: {} has set their nickname to: {}",
                ctx.session.id(),
                new_nick
            )
        } else {
            format!(
                "SERVER: User formerly known as: {} has changed their nickname to: {}",
                old, new_nick
            )
        }
    };

    info!(id = ctx.session.id(), nick = %new_nick, "nickname change accepted");
    ctx.router.broadcast(announcement, Color::Blue);
    Ok(())
}

/// A name is taken when another session already wears it, or when it equals
/// the decimal id of any session - ids are whisper addresses too. (The id
/// clause cannot fire while names must start with a letter; it keeps the
/// reservation explicit.)
fn nick_taken(roster: &Roster, name: &str, claimant: u64) -> bool {
    roster
        .all()
        .iter()
        .any(|s| (s.id() != claimant && s.nick() == name) || name == s.id().to_string())
}
