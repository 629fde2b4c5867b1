//! `/who` - list every connected session for the issuer.

use tint_proto::Color;

use super::Context;
use crate::error::HandlerResult;

pub fn handle(ctx: &Context<'_>) -> HandlerResult {
    let mut lines = vec!["SERVER: Connected Users".to_string()];
    for session in ctx.roster.all() {
        let nick = session.nick();
        lines.push(if nick.is_empty() {
            format!("id: {}, no nickname set", session.id())
        } else {
            format!("nickname: {}, id: {}", nick, session.id())
        });
    }
    lines.push(String::new());

    for line in lines {
        ctx.router.send_to(ctx.session, line, Color::Blue);
    }
    Ok(())
}
