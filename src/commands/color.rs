//! `/color` - change the color the issuer's chat is rendered in.

use tint_proto::Color;

use super::Context;
use crate::error::{CommandError, HandlerResult};

pub fn handle(ctx: &Context<'_>, name: &str) -> HandlerResult {
    let color: Color = name
        .parse()
        .map_err(|_| CommandError::UnknownColor(name.to_string()))?;

    ctx.session.set_color(color);
    ctx.router.send_to(
        ctx.session,
        format!("SERVER: Color changed to: {}", color),
        Color::Blue,
    );
    Ok(())
}
