use cahier_core::entities::SessionUser;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user: Option<SessionUser>,
    base_url: String,
    session_file: String,
}

/// Local view only; use `auth whoami` to check the token with the server.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let auth = ctx.client.auth();
    output(
        &AuthStatusResponse {
            authenticated: auth.is_signed_in(),
            user: auth.session_user(),
            base_url: ctx.client.gateway().base_url().to_string(),
            session_file: ctx.session_path.display().to_string(),
        },
        flags.format,
    )
}
