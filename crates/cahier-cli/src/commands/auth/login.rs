use anyhow::Context;
use cahier_core::entities::SessionUser;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user: SessionUser,
    session_file: String,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let auth = ctx.client.auth();
    let response = match args.role {
        Some(role) => auth.login_as(&args.email, &args.password, role).await,
        None => auth.login(&args.email, &args.password).await,
    }
    .context("login failed")?;

    output(
        &AuthLoginResponse {
            authenticated: true,
            user: response.user,
            session_file: ctx.session_path.display().to_string(),
        },
        flags.format,
    )
}
