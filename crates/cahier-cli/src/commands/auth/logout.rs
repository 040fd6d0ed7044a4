use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

/// The local session is gone whatever the server says, so a failed
/// server-side logout is reported, not fatal.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let note = match ctx.client.auth().logout().await {
        Ok(()) => None,
        Err(error) if ctx.client.session().token().is_none() => {
            tracing::warn!(%error, "server-side logout failed");
            Some(format!("server logout failed: {}", error.message()))
        }
        Err(error) => return Err(error.into()),
    };

    output(&AuthLogoutResponse { cleared: true, note }, flags.format)
}
