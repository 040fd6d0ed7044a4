use anyhow::Context;
use cahier_core::drafts::LogbookDraft;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MeCommands;
use crate::cli::subcommands::me::MeLogArgs;
use crate::commands::shared::list;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cahier me`: the professor's own assignments and logbooks.
pub async fn handle(action: &MeCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let professor = ctx.client.professor();
    match action {
        MeCommands::Assignments => {
            let assignments = list::load(|| professor.my_assignments()).await?;
            output(&assignments, flags.format)
        }
        MeCommands::Logbooks => {
            let logbooks = list::load(|| professor.list()).await?;
            output(&logbooks, flags.format)
        }
        MeCommands::Log(args) => log(args, ctx, flags).await,
    }
}

async fn log(args: &MeLogArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let professor = ctx.client.professor();
    let assignments = professor
        .my_assignments()
        .await
        .context("failed to load your assignments")?;
    let selected = assignments.iter().find(|a| a.id == args.assignment);
    if selected.is_none() {
        anyhow::bail!(
            "assignment {} is not one of yours (see `cahier me assignments`)",
            args.assignment
        );
    }

    let draft = LogbookDraft::for_assignment(
        selected,
        args.date.unwrap_or_else(AppContext::today),
        args.session_type,
        &args.content,
        args.remarks.as_deref(),
    )?;
    let logbook = professor.create(&draft).await?;
    output(&logbook, flags.format)
}
