use cahier_core::drafts::GroupeDraft;
use cahier_core::filter::filter_records;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GroupeCommands;
use crate::cli::subcommands::groupes::GroupeArgs;
use crate::commands::shared::{form, list};
use crate::context::AppContext;
use crate::output::output;

/// Handle `cahier groupes`.
pub async fn handle(
    action: &GroupeCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let groupes = ctx.client.groupes();
    match action {
        GroupeCommands::List(args) => {
            let page = ctx.page(args.page);
            let records = list::load(|| groupes.list(page)).await?;
            let query = args.search.as_deref().unwrap_or_default();
            output(&filter_records(&records, query), flags.format)
        }
        GroupeCommands::Get { id } => output(&groupes.show(*id).await?, flags.format),
        GroupeCommands::Create(args) => {
            let draft = draft(args);
            let saved = form::submit(draft.validate(), || groupes.create(&draft)).await?;
            output(&saved, flags.format)
        }
        GroupeCommands::Update { id, fields } => {
            let draft = draft(fields);
            let saved = form::submit(draft.validate(), || groupes.update(*id, &draft)).await?;
            output(&saved, flags.format)
        }
        GroupeCommands::Delete { id } => output(&groupes.delete(*id).await?, flags.format),
    }
}

fn draft(args: &GroupeArgs) -> GroupeDraft {
    GroupeDraft {
        name: args.name.trim().to_string(),
        code: args.code.trim().to_string(),
        filiere_id: args.filiere,
        capacity: args.capacity,
        description: args.description.clone(),
    }
}
