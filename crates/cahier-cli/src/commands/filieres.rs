use cahier_core::drafts::FiliereDraft;
use cahier_core::filter::filter_records;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FiliereCommands;
use crate::cli::subcommands::filieres::FiliereArgs;
use crate::commands::shared::{form, list};
use crate::context::AppContext;
use crate::output::output;

/// Handle `cahier filieres`.
pub async fn handle(
    action: &FiliereCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filieres = ctx.client.filieres();
    match action {
        FiliereCommands::List(args) => {
            let page = ctx.page(args.page);
            let records = list::load(|| filieres.list(page)).await?;
            let query = args.search.as_deref().unwrap_or_default();
            output(&filter_records(&records, query), flags.format)
        }
        FiliereCommands::Get { id } => output(&filieres.show(*id).await?, flags.format),
        FiliereCommands::Create(args) => {
            let draft = draft(args);
            let saved = form::submit(draft.validate(), || filieres.create(&draft)).await?;
            output(&saved, flags.format)
        }
        FiliereCommands::Update { id, fields } => {
            let draft = draft(fields);
            let saved = form::submit(draft.validate(), || filieres.update(*id, &draft)).await?;
            output(&saved, flags.format)
        }
        FiliereCommands::Delete { id } => output(&filieres.delete(*id).await?, flags.format),
    }
}

fn draft(args: &FiliereArgs) -> FiliereDraft {
    FiliereDraft {
        name: args.name.trim().to_string(),
        code: args.code.clone(),
        description: args.description.clone(),
    }
}
