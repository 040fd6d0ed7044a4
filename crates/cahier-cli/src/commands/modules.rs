use cahier_core::drafts::ModuleDraft;
use cahier_core::filter::filter_records;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ModuleCommands;
use crate::cli::subcommands::modules::ModuleArgs;
use crate::commands::shared::{form, list};
use crate::context::AppContext;
use crate::output::output;

/// Handle `cahier modules`.
pub async fn handle(
    action: &ModuleCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let modules = ctx.client.modules();
    match action {
        ModuleCommands::List(args) => {
            let page = ctx.page(args.page);
            let records = list::load(|| modules.list(page)).await?;
            let query = args.search.as_deref().unwrap_or_default();
            output(&filter_records(&records, query), flags.format)
        }
        ModuleCommands::Get { id } => output(&modules.show(*id).await?, flags.format),
        ModuleCommands::Create(args) => {
            let draft = draft(args);
            let saved = form::submit(draft.validate(), || modules.create(&draft)).await?;
            output(&saved, flags.format)
        }
        ModuleCommands::Update { id, fields } => {
            let draft = draft(fields);
            let saved = form::submit(draft.validate(), || modules.update(*id, &draft)).await?;
            output(&saved, flags.format)
        }
        ModuleCommands::Delete { id } => output(&modules.delete(*id).await?, flags.format),
    }
}

fn draft(args: &ModuleArgs) -> ModuleDraft {
    ModuleDraft {
        name: args.name.trim().to_string(),
        code: args.code.trim().to_string(),
        filiere_id: args.filiere,
        description: args.description.clone(),
    }
}
