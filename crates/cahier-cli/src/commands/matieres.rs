use cahier_core::drafts::MatiereDraft;
use cahier_core::filter::filter_records;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MatiereCommands;
use crate::cli::subcommands::matieres::MatiereArgs;
use crate::commands::shared::{form, list};
use crate::context::AppContext;
use crate::output::output;

/// Handle `cahier matieres`.
pub async fn handle(
    action: &MatiereCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let matieres = ctx.client.matieres();
    match action {
        MatiereCommands::List(args) => {
            let page = ctx.page(args.page);
            let records = list::load(|| matieres.list(page)).await?;
            let query = args.search.as_deref().unwrap_or_default();
            output(&filter_records(&records, query), flags.format)
        }
        MatiereCommands::Get { id } => output(&matieres.show(*id).await?, flags.format),
        MatiereCommands::Create(args) => {
            let draft = draft(args);
            let saved = form::submit(draft.validate(), || matieres.create(&draft)).await?;
            output(&saved, flags.format)
        }
        MatiereCommands::Update { id, fields } => {
            let draft = draft(fields);
            let saved = form::submit(draft.validate(), || matieres.update(*id, &draft)).await?;
            output(&saved, flags.format)
        }
        MatiereCommands::Delete { id } => output(&matieres.delete(*id).await?, flags.format),
    }
}

fn draft(args: &MatiereArgs) -> MatiereDraft {
    MatiereDraft {
        name: args.name.trim().to_string(),
        code: args.code.trim().to_string(),
        module_id: args.module,
        hours: args.hours,
        coefficient: args.coefficient,
        description: args.description.clone(),
    }
}
