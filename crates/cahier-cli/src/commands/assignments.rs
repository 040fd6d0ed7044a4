use anyhow::Context;
use cahier_core::drafts::AssignmentDraft;
use cahier_core::filter::{Directory, filter_assignments};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AssignmentCommands;
use crate::cli::subcommands::assignments::AssignmentArgs;
use crate::commands::shared::{form, list};
use crate::context::AppContext;
use crate::output::output;

/// Handle `cahier assignments`.
///
/// Listing resolves ids against the first page of each lookup collection;
/// references outside that page show as "Unknown".
pub async fn handle(
    action: &AssignmentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let assignments = ctx.client.assignments();
    match action {
        AssignmentCommands::List { page, search } => {
            let page = ctx.page(*page);
            let (records, catalog) = tokio::try_join!(
                list::load(|| assignments.list(page)),
                async {
                    ctx.client
                        .catalog()
                        .await
                        .context("failed to load professors, modules, matières and groupes")
                },
            )?;
            let directory = Directory {
                professors: &catalog.professors,
                modules: &catalog.modules,
                matieres: &catalog.matieres,
                groupes: &catalog.groupes,
            };
            let rows = filter_assignments(
                &records,
                &directory,
                search.as_deref().unwrap_or_default(),
            );
            output(&rows, flags.format)
        }
        AssignmentCommands::Create(args) => {
            let draft = draft(args);
            let selected = match draft.matiere_id {
                Some(id) => vec![
                    ctx.client
                        .matieres()
                        .show(id)
                        .await
                        .with_context(|| format!("failed to load matière {id}"))?,
                ],
                None => Vec::new(),
            };
            let saved =
                form::submit(draft.validate(&selected), || assignments.create(&draft)).await?;
            output(&saved, flags.format)
        }
        AssignmentCommands::Delete { id } => {
            output(&assignments.delete(*id).await?, flags.format)
        }
    }
}

const fn draft(args: &AssignmentArgs) -> AssignmentDraft {
    AssignmentDraft {
        user_id: args.user,
        module_id: args.module,
        matiere_id: args.matiere,
        groupe_id: args.groupe,
    }
}
