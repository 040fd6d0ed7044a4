use cahier_core::drafts::ProfessorDraft;
use cahier_core::filter::filter_records;
use cahier_core::validation::FormMode;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProfessorCommands;
use crate::cli::subcommands::professors::ProfessorArgs;
use crate::commands::shared::{form, list};
use crate::context::AppContext;
use crate::output::output;

/// Handle `cahier professors`.
pub async fn handle(
    action: &ProfessorCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let professors = ctx.client.professors();
    match action {
        ProfessorCommands::List(args) => {
            let page = ctx.page(args.page);
            let records = list::load(|| professors.list(page)).await?;
            let query = args.search.as_deref().unwrap_or_default();
            output(&filter_records(&records, query), flags.format)
        }
        ProfessorCommands::Get { id } => output(&professors.show(*id).await?, flags.format),
        ProfessorCommands::Create(args) => {
            let draft = draft(args);
            let saved = form::submit(draft.validate(FormMode::Create), || {
                professors.create(&draft)
            })
            .await?;
            output(&saved, flags.format)
        }
        ProfessorCommands::Update { id, fields } => {
            let draft = draft(fields).without_blank_password();
            let saved = form::submit(draft.validate(FormMode::Edit), || {
                professors.update(*id, &draft)
            })
            .await?;
            output(&saved, flags.format)
        }
        ProfessorCommands::Delete { id } => output(&professors.delete(*id).await?, flags.format),
    }
}

fn draft(args: &ProfessorArgs) -> ProfessorDraft {
    ProfessorDraft {
        name: args.name.trim().to_string(),
        email: args.email.trim().to_string(),
        password: args.password.clone(),
        role: args.role,
    }
}
