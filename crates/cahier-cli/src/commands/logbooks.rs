use cahier_core::drafts::FlagRequest;
use cahier_core::filter::{StatusCounts, filter_logbooks};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LogbookCommands;
use crate::commands::shared::list;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cahier logbooks`.
pub async fn handle(
    action: &LogbookCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let logbooks = ctx.client.logbooks();
    match action {
        LogbookCommands::List {
            page,
            status,
            search,
        } => {
            let page = ctx.page(*page);
            let records = list::load(|| logbooks.list(page)).await?;
            let query = search.as_deref().unwrap_or_default();
            output(&filter_logbooks(&records, query, *status), flags.format)
        }
        LogbookCommands::Summary { page } => {
            let page = ctx.page(*page);
            let records = list::load(|| logbooks.list(page)).await?;
            output(&StatusCounts::tally(&records), flags.format)
        }
        LogbookCommands::Validate { id } => output(&logbooks.validate(*id).await?, flags.format),
        LogbookCommands::Flag { id, reason } => {
            let reason = reason.trim();
            if reason.is_empty() {
                anyhow::bail!("a reason is required to flag a logbook");
            }
            let ack = logbooks.flag(*id, &FlagRequest::new(reason)).await?;
            output(&ack, flags.format)
        }
    }
}
