use cahier_core::enums::StatusFilter;
use clap::Subcommand;

/// Logbook review commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LogbookCommands {
    /// List submitted logbooks.
    List {
        #[arg(long)]
        page: Option<u32>,
        /// all, pending or validated.
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        /// Filter on professor, module or groupe name.
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Count logbooks per status on a page.
    Summary {
        #[arg(long)]
        page: Option<u32>,
    },
    /// Mark a logbook as validated.
    Validate { id: u64 },
    /// Flag a logbook with a reason.
    Flag {
        id: u64,
        #[arg(long)]
        reason: String,
    },
}
