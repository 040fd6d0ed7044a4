use cahier_core::enums::SessionType;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

/// Commands of the signed-in professor.
#[derive(Clone, Debug, Subcommand)]
pub enum MeCommands {
    /// Classes assigned to me.
    Assignments,
    /// Logbooks I submitted.
    Logbooks,
    /// Submit a logbook entry for one of my assignments.
    Log(MeLogArgs),
}

#[derive(Clone, Debug, Args)]
pub struct MeLogArgs {
    /// Assignment id (see `cahier me assignments`).
    #[arg(long)]
    pub assignment: u64,
    /// Session date, YYYY-MM-DD (defaults to today).
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// cours or TP.
    #[arg(long = "type", default_value = "cours")]
    pub session_type: SessionType,
    /// What was covered.
    #[arg(long)]
    pub content: String,
    #[arg(long)]
    pub remarks: Option<String>,
}
