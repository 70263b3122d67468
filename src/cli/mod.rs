// src/cli/mod.rs
// Command line entry points that run without opening the window

pub mod inspect;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "conversation_annotator")]
#[command(
    about = "Conversation Annotator - bucket chatbot transcripts and export the results",
    long_about = None
)]
pub struct Cli {
    /// Workbook to open as soon as the window starts
    pub input: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print how a workbook groups into conversations, without the GUI
    Inspect {
        /// Path to the .xlsx/.xls/.xlsb/.ods workbook
        path: PathBuf,

        /// Fail on rows without an Id instead of grouping them together
        #[arg(long)]
        reject_missing_ids: bool,
    },
}
