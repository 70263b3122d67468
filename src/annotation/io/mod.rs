// src/annotation/io/mod.rs

use bevy::prelude::warn;
use directories_next::UserDirs;
use std::path::PathBuf;

// --- Submodule Declarations ---
pub mod reader;
pub mod writer;

// --- Shared Constants ---
pub const INPUT_FILE_EXTENSIONS: [&str; 4] = ["xlsx", "xls", "xlsb", "ods"];

// --- Shared Helper Functions ---

/// Directory exports land in when no `export_dir` is configured: the user's
/// Downloads folder, else the working directory.
pub fn default_export_dir() -> PathBuf {
    match UserDirs::new().and_then(|dirs| dirs.download_dir().map(|p| p.to_path_buf())) {
        Some(dir) => dir,
        None => {
            warn!("Could not determine the Downloads directory, exporting to '.' instead.");
            PathBuf::from(".")
        }
    }
}

pub use reader::load_conversations;
pub use writer::{export_file_name, write_export};
