// src/settings/io.rs

use bevy::log::{debug, info, warn};
use directories_next::ProjectDirs;
use std::fs;
use std::io::{self, BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use super::AppSettings;

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "AnnotatorOrg";
const APPLICATION: &str = "ConversationAnnotator";
const CONFIG_FILE: &str = "app_settings.json";

/// `app_settings.json` inside the per-user config directory, created on demand.
pub fn settings_path() -> io::Result<PathBuf> {
    let proj_dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or_else(|| {
        io::Error::new(
            ErrorKind::NotFound,
            "Could not determine project directories for app settings.",
        )
    })?;
    let config_dir = proj_dirs.config_dir();
    fs::create_dir_all(config_dir)?;
    Ok(config_dir.join(CONFIG_FILE))
}

/// Reads settings from `path`. A missing file yields the defaults; a file
/// that does not parse is an `InvalidData` error.
pub fn read_settings(path: &Path) -> io::Result<AppSettings> {
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("AppSettings: No settings at {:?}, using defaults.", path);
            return Ok(AppSettings::default());
        }
        Err(e) => return Err(e),
    };

    let settings: AppSettings = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        warn!("AppSettings: Could not parse {:?}: {}", path, e);
        io::Error::new(
            ErrorKind::InvalidData,
            format!("Failed to parse settings file: {}", e),
        )
    })?;
    info!("AppSettings: Loaded settings from {:?}.", path);
    Ok(settings)
}

pub fn write_settings(path: &Path, settings: &AppSettings) -> io::Result<()> {
    debug!("AppSettings: Saving settings to {:?}", path);
    let writer = BufWriter::new(fs::File::create(path)?);
    serde_json::to_writer_pretty(writer, settings).map_err(io::Error::other)
}
