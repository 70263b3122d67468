// src/settings/mod.rs
pub mod io;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::annotation::io::default_export_dir;
use crate::annotation::MissingIdPolicy;
use io::{read_settings, settings_path, write_settings};

pub const DEFAULT_STATUS_DURATION_SECS: f32 = 3.0;

#[derive(Resource, Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// Where exports are written; the Downloads folder when unset.
    pub export_dir: Option<PathBuf>,
    /// Directory of the last successfully loaded workbook.
    pub last_input_dir: Option<PathBuf>,
    pub status_duration_secs: f32,
    pub missing_id_policy: MissingIdPolicy,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            export_dir: None,
            last_input_dir: None,
            status_duration_secs: DEFAULT_STATUS_DURATION_SECS,
            missing_id_policy: MissingIdPolicy::default(),
        }
    }
}

impl AppSettings {
    pub fn resolved_export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(default_export_dir)
    }
}

/// Loads `AppSettings` at startup and writes them back whenever they change.
pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(load_app_settings())
            .add_systems(Update, persist_settings_on_change);
    }
}

pub(crate) fn load_app_settings() -> AppSettings {
    match settings_path().and_then(|path| read_settings(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            error!("AppSettings: {}. Using defaults.", e);
            AppSettings::default()
        }
    }
}

fn persist_settings_on_change(settings: Res<AppSettings>) {
    if settings.is_changed() && !settings.is_added() {
        if let Err(e) = settings_path().and_then(|path| write_settings(&path, &settings)) {
            error!("AppSettings: Failed to save settings: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{"export_dir":"/tmp/out"}"#).unwrap();
        assert_eq!(settings.export_dir, Some(PathBuf::from("/tmp/out")));
        assert_eq!(settings.status_duration_secs, DEFAULT_STATUS_DURATION_SECS);
        assert_eq!(settings.missing_id_policy, MissingIdPolicy::Group);
    }

    #[test]
    fn policy_serializes_snake_case() {
        let settings = AppSettings {
            missing_id_policy: MissingIdPolicy::Reject,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains(r#""missing_id_policy":"reject""#));
    }
}
