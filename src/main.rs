// src/main.rs

#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use bevy::{
    log::LogPlugin,
    prelude::*,
    window::WindowPlugin,
    winit::{UpdateMode, WinitSettings},
};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use bevy_egui::EguiPlugin;
use bevy_tokio_tasks::TokioTasksPlugin;

mod annotation;
mod cli;
mod settings;
mod ui;

use annotation::events::RequestLoadWorkbook;
use annotation::{AnnotationPlugin, MissingIdPolicy};
use cli::{Cli, Commands};
use settings::SettingsPlugin;
use ui::AnnotatorUiPlugin;

/// Workbook passed on the command line, opened once the app has started.
#[derive(Resource, Debug, Clone)]
struct StartupInput(PathBuf);

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(Commands::Inspect {
        path,
        reject_missing_ids,
    }) = cli.command
    {
        let policy = if reject_missing_ids {
            MissingIdPolicy::Reject
        } else {
            settings::load_app_settings().missing_id_policy
        };
        return match cli::inspect::run(&path, policy) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let mut app = App::new();
    app.insert_resource(WinitSettings {
        focused_mode: UpdateMode::Continuous,
        unfocused_mode: UpdateMode::reactive_low_power(Duration::from_secs_f32(1.0 / 5.0)),
    })
    .add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Conversation Annotator".into(),
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                level: bevy::log::Level::INFO,
                filter: "wgpu=error,naga=warn,bevy_tokio_tasks=warn".to_string(),
                ..default()
            }),
    )
    .add_plugins(EguiPlugin {
        enable_multipass_for_primary_context: true,
    })
    .add_plugins(TokioTasksPlugin::default())
    .add_plugins(SettingsPlugin)
    .add_plugins(AnnotationPlugin)
    .add_plugins(AnnotatorUiPlugin);

    if let Some(input) = cli.input {
        app.insert_resource(StartupInput(input))
            .add_systems(Startup, open_startup_input);
    }

    app.run();
    ExitCode::SUCCESS
}

fn open_startup_input(input: Res<StartupInput>, mut load_writer: EventWriter<RequestLoadWorkbook>) {
    info!("Opening '{}' from the command line.", input.0.display());
    load_writer.write(RequestLoadWorkbook {
        path: input.0.clone(),
    });
}
