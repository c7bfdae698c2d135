// Hide console window on Windows for release builds (GUI app).
// In debug builds, keep the console so panics/backtraces are visible.
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use bevy::prelude::*;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use dicespin::dice3d::{DiceScenePlugin, SceneConfig, DEFAULT_CONFIG_PATH};

/// Dice Spin - click the dice to roll it
#[derive(Parser)]
#[command(name = "dicespin")]
#[command(author, version, about = "Dice Spin - click a 3D dice to roll it")]
struct Cli {
    /// Path to the scene config (RON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dice model to load (glTF, relative to the assets folder)
    #[arg(long)]
    model: Option<String>,

    /// Roll sound to load (relative to the assets folder)
    #[arg(long)]
    sound: Option<String>,

    /// Do not play the roll sound
    #[arg(long)]
    mute: bool,

    /// Hide the camera position panel
    #[arg(long)]
    no_camera_panel: bool,

    /// Print the effective scene config and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    if cli.print_config {
        match config.to_ron() {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                std::process::exit(1);
            }
        }
        return;
    }

    run_scene(config);
}

/// Resolve the config file and apply command-line overrides.
fn load_config(cli: &Cli) -> Result<SceneConfig, String> {
    let (path, required) = match &cli.config {
        Some(path) => (path.clone(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    };

    let mut config = SceneConfig::load_from_file(&path, required)?;

    if let Some(model) = &cli.model {
        config.dice.model_path = model.clone();
    }
    if let Some(sound) = &cli.sound {
        config.sound.path = sound.clone();
    }
    if cli.mute {
        config.sound.enabled = false;
    }
    if cli.no_camera_panel {
        config.camera_panel.enabled = false;
    }

    config.validate()?;
    Ok(config)
}

fn run_scene(config: SceneConfig) {
    let window = &config.window;

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: window.title.clone(),
                        resolution: (window.width, window.height).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "info,wgpu=error,naga=warn".to_string(),
                    ..default()
                }),
        )
        .add_plugins(DiceScenePlugin { config })
        .run();
}
