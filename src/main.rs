//! RMF Site Editor (Kommandozeile).
//!
//! Konvertiert, prüft und projiziert RMF-Site-Maps im YAML- oder JSON-Format.

use anyhow::Context;
use clap::{Parser, Subcommand};
use rmf_site_editor::interchange::file_io::{load_building, save_building};
use rmf_site_editor::{EditorOptions, EditorScene};
use std::path::PathBuf;

/// RMF Site Editor
#[derive(Parser, Debug)]
#[command(name = "rmf-site-editor")]
#[command(about = "RMF site map converter and validator", long_about = None)]
struct Args {
    /// Pfad zur Optionen-Datei (Standard: neben der Binary)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Liest eine Site-Map und schreibt sie im Format der Zieldatei
    Convert {
        /// Eingabedatei (.yaml/.yml/.json)
        input: PathBuf,
        /// Ausgabedatei (.yaml/.yml/.json)
        output: PathBuf,
    },
    /// Prüft eine Site-Map und gibt eine Zusammenfassung aus
    Validate {
        /// Eingabedatei
        input: PathBuf,
    },
    /// Gibt die Editor-Projektion (points + segments) als JSON aus
    Project {
        /// Eingabedatei
        input: PathBuf,
        /// Level der Projektion (Standard: Standard-Level, sonst erstes Level)
        #[arg(long)]
        level: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren (RUST_LOG überschreibt den Standard)
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    log::info!("RMF Site Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let config_path = args.config.unwrap_or_else(EditorOptions::config_path);
    let options = EditorOptions::load_from_file(&config_path);

    match args.command {
        Command::Convert { input, output } => {
            let building = load_building(&input, options.default_format)?;
            save_building(&building, &output, options.default_format)?;
        }
        Command::Validate { input } => {
            let building = load_building(&input, options.default_format)?;
            println!(
                "{}: {} Levels, {} Vertices, {} Kanten, {} Lifts",
                building.name,
                building.level_count(),
                building.vertex_count(),
                building.edge_count(),
                building.lifts.len()
            );
        }
        Command::Project { input, level } => {
            let building = load_building(&input, options.default_format)?;
            let level = level.unwrap_or_else(|| options.default_level_name.clone());
            let scene = EditorScene::from_building(&building, &level);
            let json = serde_json::to_string_pretty(&scene)
                .context("Editor-Projektion nicht serialisierbar")?;
            println!("{json}");
        }
    }

    Ok(())
}
