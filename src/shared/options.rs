//! Zentrale Konfiguration für den RMF Site Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::app::DEFAULT_HISTORY_DEPTH;
use crate::wire::MapFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Session ─────────────────────────────────────────────────────────

/// Name neuer Gebäude (auch beim Export einer Editor-Szene).
pub const DEFAULT_BUILDING_NAME: &str = "RMF Site Map";
/// Name des Levels, das eine neue Session anlegt.
pub const DEFAULT_LEVEL_NAME: &str = "L1";

// ── Datei ───────────────────────────────────────────────────────────

/// Dateiname der Optionen neben der Binary.
pub const OPTIONS_FILE_NAME: &str = "rmf_site_editor.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `rmf_site_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── History ─────────────────────────────────────────────────
    /// Maximale Anzahl Snapshots der Undo/Redo-History
    pub history_depth: usize,

    // ── Neue Gebäude ────────────────────────────────────────────
    /// Name eines neuen oder aus der Szene erzeugten Gebäudes
    pub default_building_name: String,
    /// Name des Standard-Levels
    pub default_level_name: String,

    // ── Import/Export ───────────────────────────────────────────
    /// Format, wenn weder Anfrage noch Dateiendung eines vorgeben
    pub default_format: MapFormat,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            history_depth: DEFAULT_HISTORY_DEPTH,
            default_building_name: DEFAULT_BUILDING_NAME.to_string(),
            default_level_name: DEFAULT_LEVEL_NAME.to_string(),
            default_format: MapFormat::default(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("rmf_site_editor"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(OPTIONS_FILE_NAME)
    }
}
