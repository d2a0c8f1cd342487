//! Dateiaktionen: Site-Maps von der Platte laden und speichern.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use super::{export_with_format, import_with_format};
use crate::core::Building;
use crate::wire::MapFormat;
use anyhow::Context;
use std::path::Path;

/// Format einer Datei: Endung, sonst `fallback`.
pub fn format_for_path(path: &Path, fallback: MapFormat) -> MapFormat {
    MapFormat::from_path(path).unwrap_or(fallback)
}

/// Lädt und validiert eine Site-Map.
pub fn load_building(path: &Path, fallback: MapFormat) -> anyhow::Result<Building> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Datei nicht lesbar: {}", path.display()))?;
    let format = format_for_path(path, fallback);
    let building = import_with_format(&content, format)
        .with_context(|| format!("Import von {} fehlgeschlagen", path.display()))?;

    log::info!(
        "Building '{}' geladen aus {}: {} Levels, {} Vertices, {} Kanten",
        building.name,
        path.display(),
        building.level_count(),
        building.vertex_count(),
        building.edge_count()
    );
    Ok(building)
}

/// Speichert eine Site-Map im Format der Dateiendung.
pub fn save_building(building: &Building, path: &Path, fallback: MapFormat) -> anyhow::Result<()> {
    let format = format_for_path(path, fallback);
    let payload = export_with_format(building, format)
        .with_context(|| format!("Export nach {} fehlgeschlagen", path.display()))?;
    std::fs::write(path, payload.data)
        .with_context(|| format!("Datei nicht schreibbar: {}", path.display()))?;
    log::info!("Building '{}' gespeichert nach {}", building.name, path.display());
    Ok(())
}
