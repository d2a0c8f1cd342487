//! Parser für die positionale Wire-Darstellung einer Site-Map (YAML oder JSON).

mod entities;
#[cfg(test)]
mod tests;

use super::{MapError, MapFormat};
use crate::core::Building;
use indexmap::IndexMap;
use serde_json::Value;

/// Parsed eine Site-Map aus YAML- oder JSON-Text.
///
/// Schlägt die Dekodierung einer einzelnen Entity fehl, wird kein teilweise
/// befülltes Gebäude zurückgegeben.
pub fn parse_building(input: &str, format: MapFormat) -> Result<Building, MapError> {
    let document = read_document(input, format)?;
    decode_building(document)
}

/// Liest den Text in einen generischen Wertebaum (nur Syntax, keine Struktur).
pub fn read_document(input: &str, format: MapFormat) -> Result<Value, MapError> {
    let parsed = match format {
        MapFormat::Yaml => serde_yaml::from_str::<Value>(input).map_err(|e| e.to_string()),
        MapFormat::Json => serde_json::from_str::<Value>(input).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| MapError::Parse { format, message })
}

/// Dekodiert einen Wertebaum in ein Building.
///
/// Fehlende optionale Felder erhalten ihre Standardwerte. Ein Dokument, das
/// keine Map ist, oder ein `levels`-Feld, das keine Map ist, ergibt einen
/// Validierungsfehler.
pub fn decode_building(document: Value) -> Result<Building, MapError> {
    let mut root = match document {
        Value::Object(map) => map,
        Value::Null => return Err(MapError::Validation("document is empty".into())),
        _ => {
            return Err(MapError::Validation(
                "document is not a mapping".into(),
            ))
        }
    };

    let name = match root.remove("name") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(name)) => name,
        Some(_) => return Err(MapError::Validation("name must be a string".into())),
    };

    let mut levels = IndexMap::new();
    match root.remove("levels") {
        None | Some(Value::Null) => {}
        Some(Value::Object(raw_levels)) => {
            for (level_name, raw_level) in raw_levels {
                let level = entities::decode_level(&level_name, raw_level)?;
                levels.insert(level_name, level);
            }
        }
        Some(_) => return Err(MapError::Validation("levels must be a mapping".into())),
    }

    let lifts = match root.remove("lifts") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(raw_lifts)) => raw_lifts
            .into_iter()
            .enumerate()
            .map(|(position, raw_lift)| entities::decode_lift(position, raw_lift))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => {
            return Err(MapError::Shape {
                scope: "building".into(),
                family: "lifts".into(),
                message: "expected a sequence".into(),
            })
        }
    };

    for key in root.keys() {
        log::debug!("Unbekannter Gebäude-Key '{}' wird ignoriert", key);
    }

    log::debug!(
        "Building '{}' dekodiert: {} Levels, {} Lifts",
        name,
        levels.len(),
        lifts.len()
    );

    Ok(Building {
        name,
        levels,
        lifts,
    })
}
