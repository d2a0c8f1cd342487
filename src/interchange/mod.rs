//! Interchange-Service: zustandslose Request/Response-Schicht über dem Wire-Codec.
//!
//! Alle Fehler werden hier in strukturierte Antworten umgewandelt; kein
//! Fehler bricht den Prozess ab und keine Antwort enthält halbe Daten.

pub mod file_io;

use crate::core::Building;
use crate::wire::{parse_building, write_building, MapError, MapFormat};
use serde::{Deserialize, Serialize};

/// Export-Anfrage: Building plus Format-Tag
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportRequest {
    /// Zu exportierendes Building (named-field-Form)
    #[serde(default)]
    pub building: Option<Building>,
    /// `"yaml"` oder `"json"`
    #[serde(default)]
    pub format: Option<String>,
}

/// Import-Anfrage: Rohtext plus deklariertes Format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportRequest {
    /// Roher YAML- oder JSON-Text
    #[serde(default)]
    pub data: Option<String>,
    /// `"yaml"` oder `"json"`
    #[serde(default)]
    pub format: Option<String>,
}

/// Erfolgreicher Export: Text, Content-Type und vorgeschlagener Dateiname
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    /// Serialisierte Site-Map
    pub data: String,
    /// `application/x-yaml` oder `application/json`
    pub content_type: String,
    /// `building.yaml` oder `building.json`
    pub filename: String,
}

/// Strukturierte Fehlerantwort `{ success: false, error, kind }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureResponse {
    /// Immer `false`
    pub success: bool,
    /// Fehlermeldung (unverändert aus dem Fehler)
    pub error: String,
    /// Fehlerart (`parse`, `shape`, `index`, `validation`, `format`)
    pub kind: String,
}

impl FailureResponse {
    /// HTTP-Status für Transporte, die einen brauchen
    pub fn status_code(&self) -> u16 {
        400
    }
}

impl From<&MapError> for FailureResponse {
    fn from(error: &MapError) -> Self {
        Self {
            success: false,
            error: error.to_string(),
            kind: error.kind().to_string(),
        }
    }
}

impl From<MapError> for FailureResponse {
    fn from(error: MapError) -> Self {
        Self::from(&error)
    }
}

/// Antwort auf eine Import-Anfrage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImportResponse {
    /// `{ success: true, building }`
    Success {
        /// Immer `true`
        success: bool,
        /// Validiertes Building
        building: Building,
    },
    /// `{ success: false, error, kind }`
    Failure(FailureResponse),
}

impl ImportResponse {
    /// Prüft ob der Import erfolgreich war.
    pub fn is_success(&self) -> bool {
        matches!(self, ImportResponse::Success { .. })
    }

    /// Das importierte Building, falls erfolgreich
    pub fn building(&self) -> Option<&Building> {
        match self {
            ImportResponse::Success { building, .. } => Some(building),
            ImportResponse::Failure(_) => None,
        }
    }
}

impl From<Result<Building, MapError>> for ImportResponse {
    fn from(result: Result<Building, MapError>) -> Self {
        match result {
            Ok(building) => ImportResponse::Success {
                success: true,
                building,
            },
            Err(e) => ImportResponse::Failure(FailureResponse::from(e)),
        }
    }
}

/// Prüft, dass ein dekodiertes Building Name und Levels hat.
///
/// Lifts, die auf unbekannte Levels verweisen, werden nur protokolliert.
pub fn validate_building(building: &Building) -> Result<(), MapError> {
    if building.name.trim().is_empty() || building.levels.is_empty() {
        return Err(MapError::Validation("missing name or levels".into()));
    }
    for lift in &building.lifts {
        let dangling = lift.dangling_levels(building);
        if !dangling.is_empty() {
            log::warn!(
                "Lift '{}' verweist auf unbekannte Levels: {}",
                lift.name,
                dangling.join(", ")
            );
        }
    }
    Ok(())
}

/// Serialisiert ein Building im angegebenen Format.
pub fn export_with_format(
    building: &Building,
    format: MapFormat,
) -> Result<ExportPayload, MapError> {
    let data = write_building(building, format)?;
    log::info!(
        "Building '{}' als {} exportiert ({} Bytes)",
        building.name,
        format,
        data.len()
    );
    Ok(ExportPayload {
        data,
        content_type: format.content_type().to_string(),
        filename: format.file_name().to_string(),
    })
}

/// Serialisiert ein Building; `format` muss `"yaml"` oder `"json"` sein.
pub fn export_building(building: &Building, format: &str) -> Result<ExportPayload, MapError> {
    export_with_format(building, format.parse()?)
}

/// Dekodiert und validiert Text im angegebenen Format.
pub fn import_with_format(data: &str, format: MapFormat) -> Result<Building, MapError> {
    let building = parse_building(data, format)?;
    validate_building(&building)?;
    Ok(building)
}

/// Dekodiert und validiert Text; `format` muss `"yaml"` oder `"json"` sein.
pub fn import_building(data: &str, format: &str) -> Result<Building, MapError> {
    import_with_format(data, format.parse()?)
}

/// Bearbeitet eine Export-Anfrage.
pub fn export_map(request: &ExportRequest) -> Result<ExportPayload, FailureResponse> {
    let result = match (&request.building, &request.format) {
        (None, _) => Err(MapError::Validation("missing building data".into())),
        (_, None) => Err(MapError::Format(String::new())),
        (Some(building), Some(format)) => export_building(building, format),
    };
    result.map_err(|e| {
        log::warn!("Export fehlgeschlagen: {}", e);
        FailureResponse::from(e)
    })
}

/// Bearbeitet eine Import-Anfrage.
pub fn import_map(request: &ImportRequest) -> ImportResponse {
    let result = match (&request.data, &request.format) {
        (None, _) => Err(MapError::Validation("missing data".into())),
        (_, None) => Err(MapError::Format(String::new())),
        (Some(data), Some(format)) => import_building(data, format),
    };
    match &result {
        Ok(building) => log::info!(
            "Building '{}' importiert: {} Levels, {} Lifts",
            building.name,
            building.level_count(),
            building.lifts.len()
        ),
        Err(e) => log::warn!("Import fehlgeschlagen: {}", e),
    }
    ImportResponse::from(result)
}
