//! Serialisierungsformate der Site-Map (YAML und JSON).

use super::MapError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Format der Wire-Darstellung. Beide tragen dieselbe positionale Struktur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapFormat {
    /// Menschenlesbares YAML (`building.yaml`)
    #[default]
    Yaml,
    /// JSON-Spiegel ohne weitere Transformation
    Json,
}

impl MapFormat {
    /// Format-Tag wie im Request
    pub fn as_str(self) -> &'static str {
        match self {
            MapFormat::Yaml => "yaml",
            MapFormat::Json => "json",
        }
    }

    /// Content-Type der Export-Antwort
    pub fn content_type(self) -> &'static str {
        match self {
            MapFormat::Yaml => "application/x-yaml",
            MapFormat::Json => "application/json",
        }
    }

    /// Vorgeschlagener Dateiname der Export-Antwort
    pub fn file_name(self) -> &'static str {
        match self {
            MapFormat::Yaml => "building.yaml",
            MapFormat::Json => "building.json",
        }
    }

    /// Erkennt das Format an der Dateiendung (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(MapFormat::Json),
            "yaml" | "yml" => Some(MapFormat::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for MapFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapFormat::Yaml => f.write_str("YAML"),
            MapFormat::Json => f.write_str("JSON"),
        }
    }
}

impl FromStr for MapFormat {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yaml" => Ok(MapFormat::Yaml),
            "json" => Ok(MapFormat::Json),
            other => Err(MapError::Format(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_only_known_tags() {
        assert_eq!("yaml".parse::<MapFormat>(), Ok(MapFormat::Yaml));
        assert_eq!("json".parse::<MapFormat>(), Ok(MapFormat::Json));
        assert!(matches!(
            "YAML".parse::<MapFormat>(),
            Err(MapError::Format(_))
        ));
    }

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(
            MapFormat::from_path(Path::new("site/office.building.yaml")),
            Some(MapFormat::Yaml)
        );
        assert_eq!(
            MapFormat::from_path(Path::new("map.JSON")),
            Some(MapFormat::Json)
        );
        assert_eq!(MapFormat::from_path(Path::new("map.txt")), None);
    }

    #[test]
    fn content_type_and_file_name_match_format() {
        assert_eq!(MapFormat::Yaml.content_type(), "application/x-yaml");
        assert_eq!(MapFormat::Json.file_name(), "building.json");
    }
}
