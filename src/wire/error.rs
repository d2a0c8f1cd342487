//! Fehlerarten des Wire-Codecs und der Interchange-Schicht.

use super::MapFormat;
use thiserror::Error;

/// Alle behebbaren Fehler beim Import/Export einer Site-Map.
///
/// `Shape` und `Index` nennen immer den Bereich (Level oder Lift) und die
/// Entity-Familie inklusive Position, z.B. `level 'L1', walls[3]`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    /// Eingabe ist syntaktisch kein gültiges YAML/JSON
    #[error("Invalid {format} format: {message}")]
    Parse {
        /// Betroffenes Format
        format: MapFormat,
        /// Meldung des Parsers
        message: String,
    },
    /// Falsche Arität oder falscher Primitivtyp einer Entity
    #[error("{scope}, {family}: {message}")]
    Shape {
        /// z.B. `level 'L1'`
        scope: String,
        /// z.B. `doors[2]`
        family: String,
        /// Beschreibung
        message: String,
    },
    /// Verweis auf einen nicht existierenden Vertex
    #[error("{scope}, {family}: {message}")]
    Index {
        /// z.B. `level 'L1'`
        scope: String,
        /// z.B. `lanes[0]`
        family: String,
        /// Beschreibung
        message: String,
    },
    /// Strukturell leeres oder unbrauchbares Gebäude
    #[error("Invalid building structure: {0}")]
    Validation(String),
    /// Weder "yaml" noch "json"
    #[error("Unsupported format '{0}'. Use 'yaml' or 'json'.")]
    Format(String),
}

impl MapError {
    /// Stabiler Kurzname der Fehlerart für strukturierte Antworten
    pub fn kind(&self) -> &'static str {
        match self {
            MapError::Parse { .. } => "parse",
            MapError::Shape { .. } => "shape",
            MapError::Index { .. } => "index",
            MapError::Validation(_) => "validation",
            MapError::Format(_) => "format",
        }
    }

    /// Index-Fehler für einen Vertex-Index außerhalb des Levels
    pub fn index_out_of_range(
        scope: impl Into<String>,
        family: impl Into<String>,
        index: usize,
        vertex_count: usize,
    ) -> Self {
        MapError::Index {
            scope: scope.into(),
            family: family.into(),
            message: format!(
                "vertex index {index} out of range ({vertex_count} vertices)"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_scope_and_family() {
        let err = MapError::index_out_of_range("level 'L1'", "walls[3]", 9, 4);
        assert_eq!(
            err.to_string(),
            "level 'L1', walls[3]: vertex index 9 out of range (4 vertices)"
        );
        assert_eq!(err.kind(), "index");
    }

    #[test]
    fn format_error_matches_transport_wording() {
        let err = MapError::Format("xml".into());
        assert_eq!(
            err.to_string(),
            "Unsupported format 'xml'. Use 'yaml' or 'json'."
        );
        assert_eq!(err.kind(), "format");
    }
}
