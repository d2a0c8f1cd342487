//! Fehler abgelehnter Editor-Aktionen.

use thiserror::Error;

/// Grund, warum eine Editor-Aktion abgelehnt wurde.
///
/// Eine abgelehnte Aktion hinterlässt keinen History-Eintrag und ändert
/// das aktuelle Building nicht.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// Level existiert nicht
    #[error("unknown level '{0}'")]
    UnknownLevel(String),
    /// Level-Name ist bereits vergeben
    #[error("level '{0}' already exists")]
    DuplicateLevel(String),
    /// Leerer Level-Name
    #[error("level name must not be empty")]
    EmptyLevelName,
    /// Vertex-Index außerhalb des Levels
    #[error("vertex index {index} out of range on level '{level}' ({count} vertices)")]
    VertexOutOfRange {
        /// Level-Name
        level: String,
        /// Angefragter Index
        index: usize,
        /// Anzahl Vertices
        count: usize,
    },
    /// Vertex-Name ist im Level bereits vergeben
    #[error("vertex name '{name}' already used on level '{level}'")]
    DuplicateVertexName {
        /// Level-Name
        level: String,
        /// Doppelter Name
        name: String,
    },
    /// Lane-Index außerhalb des Levels
    #[error("lane index {index} out of range on level '{level}' ({count} lanes)")]
    LaneOutOfRange {
        /// Level-Name
        level: String,
        /// Angefragter Index
        index: usize,
        /// Anzahl Lanes
        count: usize,
    },
    /// Kante von einem Vertex zu sich selbst
    #[error("self-loop on vertex {0} is not allowed")]
    SelfLoop(usize),
    /// Flotten-Index außerhalb des erlaubten Bereichs
    #[error("graph index {0} outside 0..={max}", max = super::use_cases::editing::MAX_GRAPH_INDEX)]
    GraphIndexOutOfRange(u32),
    /// Tür ohne Namen
    #[error("door name must not be empty")]
    EmptyDoorName,
    /// Koordinate ist NaN oder unendlich
    #[error("vertex coordinates must be finite")]
    NonFiniteCoordinate,
}
