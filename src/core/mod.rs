//! Core-Domänentypen: Building, Levels, Vertices, Kanten, Floors, Lifts.

/// Core-Datenmodell einer Site-Map
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - Building: Container für alle Levels und Lifts
/// - Level: Vertices plus Wände, Türen, Lanes, Floors und Messstrecken
/// - Edge-Familien: referenzieren Vertices über ihre Position im Level
pub mod building;
pub mod edge;
pub mod level;
pub mod params;

pub use building::{Building, Lift};
pub use edge::{Door, DoorType, Lane, LaneOrientation, Measurement, VertexEdge, Wall};
pub use level::{DanglingIndex, Drawing, Floor, Level, Vertex, DEFAULT_FLOOR_TEXTURE};
pub use params::Params;
