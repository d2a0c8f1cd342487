//! Use-Case-Funktionen für das Editieren einer Site-Map.
//!
//! Aufgeteilt nach Operation:
//! - `add_vertex`: Vertex in einem Level anlegen
//! - `connect`: Wand, Tür oder Lane zwischen zwei Vertices
//! - `delete_vertex`: Vertex löschen (inkl. aller betroffenen Kanten)
//! - `levels`: Level anlegen, Gebäude leeren
//! - `lanes`: Flotten-Index einer Lane ändern
//! - `measurements`: Messstrecke anlegen
//!
//! Jede Funktion berechnet das nächste Building über [`EditSession::commit`]
//! und lässt die Session bei einem Fehler unverändert.

mod add_vertex;
mod connect;
mod delete_vertex;
mod lanes;
mod levels;
mod measurements;

pub use add_vertex::add_vertex;
pub use connect::{connect_vertices, NewEdge};
pub use delete_vertex::delete_vertex;
pub use lanes::set_lane_graph_index;
pub use levels::{add_level, clear};
pub use measurements::add_measurement;

use crate::app::{EditError, EditSession};
use crate::core::{Building, Level};

/// Höchster erlaubter Flotten-Index einer Lane.
pub const MAX_GRAPH_INDEX: u32 = 8;

fn level_mut<'a>(building: &'a mut Building, name: &str) -> Result<&'a mut Level, EditError> {
    building
        .level_mut(name)
        .ok_or_else(|| EditError::UnknownLevel(name.to_string()))
}

fn check_vertex(level: &Level, level_name: &str, index: usize) -> Result<(), EditError> {
    if index < level.vertex_count() {
        Ok(())
    } else {
        Err(EditError::VertexOutOfRange {
            level: level_name.to_string(),
            index,
            count: level.vertex_count(),
        })
    }
}

fn check_graph_index(graph_index: u32) -> Result<(), EditError> {
    if graph_index <= MAX_GRAPH_INDEX {
        Ok(())
    } else {
        Err(EditError::GraphIndexOutOfRange(graph_index))
    }
}

fn rejected<T>(
    session: &EditSession,
    action: &str,
    result: Result<T, EditError>,
) -> Result<T, EditError> {
    if let Err(e) = &result {
        log::warn!(
            "{} abgelehnt ({} Snapshots unverändert): {}",
            action,
            session.history().len(),
            e
        );
    }
    result
}
