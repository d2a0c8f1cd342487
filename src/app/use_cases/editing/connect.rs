//! Use-Case: Kanten zwischen zwei Vertices erstellen.

use super::{check_graph_index, check_vertex, level_mut, rejected};
use crate::app::{EditError, EditSession};
use crate::core::{Door, DoorType, Lane, LaneOrientation, Wall};

/// Art der neuen Kante
#[derive(Debug, Clone, PartialEq)]
pub enum NewEdge {
    /// Wand
    Wall,
    /// Tür mit Namen und Typ
    Door {
        /// Türname (nicht leer)
        name: String,
        /// Türtyp
        door_type: DoorType,
    },
    /// Lane für eine Flotte
    Lane {
        /// Flotten-Index (0..=8)
        graph_index: u32,
        /// Fahrrichtung
        orientation: LaneOrientation,
    },
}

impl NewEdge {
    /// Bidirektionale Lane für die angegebene Flotte
    pub fn lane(graph_index: u32) -> Self {
        NewEdge::Lane {
            graph_index,
            orientation: LaneOrientation::default(),
        }
    }

    /// Drehtür mit Namen
    pub fn door(name: impl Into<String>) -> Self {
        NewEdge::Door {
            name: name.into(),
            door_type: DoorType::default(),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            NewEdge::Wall => "Wand",
            NewEdge::Door { .. } => "Tür",
            NewEdge::Lane { .. } => "Lane",
        }
    }
}

/// Verbindet zwei Vertices eines Levels mit einer neuen Kante.
///
/// Validiert gegen Self-Loops, ungültige Indizes, leere Türnamen und
/// Flotten-Indizes außerhalb von `0..=8`.
pub fn connect_vertices(
    session: &mut EditSession,
    level_name: &str,
    start: usize,
    end: usize,
    edge: NewEdge,
) -> Result<(), EditError> {
    let label = edge.label();
    let result = session.commit(|building| {
        if start == end {
            return Err(EditError::SelfLoop(start));
        }
        let level = level_mut(building, level_name)?;
        check_vertex(level, level_name, start)?;
        check_vertex(level, level_name, end)?;

        match edge {
            NewEdge::Wall => level.walls.push(Wall::new(start, end)),
            NewEdge::Door { name, door_type } => {
                if name.trim().is_empty() {
                    return Err(EditError::EmptyDoorName);
                }
                level.doors.push(Door::new(start, end, name, door_type));
            }
            NewEdge::Lane {
                graph_index,
                orientation,
            } => {
                check_graph_index(graph_index)?;
                let mut lane = Lane::new(start, end, graph_index);
                lane.orientation = orientation;
                level.lanes.push(lane);
            }
        }
        Ok(())
    });

    rejected(session, label, result)?;
    log::info!(
        "{} {}→{} in Level '{}' erstellt",
        label,
        start,
        end,
        level_name
    );
    Ok(())
}
