//! Use-Case: Neuen Vertex in einem Level anlegen.

use super::{level_mut, rejected};
use crate::app::{EditError, EditSession};
use crate::core::Vertex;

/// Hängt einen Vertex an das Level an und gibt seine Position zurück.
///
/// Ein Name darf pro Level nur einmal vorkommen.
pub fn add_vertex(
    session: &mut EditSession,
    level_name: &str,
    vertex: Vertex,
) -> Result<usize, EditError> {
    let result = if !(vertex.x.is_finite() && vertex.y.is_finite() && vertex.z.is_finite()) {
        Err(EditError::NonFiniteCoordinate)
    } else {
        session.commit(|building| {
            let level = level_mut(building, level_name)?;
            if let Some(name) = vertex.name.as_deref() {
                if level.find_vertex_by_name(name).is_some() {
                    return Err(EditError::DuplicateVertexName {
                        level: level_name.to_string(),
                        name: name.to_string(),
                    });
                }
            }
            level.vertices.push(vertex);
            Ok(level.vertex_count() - 1)
        })
    };

    let index = rejected(session, "Vertex anlegen", result)?;
    log::info!("Vertex {} in Level '{}' angelegt", index, level_name);
    Ok(index)
}
