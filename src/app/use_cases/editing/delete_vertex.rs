//! Use-Case: Vertex löschen (inkl. aller betroffenen Kanten).

use super::{check_vertex, level_mut, rejected};
use crate::app::{EditError, EditSession};
use crate::core::Vertex;

/// Löscht den Vertex an `index` und gibt ihn zurück.
///
/// Wände, Türen, Lanes und Messstrecken, die ihn berühren, werden entfernt;
/// alle höheren Indizes rücken im selben Schritt um eins nach unten.
pub fn delete_vertex(
    session: &mut EditSession,
    level_name: &str,
    index: usize,
) -> Result<Vertex, EditError> {
    let result = session.commit(|building| {
        let level = level_mut(building, level_name)?;
        check_vertex(level, level_name, index)?;
        let edges_before = level.edge_count();
        let removed = level
            .remove_vertex(index)
            .ok_or_else(|| EditError::VertexOutOfRange {
                level: level_name.to_string(),
                index,
                count: level.vertex_count(),
            })?;
        log::debug!(
            "{} Kanten mit Vertex {} entfernt",
            edges_before - level.edge_count(),
            index
        );
        Ok(removed)
    });

    let removed = rejected(session, "Vertex löschen", result)?;
    log::info!("Vertex {} aus Level '{}' gelöscht", index, level_name);
    Ok(removed)
}
