//! Use-Case: Messstrecke zwischen zwei Vertices anlegen.

use super::{check_vertex, level_mut, rejected};
use crate::app::{EditError, EditSession};
use crate::core::Measurement;

/// Legt eine Messstrecke an.
///
/// Ohne `distance` wird der euklidische Abstand der beiden Vertices verwendet.
pub fn add_measurement(
    session: &mut EditSession,
    level_name: &str,
    start: usize,
    end: usize,
    distance: Option<f64>,
) -> Result<f64, EditError> {
    let result = session.commit(|building| {
        if start == end {
            return Err(EditError::SelfLoop(start));
        }
        let level = level_mut(building, level_name)?;
        check_vertex(level, level_name, start)?;
        check_vertex(level, level_name, end)?;

        let distance = match distance {
            Some(d) => d,
            None => level
                .distance_between(start, end)
                .ok_or(EditError::VertexOutOfRange {
                    level: level_name.to_string(),
                    index: start.max(end),
                    count: level.vertex_count(),
                })?,
        };
        if !distance.is_finite() {
            return Err(EditError::NonFiniteCoordinate);
        }
        level.measurements.push(Measurement {
            start_vertex_index: start,
            end_vertex_index: end,
            distance,
        });
        Ok(distance)
    });

    let distance = rejected(session, "Messstrecke anlegen", result)?;
    log::info!(
        "Messstrecke {}→{} ({:.3} m) in Level '{}' angelegt",
        start,
        end,
        distance,
        level_name
    );
    Ok(distance)
}
