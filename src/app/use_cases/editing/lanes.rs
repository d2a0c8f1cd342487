//! Use-Case: Flotten-Index einer Lane ändern.

use super::{check_graph_index, level_mut, rejected};
use crate::app::{EditError, EditSession};

/// Setzt den Flotten-Index der Lane an Position `lane_index`.
pub fn set_lane_graph_index(
    session: &mut EditSession,
    level_name: &str,
    lane_index: usize,
    graph_index: u32,
) -> Result<(), EditError> {
    let result = session.commit(|building| {
        check_graph_index(graph_index)?;
        let level = level_mut(building, level_name)?;
        let count = level.lanes.len();
        let lane = level
            .lanes
            .get_mut(lane_index)
            .ok_or_else(|| EditError::LaneOutOfRange {
                level: level_name.to_string(),
                index: lane_index,
                count,
            })?;
        lane.graph_index = graph_index;
        Ok(())
    });

    rejected(session, "Flotten-Index setzen", result)?;
    log::info!(
        "Lane {} in Level '{}' auf Flotte {} gesetzt",
        lane_index,
        level_name,
        graph_index
    );
    Ok(())
}
