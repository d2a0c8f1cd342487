//! Projektion zwischen Building und dem vereinfachten Editor-Snapshot
//! (`points` + `segments`), wie ihn die Editor-Oberfläche persistiert.

use super::MapError;
use crate::core::params::{flag_is_set, single_flag, PARAM_IS_CHARGER, PARAM_IS_PARKING_SPOT};
use crate::core::{Building, Door, DoorType, Lane, Level, Vertex, VertexEdge, Wall};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Art eines Szenen-Punkts (abgeleitet aus Vertex-Flags)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointType {
    /// Normaler Wegpunkt
    #[default]
    Waypoint,
    /// Ladestation (`is_charger`)
    Charging,
    /// Parkplatz (`is_parking_spot`)
    Parking,
}

/// Art eines Szenen-Segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentType {
    /// Navigations-Lane
    Lane,
    /// Wand
    Wall,
    /// Tür
    Door,
}

/// Punkt im Editor-Snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenePoint {
    /// Eindeutige Punkt-ID (wird zum Vertex-Namen)
    pub id: String,
    /// Position (x, y, z)
    pub position: [f64; 3],
    /// Punktart
    #[serde(rename = "type")]
    pub point_type: PointType,
}

/// Segment im Editor-Snapshot (referenziert Punkte per ID)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSegment {
    /// Segment-ID
    pub id: String,
    /// Start-Punkt-ID
    pub start: String,
    /// End-Punkt-ID
    pub end: String,
    /// Segmentart
    #[serde(rename = "type")]
    pub segment_type: SegmentType,
    /// Flotten-Index (nur Lanes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_index: Option<u32>,
}

/// Persistierter Editor-Snapshot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EditorScene {
    /// Alle Punkte
    pub points: Vec<ScenePoint>,
    /// Alle Segmente
    pub segments: Vec<SceneSegment>,
}

impl EditorScene {
    /// Projiziert ein Level des Gebäudes in die Szene.
    ///
    /// Verwendet `preferred_level`, sonst das erste Level. Ein Gebäude ohne
    /// Levels ergibt eine leere Szene.
    pub fn from_building(building: &Building, preferred_level: &str) -> Self {
        let Some(level) = building
            .level(preferred_level)
            .or_else(|| building.levels.values().next())
        else {
            return Self::default();
        };

        let points: Vec<ScenePoint> = level
            .vertices
            .iter()
            .enumerate()
            .map(|(index, vertex)| ScenePoint {
                id: vertex
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("imported-point-{index}")),
                position: [vertex.x, vertex.y, vertex.z],
                point_type: point_type_of(vertex),
            })
            .collect();

        let mut segments = Vec::with_capacity(level.edge_count());
        let mut push = |kind: &str, index: usize, edge: &dyn VertexEdge, ty, graph| {
            let (start, end) = edge.endpoints();
            if let (Some(s), Some(e)) = (points.get(start), points.get(end)) {
                segments.push(SceneSegment {
                    id: format!("imported-{kind}-{index}"),
                    start: s.id.clone(),
                    end: e.id.clone(),
                    segment_type: ty,
                    graph_index: graph,
                });
            }
        };
        for (i, wall) in level.walls.iter().enumerate() {
            push("wall", i, wall, SegmentType::Wall, None);
        }
        for (i, door) in level.doors.iter().enumerate() {
            push("door", i, door, SegmentType::Door, None);
        }
        for (i, lane) in level.lanes.iter().enumerate() {
            push("lane", i, lane, SegmentType::Lane, Some(lane.graph_index));
        }

        Self { points, segments }
    }

    /// Baut ein Gebäude mit genau einem Level (Höhe 0) aus der Szene.
    ///
    /// Türen erhalten den Typ `hinged` und die Segment-ID als Namen, Lanes
    /// ohne Index den Flotten-Index 0. Ein Segment mit unbekannter Punkt-ID
    /// ergibt einen Index-Fehler, eine doppelte Punkt-ID einen Validierungsfehler.
    pub fn to_building(&self, building_name: &str, level_name: &str) -> Result<Building, MapError> {
        let mut positions: HashMap<&str, usize> = HashMap::with_capacity(self.points.len());
        for (index, point) in self.points.iter().enumerate() {
            if positions.insert(point.id.as_str(), index).is_some() {
                log::warn!("Szene enthält doppelte Punkt-ID '{}'", point.id);
                return Err(MapError::Validation(format!(
                    "duplicate point id '{}'",
                    point.id
                )));
            }
        }

        let mut level = Level::new(0.0);
        level.vertices = self
            .points
            .iter()
            .map(|point| {
                let [x, y, z] = point.position;
                let mut vertex = Vertex::new(x, y, z).named(point.id.clone());
                match point.point_type {
                    PointType::Charging => vertex.params = Some(single_flag(PARAM_IS_CHARGER)),
                    PointType::Parking => vertex.params = Some(single_flag(PARAM_IS_PARKING_SPOT)),
                    PointType::Waypoint => {}
                }
                vertex
            })
            .collect();

        for (index, segment) in self.segments.iter().enumerate() {
            let lookup = |id: &str| {
                positions.get(id).copied().ok_or_else(|| MapError::Index {
                    scope: "scene".into(),
                    family: format!("segments[{index}]"),
                    message: format!("unknown point id '{id}'"),
                })
            };
            let start = lookup(&segment.start)?;
            let end = lookup(&segment.end)?;
            match segment.segment_type {
                SegmentType::Wall => level.walls.push(Wall::new(start, end)),
                SegmentType::Door => {
                    level
                        .doors
                        .push(Door::new(start, end, segment.id.clone(), DoorType::Hinged))
                }
                SegmentType::Lane => level
                    .lanes
                    .push(Lane::new(start, end, segment.graph_index.unwrap_or(0))),
            }
        }

        Ok(Building::new(building_name).with_level(level_name, level))
    }
}

fn point_type_of(vertex: &Vertex) -> PointType {
    let params = vertex.params.as_ref();
    if flag_is_set(params, PARAM_IS_CHARGER) {
        PointType::Charging
    } else if flag_is_set(params, PARAM_IS_PARKING_SPOT) {
        PointType::Parking
    } else {
        PointType::Waypoint
    }
}
