//! Ein Level (Stockwerk) mit Vertices, Kanten, Floor-Polygonen und Messstrecken.

use super::{Door, Lane, Measurement, Params, VertexEdge, Wall};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Ein benannter oder unbenannter 3D-Punkt
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Vertex {
    /// X in Metern
    pub x: f64,
    /// Y in Metern
    pub y: f64,
    /// Z in Metern
    pub z: f64,
    /// Optionaler Name (innerhalb des Levels eindeutig)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Nicht interpretierte Parameter (z.B. `is_charger`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
}

impl Vertex {
    /// Erstellt einen unbenannten Vertex
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            name: None,
            params: None,
        }
    }

    /// Setzt den Namen (Builder)
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Setzt den Parameter-Bag (Builder)
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }

    /// Position als Vektor
    pub fn position(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }
}

/// Textur eines Floors ohne Angabe
pub const DEFAULT_FLOOR_TEXTURE: &str = "default";

fn default_texture() -> String {
    DEFAULT_FLOOR_TEXTURE.to_string()
}

fn default_scale() -> f64 {
    1.0
}

/// Floor-Polygon über Vertex-Indizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    /// Rand des Polygons (Positionen im Level)
    pub vertex_indices: Vec<usize>,
    /// Texturname
    #[serde(default = "default_texture")]
    pub texture: String,
    /// Texturskalierung
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Nicht interpretierte Parameter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
}

impl Floor {
    /// Erstellt ein Floor-Polygon mit Standard-Textur
    pub fn new(vertex_indices: Vec<usize>) -> Self {
        Self {
            vertex_indices,
            texture: default_texture(),
            scale: default_scale(),
            params: None,
        }
    }
}

/// Hinterlegte Zeichnung (Grundriss-Bild)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    /// Dateiname des Bildes
    pub filename: String,
    /// Maßstab
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meters_per_pixel: Option<f64>,
}

/// Verweis auf einen Vertex-Index außerhalb des Vertex-Vektors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingIndex {
    /// Familie und Position, z.B. `walls[2]`
    pub family: String,
    /// Ungültiger Index
    pub index: usize,
    /// Anzahl Vertices im Level
    pub vertex_count: usize,
}

/// Ein Stockwerk
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Level {
    /// Höhe in Metern
    #[serde(default)]
    pub elevation: f64,
    /// Optionale Zeichnung
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawing: Option<Drawing>,
    /// Planarer X-Versatz
    #[serde(default)]
    pub flattened_x_offset: f64,
    /// Planarer Y-Versatz
    #[serde(default)]
    pub flattened_y_offset: f64,
    /// Vertices (Positionen sind die Referenz für alle Kanten)
    #[serde(default)]
    pub vertices: Vec<Vertex>,
    /// Wände
    #[serde(default)]
    pub walls: Vec<Wall>,
    /// Türen
    #[serde(default)]
    pub doors: Vec<Door>,
    /// Lanes
    #[serde(default)]
    pub lanes: Vec<Lane>,
    /// Floor-Polygone
    #[serde(default)]
    pub floors: Vec<Floor>,
    /// Messstrecken
    #[serde(default)]
    pub measurements: Vec<Measurement>,
    /// 3D-Modelle (unverändert durchgereicht)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub models: Vec<serde_json::Value>,
    /// Nicht interpretierte Level-Keys
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
}

impl Level {
    /// Erstellt ein leeres Level auf der angegebenen Höhe
    pub fn new(elevation: f64) -> Self {
        Self {
            elevation,
            ..Default::default()
        }
    }

    /// Gibt die Anzahl der Vertices zurück
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Gibt die Anzahl aller Wände, Türen und Lanes zurück
    pub fn edge_count(&self) -> usize {
        self.walls.len() + self.doors.len() + self.lanes.len()
    }

    /// Findet einen Vertex-Index über den Namen
    pub fn find_vertex_by_name(&self, name: &str) -> Option<usize> {
        self.vertices
            .iter()
            .position(|v| v.name.as_deref() == Some(name))
    }

    /// Euklidische Distanz zwischen zwei Vertices
    pub fn distance_between(&self, a: usize, b: usize) -> Option<f64> {
        let start = self.vertices.get(a)?.position();
        let end = self.vertices.get(b)?.position();
        Some(start.distance(end))
    }

    /// Entfernt einen Vertex inklusive aller Kanten, die ihn berühren.
    ///
    /// Alle verbleibenden Referenzen auf Positionen hinter `index` werden im
    /// selben Schritt um eins nach unten verschoben. Floors verlieren den
    /// Vertex aus ihrem Rand; leer gewordene Floors werden entfernt.
    pub fn remove_vertex(&mut self, index: usize) -> Option<Vertex> {
        if index >= self.vertices.len() {
            return None;
        }
        let removed = self.vertices.remove(index);

        cascade(&mut self.walls, index);
        cascade(&mut self.doors, index);
        cascade(&mut self.lanes, index);
        cascade(&mut self.measurements, index);

        for floor in &mut self.floors {
            floor.vertex_indices.retain(|&i| i != index);
            for i in &mut floor.vertex_indices {
                if *i > index {
                    *i -= 1;
                }
            }
        }
        self.floors.retain(|f| !f.vertex_indices.is_empty());

        Some(removed)
    }

    /// Sucht den ersten Index, der nicht auf einen existierenden Vertex zeigt.
    pub fn first_dangling_index(&self) -> Option<DanglingIndex> {
        let vertex_count = self.vertices.len();
        let dangling = |family: &str, position: usize, index: usize| DanglingIndex {
            family: format!("{family}[{position}]"),
            index,
            vertex_count,
        };

        fn check<E: VertexEdge>(edges: &[E], vertex_count: usize) -> Option<(usize, usize)> {
            edges.iter().enumerate().find_map(|(pos, edge)| {
                let (start, end) = edge.endpoints();
                [start, end]
                    .into_iter()
                    .find(|&i| i >= vertex_count)
                    .map(|i| (pos, i))
            })
        }

        if let Some((pos, i)) = check(&self.walls, vertex_count) {
            return Some(dangling("walls", pos, i));
        }
        if let Some((pos, i)) = check(&self.doors, vertex_count) {
            return Some(dangling("doors", pos, i));
        }
        if let Some((pos, i)) = check(&self.lanes, vertex_count) {
            return Some(dangling("lanes", pos, i));
        }
        if let Some((pos, i)) = check(&self.measurements, vertex_count) {
            return Some(dangling("measurements", pos, i));
        }
        self.floors.iter().enumerate().find_map(|(pos, floor)| {
            floor
                .vertex_indices
                .iter()
                .find(|&&i| i >= vertex_count)
                .map(|&i| dangling("floors", pos, i))
        })
    }
}

fn cascade<E: VertexEdge>(edges: &mut Vec<E>, removed: usize) {
    edges.retain(|e| !e.touches(removed));
    for edge in edges.iter_mut() {
        edge.shift_after_removal(removed);
    }
}
