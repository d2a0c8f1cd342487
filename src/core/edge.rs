//! Kanten-Familien eines Levels: Wände, Türen, Lanes und Messstrecken.
//!
//! Alle Kanten referenzieren Vertices über ihre Position im Vertex-Vektor
//! des besitzenden Levels (nullbasiert), nicht über Namen.

use super::Params;
use serde::{Deserialize, Serialize};

/// Gemeinsame Sicht auf Kanten mit Start- und End-Vertex.
///
/// Wird vom Lösch-Kaskadieren und von der Index-Prüfung genutzt, damit alle
/// Familien dieselbe Verschiebe-Logik teilen.
pub trait VertexEdge {
    /// Start- und End-Index
    fn endpoints(&self) -> (usize, usize);
    /// Mutable Start- und End-Index
    fn endpoints_mut(&mut self) -> (&mut usize, &mut usize);

    /// Prüft ob die Kante den Vertex an `index` berührt.
    fn touches(&self, index: usize) -> bool {
        let (start, end) = self.endpoints();
        start == index || end == index
    }

    /// Verschiebt alle Indizes oberhalb von `removed` um eins nach unten.
    fn shift_after_removal(&mut self, removed: usize) {
        let (start, end) = self.endpoints_mut();
        if *start > removed {
            *start -= 1;
        }
        if *end > removed {
            *end -= 1;
        }
    }
}

macro_rules! impl_vertex_edge {
    ($($ty:ty),*) => {
        $(impl VertexEdge for $ty {
            fn endpoints(&self) -> (usize, usize) {
                (self.start_vertex_index, self.end_vertex_index)
            }

            fn endpoints_mut(&mut self) -> (&mut usize, &mut usize) {
                (&mut self.start_vertex_index, &mut self.end_vertex_index)
            }
        })*
    };
}

/// Eine Wand zwischen zwei Vertices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wall {
    /// Start-Vertex (Position im Level)
    pub start_vertex_index: usize,
    /// End-Vertex (Position im Level)
    pub end_vertex_index: usize,
    /// Nicht interpretierte Parameter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
}

impl Wall {
    /// Erstellt eine Wand ohne Parameter
    pub fn new(start_vertex_index: usize, end_vertex_index: usize) -> Self {
        Self {
            start_vertex_index,
            end_vertex_index,
            params: None,
        }
    }
}

/// Bauart einer Tür
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorType {
    /// Drehtür (Standard bei fehlender Angabe)
    #[default]
    Hinged,
    /// Schiebetür
    Sliding,
    /// Doppelflügelige Drehtür
    #[serde(alias = "double-hinged")]
    DoubleHinged,
    /// Doppelte Schiebetür
    #[serde(alias = "double-sliding")]
    DoubleSliding,
}

impl DoorType {
    /// Wire-Tag der Bauart
    pub fn as_str(self) -> &'static str {
        match self {
            DoorType::Hinged => "hinged",
            DoorType::Sliding => "sliding",
            DoorType::DoubleHinged => "double_hinged",
            DoorType::DoubleSliding => "double_sliding",
        }
    }

    /// Liest einen Wire-Tag (Unterstrich- oder Bindestrich-Schreibweise).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "hinged" => Some(DoorType::Hinged),
            "sliding" => Some(DoorType::Sliding),
            "double_hinged" | "double-hinged" => Some(DoorType::DoubleHinged),
            "double_sliding" | "double-sliding" => Some(DoorType::DoubleSliding),
            _ => None,
        }
    }
}

/// Eine benannte Tür zwischen zwei Vertices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Door {
    /// Start-Vertex (Position im Level)
    pub start_vertex_index: usize,
    /// End-Vertex (Position im Level)
    pub end_vertex_index: usize,
    /// Türname (nicht leer)
    pub name: String,
    /// Bauart
    #[serde(rename = "type", default)]
    pub door_type: DoorType,
    /// Nicht interpretierte Parameter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
}

impl Door {
    /// Erstellt eine Tür ohne Parameter
    pub fn new(
        start_vertex_index: usize,
        end_vertex_index: usize,
        name: impl Into<String>,
        door_type: DoorType,
    ) -> Self {
        Self {
            start_vertex_index,
            end_vertex_index,
            name: name.into(),
            door_type,
            params: None,
        }
    }
}

/// Befahrungsrichtung einer Lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaneOrientation {
    /// Nur Start → Ende
    Forward,
    /// Nur Ende → Start
    Backward,
    /// Beide Richtungen
    #[default]
    Bidirectional,
}

impl LaneOrientation {
    /// Wire-Tag der Richtung
    pub fn as_str(self) -> &'static str {
        match self {
            LaneOrientation::Forward => "forward",
            LaneOrientation::Backward => "backward",
            LaneOrientation::Bidirectional => "bidirectional",
        }
    }

    /// Liest einen Wire-Tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "forward" => Some(LaneOrientation::Forward),
            "backward" => Some(LaneOrientation::Backward),
            "bidirectional" => Some(LaneOrientation::Bidirectional),
            _ => None,
        }
    }
}

/// Navigations-Lane für eine Roboterflotte
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lane {
    /// Start-Vertex (Position im Level)
    pub start_vertex_index: usize,
    /// End-Vertex (Position im Level)
    pub end_vertex_index: usize,
    /// Flotten-/Graph-Index. Der Wertebereich 0–8 wird nur beim Editieren geprüft.
    #[serde(default)]
    pub graph_index: u32,
    /// Befahrungsrichtung
    #[serde(default)]
    pub orientation: LaneOrientation,
    /// Nicht interpretierte Parameter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
}

impl Lane {
    /// Erstellt eine bidirektionale Lane ohne Parameter
    pub fn new(start_vertex_index: usize, end_vertex_index: usize, graph_index: u32) -> Self {
        Self {
            start_vertex_index,
            end_vertex_index,
            graph_index,
            orientation: LaneOrientation::Bidirectional,
            params: None,
        }
    }
}

/// Kalibrierte Messstrecke zwischen zwei Vertices.
///
/// `distance` ist maßgeblich und wird nicht aus den Vertex-Positionen neu berechnet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    /// Start-Vertex (Position im Level)
    pub start_vertex_index: usize,
    /// End-Vertex (Position im Level)
    pub end_vertex_index: usize,
    /// Distanz in Metern
    pub distance: f64,
}

impl_vertex_edge!(Wall, Door, Lane, Measurement);
