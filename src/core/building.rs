//! Das Gebäude: benannte Levels plus Lifts.

use super::{Door, Level, Params};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Vertikaler Transport zwischen Levels.
///
/// Levels werden nur über ihren Namen referenziert; ein Name ohne passendes
/// Level ist zulässig.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Lift {
    /// Lift-Name
    pub name: String,
    /// Namen der angefahrenen Levels
    #[serde(default)]
    pub levels: Vec<String>,
    /// Optionale 2D-Position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<[f64; 2]>,
    /// Lift-Türen
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub doors: Vec<Door>,
    /// Nicht interpretierte Parameter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
}

impl Lift {
    /// Namen referenzierter Levels, die im Gebäude nicht existieren
    pub fn dangling_levels<'a>(&'a self, building: &'a Building) -> Vec<&'a str> {
        self.levels
            .iter()
            .filter(|name| !building.levels.contains_key(name.as_str()))
            .map(String::as_str)
            .collect()
    }
}

/// Vollständige Site-Map
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Building {
    /// Gebäudename
    pub name: String,
    /// Levels nach Namen (Reihenfolge wie importiert, Lookups per Name)
    #[serde(default)]
    pub levels: IndexMap<String, Level>,
    /// Lifts
    #[serde(default)]
    pub lifts: Vec<Lift>,
}

impl Building {
    /// Erstellt ein leeres Gebäude ohne Levels
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            levels: IndexMap::new(),
            lifts: Vec::new(),
        }
    }

    /// Fügt ein Level hinzu (Builder)
    pub fn with_level(mut self, name: impl Into<String>, level: Level) -> Self {
        self.levels.insert(name.into(), level);
        self
    }

    /// Level per Name
    pub fn level(&self, name: &str) -> Option<&Level> {
        self.levels.get(name)
    }

    /// Mutable Level per Name
    pub fn level_mut(&mut self, name: &str) -> Option<&mut Level> {
        self.levels.get_mut(name)
    }

    /// Gibt die Anzahl der Levels zurück
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Anzahl aller Vertices über alle Levels
    pub fn vertex_count(&self) -> usize {
        self.levels.values().map(Level::vertex_count).sum()
    }

    /// Anzahl aller Wände, Türen und Lanes über alle Levels
    pub fn edge_count(&self) -> usize {
        self.levels.values().map(Level::edge_count).sum()
    }
}
