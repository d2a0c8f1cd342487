//! Aufteilen und Zusammenführen der abschließenden Map einer Wire-Entity.
//!
//! Vier Entity-Familien (Tür, Lane, Floor, Level) tragen einige erkannte Keys
//! zusammen mit dem offenen Parameter-Bag in derselben Map. Die Erhaltung
//! unbekannter Keys ist nur hier implementiert.

use crate::core::Params;
use serde_json::Value;

/// Erkannte Keys der Tür-Map
pub const DOOR_KEYS: &[&str] = &["type"];
/// Erkannte Keys der Lane-Map
pub const LANE_KEYS: &[&str] = &["graph_idx", "orientation"];
/// Erkannte Keys der Floor-Map
pub const FLOOR_KEYS: &[&str] = &["texture", "scale"];
/// Erkannte Keys einer Level-Map
pub const LEVEL_KEYS: &[&str] = &[
    "elevation",
    "drawing",
    "flattened_x_offset",
    "flattened_y_offset",
    "vertices",
    "walls",
    "doors",
    "lanes",
    "floors",
    "measurements",
    "models",
];

/// Ergebnis von [`split_params`]
#[derive(Debug, Default)]
pub struct SplitParams {
    /// Erkannte Keys (werden in typisierte Felder übernommen)
    pub recognized: Params,
    /// Restliche Keys; `None` wenn keine übrig sind
    pub rest: Option<Params>,
}

impl SplitParams {
    /// Wert eines erkannten Keys
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.recognized.get(key).filter(|v| !v.is_null())
    }

    /// Entnimmt einen erkannten Key; `null` zählt als fehlend.
    pub fn take(&mut self, key: &str) -> Option<Value> {
        self.recognized.remove(key).filter(|v| !v.is_null())
    }
}

/// Trennt erkannte Keys vom offenen Parameter-Bag.
///
/// Die Reihenfolge der Rest-Keys bleibt wie in der Eingabe.
pub fn split_params(map: Params, recognized_keys: &[&str]) -> SplitParams {
    let mut split = SplitParams::default();
    let mut rest = Params::new();
    for (key, value) in map {
        if recognized_keys.contains(&key.as_str()) {
            split.recognized.insert(key, value);
        } else {
            rest.insert(key, value);
        }
    }
    split.rest = (!rest.is_empty()).then_some(rest);
    split
}

/// Baut die abschließende Map: erkannte Keys zuerst, danach der Parameter-Bag.
///
/// Ein Bag-Key, der mit einem erkannten Key kollidiert, wird verworfen;
/// das typisierte Feld hat Vorrang.
pub fn merge_params<'a>(
    recognized: impl IntoIterator<Item = (&'a str, Value)>,
    rest: Option<&Params>,
) -> Params {
    let mut map = Params::new();
    for (key, value) in recognized {
        map.insert(key.to_string(), value);
    }
    if let Some(rest) = rest {
        for (key, value) in rest {
            if map.contains_key(key) {
                log::warn!(
                    "Parameter '{}' kollidiert mit erkanntem Feld und wird nicht exportiert",
                    key
                );
                continue;
            }
            map.insert(key.clone(), value.clone());
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Params {
        match value {
            Value::Object(m) => m,
            _ => panic!("Object erwartet"),
        }
    }

    #[test]
    fn split_keeps_unknown_keys_in_order() {
        let split = split_params(
            map(json!({"zeta": 1, "graph_idx": 2, "alpha": "x", "orientation": "forward"})),
            LANE_KEYS,
        );
        assert_eq!(split.get("graph_idx"), Some(&json!(2)));
        let rest = split.rest.expect("Rest erwartet");
        let keys: Vec<&str> = rest.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn split_without_leftovers_yields_no_bag() {
        let split = split_params(map(json!({"type": "sliding"})), DOOR_KEYS);
        assert!(split.rest.is_none());
        let split = split_params(Params::new(), DOOR_KEYS);
        assert!(split.rest.is_none());
        assert!(split.get("type").is_none());
    }

    #[test]
    fn null_recognized_value_counts_as_absent() {
        let split = split_params(map(json!({"texture": null})), FLOOR_KEYS);
        assert!(split.get("texture").is_none());
        assert!(split.rest.is_none());
    }

    #[test]
    fn merge_puts_recognized_first_and_drops_collisions() {
        let rest = map(json!({"speed_limit": 0.5, "type": "sliding"}));
        let merged = merge_params([("type", json!("hinged"))], Some(&rest));
        assert_eq!(Value::Object(merged), json!({"type": "hinged", "speed_limit": 0.5}));
    }
}
