//! Offene Parameter-Bags für Vertices, Kanten, Floors, Levels und Lifts.

use serde_json::Value;

/// Parameter-Bag einer Entity.
///
/// Die Key-Reihenfolge bleibt erhalten (`serde_json` mit `preserve_order`),
/// damit ein Export die Keys so schreibt, wie sie importiert wurden.
pub type Params = serde_json::Map<String, Value>;

/// Vertex-Flag: Ladestation
pub const PARAM_IS_CHARGER: &str = "is_charger";
/// Vertex-Flag: Parkplatz
pub const PARAM_IS_PARKING_SPOT: &str = "is_parking_spot";

/// Prüft ob ein Flag im Bag gesetzt und wahr ist.
///
/// Wahr sind `true`, Zahlen ungleich 0, nicht-leere Strings und Container.
pub fn flag_is_set(params: Option<&Params>, key: &str) -> bool {
    let Some(value) = params.and_then(|p| p.get(key)) else {
        return false;
    };
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Baut einen Bag mit genau einem gesetzten Flag.
pub fn single_flag(key: &str) -> Params {
    let mut params = Params::new();
    params.insert(key.to_string(), Value::Bool(true));
    params
}
