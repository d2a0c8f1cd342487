//! Dekodierung der einzelnen Entity-Familien aus ihren positionalen Tupeln.

use crate::core::{
    Door, DoorType, Drawing, Floor, Lane, LaneOrientation, Level, Lift, Measurement, Params,
    Vertex, Wall, DEFAULT_FLOOR_TEXTURE,
};
use crate::wire::params::{split_params, SplitParams, DOOR_KEYS, FLOOR_KEYS, LANE_KEYS, LEVEL_KEYS};
use crate::wire::MapError;
use serde_json::Value;

/// Fehlerkontext einer einzelnen Entity (Bereich, Familie, Position).
struct EntityCtx<'a> {
    scope: &'a str,
    family: &'static str,
    position: usize,
}

impl<'a> EntityCtx<'a> {
    fn new(scope: &'a str, family: &'static str, position: usize) -> Self {
        Self {
            scope,
            family,
            position,
        }
    }

    fn family(&self) -> String {
        format!("{}[{}]", self.family, self.position)
    }

    fn shape(&self, message: impl Into<String>) -> MapError {
        MapError::Shape {
            scope: self.scope.to_string(),
            family: self.family(),
            message: message.into(),
        }
    }

    /// Prüft, dass die Entity eine Sequenz mit `min..=max` Elementen ist.
    fn tuple(&self, value: Value, min: usize, max: usize) -> Result<Vec<Value>, MapError> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(self.shape(format!(
                    "expected a sequence, got {}",
                    type_name(&other)
                )))
            }
        };
        if items.len() < min || items.len() > max {
            let expected = if min == max {
                min.to_string()
            } else {
                format!("{min} to {max}")
            };
            return Err(self.shape(format!(
                "expected {expected} elements, got {}",
                items.len()
            )));
        }
        Ok(items)
    }

    /// Liest einen Vertex-Index. Ohne `vertex_count` entfällt die Bereichsprüfung.
    fn index(&self, value: &Value, vertex_count: Option<usize>) -> Result<usize, MapError> {
        let index = value
            .as_u64()
            .and_then(|i| usize::try_from(i).ok())
            .ok_or_else(|| {
                self.shape(format!(
                    "vertex index must be a non-negative integer, got {value}"
                ))
            })?;
        if let Some(count) = vertex_count {
            if index >= count {
                return Err(MapError::index_out_of_range(
                    self.scope,
                    self.family(),
                    index,
                    count,
                ));
            }
        }
        Ok(index)
    }

    fn number(&self, value: &Value, what: &str) -> Result<f64, MapError> {
        value
            .as_f64()
            .ok_or_else(|| self.shape(format!("{what} must be a number, got {value}")))
    }

    fn string(&self, value: Value, what: &str) -> Result<String, MapError> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(self.shape(format!("{what} must be a string, got {other}"))),
        }
    }

    /// Abschließende Map an Position `pos`; fehlend oder `null` ergibt eine leere Map.
    fn trailing_map(&self, items: &mut [Value], pos: usize) -> Result<Params, MapError> {
        match items.get_mut(pos).map(Value::take) {
            None | Some(Value::Null) => Ok(Params::new()),
            Some(Value::Object(map)) => Ok(map),
            Some(other) => Err(self.shape(format!(
                "element {pos} must be a mapping, got {}",
                type_name(&other)
            ))),
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

fn non_empty(params: Params) -> Option<Params> {
    (!params.is_empty()).then_some(params)
}

/// Feld einer Level- oder Lift-Map als Sequenz; fehlend ergibt eine leere Liste.
fn sequence(value: Option<Value>, scope: &str, family: &str) -> Result<Vec<Value>, MapError> {
    match value {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(MapError::Shape {
            scope: scope.to_string(),
            family: family.to_string(),
            message: format!("expected a sequence, got {}", type_name(&other)),
        }),
    }
}

fn optional_number(value: Option<Value>, scope: &str, field: &str) -> Result<f64, MapError> {
    match value {
        None => Ok(0.0),
        Some(v) => v.as_f64().ok_or_else(|| MapError::Shape {
            scope: scope.to_string(),
            family: field.to_string(),
            message: format!("expected a number, got {v}"),
        }),
    }
}

/// Dekodiert alle Elemente einer Familie.
fn decode_all<T>(
    items: Vec<Value>,
    scope: &str,
    family: &'static str,
    decode: impl Fn(Value, &EntityCtx<'_>) -> Result<T, MapError>,
) -> Result<Vec<T>, MapError> {
    items
        .into_iter()
        .enumerate()
        .map(|(position, item)| decode(item, &EntityCtx::new(scope, family, position)))
        .collect()
}

/// Dekodiert ein Level samt aller Entity-Familien.
pub(super) fn decode_level(name: &str, value: Value) -> Result<Level, MapError> {
    let scope = format!("level '{name}'");
    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(MapError::Shape {
                scope,
                family: "level".into(),
                message: format!("expected a mapping, got {}", type_name(&other)),
            })
        }
    };

    let mut split = split_params(map, LEVEL_KEYS);

    let elevation = optional_number(split.take("elevation"), &scope, "elevation")?;
    let flattened_x_offset =
        optional_number(split.take("flattened_x_offset"), &scope, "flattened_x_offset")?;
    let flattened_y_offset =
        optional_number(split.take("flattened_y_offset"), &scope, "flattened_y_offset")?;
    let drawing = split
        .take("drawing")
        .map(|raw| decode_drawing(raw, &scope))
        .transpose()?;

    let vertices = decode_all(
        sequence(split.take("vertices"), &scope, "vertices")?,
        &scope,
        "vertices",
        decode_vertex,
    )?;
    let count = Some(vertices.len());

    let walls = decode_all(
        sequence(split.take("walls"), &scope, "walls")?,
        &scope,
        "walls",
        |item, ctx| decode_wall(item, ctx, count),
    )?;
    let doors = decode_all(
        sequence(split.take("doors"), &scope, "doors")?,
        &scope,
        "doors",
        |item, ctx| decode_door(item, ctx, count),
    )?;
    let lanes = decode_all(
        sequence(split.take("lanes"), &scope, "lanes")?,
        &scope,
        "lanes",
        |item, ctx| decode_lane(item, ctx, count),
    )?;
    let floors = decode_all(
        sequence(split.take("floors"), &scope, "floors")?,
        &scope,
        "floors",
        |item, ctx| decode_floor(item, ctx, count),
    )?;
    let measurements = decode_all(
        sequence(split.take("measurements"), &scope, "measurements")?,
        &scope,
        "measurements",
        |item, ctx| decode_measurement(item, ctx, count),
    )?;
    let models = sequence(split.take("models"), &scope, "models")?;

    Ok(Level {
        elevation,
        drawing,
        flattened_x_offset,
        flattened_y_offset,
        vertices,
        walls,
        doors,
        lanes,
        floors,
        measurements,
        models,
        params: split.rest,
    })
}

fn decode_drawing(value: Value, scope: &str) -> Result<Drawing, MapError> {
    let shape = |message: String| MapError::Shape {
        scope: scope.to_string(),
        family: "drawing".into(),
        message,
    };
    let mut map = match value {
        Value::Object(map) => map,
        other => return Err(shape(format!("expected a mapping, got {}", type_name(&other)))),
    };
    let filename = match map.remove("filename") {
        Some(Value::String(filename)) => filename,
        Some(other) => return Err(shape(format!("filename must be a string, got {other}"))),
        None => return Err(shape("filename is required".into())),
    };
    let meters_per_pixel = match map.remove("meters_per_pixel") {
        None | Some(Value::Null) => None,
        Some(v) => Some(
            v.as_f64()
                .ok_or_else(|| shape(format!("meters_per_pixel must be a number, got {v}")))?,
        ),
    };
    Ok(Drawing {
        filename,
        meters_per_pixel,
    })
}

/// `[x, y, z, name, {params}]`; Name und Parameter dürfen fehlen.
fn decode_vertex(value: Value, ctx: &EntityCtx<'_>) -> Result<Vertex, MapError> {
    let mut items = ctx.tuple(value, 3, 5)?;
    let x = ctx.number(&items[0], "x")?;
    let y = ctx.number(&items[1], "y")?;
    let z = ctx.number(&items[2], "z")?;
    let name = match items.get_mut(3).map(Value::take) {
        None | Some(Value::Null) => None,
        Some(raw) => Some(ctx.string(raw, "name")?).filter(|n| !n.is_empty()),
    };
    let params = non_empty(ctx.trailing_map(&mut items, 4)?);
    Ok(Vertex {
        x,
        y,
        z,
        name,
        params,
    })
}

/// `[start, end, {params}]`
fn decode_wall(value: Value, ctx: &EntityCtx<'_>, count: Option<usize>) -> Result<Wall, MapError> {
    let mut items = ctx.tuple(value, 2, 3)?;
    let start_vertex_index = ctx.index(&items[0], count)?;
    let end_vertex_index = ctx.index(&items[1], count)?;
    let params = non_empty(ctx.trailing_map(&mut items, 2)?);
    Ok(Wall {
        start_vertex_index,
        end_vertex_index,
        params,
    })
}

/// `[start, end, name, {type, ...params}]`; fehlender Typ ergibt `hinged`.
fn decode_door(value: Value, ctx: &EntityCtx<'_>, count: Option<usize>) -> Result<Door, MapError> {
    let mut items = ctx.tuple(value, 3, 4)?;
    let start_vertex_index = ctx.index(&items[0], count)?;
    let end_vertex_index = ctx.index(&items[1], count)?;
    let name = ctx.string(items[2].take(), "door name")?;
    if name.is_empty() {
        return Err(ctx.shape("door name must not be empty"));
    }

    let mut split = split_params(ctx.trailing_map(&mut items, 3)?, DOOR_KEYS);
    let door_type = match split.take("type") {
        None => DoorType::default(),
        Some(raw) => {
            let tag = ctx.string(raw, "door type")?;
            DoorType::from_tag(&tag)
                .ok_or_else(|| ctx.shape(format!("unknown door type '{tag}'")))?
        }
    };

    Ok(Door {
        start_vertex_index,
        end_vertex_index,
        name,
        door_type,
        params: split.rest,
    })
}

/// `[start, end, {graph_idx, orientation, ...params}]`; fehlender Graph-Index ergibt 0.
fn decode_lane(value: Value, ctx: &EntityCtx<'_>, count: Option<usize>) -> Result<Lane, MapError> {
    let mut items = ctx.tuple(value, 2, 3)?;
    let start_vertex_index = ctx.index(&items[0], count)?;
    let end_vertex_index = ctx.index(&items[1], count)?;

    let mut split: SplitParams = split_params(ctx.trailing_map(&mut items, 2)?, LANE_KEYS);
    let graph_index = match split.take("graph_idx") {
        None => 0,
        Some(raw) => raw
            .as_u64()
            .and_then(|i| u32::try_from(i).ok())
            .ok_or_else(|| {
                ctx.shape(format!(
                    "graph_idx must be a non-negative integer, got {raw}"
                ))
            })?,
    };
    let orientation = match split.take("orientation") {
        None => LaneOrientation::default(),
        Some(raw) => {
            let tag = ctx.string(raw, "orientation")?;
            LaneOrientation::from_tag(&tag)
                .ok_or_else(|| ctx.shape(format!("unknown orientation '{tag}'")))?
        }
    };

    Ok(Lane {
        start_vertex_index,
        end_vertex_index,
        graph_index,
        orientation,
        params: split.rest,
    })
}

/// `[[indices...], {texture, scale, ...params}]`
fn decode_floor(
    value: Value,
    ctx: &EntityCtx<'_>,
    count: Option<usize>,
) -> Result<Floor, MapError> {
    let mut items = ctx.tuple(value, 1, 2)?;
    let Value::Array(raw_indices) = items[0].take() else {
        return Err(ctx.shape("element 0 must be a sequence of vertex indices"));
    };
    let vertex_indices = raw_indices
        .iter()
        .map(|raw| ctx.index(raw, count))
        .collect::<Result<Vec<_>, _>>()?;

    let mut split = split_params(ctx.trailing_map(&mut items, 1)?, FLOOR_KEYS);
    let texture = match split.take("texture") {
        None => DEFAULT_FLOOR_TEXTURE.to_string(),
        Some(raw) => ctx.string(raw, "texture")?,
    };
    let scale = match split.take("scale") {
        None => 1.0,
        Some(raw) => ctx.number(&raw, "scale")?,
    };

    Ok(Floor {
        vertex_indices,
        texture,
        scale,
        params: split.rest,
    })
}

/// `[start, end, distance]`
fn decode_measurement(
    value: Value,
    ctx: &EntityCtx<'_>,
    count: Option<usize>,
) -> Result<Measurement, MapError> {
    let items = ctx.tuple(value, 3, 3)?;
    Ok(Measurement {
        start_vertex_index: ctx.index(&items[0], count)?,
        end_vertex_index: ctx.index(&items[1], count)?,
        distance: ctx.number(&items[2], "distance")?,
    })
}

/// Dekodiert einen Lift. Lift-Türen haben kein eigenes Vertex-Array,
/// ihre Indizes werden daher nicht gegen ein Level geprüft.
pub(super) fn decode_lift(position: usize, value: Value) -> Result<Lift, MapError> {
    let ctx = EntityCtx::new("building", "lifts", position);
    let mut map = match value {
        Value::Object(map) => map,
        other => {
            return Err(ctx.shape(format!(
                "expected a mapping, got {}",
                type_name(&other)
            )))
        }
    };

    let name = match map.remove("name") {
        Some(raw) => ctx.string(raw, "lift name")?,
        None => return Err(ctx.shape("lift name is required")),
    };
    let scope = format!("lift '{name}'");

    let levels = sequence(map.remove("levels").filter(|v| !v.is_null()), &scope, "levels")?
        .into_iter()
        .map(|raw| ctx.string(raw, "level name"))
        .collect::<Result<Vec<_>, _>>()?;

    let lift_position = match map.remove("position") {
        None | Some(Value::Null) => None,
        Some(raw) => {
            let items = ctx.tuple(raw, 2, 2)?;
            Some([
                ctx.number(&items[0], "position x")?,
                ctx.number(&items[1], "position y")?,
            ])
        }
    };

    let doors = decode_all(
        sequence(map.remove("doors").filter(|v| !v.is_null()), &scope, "doors")?,
        &scope,
        "doors",
        |item, door_ctx| decode_door(item, door_ctx, None),
    )?;

    let params = match map.remove("params") {
        None | Some(Value::Null) => None,
        Some(Value::Object(params)) => non_empty(params),
        Some(other) => {
            return Err(ctx.shape(format!(
                "params must be a mapping, got {}",
                type_name(&other)
            )))
        }
    };

    for key in map.keys() {
        log::debug!("Unbekannter Key '{}' in {} wird ignoriert", key, scope);
    }

    Ok(Lift {
        name,
        levels,
        position: lift_position,
        doors,
        params,
    })
}
