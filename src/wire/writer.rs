//! Writer für die positionale Wire-Darstellung einer Site-Map.

use super::params::merge_params;
use super::{MapError, MapFormat};
use crate::core::{Building, Door, Floor, Lane, Level, Lift, Params, Vertex, Wall};
use serde_json::{json, Value};

/// Schreibt ein Building als YAML oder JSON.
///
/// Jeder Vertex-Index wird vor dem Schreiben geprüft; ungültige Indizes
/// ergeben einen Index-Fehler statt einer inkonsistenten Datei.
pub fn write_building(building: &Building, format: MapFormat) -> Result<String, MapError> {
    let document = encode_building(building)?;
    let written = match format {
        MapFormat::Yaml => serde_yaml::to_string(&document).map_err(|e| e.to_string()),
        MapFormat::Json => serde_json::to_string_pretty(&document)
            .map(|mut text| {
                text.push('\n');
                text
            })
            .map_err(|e| e.to_string()),
    };
    written.map_err(|message| output_error(format, message))
}

/// Fehler des Serialisierers beim Schreiben; kein Eingabefehler.
fn output_error(format: MapFormat, message: String) -> MapError {
    MapError::Shape {
        scope: "building".into(),
        family: format!("{format} output"),
        message,
    }
}

/// Kodiert ein Building in den generischen Wertebaum der Wire-Darstellung.
pub fn encode_building(building: &Building) -> Result<Value, MapError> {
    let mut levels = Params::new();
    for (name, level) in &building.levels {
        levels.insert(name.clone(), encode_level(name, level)?);
    }

    let lifts = building
        .lifts
        .iter()
        .map(encode_lift)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(json!({
        "name": building.name,
        "levels": levels,
        "lifts": lifts,
    }))
}

/// Wandelt eine Fließkommazahl in einen Wire-Wert; NaN/Inf sind nicht darstellbar.
fn number(value: f64, scope: &str, family: &str) -> Result<Value, MapError> {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .ok_or_else(|| MapError::Shape {
            scope: scope.to_string(),
            family: family.to_string(),
            message: format!("{value} is not a finite number"),
        })
}

fn params_or_empty(params: Option<&Params>) -> Value {
    Value::Object(params.cloned().unwrap_or_default())
}

fn encode_level(name: &str, level: &Level) -> Result<Value, MapError> {
    let scope = format!("level '{name}'");

    if let Some(dangling) = level.first_dangling_index() {
        return Err(MapError::index_out_of_range(
            scope,
            dangling.family,
            dangling.index,
            dangling.vertex_count,
        ));
    }

    let vertices = level
        .vertices
        .iter()
        .enumerate()
        .map(|(pos, vertex)| encode_vertex(vertex, &scope, pos))
        .collect::<Result<Vec<_>, _>>()?;
    let walls: Vec<Value> = level.walls.iter().map(encode_wall).collect();
    let doors = level
        .doors
        .iter()
        .enumerate()
        .map(|(pos, door)| encode_door(door, &scope, pos))
        .collect::<Result<Vec<_>, _>>()?;
    let lanes: Vec<Value> = level.lanes.iter().map(encode_lane).collect();
    let floors = level
        .floors
        .iter()
        .enumerate()
        .map(|(pos, floor)| encode_floor(floor, &scope, pos))
        .collect::<Result<Vec<_>, _>>()?;
    let measurements = level
        .measurements
        .iter()
        .enumerate()
        .map(|(pos, m)| {
            let distance = number(m.distance, &scope, &format!("measurements[{pos}]"))?;
            Ok(json!([m.start_vertex_index, m.end_vertex_index, distance]))
        })
        .collect::<Result<Vec<_>, MapError>>()?;

    let mut recognized: Vec<(&str, Value)> =
        vec![("elevation", number(level.elevation, &scope, "elevation")?)];
    if let Some(drawing) = &level.drawing {
        let mut raw = Params::new();
        raw.insert("filename".into(), Value::String(drawing.filename.clone()));
        if let Some(mpp) = drawing.meters_per_pixel {
            raw.insert("meters_per_pixel".into(), number(mpp, &scope, "drawing")?);
        }
        recognized.push(("drawing", Value::Object(raw)));
    }
    recognized.push((
        "flattened_x_offset",
        number(level.flattened_x_offset, &scope, "flattened_x_offset")?,
    ));
    recognized.push((
        "flattened_y_offset",
        number(level.flattened_y_offset, &scope, "flattened_y_offset")?,
    ));
    recognized.push(("vertices", Value::Array(vertices)));
    recognized.push(("walls", Value::Array(walls)));
    recognized.push(("doors", Value::Array(doors)));
    recognized.push(("lanes", Value::Array(lanes)));
    recognized.push(("floors", Value::Array(floors)));
    recognized.push(("measurements", Value::Array(measurements)));
    if !level.models.is_empty() {
        recognized.push(("models", Value::Array(level.models.clone())));
    }

    Ok(Value::Object(merge_params(recognized, level.params.as_ref())))
}

/// `[x, y, z, name-oder-"", {params}]`
fn encode_vertex(vertex: &Vertex, scope: &str, pos: usize) -> Result<Value, MapError> {
    let family = format!("vertices[{pos}]");
    Ok(Value::Array(vec![
        number(vertex.x, scope, &family)?,
        number(vertex.y, scope, &family)?,
        number(vertex.z, scope, &family)?,
        Value::String(vertex.name.clone().unwrap_or_default()),
        params_or_empty(vertex.params.as_ref()),
    ]))
}

/// `[start, end, {params}]`
fn encode_wall(wall: &Wall) -> Value {
    json!([
        wall.start_vertex_index,
        wall.end_vertex_index,
        params_or_empty(wall.params.as_ref()),
    ])
}

/// `[start, end, name, {type, ...params}]`
fn encode_door(door: &Door, scope: &str, pos: usize) -> Result<Value, MapError> {
    if door.name.is_empty() {
        return Err(MapError::Shape {
            scope: scope.to_string(),
            family: format!("doors[{pos}]"),
            message: "door name must not be empty".into(),
        });
    }
    let map = merge_params(
        [("type", Value::String(door.door_type.as_str().into()))],
        door.params.as_ref(),
    );
    Ok(json!([
        door.start_vertex_index,
        door.end_vertex_index,
        door.name,
        map,
    ]))
}

/// `[start, end, {graph_idx, orientation, ...params}]`
fn encode_lane(lane: &Lane) -> Value {
    let map = merge_params(
        [
            ("graph_idx", Value::from(lane.graph_index)),
            ("orientation", Value::String(lane.orientation.as_str().into())),
        ],
        lane.params.as_ref(),
    );
    json!([lane.start_vertex_index, lane.end_vertex_index, map])
}

/// `[[indices...], {texture, scale, ...params}]`
fn encode_floor(floor: &Floor, scope: &str, pos: usize) -> Result<Value, MapError> {
    let map = merge_params(
        [
            ("texture", Value::String(floor.texture.clone())),
            ("scale", number(floor.scale, scope, &format!("floors[{pos}]"))?),
        ],
        floor.params.as_ref(),
    );
    Ok(json!([floor.vertex_indices, map]))
}

fn encode_lift(lift: &Lift) -> Result<Value, MapError> {
    let scope = format!("lift '{}'", lift.name);
    let mut map = Params::new();
    map.insert("name".into(), Value::String(lift.name.clone()));
    map.insert("levels".into(), json!(lift.levels));
    if let Some([x, y]) = lift.position {
        map.insert(
            "position".into(),
            Value::Array(vec![number(x, &scope, "position")?, number(y, &scope, "position")?]),
        );
    }
    if !lift.doors.is_empty() {
        let doors = lift
            .doors
            .iter()
            .enumerate()
            .map(|(pos, door)| encode_door(door, &scope, pos))
            .collect::<Result<Vec<_>, _>>()?;
        map.insert("doors".into(), Value::Array(doors));
    }
    if let Some(params) = lift.params.as_ref().filter(|p| !p.is_empty()) {
        map.insert("params".into(), Value::Object(params.clone()));
    }
    Ok(Value::Object(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DoorType, Lift};

    fn two_vertex_level() -> Level {
        let mut level = Level::new(0.0);
        level.vertices.push(Vertex::new(0.0, 0.0, 0.0));
        level.vertices.push(Vertex::new(1.0, 0.0, 0.0));
        level
    }

    #[test]
    fn nameless_door_is_rejected_before_writing() {
        let mut level = two_vertex_level();
        level.doors.push(Door::new(0, 1, "MainDoor", DoorType::Hinged));
        level.doors.push(Door::new(0, 1, "", DoorType::Hinged));
        let building = Building::new("B").with_level("L1", level);

        let err = write_building(&building, MapFormat::Yaml).expect_err("Leerer Türname");
        assert_eq!(err.kind(), "shape");
        assert_eq!(
            err.to_string(),
            "level 'L1', doors[1]: door name must not be empty"
        );
    }

    #[test]
    fn nameless_lift_door_is_rejected_before_writing() {
        let mut building = Building::new("B").with_level("L1", two_vertex_level());
        building.lifts.push(Lift {
            name: "LiftA".into(),
            levels: vec!["L1".into()],
            doors: vec![Door::new(0, 1, "", DoorType::Sliding)],
            ..Default::default()
        });

        let err = write_building(&building, MapFormat::Json).expect_err("Leerer Türname");
        assert_eq!(
            err.to_string(),
            "lift 'LiftA', doors[0]: door name must not be empty"
        );
    }

    #[test]
    fn serializer_failure_is_shape_not_parse() {
        let err = output_error(MapFormat::Yaml, "kaputt".into());
        assert_eq!(err.kind(), "shape");
        assert_eq!(err.to_string(), "building, YAML output: kaputt");
    }

    #[test]
    fn written_doors_reimport() {
        let mut level = two_vertex_level();
        level.doors.push(Door::new(0, 1, "D1", DoorType::DoubleHinged));
        let building = Building::new("B").with_level("L1", level);

        let text = write_building(&building, MapFormat::Yaml).expect("Export");
        let back = crate::wire::parse_building(&text, MapFormat::Yaml).expect("Re-Import");
        assert_eq!(back, building);
    }
}
