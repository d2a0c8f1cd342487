use super::*;
use crate::core::{DoorType, LaneOrientation};
use serde_json::json;

fn level_yaml(body: &str) -> String {
    format!("name: Test\nlevels:\n  L1:\n{body}")
}

const TWO_VERTICES: &str = "    vertices:\n      - [0, 0, 0]\n      - [1, 0, 0]\n";

#[test]
fn test_door_without_type_is_hinged() {
    let yaml = level_yaml(&format!(
        "{TWO_VERTICES}    doors:\n      - [0, 1, \"MainDoor\", {{}}]\n"
    ));
    let building = parse_building(&yaml, MapFormat::Yaml).expect("Import sollte gelingen");
    let door = &building.level("L1").expect("L1").doors[0];
    assert_eq!(door.name, "MainDoor");
    assert_eq!(door.door_type, DoorType::Hinged);
    assert!(door.params.is_none());
}

#[test]
fn test_door_type_accepts_hyphenated_alias() {
    let yaml = level_yaml(&format!(
        "{TWO_VERTICES}    doors:\n      - [0, 1, D2, {{type: double-sliding}}]\n"
    ));
    let building = parse_building(&yaml, MapFormat::Yaml).expect("Import sollte gelingen");
    assert_eq!(
        building.level("L1").expect("L1").doors[0].door_type,
        DoorType::DoubleSliding
    );
}

#[test]
fn test_lane_without_map_defaults_to_fleet_zero() {
    let yaml = level_yaml(&format!("{TWO_VERTICES}    lanes:\n      - [0, 1, {{}}]\n      - [1, 0]\n"));
    let building = parse_building(&yaml, MapFormat::Yaml).expect("Import sollte gelingen");
    let lanes = &building.level("L1").expect("L1").lanes;
    for lane in lanes {
        assert_eq!(lane.graph_index, 0);
        assert_eq!(lane.orientation, LaneOrientation::Bidirectional);
        assert!(lane.params.is_none());
    }
}

#[test]
fn test_levels_as_string_is_validation_error() {
    let err = parse_building("name: Test\nlevels: \"L1\"\n", MapFormat::Yaml)
        .expect_err("levels als String muss fehlschlagen");
    assert_eq!(err.kind(), "validation");
    assert!(err.to_string().contains("levels"));
}

#[test]
fn test_non_mapping_document_is_validation_error() {
    let err = parse_building("[1, 2, 3]", MapFormat::Json).expect_err("Liste statt Map");
    assert!(matches!(err, MapError::Validation(_)));
}

#[test]
fn test_syntax_error_is_parse_error() {
    let err = parse_building("{ \"name\": ", MapFormat::Json).expect_err("ungültiges JSON");
    assert_eq!(err.kind(), "parse");
    assert!(err.to_string().starts_with("Invalid JSON format"));
}

#[test]
fn test_wrong_arity_names_level_and_family() {
    let yaml = level_yaml(&format!("{TWO_VERTICES}    walls:\n      - [0, 1]\n      - [0]\n"));
    let err = parse_building(&yaml, MapFormat::Yaml).expect_err("Wand mit einem Element");
    assert_eq!(err.kind(), "shape");
    let msg = err.to_string();
    assert!(msg.contains("level 'L1'"), "{msg}");
    assert!(msg.contains("walls[1]"), "{msg}");
}

#[test]
fn test_non_numeric_index_is_shape_error() {
    let yaml = level_yaml(&format!("{TWO_VERTICES}    lanes:\n      - [0, \"eins\"]\n"));
    let err = parse_building(&yaml, MapFormat::Yaml).expect_err("Index als String");
    assert_eq!(err.kind(), "shape");
    assert!(err.to_string().contains("lanes[0]"));
}

#[test]
fn test_out_of_range_index_is_index_error() {
    let yaml = level_yaml(&format!("{TWO_VERTICES}    floors:\n      - [[0, 1, 5]]\n"));
    let err = parse_building(&yaml, MapFormat::Yaml).expect_err("Index 5 existiert nicht");
    assert_eq!(err.kind(), "index");
    let msg = err.to_string();
    assert!(msg.contains("floors[0]"), "{msg}");
    assert!(msg.contains("vertex index 5"), "{msg}");
}

#[test]
fn test_unknown_keys_land_in_parameter_bag() {
    let yaml = level_yaml(&format!(
        "    x_meters: 42.5\n{TWO_VERTICES}    lanes:\n      - [0, 1, {{graph_idx: 2, speed_limit: 0.5, orientation: forward}}]\n    floors:\n      - [[0, 1], {{texture: blue_linoleum, scale: 1.0}}]\n"
    ));
    let building = parse_building(&yaml, MapFormat::Yaml).expect("Import sollte gelingen");
    let level = building.level("L1").expect("L1");

    let lane = &level.lanes[0];
    assert_eq!(lane.graph_index, 2);
    assert_eq!(lane.orientation, LaneOrientation::Forward);
    let params = lane.params.as_ref().expect("speed_limit bleibt erhalten");
    assert_eq!(params.len(), 1);
    assert_eq!(params["speed_limit"], json!(0.5));

    assert_eq!(level.floors[0].texture, "blue_linoleum");
    assert!(level.floors[0].params.is_none());

    let level_params = level.params.as_ref().expect("x_meters bleibt erhalten");
    assert_eq!(level_params["x_meters"], json!(42.5));
}

#[test]
fn test_vertex_name_and_flags() {
    let yaml = level_yaml(
        "    vertices:\n      - [1.5, -2, 0, charger_1, {is_charger: true}]\n      - [0, 0, 0, \"\"]\n",
    );
    let building = parse_building(&yaml, MapFormat::Yaml).expect("Import sollte gelingen");
    let vertices = &building.level("L1").expect("L1").vertices;
    assert_eq!(vertices[0].name.as_deref(), Some("charger_1"));
    assert_eq!(vertices[0].y, -2.0);
    assert!(crate::core::params::flag_is_set(
        vertices[0].params.as_ref(),
        crate::core::params::PARAM_IS_CHARGER
    ));
    assert!(vertices[1].name.is_none());
    assert!(vertices[1].params.is_none());
}

#[test]
fn test_yaml_and_json_decode_to_same_building() {
    let yaml = r#"
name: Office
levels:
  L1:
    elevation: 0.0
    vertices:
      - [0.0, 0.0, 0.0, "a", {}]
      - [4.0, 0.0, 0.0, "b", {}]
    lanes:
      - [0, 1, {graph_idx: 1, orientation: bidirectional}]
    measurements:
      - [0, 1, 4.0]
lifts:
  - name: LiftA
    levels: [L1]
    position: [2.0, 2.0]
"#;
    let json = r#"{
  "name": "Office",
  "levels": {
    "L1": {
      "elevation": 0.0,
      "vertices": [[0.0, 0.0, 0.0, "a", {}], [4.0, 0.0, 0.0, "b", {}]],
      "lanes": [[0, 1, {"graph_idx": 1, "orientation": "bidirectional"}]],
      "measurements": [[0, 1, 4.0]]
    }
  },
  "lifts": [{"name": "LiftA", "levels": ["L1"], "position": [2.0, 2.0]}]
}"#;
    let from_yaml = parse_building(yaml, MapFormat::Yaml).expect("YAML");
    let from_json = parse_building(json, MapFormat::Json).expect("JSON");
    assert_eq!(from_yaml, from_json);
    assert_eq!(from_yaml.lifts[0].position, Some([2.0, 2.0]));
}

#[test]
fn test_empty_document_is_validation_error() {
    let err = parse_building("~\n", MapFormat::Yaml).expect_err("leeres Dokument");
    assert_eq!(err.kind(), "validation");
}

#[test]
fn test_level_order_follows_input() {
    let yaml = "name: B\nlevels:\n  L2: {elevation: 4}\n  L1: {elevation: 0}\n  B1: {elevation: -3}\n";
    let building = parse_building(yaml, MapFormat::Yaml).expect("Import sollte gelingen");
    let names: Vec<&str> = building.levels.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["L2", "L1", "B1"]);
}
