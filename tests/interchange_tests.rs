//! Integrationstests für den Interchange-Service und die Datei-Aktionen.

use rmf_site_editor::interchange::file_io::{load_building, save_building};
use rmf_site_editor::wire::{PointType, SegmentType};
use rmf_site_editor::{
    export_map, import_map, EditorScene, ExportRequest, ImportRequest, ImportResponse, MapFormat,
};
use serde_json::json;

const OFFICE: &str = include_str!("fixtures/office.building.yaml");

fn import_office() -> rmf_site_editor::Building {
    match import_map(&ImportRequest {
        data: Some(OFFICE.into()),
        format: Some("yaml".into()),
    }) {
        ImportResponse::Success { building, .. } => building,
        ImportResponse::Failure(failure) => panic!("Import fehlgeschlagen: {}", failure.error),
    }
}

#[test]
fn test_export_request_from_transport_json() {
    let building = import_office();
    let request: ExportRequest = serde_json::from_value(json!({
        "building": serde_json::to_value(&building).expect("Building serialisierbar"),
        "format": "json",
    }))
    .expect("Request sollte deserialisierbar sein");

    let payload = export_map(&request).expect("Export erwartet");
    assert_eq!(payload.content_type, "application/json");
    assert_eq!(payload.filename, "building.json");

    let reimported = import_map(&ImportRequest {
        data: Some(payload.data),
        format: Some("json".into()),
    });
    assert_eq!(reimported.building(), Some(&building));
}

#[test]
fn test_transport_building_uses_camel_case_fields() {
    let value = serde_json::to_value(import_office()).expect("Serialisierung");
    let lane = &value["levels"]["L1"]["lanes"][1];
    assert_eq!(lane["startVertexIndex"], json!(1));
    assert_eq!(lane["graphIndex"], json!(2));
    assert_eq!(value["levels"]["L1"]["doors"][0]["type"], json!("sliding"));
}

#[test]
fn test_malformed_levels_is_validation_failure() {
    let response = import_map(&ImportRequest {
        data: Some("name: office\nlevels: \"L1\"\n".into()),
        format: Some("yaml".into()),
    });
    let ImportResponse::Failure(failure) = response else {
        panic!("Validierungsfehler erwartet");
    };
    assert!(!failure.success);
    assert_eq!(failure.kind, "validation");
    assert_eq!(failure.status_code(), 400);
}

#[test]
fn test_syntax_error_is_parse_failure() {
    let response = import_map(&ImportRequest {
        data: Some("name: [unclosed".into()),
        format: Some("yaml".into()),
    });
    let ImportResponse::Failure(failure) = response else {
        panic!("Parse-Fehler erwartet");
    };
    assert_eq!(failure.kind, "parse");
    assert!(failure.error.starts_with("Invalid YAML format"));
}

#[test]
fn test_scene_projection_of_fixture() {
    let building = import_office();
    let scene = EditorScene::from_building(&building, "L1");

    assert_eq!(scene.points.len(), 6);
    assert_eq!(scene.points[0].point_type, PointType::Charging);
    assert_eq!(scene.points[2].point_type, PointType::Parking);
    assert_eq!(scene.points[1].id, "imported-point-1");
    assert_eq!(scene.segments.len(), 3 + 2 + 3);
    assert_eq!(
        scene
            .segments
            .iter()
            .filter(|s| s.segment_type == SegmentType::Lane)
            .count(),
        3
    );

    let rebuilt = scene
        .to_building("RMF Site Map", "L1")
        .expect("Projektion erwartet");
    let level = rebuilt.level("L1").expect("L1");
    assert_eq!(level.vertex_count(), 6);
    assert_eq!(level.lanes[1].graph_index, 2);
    assert_eq!(level.edge_count(), 8);
}

#[test]
fn test_file_roundtrip_picks_format_from_extension() {
    let dir = std::env::temp_dir().join(format!("rmf_site_editor_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis");
    let source = dir.join("office.building.yaml");
    let target = dir.join("office.json");
    std::fs::write(&source, OFFICE).expect("Fixture schreiben");

    let building = load_building(&source, MapFormat::Yaml).expect("Laden");
    save_building(&building, &target, MapFormat::Yaml).expect("Speichern");

    let written = std::fs::read_to_string(&target).expect("Lesen");
    assert!(written.trim_start().starts_with('{'));
    let reloaded = load_building(&target, MapFormat::Yaml).expect("Neu laden");
    assert_eq!(reloaded, building);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_missing_file_reports_path() {
    let err = load_building(
        std::path::Path::new("/nonexistent/site.building.yaml"),
        MapFormat::Yaml,
    )
    .expect_err("Datei existiert nicht");
    assert!(format!("{err:#}").contains("site.building.yaml"));
}
