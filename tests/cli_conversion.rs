use dxf::entities::EntityType;
use dxf::Drawing;
use osm2dxf::{run, Config, DxfVersion};
use std::path::PathBuf;
use tempfile::TempDir;

const DISTRICT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6">
  <node id="1" lat="52.500" lon="13.300"/>
  <node id="2" lat="52.510" lon="13.350"/>
  <node id="3" lat="52.520" lon="13.400"/>
  <node id="4" lat="52.505" lon="13.320"/>
  <way id="7">
    <nd ref="1"/><nd ref="2"/><nd ref="3"/>
    <tag k="highway" v="secondary"/>
  </way>
  <way id="8">
    <nd ref="1"/><nd ref="4"/><nd ref="2"/><nd ref="1"/>
    <tag k="building" v="yes"/>
    <tag k="ele" v="45"/>
  </way>
  <way id="9">
    <nd ref="3"/><nd ref="404"/>
    <tag k="highway" v="footway"/>
  </way>
</osm>"#;

fn write_source(dir: &TempDir, content: &str) -> PathBuf {
    let source = dir.path().join("district.osm");
    std::fs::write(&source, content).unwrap();
    source
}

#[test]
fn test_end_to_end_conversion() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let source = write_source(&temp_dir, DISTRICT);

    let summary = run(&source, "highway, building", &Config::default()).unwrap();
    assert_eq!(summary.total_written(), 2);
    assert_eq!(summary.total_skipped(), 1);

    let target = temp_dir.path().join("district.osm.dxf");
    assert!(target.exists());

    let drawing = Drawing::load_file(&target).expect("Failed to reload DXF");
    let layers: Vec<_> = drawing.layers().map(|l| l.name.clone()).collect();
    assert!(layers.contains(&"HIGHWAY".to_string()));
    assert!(layers.contains(&"BUILDING".to_string()));

    let mut seen = Vec::new();
    for entity in drawing.entities() {
        if let EntityType::LwPolyline(poly) = &entity.specific {
            seen.push((entity.common.layer.clone(), poly.vertices.len(), poly.is_closed()));
            if entity.common.layer == "BUILDING" {
                assert!((entity.common.elevation - 3.0).abs() < 1e-9);
            }
        }
    }
    assert_eq!(
        seen,
        vec![
            ("HIGHWAY".to_string(), 3, false),
            ("BUILDING".to_string(), 4, true),
        ]
    );
}

#[test]
fn test_invalid_tag_list_writes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let source = write_source(&temp_dir, DISTRICT);

    assert!(run(&source, " , ", &Config::default()).is_err());
    assert!(!temp_dir.path().join("district.osm.dxf").exists());
}

#[test]
fn test_missing_source_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let source = temp_dir.path().join("nowhere.osm");

    let err = run(&source, "highway", &Config::default()).unwrap_err();
    assert!(format!("{:#}", err).contains("nowhere.osm"));
}

#[test]
fn test_invalid_config_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let source = write_source(&temp_dir, DISTRICT);

    let mut config = Config::default();
    config.drawing.width = 0.0;
    assert!(run(&source, "highway", &config).is_err());
    assert!(!temp_dir.path().join("district.osm.dxf").exists());
}

#[test]
fn test_oldest_dxf_version_keeps_polylines() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let source = write_source(&temp_dir, DISTRICT);

    let mut config = Config::default();
    config.drawing.dxf_version = DxfVersion::R14;
    let summary = run(&source, "highway,building", &config).unwrap();

    let drawing = Drawing::load_file(temp_dir.path().join("district.osm.dxf"))
        .expect("Failed to reload DXF");
    let polylines = drawing
        .entities()
        .filter(|e| matches!(e.specific, EntityType::LwPolyline(_)))
        .count();
    assert_eq!(polylines, summary.total_written());
    assert_eq!(polylines, 2);
}

#[test]
fn test_keys_sharing_a_layer_name_convert() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let source = write_source(&temp_dir, DISTRICT);

    let summary = run(&source, "straße,strasse", &Config::default()).unwrap();
    assert_eq!(summary.layers.len(), 1);
    assert_eq!(summary.layers[0].layer, "STRASSE");
    assert!(temp_dir.path().join("district.osm.dxf").exists());
}
