use dxf::entities::EntityType;
use dxf::Drawing;
use osm2dxf_core::{DxfVersion, PlanarPoint, Polyline};
use osm2dxf_drawing::{output_path_for, DrawingError, DrawingWriter, DxfDrawingWriter};
use tempfile::TempDir;

fn line(z: f64) -> Polyline {
    Polyline {
        vertices: vec![PlanarPoint::new(0.0, 0.0, z), PlanarPoint::new(500.0, 42.5, z)],
        closed: false,
        elevation: z * 15.0,
    }
}

#[test]
fn test_saved_file_keeps_layers_and_entities() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let target = output_path_for(&temp_dir.path().join("city.osm"));

    let mut writer = DxfDrawingWriter::new(DxfVersion::R2018);
    writer.create_layer("HIGHWAY").unwrap();
    writer.create_layer("BUILDING").unwrap();
    writer.add_polyline("HIGHWAY", &line(8.0)).unwrap();
    writer.save(&target).unwrap();

    assert!(target.ends_with("city.osm.dxf"));
    let drawing = Drawing::load_file(&target).expect("Failed to reload DXF");

    let layers: Vec<_> = drawing.layers().map(|l| l.name.clone()).collect();
    assert!(layers.contains(&"HIGHWAY".to_string()));
    assert!(layers.contains(&"BUILDING".to_string()));

    let entities: Vec<_> = drawing.entities().collect();
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].common.layer, "HIGHWAY");
    assert!((entities[0].common.elevation - 8.0).abs() < 1e-9);
    match &entities[0].specific {
        EntityType::LwPolyline(poly) => {
            assert_eq!(poly.vertices.len(), 2);
            assert!(!poly.is_closed());
            assert!((poly.vertices[1].x - 500.0).abs() < 1e-9);
        }
        other => panic!("unexpected entity {:?}", other),
    }
}

#[test]
fn test_save_into_missing_directory_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let target = temp_dir.path().join("no-such-dir").join("out.dxf");

    let mut writer = DxfDrawingWriter::default();
    writer.create_layer("HIGHWAY").unwrap();
    let err = writer.save(&target).unwrap_err();
    assert!(matches!(err, DrawingError::Save { .. }));
    assert!(!target.exists());
}
