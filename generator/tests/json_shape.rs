use elements::Dataset;
use generator::{generate, DEFAULT_SEED};
use serde_json::Value;

fn canonical_json() -> String {
    serde_json::to_string_pretty(&generate(DEFAULT_SEED)).unwrap()
}

#[test]
fn serialized_bytes_are_reproducible() {
    assert_eq!(canonical_json(), canonical_json());
}

#[test]
fn document_round_trips() {
    let dataset = generate(DEFAULT_SEED);
    let json = serde_json::to_string_pretty(&dataset).unwrap();
    let parsed: Dataset = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, dataset);
}

#[test]
fn document_is_pretty_printed_with_two_space_indent() {
    let json = canonical_json();
    assert!(json.starts_with("{\n  \"polygons\""));
}

#[test]
fn top_level_keys_exact_and_ordered() {
    let json = canonical_json();
    let parsed: Value = serde_json::from_str(&json).unwrap();
    let object = parsed.as_object().unwrap();
    assert_eq!(object.len(), 4);

    let positions: Vec<usize> = ["polygons", "customMarkers", "pinnedWidgets", "lines"]
        .iter()
        .map(|key| json.find(&format!("\"{key}\"")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn polygons_are_point_triples() {
    let parsed: Value = serde_json::from_str(&canonical_json()).unwrap();
    let polygons = parsed["polygons"].as_array().unwrap();
    assert_eq!(polygons.len(), 100);
    for polygon in polygons {
        let object = polygon.as_object().unwrap();
        assert_eq!(object.len(), 1);
        let points = object["points"].as_array().unwrap();
        assert_eq!(points.len(), 3);
        for point in points {
            let pair = point.as_array().unwrap();
            assert_eq!(pair.len(), 2);
            assert!(pair.iter().all(Value::is_f64));
        }
    }
}

#[test]
fn markers_carry_coordinates_and_type() {
    let parsed: Value = serde_json::from_str(&canonical_json()).unwrap();
    let markers = parsed["customMarkers"].as_array().unwrap();
    assert_eq!(markers.len(), 100);
    let labels = ["restaurant", "hospital", "school", "park", "bank"];
    for (index, marker) in markers.iter().enumerate() {
        let object = marker.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["coordinates"].as_array().unwrap().len(), 2);
        assert_eq!(
            object["type"].as_str().unwrap(),
            labels[index % labels.len()]
        );
    }
}

#[test]
fn widgets_carry_only_coordinates() {
    let parsed: Value = serde_json::from_str(&canonical_json()).unwrap();
    let widgets = parsed["pinnedWidgets"].as_array().unwrap();
    assert_eq!(widgets.len(), 10);
    for widget in widgets {
        let object = widget.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["coordinates"].as_array().unwrap().len(), 2);
    }
}

#[test]
fn lines_carry_endpoints_and_style() {
    let parsed: Value = serde_json::from_str(&canonical_json()).unwrap();
    let lines = parsed["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 100);
    let styles = ["solid", "dashed", "dotted"];
    for (index, line) in lines.iter().enumerate() {
        let object = line.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["start"].as_array().unwrap().len(), 2);
        assert_eq!(object["end"].as_array().unwrap().len(), 2);
        assert_eq!(
            object["style"].as_str().unwrap(),
            styles[index % styles.len()]
        );
    }
}
