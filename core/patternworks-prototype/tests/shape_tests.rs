use patternworks_prototype::{PrototypeError, Shape, ShapeKind};
use pretty_assertions::assert_eq;
use std::str::FromStr;

// ── ShapeKind ─────────────────────────────────────────────────────

#[test]
fn kind_tags_are_lowercase() {
    assert_eq!(ShapeKind::Circle.as_str(), "circle");
    assert_eq!(ShapeKind::Square.as_str(), "square");
    assert_eq!(ShapeKind::Circle.to_string(), "circle");
}

#[test]
fn kind_labels_are_capitalised() {
    assert_eq!(ShapeKind::Circle.label(), "Circle");
    assert_eq!(ShapeKind::Square.label(), "Square");
}

#[test]
fn kind_parses_case_insensitively() {
    assert_eq!(ShapeKind::from_str("circle").unwrap(), ShapeKind::Circle);
    assert_eq!(ShapeKind::from_str("CIRCLE").unwrap(), ShapeKind::Circle);
    assert_eq!(ShapeKind::from_str(" Square ").unwrap(), ShapeKind::Square);
}

#[test]
fn kind_parse_unknown() {
    let err = ShapeKind::from_str("triangle").unwrap_err();
    assert_eq!(err, PrototypeError::UnknownKind("triangle".into()));
}

#[test]
fn kind_serializes_as_tag() {
    let json = serde_json::to_string(&ShapeKind::Square).unwrap();
    assert_eq!(json, r#""square""#);
}

// ── Shape ─────────────────────────────────────────────────────────

#[test]
fn constructors_set_kind_and_id() {
    let circle = Shape::circle("c");
    assert_eq!(circle.kind(), ShapeKind::Circle);
    assert_eq!(circle.id(), "c");

    let square = Shape::square("s");
    assert_eq!(square.kind(), ShapeKind::Square);
    assert!(square.attributes().is_empty());
}

#[test]
fn set_id_replaces_id() {
    let mut shape = Shape::circle("1");
    shape.set_id("42");
    assert_eq!(shape.id(), "42");
}

#[test]
fn set_attribute_overwrites() {
    let mut shape = Shape::square("2");
    shape.set_attribute("fill", "red");
    shape.set_attribute("fill", "blue");
    assert_eq!(shape.attribute("fill"), Some("blue"));
    assert_eq!(shape.attribute("stroke"), None);
}

#[test]
fn draw_describes_kind() {
    assert_eq!(Shape::circle("1").draw(), "Drawing a Circle");
    assert_eq!(Shape::square("2").draw(), "Drawing a Square");
}

#[test]
fn shape_json_shape() {
    let mut shape = Shape::circle("1");
    let plain = serde_json::to_value(&shape).unwrap();
    assert_eq!(plain, serde_json::json!({ "id": "1", "kind": "circle" }));

    shape.set_attribute("fill", "red");
    let styled = serde_json::to_value(&shape).unwrap();
    assert_eq!(styled["attributes"]["fill"], "red");
}

// ── duplicate ─────────────────────────────────────────────────────

#[test]
fn duplicate_copies_all_fields() {
    let mut shape = Shape::square("7");
    shape.set_attribute("fill", "green");
    let copy = shape.duplicate().unwrap();
    assert_eq!(copy, shape);
}

#[test]
fn duplicate_does_not_share_storage() {
    let mut shape = Shape::circle("1");
    shape.set_attribute("fill", "red");
    let copy = shape.duplicate().unwrap();
    assert_ne!(copy.id().as_ptr(), shape.id().as_ptr());
    assert_ne!(
        copy.attribute("fill").unwrap().as_ptr(),
        shape.attribute("fill").unwrap().as_ptr()
    );
}

#[test]
fn mutating_duplicate_leaves_source_alone() {
    let mut shape = Shape::circle("1");
    shape.set_attribute("fill", "red");
    let mut copy = shape.duplicate().unwrap();
    copy.set_id("99");
    copy.set_attribute("fill", "black");
    copy.set_attribute("stroke", "white");

    assert_eq!(shape.id(), "1");
    assert_eq!(shape.attribute("fill"), Some("red"));
    assert_eq!(shape.attribute("stroke"), None);
}
