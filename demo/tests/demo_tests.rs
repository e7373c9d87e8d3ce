use patternworks_adapter::DrawError;
use patternworks_demo::{run_demo, DemoError};
use patternworks_prototype::PrototypeError;
use pretty_assertions::assert_eq;

#[test]
fn demo_prints_expected_sequence() {
    let lines = run_demo().unwrap();
    assert_eq!(
        lines,
        vec![
            "Shape: Circle",
            "Drawing a Circle",
            "Shape: Square",
            "Drawing a Square",
            "Drawing an advanced Circle",
            "Drawing an advanced Square",
            "Observer notified with state: State 1",
            "Observer notified with state: State 2",
        ]
    );
}

#[test]
fn demo_is_repeatable() {
    assert_eq!(run_demo().unwrap(), run_demo().unwrap());
}

#[test]
fn demo_error_wraps_prototype_error() {
    let err: DemoError = PrototypeError::NotFound("3".into()).into();
    let msg = err.to_string();
    assert!(msg.contains("prototype"));
    assert!(msg.contains("not found: 3"));
}

#[test]
fn demo_error_wraps_draw_error() {
    let err: DemoError = DrawError::UnsupportedShape("triangle".into()).into();
    assert!(matches!(err, DemoError::Adapter(DrawError::UnsupportedShape(_))));
    assert!(err.to_string().contains("triangle"));
}
