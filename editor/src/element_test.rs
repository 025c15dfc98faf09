use super::*;

#[test]
fn new_element_uses_defaults() {
    let e = ConfigElement::new(ElementKind::Text);
    assert_eq!((e.x, e.y), (0, 0));
    assert_eq!((e.width, e.height), (DEFAULT_ELEMENT_SIZE, DEFAULT_ELEMENT_SIZE));
}

#[test]
fn new_elements_get_distinct_ids() {
    let a = ConfigElement::new(ElementKind::Image);
    let b = ConfigElement::new(ElementKind::Image);
    assert_ne!(a.id, b.id);
}

#[test]
fn kind_serializes_lowercase() {
    assert_eq!(serde_json::to_value(ElementKind::Image).unwrap(), "image");
    assert_eq!(serde_json::to_value(ElementKind::Text).unwrap(), "text");
}

#[test]
fn kind_rejects_unknown_values() {
    assert!(serde_json::from_str::<ElementKind>("\"video\"").is_err());
}

#[test]
fn element_round_trips_through_json() {
    let mut e = ConfigElement::new(ElementKind::Image);
    e.x = -40;
    e.y = 12;
    e.width = 800;

    let json = serde_json::to_string(&e).unwrap();
    let restored: ConfigElement = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, e);
}
