use super::*;
use editor::{ElementKind, TemplateBackground, gesture, panel};

#[test]
fn creation_payload_carries_metadata_and_layout() {
    let mut config = ConfigureSession::new("Event Display", "conference badge");
    let image = config.session.store.add(ElementKind::Image);
    config.session.store.add(ElementKind::Text);
    gesture::complete_drag(&mut config.session.store, image, 40, 25);

    let payload = config.creation_payload();
    assert_eq!(payload.title, "Event Display");
    assert_eq!(payload.elements.len(), 2);

    let first = &payload.elements[0];
    assert_eq!(first.id, Some(image));
    assert_eq!(first.kind, ElementKind::Image);
    assert_eq!((first.position.x, first.position.y), (40, 25));
    assert_eq!(first.width, Some(200));
    assert!(first.content.is_none());
    assert!(first.url.is_none());
}

#[test]
fn update_payload_replaces_all_mutable_fields() {
    let mut config = ConfigureSession::new("Card", "");
    config.session.store.add(ElementKind::Text);
    config.title = "Card v2".into();

    let payload = config.update_payload();
    assert_eq!(payload.title.as_deref(), Some("Card v2"));
    assert_eq!(payload.description.as_deref(), Some(""));
    assert_eq!(payload.elements.as_ref().map(Vec::len), Some(1));
}

#[test]
fn payload_follows_clamped_resizes_and_field_edits() {
    let mut config = ConfigureSession::new("Post", "");
    let id = config.session.store.add(ElementKind::Image);
    gesture::complete_resize(&mut config.session.store, id, 1000, 40);
    panel::edit_field(&mut config.session.store, panel::Field::X, "-12").unwrap();

    let element = &config.creation_payload().elements[0];
    assert_eq!(element.width, Some(800));
    assert_eq!(element.height, Some(100));
    assert_eq!(element.position.x, -12);
}

#[test]
fn removed_areas_do_not_reach_the_payload() {
    let mut config = ConfigureSession::new("Post", "");
    let keep = config.session.store.add(ElementKind::Text);
    let drop = config.session.store.add(ElementKind::Image);
    config.session.store.remove(drop);

    let elements = config.creation_payload().elements;
    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].id, Some(keep));
}

#[test]
fn background_upload_does_not_leak_into_the_payload() {
    // The background anchors coordinates locally; the saved template only
    // carries elements.
    let mut config = ConfigureSession::new("Post", "");
    config
        .session
        .set_background(TemplateBackground::from_bytes("png", &[1, 2, 3]));
    config.session.store.add(ElementKind::Image);

    let payload = config.creation_payload();
    assert_eq!(payload.elements.len(), 1);
}
