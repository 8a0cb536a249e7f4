use vitrine_core::consts::PLACEHOLDER_IMAGE;
use vitrine_core::image_set::{ImageRef, ImageSet, ImageSource};

#[test]
fn test_empty_set_gets_placeholder() {
    let set = ImageSet::new(vec![]);
    assert_eq!(set.len(), 1);
    assert!(set.is_placeholder());
    assert_eq!(set.get(0).unwrap().uri, PLACEHOLDER_IMAGE);
}

#[test]
fn test_from_uris_numbers_alt_text() {
    let set = ImageSet::from_uris(["a.png", "b.png"], "Tile");
    assert_eq!(set.get(1), Some(&ImageRef::new("b.png", "Tile 2")));
    assert!(!set.is_placeholder());
}

#[test]
fn test_get_clamped() {
    let set = ImageSet::from_uris(["a.png", "b.png"], "Tile");
    assert_eq!(set.get_clamped(10).uri, "b.png");
}

#[test]
fn test_sources_of_mixed_shapes_flatten_in_order() {
    let json = r#"[
        "front.jpg",
        {"url": "side.jpg", "alt": "Side view"},
        [{"src": "detail-1.jpg"}, ["detail-2.jpg", {"image": "detail-3.jpg"}]],
        "   ",
        {"url": ""}
    ]"#;
    let sources: Vec<ImageSource> = serde_json::from_str(json).unwrap();
    let set = ImageSet::from_sources(&sources, "Cement bag");

    let uris: Vec<_> = set.iter().map(|i| i.uri.as_str()).collect();
    assert_eq!(
        uris,
        vec!["front.jpg", "side.jpg", "detail-1.jpg", "detail-2.jpg", "detail-3.jpg"]
    );
    assert_eq!(set.get(0).unwrap().alt, "Cement bag 1");
    assert_eq!(set.get(1).unwrap().alt, "Side view");
    assert_eq!(set.get(4).unwrap().alt, "Cement bag 5");
}

#[test]
fn test_sources_all_blank_fall_back_to_placeholder() {
    let sources = vec![ImageSource::Uri(String::new()), ImageSource::Nested(vec![])];
    let set = ImageSet::from_sources(&sources, "Item");
    assert!(set.is_placeholder());
}

#[test]
fn test_blank_alt_uses_fallback() {
    let sources = vec![ImageSource::Entry {
        url: "a.png".into(),
        alt: Some("  ".into()),
    }];
    let set = ImageSet::from_sources(&sources, "Item");
    assert_eq!(set.get(0).unwrap().alt, "Item 1");
}
