use todolist::icons::{IconService, IconTheme};
use todolist::Item;

#[test]
fn test_done_question() {
    let mut item = Item::new("Buy milk");
    assert!(!item.is_done());
    item.mark_done();
    assert!(item.is_done());
}

#[test]
fn test_undone() {
    let mut item = Item::new("Buy milk");
    item.mark_done();
    item.mark_undone();
    assert!(!item.is_done());
}

#[test]
fn test_to_s() {
    let mut item = Item::new("Buy milk");
    assert_eq!(item.to_string(), "[ ] Buy milk");
    item.mark_done();
    assert_eq!(item.to_string(), "[X] Buy milk");
}

#[test]
fn test_render_with_themes() {
    let mut item = Item::new("Buy milk");
    item.mark_done();

    assert_eq!(item.render(&IconService::default()), "[X] Buy milk");
    assert_eq!(item.render(&IconService::new(IconTheme::Unicode)), "✓ Buy milk");
    assert_eq!(item.render(&IconService::new(IconTheme::Emoji)), "✅ Buy milk");
}

#[test]
fn test_deserialize_defaults_done() {
    let item: Item = serde_json::from_str(r#"{"title":"Clean room"}"#).unwrap();
    assert_eq!(item, Item::new("Clean room"));
}
