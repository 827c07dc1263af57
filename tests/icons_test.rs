use todolist::icons::*;

#[test]
fn test_theme_switching() {
    let mut service = IconService::new(IconTheme::Emoji);
    assert_eq!(service.theme(), IconTheme::Emoji);

    service.set_theme(IconTheme::Ascii);
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_emoji_icons() {
    let service = IconService::new(IconTheme::Emoji);
    assert_eq!(service.pending(), "🔳");
    assert_eq!(service.done(), "✅");
}

#[test]
fn test_unicode_icons() {
    let service = IconService::new(IconTheme::Unicode);
    assert_eq!(service.pending(), "□");
    assert_eq!(service.done(), "✓");
}

#[test]
fn test_ascii_icons() {
    let service = IconService::new(IconTheme::Ascii);
    assert_eq!(service.pending(), "[ ]");
    assert_eq!(service.done(), "[X]");
}
