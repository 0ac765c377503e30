use locale_sync::DocumentProvider;
use locale_sync::TranslationMap;
use locale_sync::sync::translate::apply_translations;

use crate::common::fixtures::{doc, frame, keyed_text, text, text_with_font};

mod common;

fn map_of(entries: &[(&str, &str)]) -> TranslationMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =========================================================================
// Lookup order: full key first, bare key second
// =========================================================================

#[test]
fn bare_key_resolves_when_full_key_misses() {
    let mut document = doc(vec![keyed_text("1:1", "G", "Hello", "common.greeting")]);
    let map = map_of(&[("greeting", "Bonjour")]);

    let applied = apply_translations(&mut document, &map, "common").unwrap();

    assert_eq!(applied, 1);
    assert_eq!(
        document.text_content("1:1").as_deref(),
        Some("Bonjour"),
        "Namespace-relative maps must reach prefixed keys"
    );
}

#[test]
fn full_key_wins_over_bare_key() {
    let mut document = doc(vec![keyed_text("1:1", "G", "Hello", "common.greeting")]);
    let map = map_of(&[("common.greeting", "Salut"), ("greeting", "Bonjour")]);

    apply_translations(&mut document, &map, "common").unwrap();

    assert_eq!(
        document.text_content("1:1").as_deref(),
        Some("Salut"),
        "Lookup order is fixed: full key before bare key"
    );
}

#[test]
fn bare_fallback_requires_matching_namespace() {
    let mut document = doc(vec![keyed_text("1:1", "G", "Hello", "common.greeting")]);
    let map = map_of(&[("greeting", "Bonjour")]);

    let applied = apply_translations(&mut document, &map, "other").unwrap();

    assert_eq!(applied, 0);
    assert_eq!(
        document.text_content("1:1").as_deref(),
        Some("Hello"),
        "A foreign namespace must not strip the prefix"
    );
}

#[test]
fn empty_namespace_skips_bare_fallback() {
    let mut document = doc(vec![keyed_text("1:1", "G", "Hello", "common.greeting")]);
    let map = map_of(&[("greeting", "Bonjour")]);

    let applied = apply_translations(&mut document, &map, "").unwrap();

    assert_eq!(applied, 0, "No target namespace, no prefix stripping");
}

// =========================================================================
// Misses and unkeyed elements
// =========================================================================

#[test]
fn lookup_miss_leaves_element_untouched() {
    let mut document = doc(vec![
        keyed_text("1:1", "A", "Alpha", "ui.alpha"),
        keyed_text("1:2", "B", "Beta", "ui.beta"),
    ]);
    let map = map_of(&[("ui.alpha", "Alef")]);

    let applied = apply_translations(&mut document, &map, "ui").unwrap();

    assert_eq!(applied, 1, "One miss does not block the other element");
    assert_eq!(document.text_content("1:1").as_deref(), Some("Alef"));
    assert_eq!(document.text_content("1:2").as_deref(), Some("Beta"));
}

#[test]
fn elements_without_keys_are_ignored() {
    let mut document = doc(vec![text("1:1", "Plain", "Plain")]);
    let map = map_of(&[("plain", "Nope")]);

    let applied = apply_translations(&mut document, &map, "").unwrap();

    assert_eq!(applied, 0);
    assert_eq!(document.text_content("1:1").as_deref(), Some("Plain"));
}

#[test]
fn locked_element_is_skipped_without_aborting() {
    let mut locked = keyed_text("1:1", "A", "Alpha", "ui.alpha");
    locked.locked = true;
    let mut document = doc(vec![locked, keyed_text("1:2", "B", "Beta", "ui.beta")]);
    let map = map_of(&[("ui.alpha", "Alef"), ("ui.beta", "Bet")]);

    let applied = apply_translations(&mut document, &map, "ui").unwrap();

    assert_eq!(applied, 1, "Only the unlocked element counts");
    assert_eq!(
        document.text_content("1:1").as_deref(),
        Some("Alpha"),
        "Locked element keeps its text"
    );
    assert_eq!(document.text_content("1:2").as_deref(), Some("Bet"));
}

// =========================================================================
// Font preloading
// =========================================================================

#[test]
fn fonts_are_loaded_once_per_identity_before_mutation() {
    let mut document = doc(vec![
        {
            let mut n = text_with_font("1:1", "A", "A", "Inter", "Bold");
            n.stored_key = Some("ui.a".to_string());
            n
        },
        {
            let mut n = text_with_font("1:2", "B", "B", "Inter", "Bold");
            n.stored_key = Some("ui.b".to_string());
            n
        },
        {
            let mut n = text_with_font("1:3", "C", "C", "Inter", "Regular");
            n.stored_key = Some("ui.c".to_string());
            n
        },
        // No key: its font must not be requested.
        text_with_font("1:4", "D", "D", "Roboto", "Regular"),
    ]);
    let map = map_of(&[("ui.a", "x")]);

    apply_translations(&mut document, &map, "ui").unwrap();

    let fonts = document.loaded_fonts();
    assert_eq!(
        fonts.len(),
        2,
        "Two distinct fonts among keyed elements, loaded once each"
    );
    assert!(fonts.iter().any(|f| f.style == "Bold"));
    assert!(fonts.iter().any(|f| f.style == "Regular"));
    assert!(
        !fonts.iter().any(|f| f.family == "Roboto"),
        "Unkeyed elements do not trigger font loads"
    );
}

// =========================================================================
// Working set respects the editor selection
// =========================================================================

#[test]
fn selection_limits_the_working_set() {
    let mut document = doc(vec![
        frame(
            "1:1",
            "Card",
            vec![keyed_text("1:2", "A", "Alpha", "ui.alpha")],
        ),
        keyed_text("1:3", "B", "Beta", "ui.beta"),
    ]);
    document.set_selection(vec!["1:1".to_string()]);
    let map = map_of(&[("ui.alpha", "Alef"), ("ui.beta", "Bet")]);

    let applied = apply_translations(&mut document, &map, "ui").unwrap();

    assert_eq!(applied, 1, "Only the selected subtree participates");
    assert_eq!(document.text_content("1:2").as_deref(), Some("Alef"));
    assert_eq!(
        document.text_content("1:3").as_deref(),
        Some("Beta"),
        "Outside the selection, nothing changes"
    );
}
