//! Tests for the clipboard mirror

use super::*;
use proptest::prelude::*;

fn mirror() -> ClipboardMirror {
    ClipboardMirror::new(true, ClipboardBackend::Osc52)
}

#[test]
fn test_publish_remembers_text() {
    let mut mirror = mirror();
    mirror.publish("see you tonight").unwrap();
    assert_eq!(mirror.last_published(), Some("see you tonight"));
}

#[test]
fn test_publish_ignores_empty_text() {
    let mut mirror = mirror();
    mirror.publish("first").unwrap();
    mirror.publish("").unwrap();
    assert_eq!(mirror.last_published(), Some("first"));
}

#[test]
fn test_on_change_suppresses_own_reply() {
    let mut mirror = mirror();
    mirror.publish("my reply").unwrap();
    assert_eq!(mirror.on_change("my reply"), None);
    assert_eq!(mirror.on_change("their message"), Some("their message".to_string()));
}

#[test]
fn test_on_change_ignores_empty_text() {
    assert_eq!(mirror().on_change(""), None);
}

#[test]
fn test_on_change_disabled() {
    let mirror = ClipboardMirror::new(false, ClipboardBackend::Osc52);
    assert_eq!(mirror.on_change("hello"), None);
}

#[test]
fn test_observe_first_sample_is_baseline() {
    let mut mirror = mirror();
    assert_eq!(mirror.observe(Some("old text".into())), None);
    assert_eq!(mirror.observe(Some("old text".into())), None);
    assert_eq!(mirror.observe(Some("new text".into())), Some("new text".to_string()));
}

#[test]
fn test_observe_skips_published_reply() {
    let mut mirror = mirror();
    mirror.observe(Some("before".into()));
    mirror.publish("reply").unwrap();
    assert_eq!(mirror.observe(Some("reply".into())), None);

    // Copying the same reply again elsewhere still matches our own output
    mirror.observe(Some("other".into()));
    assert_eq!(mirror.observe(Some("reply".into())), None);
}

#[test]
fn test_observe_non_text_clipboard() {
    let mut mirror = mirror();
    mirror.observe(Some("a".into()));
    assert_eq!(mirror.observe(None), None);
    assert_eq!(mirror.observe(Some("a".into())), None);
}

#[test]
fn test_reenabling_takes_new_baseline() {
    let mut mirror = mirror();
    mirror.observe(Some("a".into()));
    mirror.set_enabled(false);
    assert_eq!(mirror.observe(Some("b".into())), None);

    mirror.set_enabled(true);
    assert_eq!(mirror.observe(Some("c".into())), None);
    assert_eq!(mirror.observe(Some("d".into())), Some("d".to_string()));
}

#[test]
fn test_poll_if_due_respects_interval() {
    // Osc52 reads nothing, so this only exercises the timer
    let mut mirror = mirror();
    let start = Instant::now();
    assert_eq!(mirror.poll_if_due(start), None);
    assert_eq!(mirror.last_poll, Some(start));

    mirror.poll_if_due(start + Duration::from_millis(100));
    assert_eq!(mirror.last_poll, Some(start));

    let later = start + POLL_INTERVAL;
    mirror.poll_if_due(later);
    assert_eq!(mirror.last_poll, Some(later));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_published_text_never_echoes(text in "\\PC{1,40}") {
        let mut mirror = mirror();
        mirror.publish(&text).unwrap();
        prop_assert_eq!(mirror.on_change(&text), None);
    }

    #[test]
    fn prop_foreign_text_passes(published in "[a-z]{1,10}", foreign in "[A-Z]{1,10}") {
        let mut mirror = mirror();
        mirror.publish(&published).unwrap();
        prop_assert_eq!(mirror.on_change(&foreign), Some(foreign.clone()));
    }
}
