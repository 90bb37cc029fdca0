use proptest::prelude::*;

use super::*;

#[test]
fn test_push_records_timestamped_entry() {
    let mut logs = LogState::new();
    logs.push("Generating reply options...");

    let entry = logs.entries().back().unwrap();
    assert_eq!(entry.text, "Generating reply options...");
    assert_eq!(entry.timestamp.len(), 8);
    assert_eq!(entry.timestamp.matches(':').count(), 2);
}

#[test]
fn test_oldest_entries_are_dropped() {
    let mut logs = LogState::new();
    for i in 0..MAX_LOG_ENTRIES + 5 {
        logs.push(format!("line {}", i));
    }

    assert_eq!(logs.len(), MAX_LOG_ENTRIES);
    assert_eq!(logs.entries().front().unwrap().text, "line 5");
}

#[test]
fn test_scrolled_view_stays_put_on_new_entries() {
    let mut logs = LogState::new();
    for i in 0..10 {
        logs.push(format!("line {}", i));
    }
    logs.scroll_up(3);
    logs.push("new");
    assert_eq!(logs.scroll_from_bottom(), 4);

    logs.scroll_to_bottom();
    logs.push("newer");
    assert_eq!(logs.scroll_from_bottom(), 0);
}

#[test]
fn test_clear() {
    let mut logs = LogState::new();
    logs.push("a");
    logs.scroll_up(1);
    logs.clear();
    assert!(logs.is_empty());
    assert_eq!(logs.scroll_from_bottom(), 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_scroll_never_exceeds_entries(
        count in 0usize..50,
        ups in prop::collection::vec(0usize..20, 0..10)
    ) {
        let mut logs = LogState::new();
        for i in 0..count {
            logs.push(format!("{}", i));
        }
        for up in ups {
            logs.scroll_up(up);
            prop_assert!(logs.scroll_from_bottom() <= logs.len());
        }
    }
}
