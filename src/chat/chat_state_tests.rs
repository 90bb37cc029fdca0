use proptest::prelude::*;

use super::*;

#[test]
fn test_set_input_folds_lines() {
    let mut chat = ChatState::new();
    chat.set_input("first line\r\nsecond\n\nthird");
    assert_eq!(chat.input_text(), "first line second third");
    assert_eq!(chat.input.lines().len(), 1);
}

#[test]
fn test_set_input_replaces_existing_text() {
    let mut chat = ChatState::new();
    chat.set_input("old");
    chat.set_input("new");
    assert_eq!(chat.input_text(), "new");
}

#[test]
fn test_clear_input() {
    let mut chat = ChatState::new();
    chat.insert_text("hello");
    chat.clear_input();
    assert_eq!(chat.input_text(), "");
}

#[test]
fn test_highlight_wraps_both_ways() {
    let mut chat = ChatState::new();
    chat.highlight_previous();
    assert_eq!(chat.highlighted(), 2);
    chat.highlight_next();
    assert_eq!(chat.highlighted(), 0);
    chat.highlight_next();
    chat.reset_highlight();
    assert_eq!(chat.highlighted(), 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_highlight_stays_in_range(moves in prop::collection::vec(any::<bool>(), 0..30)) {
        let mut chat = ChatState::new();
        for forward in moves {
            if forward {
                chat.highlight_next();
            } else {
                chat.highlight_previous();
            }
            prop_assert!(chat.highlighted() < OPTION_COUNT);
        }
    }
}
