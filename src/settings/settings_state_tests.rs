use proptest::prelude::*;

use super::*;
use crate::config::ClipboardBackend;

fn state_at(key: ConfigKey) -> SettingsState {
    let mut state = SettingsState::new(&Config::default());
    while state.selected_key() != key {
        state.move_down();
    }
    state
}

#[test]
fn test_cursor_is_clamped() {
    let mut state = SettingsState::new(&Config::default());
    state.move_up();
    assert_eq!(state.cursor(), 0);
    for _ in 0..20 {
        state.move_down();
    }
    assert_eq!(state.selected_key(), ConfigKey::ClipboardBackend);
}

#[test]
fn test_edit_text_value() {
    let mut state = state_at(ConfigKey::UserName);
    assert!(state.begin_edit());
    let editor = state.editor_mut().unwrap();
    editor.delete_line_by_head();
    editor.insert_str("  Ann  ");

    state.commit_edit().unwrap();
    assert!(!state.is_editing());
    assert_eq!(state.draft().user_name, "Ann");
    assert!(state.is_dirty(&Config::default()));
}

#[test]
fn test_edit_list_value_splits_on_commas() {
    let mut state = state_at(ConfigKey::CustomModels);
    state.begin_edit();
    let editor = state.editor_mut().unwrap();
    assert_eq!(editor.lines()[0], "gpt-3.5-turbo, gpt-4, gpt-4o, gpt-4o-mini");
    editor.delete_line_by_head();
    editor.insert_str("a, ,b ,c");

    state.commit_edit().unwrap();
    assert_eq!(state.draft().custom_models, vec!["a", "b", "c"]);
}

#[test]
fn test_invalid_backend_keeps_editor_open() {
    let mut state = state_at(ConfigKey::ClipboardBackend);
    state.begin_edit();
    let editor = state.editor_mut().unwrap();
    editor.delete_line_by_head();
    editor.insert_str("pbcopy");

    assert!(state.commit_edit().is_err());
    assert!(state.is_editing());
    assert_eq!(state.draft().clipboard_backend, ClipboardBackend::Auto);
}

#[test]
fn test_cancel_edit_leaves_draft_alone() {
    let mut state = state_at(ConfigKey::BaseUrl);
    state.begin_edit();
    state.editor_mut().unwrap().insert_str("/extra");
    state.cancel_edit();
    assert!(!state.is_dirty(&Config::default()));
}

#[test]
fn test_flags_toggle_instead_of_edit() {
    let mut state = state_at(ConfigKey::UsePresetDirections);
    assert!(!state.begin_edit());
    assert!(state.toggle());
    assert!(!state.draft().use_preset_directions);
    assert!(state.toggle());
    assert!(state.draft().use_preset_directions);
}

#[test]
fn test_toggle_ignores_text_keys() {
    let mut state = state_at(ConfigKey::Model);
    assert!(!state.toggle());
}

#[test]
fn test_model_cycles_through_custom_models() {
    let mut state = state_at(ConfigKey::Model);
    assert_eq!(state.draft().model, "gpt-4o-mini");

    assert!(state.cycle(true));
    assert_eq!(state.draft().model, "gpt-3.5-turbo");
    assert!(state.cycle(false));
    assert_eq!(state.draft().model, "gpt-4o-mini");
    state.cycle(false);
    assert_eq!(state.draft().model, "gpt-4o");
}

#[test]
fn test_unknown_model_cycles_to_first() {
    let config = Config {
        model: "local-llama".to_string(),
        ..Config::default()
    };
    let mut state = SettingsState::new(&config);
    state.move_down();
    state.move_down();
    state.cycle(true);
    assert_eq!(state.draft().model, "gpt-3.5-turbo");
}

#[test]
fn test_backend_cycles() {
    let mut state = state_at(ConfigKey::ClipboardBackend);
    state.cycle(true);
    assert_eq!(state.draft().clipboard_backend, ClipboardBackend::System);
    state.cycle(false);
    state.cycle(false);
    assert_eq!(state.draft().clipboard_backend, ClipboardBackend::Osc52);
}

#[test]
fn test_revert_discards_draft() {
    let mut state = state_at(ConfigKey::EnableClipboardMonitor);
    state.toggle();
    state.revert(&Config::default());
    assert!(!state.is_dirty(&Config::default()));
}

#[test]
fn test_display_value_masks_api_key() {
    let mut config = Config::default();
    assert_eq!(display_value(&config, ConfigKey::ApiKey), "(not set)");
    config.api_key = "sk-secret-value".to_string();
    assert_eq!(display_value(&config, ConfigKey::ApiKey), "sk-****");
    assert_eq!(display_value(&config, ConfigKey::UsePresetDirections), "on");
    assert_eq!(display_value(&config, ConfigKey::ClipboardBackend), "auto");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_model_cycle_stays_in_list(steps in prop::collection::vec(any::<bool>(), 1..20)) {
        let mut state = state_at(ConfigKey::Model);
        for forward in steps {
            state.cycle(forward);
            prop_assert!(state.draft().custom_models.contains(&state.draft().model));
        }
    }
}
