//! Tests for diagnostic payload export

use super::*;
use crate::ai::prompt::{PromptMode, PromptSettings, build_messages};

fn settings() -> PromptSettings<'static> {
    PromptSettings {
        system_prompt: "persona",
        use_preset_directions: false,
    }
}

#[test]
fn test_preload_payload_keeps_system_message() {
    let plan = build_messages(PromptMode::Preload, settings(), "");
    let json = diagnostic_payload(&plan, "gpt-4o-mini").unwrap();

    insta::assert_snapshot!(json, @r#"
    {
      "request_type": "PRELOAD_PING",
      "model": "gpt-4o-mini",
      "messages": [
        {
          "role": "system",
          "content": "persona"
        },
        {
          "role": "user",
          "content": "Ping (System Check)"
        }
      ]
    }
    "#);
}

#[test]
fn test_generate_payload_omits_system_message() {
    let history = vec![ChatMessage::user("hi"), ChatMessage::assistant("hey")];
    let plan = build_messages(
        PromptMode::GenerateOptions {
            input: "busy?",
            history: &history,
        },
        settings(),
        "",
    );

    let json = diagnostic_payload(&plan, "m").unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["request_type"], "GENERATE_OPTIONS_WITH_CONTENT");
    assert_eq!(value["model"], "m");
    let messages = value["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 3);
    assert!(messages.iter().all(|m| m["role"] != "system"));
    assert_eq!(messages[0]["content"], "hi");
}

#[test]
fn test_direct_chat_has_no_payload() {
    let plan = build_messages(PromptMode::DirectChat { input: "x" }, settings(), "");
    assert!(diagnostic_payload(&plan, "m").is_none());
}
