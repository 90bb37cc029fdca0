//! OSC 52 clipboard backend
//!
//! Writes the clipboard through a terminal escape sequence, which also works
//! over SSH and inside tmux.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardError, ClipboardResult};

const OSC52_PREFIX: &str = "\x1b]52;c;";
const BEL: &str = "\x07";

pub fn copy(text: &str) -> ClipboardResult {
    let mut stdout = io::stdout();
    stdout
        .write_all(encode_osc52(text).as_bytes())
        .map_err(|_| ClipboardError::WriteError)?;
    stdout.flush().map_err(|_| ClipboardError::WriteError)
}

/// `\x1b]52;c;{base64}\x07`, selection `c` is the clipboard
pub fn encode_osc52(text: &str) -> String {
    format!("{}{}{}", OSC52_PREFIX, STANDARD.encode(text), BEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_osc52_payload_decodes_to_input(text in ".*") {
            let encoded = encode_osc52(&text);
            prop_assert!(encoded.starts_with(OSC52_PREFIX));
            prop_assert!(encoded.ends_with(BEL));

            let payload = &encoded[OSC52_PREFIX.len()..encoded.len() - BEL.len()];
            let decoded = String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap();
            prop_assert_eq!(decoded, text);
        }
    }

    #[test]
    fn test_encode_osc52_reply() {
        // "ok" -> "b2s="
        assert_eq!(encode_osc52("ok"), "\x1b]52;c;b2s=\x07");
    }

    #[test]
    fn test_encode_osc52_cjk() {
        let encoded = encode_osc52("你好");
        let payload = &encoded[OSC52_PREFIX.len()..encoded.len() - 1];
        assert_eq!(
            String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap(),
            "你好"
        );
    }
}
