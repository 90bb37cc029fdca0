//! Direction lexicon
//!
//! Ordered list of reply-style labels offered to the model as a hint.
//! Persisted as a JSON array of strings; a missing or malformed file is
//! replaced by the built-in default list.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::write_atomically;

/// Built-in directions used when no usable lexicon file exists
pub const DEFAULT_DIRECTIONS: [&str; 4] = [
    "enthusiastic agreement",
    "gentle refusal",
    "playful teasing",
    "cold response",
];

/// Separator used when embedding the lexicon in a prompt
pub const DIRECTION_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    directions: Vec<String>,
}

impl Lexicon {
    pub fn new(directions: Vec<String>) -> Self {
        Self {
            directions: directions
                .into_iter()
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(DEFAULT_DIRECTIONS.iter().map(|d| d.to_string()).collect())
    }

    pub fn directions(&self) -> &[String] {
        &self.directions
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    /// All directions joined into one string for prompt embedding
    pub fn joined(&self) -> String {
        self.directions.join(DIRECTION_SEPARATOR)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Outcome of loading the lexicon file
#[derive(Debug)]
pub struct LexiconLoad {
    pub lexicon: Lexicon,
    /// Set when the default list had to be written (file missing or malformed)
    pub wrote_default: bool,
    pub warning: Option<String>,
}

/// Load the lexicon from `path`, writing the default list when the file is
/// missing or is not a JSON array of strings. An unreadable file falls back
/// to the default list without being overwritten.
pub fn load_lexicon(path: &Path) -> LexiconLoad {
    let problem = match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str::<Vec<String>>(&contents) {
            Ok(directions) => {
                log::debug!("Loaded {} directions from {:?}", directions.len(), path);
                return LexiconLoad {
                    lexicon: Lexicon::new(directions),
                    wrote_default: false,
                    warning: None,
                };
            }
            Err(e) => Some(format!("Lexicon must be a list of strings: {}", e)),
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            // The file exists but can't be read; leave it alone
            log::warn!("Failed to read lexicon {:?}: {}", path, e);
            return LexiconLoad {
                lexicon: Lexicon::builtin(),
                wrote_default: false,
                warning: Some(format!("Failed to read lexicon: {}", e)),
            };
        }
    };

    if let Some(ref msg) = problem {
        log::warn!("{} ({:?}), restoring defaults", msg, path);
    }

    let lexicon = Lexicon::builtin();
    let wrote_default = match write_default(path, &lexicon) {
        Ok(()) => true,
        Err(e) => {
            log::error!("Failed to write default lexicon {:?}: {}", path, e);
            false
        }
    };

    LexiconLoad {
        lexicon,
        wrote_default,
        warning: problem,
    }
}

fn write_default(path: &Path, lexicon: &Lexicon) -> Result<(), crate::config::ConfigError> {
    let contents = serde_json::to_string_pretty(lexicon.directions())?;
    write_atomically(path, &contents)
}

/// Lexicon file location paired with its loaded contents
#[derive(Debug, Clone)]
pub struct LexiconStore {
    path: PathBuf,
    lexicon: Lexicon,
}

impl LexiconStore {
    pub fn open(path: PathBuf) -> (Self, Option<String>) {
        let load = load_lexicon(&path);
        (
            Self {
                path,
                lexicon: load.lexicon,
            },
            load.warning,
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

#[cfg(test)]
#[path = "lexicon_tests.rs"]
mod lexicon_tests;
