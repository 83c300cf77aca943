//! Localized message lookup.

use std::collections::HashMap;

use crate::error::RestrictionStage;

/// Looks up player-facing messages by key.
pub trait Translator {
    /// Returns the message for `key`.
    fn get(&self, key: &str) -> String;
}

/// English message table with per-key overrides.
///
/// Unknown keys come back as the key itself.
#[derive(Clone, Debug)]
pub struct EnglishMessages {
    entries: HashMap<String, String>,
}

impl EnglishMessages {
    /// Creates the table with the default restriction messages.
    #[must_use]
    pub fn new() -> Self {
        let entries = RestrictionStage::ALL
            .iter()
            .map(|stage| {
                let text = match stage {
                    RestrictionStage::Quality => "This item's quality can't be used here.",
                    RestrictionStage::Fuel => "You don't have the required fuel.",
                    RestrictionStage::Season => "This can't be made in the current season.",
                    RestrictionStage::Weather => "This can't be made in the current weather.",
                    RestrictionStage::Location => "This can't be made in this location.",
                };
                (stage.message_key().to_string(), text.to_string())
            })
            .collect();
        Self { entries }
    }

    /// Replaces the message for `key`.
    #[must_use]
    pub fn with_override(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.insert(key.into(), text.into());
        self
    }
}

impl Default for EnglishMessages {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for EnglishMessages {
    fn get(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
