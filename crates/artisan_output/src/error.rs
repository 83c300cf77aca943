//! # Production Error Types
//!
//! All errors that can occur while producing an output.

use thiserror::Error;

use artisan_core::ItemId;

use crate::messages::Translator;

/// Filter stage of the output selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RestrictionStage {
    /// Input quality tier.
    Quality,
    /// Fuel availability.
    Fuel,
    /// Current season.
    Season,
    /// Current weather.
    Weather,
    /// Location name and outdoors state.
    Location,
}

impl RestrictionStage {
    /// All stages in the order the selector applies them.
    pub const ALL: [Self; 5] = [
        Self::Quality,
        Self::Fuel,
        Self::Season,
        Self::Weather,
        Self::Location,
    ];

    /// Translation key of the stage's restriction message.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::Quality => "Message.Requirement.Quality",
            Self::Fuel => "Message.Requirement.Fuel",
            Self::Season => "Message.Requirement.Season",
            Self::Weather => "Message.Requirement.Weather",
            Self::Location => "Message.Requirement.Location",
        }
    }
}

/// Errors that can occur while producing an output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductionError {
    /// A filter stage eliminated every remaining output config.
    #[error("{message}")]
    Restriction {
        /// The stage that emptied the candidate list.
        stage: RestrictionStage,
        /// Localized message for the player.
        message: String,
    },

    /// The chosen config's fuel could not be consumed.
    #[error("insufficient fuel: need {required} of item {item_id}, have {available}")]
    InsufficientFuel {
        /// The fuel item that was missing.
        item_id: ItemId,
        /// The amount required.
        required: u32,
        /// The amount available.
        available: u32,
    },

    /// Content pack failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Content pack is not valid TOML for the expected schema.
    #[error("content pack parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Content pack could not be read.
    #[error("content pack read error: {0}")]
    Io(String),
}

impl ProductionError {
    /// Builds the restriction error for `stage` with its localized message.
    #[must_use]
    pub fn restriction<T: Translator + ?Sized>(stage: RestrictionStage, messages: &T) -> Self {
        Self::Restriction {
            stage,
            message: messages.get(stage.message_key()),
        }
    }

    /// Returns the restriction stage, if this is a restriction error.
    #[must_use]
    pub const fn stage(&self) -> Option<RestrictionStage> {
        match self {
            Self::Restriction { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

/// Result type for production operations.
pub type ProductionResult<T> = Result<T, ProductionError>;
