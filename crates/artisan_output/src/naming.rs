//! # Name Loader
//!
//! Names the output of a production and records what it was made from.
//!
//! Preserve types win over name templates. When the name came from the input
//! the output is stamped with the input's type id, which later lookups (for
//! example un-jarring) use to recover the source item.

use artisan_core::{Farmer, Item, PreserveNamer};

use crate::config::OutputConfig;

const INPUT_NAME: &str = "{inputName}";
const OUTPUT_NAME: &str = "{outputName}";
const FARMER_NAME: &str = "{farmerName}";
const FARM_NAME: &str = "{farmName}";

/// Host services used when naming outputs.
#[derive(Clone, Copy)]
pub struct NameContext<'a> {
    /// Actor used when the caller doesn't supply one.
    pub current_player: &'a Farmer,
    /// Preserve-name lookup.
    pub preserve_names: &'a dyn PreserveNamer,
}

impl<'a> NameContext<'a> {
    /// Creates a new naming context.
    #[must_use]
    pub fn new(current_player: &'a Farmer, preserve_names: &'a dyn PreserveNamer) -> Self {
        Self {
            current_player,
            preserve_names,
        }
    }
}

impl std::fmt::Debug for NameContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameContext")
            .field("current_player", self.current_player)
            .finish_non_exhaustive()
    }
}

/// Names `output` according to `config`.
///
/// `who` defaults to the context's current player. The display name is
/// finalized before returning.
pub fn load_output_name(
    config: &OutputConfig,
    output: &mut Item,
    input: Option<&Item>,
    who: Option<&Farmer>,
    names: &NameContext<'_>,
) {
    let who = who.unwrap_or(names.current_player);
    let input_name = input.map_or("", Item::name);

    let mut input_used = false;
    let mut output_name = None;

    if let Some(preserve) = config.preserve_type {
        output_name = Some(names.preserve_names.preserve_name(preserve, input_name));
        output.preserve = Some(preserve);
        input_used = true;
    } else if let Some(template) = &config.output_name {
        output_name = Some(
            template
                .replace(INPUT_NAME, input_name)
                .replace(OUTPUT_NAME, output.name())
                .replace(FARMER_NAME, &who.name)
                .replace(FARM_NAME, &who.farm_name),
        );
        input_used = input.is_some() && template.contains(INPUT_NAME);
    }

    if let Some(name) = output_name {
        output.set_name(name);
    }

    if input_used {
        output.preserved_parent_id = input.map(|i| i.id);
    }

    output.finalize_display_name();
}
