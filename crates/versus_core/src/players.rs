//! Display names for the two marks.

use super::Symbol;
use serde::Serialize;
use tracing::{debug, instrument};

/// Default name shown for the human.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// Default name shown for the bot.
pub const DEFAULT_BOT_NAME: &str = "Bot";

/// Maps each mark to a display name. Independent of the game itself, so it
/// survives restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRegistry {
    x: String,
    o: String,
}

impl PlayerRegistry {
    /// Creates a registry with the given names. Names are trimmed; a blank
    /// name falls back to the default for that mark.
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            x: name_or_default(x.into(), DEFAULT_PLAYER_NAME),
            o: name_or_default(o.into(), DEFAULT_BOT_NAME),
        }
    }

    /// Name shown for `symbol`.
    pub fn name(&self, symbol: Symbol) -> &str {
        match symbol {
            Symbol::X => &self.x,
            Symbol::O => &self.o,
        }
    }

    /// Renames `symbol`. Blank names are refused and leave the registry as is.
    ///
    /// Returns true if the name changed.
    #[instrument(skip(self, name))]
    pub fn rename(&mut self, symbol: Symbol, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            debug!("Ignoring blank name");
            return false;
        }
        let slot = match symbol {
            Symbol::X => &mut self.x,
            Symbol::O => &mut self.o,
        };
        if slot.as_str() == name {
            return false;
        }
        debug!(from = %slot, to = name, "Renaming player");
        *slot = name.to_string();
        true
    }
}

fn name_or_default(name: String, fallback: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        debug!(fallback, "Blank name, using default");
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_NAME, DEFAULT_BOT_NAME)
    }
}
