use serde::{Deserialize, Serialize};
use strum::Display;

/// Commands a keybinding can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, Deserialize)]
pub enum Action {
    Quit,
    ToggleLanguage,
    ToggleCapsLock,
}
