use serde::{Deserialize, Serialize};

use crate::domain::KeyId;

/// Domain messages processed by [`update`](crate::core::update::update).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Msg {
    /// The text box gained focus: reseed the editor from it.
    Open,
    FocusLost,

    /// Physical key pressed (or auto-repeated). `shift` reports a shift seen
    /// on the event itself.
    KeyDown { key: KeyId, shift: bool },
    /// Physical key released
    KeyUp(KeyId),
    /// Physical key press on a terminal that never reports releases
    KeyTap { key: KeyId, shift: bool },

    /// Mouse button pressed on a rendered key
    PointerDown(KeyId),
    /// Mouse button released anywhere
    PointerUp,
    /// Mouse dragged; carries the key now under the pointer
    PointerMoved(Option<KeyId>),

    Paste(String),
    ToggleLanguage,
    ToggleCapsLock,

    Tick,
    ShowStatus(String),
    Quit,
}

impl Msg {
    /// Helper to exclude frequent messages from debug logs
    pub fn is_frequent(&self) -> bool {
        matches!(self, Msg::Tick | Msg::PointerMoved(_))
    }
}
