use serde::{Deserialize, Serialize};

use crate::domain::Language;

/// Side effects requested by the update function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Write the selected language to the persistent store
    PersistLanguage(Language),
}
