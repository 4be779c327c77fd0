use serde::{Deserialize, Serialize};

/// A side (accompagnement): a flat-list item that can be switched on and
/// off next to the active menu. Ids are numbered independently of dishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Side {
    #[serde(default)]
    pub id: i64,
    pub nom: String,
    pub emoji: String,
    #[serde(default = "default_actif")]
    pub actif: bool,
}

fn default_actif() -> bool {
    true
}

/// Payload for creating a side.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SideInput {
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub emoji: String,
}

/// Payload for editing a side. `actif` left out means "keep current".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SideUpdate {
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub actif: Option<bool>,
}
