use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three menu sections a dish can live in.
///
/// Serialized with the same keys the persisted document uses
/// (`actif`, `a_venir`, `archives`). Anything else is rejected at the
/// validation layer, never looked up dynamically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Actif,
    AVenir,
    Archives,
}

impl Category {
    /// All categories, in document order.
    pub const ALL: [Category; 3] = [Category::Actif, Category::AVenir, Category::Archives];

    /// The document key for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Actif => "actif",
            Category::AVenir => "a_venir",
            Category::Archives => "archives",
        }
    }

    /// Human-readable French label, used in API messages.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Actif => "actuel",
            Category::AVenir => "à venir",
            Category::Archives => "archives",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "actif" => Ok(Category::Actif),
            "a_venir" => Ok(Category::AVenir),
            "archives" => Ok(Category::Archives),
            _ => Err(format!(
                "Invalid category '{}'. Valid options: actif, a_venir, archives",
                s
            )),
        }
    }
}
