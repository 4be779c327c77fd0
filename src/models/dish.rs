use serde::{Deserialize, Serialize};

/// Rank used when sorting a dish whose record predates the `ordre` field.
/// Matches the legacy document behavior: unordered dishes sink to the end.
pub(crate) const LEGACY_SORT_RANK: i64 = 999;

/// A menu item. Field names mirror the persisted JSON document.
///
/// `id` is unique across all three categories of a document; `ordre` is
/// the ascending display rank within the category that currently holds
/// the dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    #[serde(default)]
    pub id: i64,
    pub nom: String,
    pub emoji: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prix: String,
    /// Absent on legacy records; sorts as 999 but is never backfilled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordre: Option<i64>,
}

impl Dish {
    /// Sort key: missing ordre ranks last.
    pub fn sort_rank(&self) -> i64 {
        self.ordre.unwrap_or(LEGACY_SORT_RANK)
    }
}

/// Caller-supplied dish fields. `id` and `ordre` are always assigned
/// server-side, so they are not part of the payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DishInput {
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prix: String,
}

impl DishInput {
    /// True when every required field has non-whitespace content.
    pub fn is_complete(&self) -> bool {
        !self.nom.trim().is_empty()
            && !self.emoji.trim().is_empty()
            && !self.description.trim().is_empty()
            && !self.prix.trim().is_empty()
    }
}
