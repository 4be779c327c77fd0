use serde::{Deserialize, Serialize};

use super::{Category, Dish, Side};

pub const TITRE_ACTIF: &str = "Menu de cette semaine";
pub const TITRE_A_VENIR: &str = "Aperçu semaine prochaine";
pub const TITRE_ARCHIVES: &str = "Plats archivés";

/// One of the three menu sections: a title, a derived display period and
/// an ordered list of dishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSection {
    pub titre: String,
    /// Display string, recomputed on every load; never authoritative.
    #[serde(default)]
    pub periode: String,
    #[serde(default)]
    pub plats: Vec<Dish>,
}

impl MenuSection {
    pub fn new(titre: impl Into<String>) -> Self {
        Self {
            titre: titre.into(),
            periode: String::new(),
            plats: Vec::new(),
        }
    }

    /// Highest ordre in this section, with missing ordres counting as 0.
    pub fn max_ordre(&self) -> i64 {
        self.plats
            .iter()
            .map(|p| p.ordre.unwrap_or(0))
            .max()
            .unwrap_or(0)
    }

    /// Sorts dishes by ordre, ascending. Stable, so dishes sharing an
    /// ordre (malformed data) keep their insertion order; legacy dishes
    /// without an ordre sink to the end.
    pub fn sort_plats(&mut self) {
        self.plats.sort_by_key(Dish::sort_rank);
    }
}

/// The three sections, keyed as in the persisted document. Per-field
/// defaults backfill sections missing from partial or legacy documents,
/// so every loaded document always carries all three.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSet {
    #[serde(default = "default_actif")]
    pub actif: MenuSection,
    #[serde(default = "default_a_venir")]
    pub a_venir: MenuSection,
    #[serde(default = "default_archives")]
    pub archives: MenuSection,
}

fn default_actif() -> MenuSection {
    MenuSection::new(TITRE_ACTIF)
}

fn default_a_venir() -> MenuSection {
    MenuSection::new(TITRE_A_VENIR)
}

fn default_archives() -> MenuSection {
    MenuSection::new(TITRE_ARCHIVES)
}

impl Default for MenuSet {
    fn default() -> Self {
        Self {
            actif: default_actif(),
            a_venir: default_a_venir(),
            archives: default_archives(),
        }
    }
}

/// The whole persisted document: the three menu sections plus the flat
/// sides list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDocument {
    #[serde(default)]
    pub menus: MenuSet,
    #[serde(default)]
    pub accompagnements: Vec<Side>,
}

impl MenuDocument {
    pub fn section(&self, category: Category) -> &MenuSection {
        match category {
            Category::Actif => &self.menus.actif,
            Category::AVenir => &self.menus.a_venir,
            Category::Archives => &self.menus.archives,
        }
    }

    pub fn section_mut(&mut self, category: Category) -> &mut MenuSection {
        match category {
            Category::Actif => &mut self.menus.actif,
            Category::AVenir => &mut self.menus.a_venir,
            Category::Archives => &mut self.menus.archives,
        }
    }

    /// All dishes across the three sections.
    pub fn dishes(&self) -> impl Iterator<Item = &Dish> {
        Category::ALL
            .into_iter()
            .flat_map(|c| self.section(c).plats.iter())
    }

    /// Next dish id: document-wide max plus one. Dish ids are unique
    /// across all three sections, so the max spans all of them.
    pub fn next_dish_id(&self) -> i64 {
        self.dishes().map(|p| p.id).max().unwrap_or(0) + 1
    }

    /// Next side id: sides are numbered independently of dishes.
    pub fn next_side_id(&self) -> i64 {
        self.accompagnements.iter().map(|a| a.id).max().unwrap_or(0) + 1
    }

    /// Re-sorts every section's dishes by ordre.
    pub fn sort_all(&mut self) {
        for category in Category::ALL {
            self.section_mut(category).sort_plats();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(id: i64, ordre: Option<i64>) -> Dish {
        Dish {
            id,
            nom: format!("Plat {}", id),
            emoji: "🍽️".to_string(),
            description: String::new(),
            prix: "10€".to_string(),
            ordre,
        }
    }

    #[test]
    fn test_default_document_has_three_sections() {
        let doc = MenuDocument::default();
        assert_eq!(doc.menus.actif.titre, TITRE_ACTIF);
        assert_eq!(doc.menus.a_venir.titre, TITRE_A_VENIR);
        assert_eq!(doc.menus.archives.titre, TITRE_ARCHIVES);
        assert!(doc.accompagnements.is_empty());
    }

    #[test]
    fn test_legacy_document_backfills_archives() {
        // Documents written before the archives section existed.
        let json = r#"{
            "menus": {
                "actif": {"titre": "Menu de cette semaine", "periode": "", "plats": []},
                "a_venir": {"titre": "Aperçu semaine prochaine", "periode": "", "plats": []}
            }
        }"#;

        let doc: MenuDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.menus.archives.titre, TITRE_ARCHIVES);
        assert!(doc.menus.archives.plats.is_empty());
        assert!(doc.accompagnements.is_empty());
    }

    #[test]
    fn test_next_dish_id_spans_all_sections() {
        let mut doc = MenuDocument::default();
        assert_eq!(doc.next_dish_id(), 1);

        doc.menus.actif.plats.push(dish(1, Some(1)));
        doc.menus.archives.plats.push(dish(9, Some(1)));
        assert_eq!(doc.next_dish_id(), 10);
    }

    #[test]
    fn test_max_ordre_ignores_missing() {
        let mut section = MenuSection::new("test");
        assert_eq!(section.max_ordre(), 0);

        section.plats.push(dish(1, Some(2)));
        section.plats.push(dish(2, None));
        assert_eq!(section.max_ordre(), 2);
    }

    #[test]
    fn test_sort_plats_is_stable_and_ranks_legacy_last() {
        let mut section = MenuSection::new("test");
        section.plats.push(dish(1, None));
        section.plats.push(dish(2, Some(2)));
        section.plats.push(dish(3, Some(1)));
        section.plats.push(dish(4, Some(2)));

        section.sort_plats();

        let ids: Vec<i64> = section.plats.iter().map(|p| p.id).collect();
        // Equal ordres keep insertion order (2 before 4); the legacy dish sorts last.
        assert_eq!(ids, vec![3, 2, 4, 1]);
    }
}
