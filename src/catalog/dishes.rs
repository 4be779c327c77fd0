//! Operations over the three ordered dish lists.
//!
//! Invariants maintained here:
//! - dish ids are unique across all three categories;
//! - a dish belongs to exactly one category;
//! - moving a dish renumbers its source category contiguously 1..N.
//!
//! Deleting a dish intentionally does NOT renumber the remaining ordres,
//! so a category can hold gaps (e.g. 1,3) until the next move. Changing
//! that would be an observable behavior change; see DESIGN.md.

use crate::models::{Category, Dish, DishInput, MenuDocument, MenuSection, TITRE_ACTIF, TITRE_A_VENIR};

use super::CatalogError;

/// Adds a dish to `category`, assigning the next document-wide id and the
/// next ordre within the category.
pub fn add_dish(
    doc: &mut MenuDocument,
    category: Category,
    input: DishInput,
) -> Result<Dish, CatalogError> {
    if !input.is_complete() {
        return Err(CatalogError::validation(
            "Les champs nom, emoji, description et prix sont requis",
        ));
    }

    let id = doc.next_dish_id();
    let section = doc.section_mut(category);
    let dish = Dish {
        id,
        nom: input.nom,
        emoji: input.emoji,
        description: input.description,
        prix: input.prix,
        ordre: Some(section.max_ordre() + 1),
    };

    section.plats.push(dish.clone());
    section.sort_plats();

    Ok(dish)
}

/// Replaces a dish's editable fields. `id` and `ordre` are preserved,
/// so editing never disturbs the display order.
pub fn edit_dish(
    doc: &mut MenuDocument,
    category: Category,
    id: i64,
    input: DishInput,
) -> Result<Dish, CatalogError> {
    let dish = doc
        .section_mut(category)
        .plats
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| CatalogError::not_found("Plat non trouvé"))?;

    dish.nom = input.nom;
    dish.emoji = input.emoji;
    dish.description = input.description;
    dish.prix = input.prix;

    Ok(dish.clone())
}

/// Removes a dish permanently. Returns `false` when the id is not in the
/// category. Remaining ordres are left as they are.
pub fn delete_dish(doc: &mut MenuDocument, category: Category, id: i64) -> bool {
    let plats = &mut doc.section_mut(category).plats;
    let before = plats.len();
    plats.retain(|p| p.id != id);
    plats.len() < before
}

/// Moves a dish from `source` to `dest`: appended to the destination with
/// a fresh ordre, then the source is renumbered contiguously by its
/// current array positions. Returns `false` when the dish is not in
/// `source`.
pub fn move_dish(doc: &mut MenuDocument, source: Category, dest: Category, id: i64) -> bool {
    let src = doc.section_mut(source);
    let Some(index) = src.plats.iter().position(|p| p.id == id) else {
        return false;
    };
    let mut dish = src.plats.remove(index);

    let dst = doc.section_mut(dest);
    dish.ordre = Some(dst.max_ordre() + 1);
    dst.plats.push(dish);

    // By position, not by prior ordre value: this is the one place gaps
    // left by deletes get healed.
    for (index, dish) in doc.section_mut(source).plats.iter_mut().enumerate() {
        dish.ordre = Some(index as i64 + 1);
    }

    true
}

/// Moves a dish from `source` to the archives.
pub fn archive_dish(doc: &mut MenuDocument, source: Category, id: i64) -> bool {
    move_dish(doc, source, Category::Archives, id)
}

/// Moves a dish one rank up within its category by swapping its ordre
/// value with its sorted predecessor. `Ok(false)` means the dish is
/// already first; nothing is mutated in that case.
pub fn move_dish_up(
    doc: &mut MenuDocument,
    category: Category,
    id: i64,
) -> Result<bool, CatalogError> {
    swap_with_neighbor(doc.section_mut(category), id, Direction::Up)
}

/// Moves a dish one rank down. `Ok(false)` means it is already last.
pub fn move_dish_down(
    doc: &mut MenuDocument,
    category: Category,
    id: i64,
) -> Result<bool, CatalogError> {
    swap_with_neighbor(doc.section_mut(category), id, Direction::Down)
}

enum Direction {
    Up,
    Down,
}

fn swap_with_neighbor(
    section: &mut MenuSection,
    id: i64,
    direction: Direction,
) -> Result<bool, CatalogError> {
    section.sort_plats();

    let index = section
        .plats
        .iter()
        .position(|p| p.id == id)
        .ok_or_else(|| CatalogError::not_found("Plat non trouvé"))?;

    let neighbor = match direction {
        Direction::Up => {
            if index == 0 {
                return Ok(false);
            }
            index - 1
        }
        Direction::Down => {
            if index == section.plats.len() - 1 {
                return Ok(false);
            }
            index + 1
        }
    };

    // Swap the ordre values, not the array positions; every other dish
    // keeps its rank.
    let ordre = section.plats[index].ordre;
    section.plats[index].ordre = section.plats[neighbor].ordre;
    section.plats[neighbor].ordre = ordre;

    section.sort_plats();
    Ok(true)
}

/// Removes every dish in `category`. Other categories are untouched.
pub fn clear_category(doc: &mut MenuDocument, category: Category) {
    doc.section_mut(category).plats.clear();
}

/// Week rollover: the upcoming menu becomes the active one (with the
/// canonical active title) and a fresh empty upcoming menu is created.
/// The previous active menu is discarded, not archived.
pub fn rotate_menus(doc: &mut MenuDocument) {
    let mut promoted = std::mem::replace(&mut doc.menus.a_venir, MenuSection::new(TITRE_A_VENIR));
    promoted.titre = TITRE_ACTIF.to_string();
    doc.menus.actif = promoted;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(nom: &str) -> DishInput {
        DishInput {
            nom: nom.to_string(),
            emoji: "🍗".to_string(),
            description: "Poulet boucané".to_string(),
            prix: "12€".to_string(),
        }
    }

    fn seeded(category: Category, count: usize) -> MenuDocument {
        let mut doc = MenuDocument::default();
        for i in 0..count {
            add_dish(&mut doc, category, input(&format!("Plat {}", i + 1))).unwrap();
        }
        doc
    }

    fn ordres(doc: &MenuDocument, category: Category) -> Vec<i64> {
        doc.section(category)
            .plats
            .iter()
            .map(|p| p.ordre.unwrap())
            .collect()
    }

    #[test]
    fn test_add_to_empty_document() {
        let mut doc = MenuDocument::default();
        let dish = add_dish(&mut doc, Category::Actif, input("Poulet")).unwrap();
        assert_eq!(dish.id, 1);
        assert_eq!(dish.ordre, Some(1));

        let second = add_dish(&mut doc, Category::Actif, input("Colombo")).unwrap();
        assert_eq!(second.id, 2);
        assert_eq!(second.ordre, Some(2));
    }

    #[test]
    fn test_add_ids_span_all_categories() {
        let mut doc = MenuDocument::default();
        add_dish(&mut doc, Category::Actif, input("A")).unwrap();
        add_dish(&mut doc, Category::Archives, input("B")).unwrap();
        let third = add_dish(&mut doc, Category::AVenir, input("C")).unwrap();

        // Third dish overall, but first in its own category.
        assert_eq!(third.id, 3);
        assert_eq!(third.ordre, Some(1));

        let mut ids: Vec<i64> = doc.dishes().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_add_rejects_blank_fields() {
        let mut doc = MenuDocument::default();
        let mut incomplete = input("Poulet");
        incomplete.prix = "   ".to_string();

        let err = add_dish(&mut doc, Category::Actif, incomplete).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert!(doc.menus.actif.plats.is_empty());
    }

    #[test]
    fn test_edit_preserves_id_and_ordre() {
        let mut doc = seeded(Category::Actif, 2);

        let updated = edit_dish(&mut doc, Category::Actif, 1, input("Renommé")).unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.ordre, Some(1));
        assert_eq!(updated.nom, "Renommé");
    }

    #[test]
    fn test_edit_missing_dish() {
        let mut doc = seeded(Category::Actif, 1);
        let err = edit_dish(&mut doc, Category::Actif, 42, input("X")).unwrap_err();
        assert_eq!(err, CatalogError::NotFound("Plat non trouvé".to_string()));

        // Present in the document but not in the requested category.
        let err = edit_dish(&mut doc, Category::Archives, 1, input("X")).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[test]
    fn test_delete_leaves_ordre_gaps() {
        let mut doc = seeded(Category::Actif, 3);

        assert!(delete_dish(&mut doc, Category::Actif, 2));
        assert_eq!(ordres(&doc, Category::Actif), vec![1, 3]);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut doc = seeded(Category::Actif, 1);
        assert!(!delete_dish(&mut doc, Category::Actif, 99));
        assert_eq!(doc.menus.actif.plats.len(), 1);
    }

    #[test]
    fn test_move_appends_to_dest_and_renumbers_source() {
        // Dish id=5 sits in a_venir; archives already holds one dish.
        let mut doc = MenuDocument::default();
        let dish = |id: i64, ordre: i64| Dish {
            id,
            nom: format!("Plat {}", id),
            emoji: "🍽️".to_string(),
            description: "desc".to_string(),
            prix: "10€".to_string(),
            ordre: Some(ordre),
        };
        doc.menus.a_venir.plats.push(dish(5, 1));
        doc.menus.a_venir.plats.push(dish(6, 2));
        doc.menus.archives.plats.push(dish(7, 1));

        assert!(move_dish(&mut doc, Category::AVenir, Category::Archives, 5));

        let moved = doc
            .menus
            .archives
            .plats
            .iter()
            .find(|p| p.id == 5)
            .unwrap();
        assert_eq!(moved.ordre, Some(2));
        assert_eq!(ordres(&doc, Category::AVenir), vec![1]);
        assert!(doc.menus.a_venir.plats.iter().all(|p| p.id != 5));
    }

    #[test]
    fn test_move_conserves_dish_count() {
        let mut doc = seeded(Category::Actif, 3);
        add_dish(&mut doc, Category::AVenir, input("Autre")).unwrap();
        let total = doc.dishes().count();

        assert!(move_dish(&mut doc, Category::Actif, Category::AVenir, 2));

        assert_eq!(doc.dishes().count(), total);
        assert_eq!(doc.menus.actif.plats.len(), 2);
        assert_eq!(doc.menus.a_venir.plats.len(), 2);
    }

    #[test]
    fn test_move_heals_delete_gaps_in_source() {
        let mut doc = seeded(Category::Actif, 4);
        delete_dish(&mut doc, Category::Actif, 2);
        assert_eq!(ordres(&doc, Category::Actif), vec![1, 3, 4]);

        assert!(move_dish(&mut doc, Category::Actif, Category::Archives, 4));
        assert_eq!(ordres(&doc, Category::Actif), vec![1, 2]);
    }

    #[test]
    fn test_move_missing_dish() {
        let mut doc = seeded(Category::Actif, 1);
        assert!(!move_dish(&mut doc, Category::AVenir, Category::Actif, 1));
    }

    #[test]
    fn test_archive_is_a_move_to_archives() {
        let mut doc = seeded(Category::Actif, 2);
        assert!(archive_dish(&mut doc, Category::Actif, 1));
        assert_eq!(doc.menus.archives.plats[0].id, 1);
        assert_eq!(ordres(&doc, Category::Actif), vec![1]);
    }

    #[test]
    fn test_move_up_swaps_ordre_values() {
        let mut doc = seeded(Category::Actif, 2);

        assert!(move_dish_up(&mut doc, Category::Actif, 2).unwrap());

        // Values swapped: the formerly-second dish now leads.
        let plats = &doc.menus.actif.plats;
        assert_eq!(plats[0].id, 2);
        assert_eq!(plats[0].ordre, Some(1));
        assert_eq!(plats[1].id, 1);
        assert_eq!(plats[1].ordre, Some(2));
    }

    #[test]
    fn test_move_up_at_top_is_noop() {
        let mut doc = seeded(Category::Actif, 2);
        let before = doc.clone();

        assert!(!move_dish_up(&mut doc, Category::Actif, 1).unwrap());
        assert_eq!(doc, before);
    }

    #[test]
    fn test_move_down_at_bottom_is_noop() {
        let mut doc = seeded(Category::Actif, 2);
        let before = doc.clone();

        assert!(!move_dish_down(&mut doc, Category::Actif, 2).unwrap());
        assert_eq!(doc, before);
    }

    #[test]
    fn test_move_down_then_up_restores_order() {
        let mut doc = seeded(Category::Actif, 3);

        assert!(move_dish_down(&mut doc, Category::Actif, 1).unwrap());
        assert!(move_dish_up(&mut doc, Category::Actif, 1).unwrap());

        let ids: Vec<i64> = doc.menus.actif.plats.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(ordres(&doc, Category::Actif), vec![1, 2, 3]);
    }

    #[test]
    fn test_move_up_missing_dish() {
        let mut doc = seeded(Category::Actif, 1);
        let err = move_dish_up(&mut doc, Category::Actif, 9).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[test]
    fn test_ordinal_contiguity_after_mixed_operations() {
        let mut doc = seeded(Category::Actif, 5);
        move_dish_up(&mut doc, Category::Actif, 3).unwrap();
        move_dish_down(&mut doc, Category::Actif, 1).unwrap();
        move_dish(&mut doc, Category::Actif, Category::AVenir, 4);

        let mut seen = ordres(&doc, Category::Actif);
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_clear_category_only_touches_its_own() {
        let mut doc = seeded(Category::Actif, 2);
        add_dish(&mut doc, Category::Archives, input("Gardé")).unwrap();

        clear_category(&mut doc, Category::Actif);

        assert!(doc.menus.actif.plats.is_empty());
        assert_eq!(doc.menus.archives.plats.len(), 1);
    }

    #[test]
    fn test_rotate_promotes_upcoming_menu() {
        let mut doc = MenuDocument::default();
        add_dish(&mut doc, Category::Actif, input("Ancien")).unwrap();
        add_dish(&mut doc, Category::AVenir, input("Nouveau")).unwrap();

        rotate_menus(&mut doc);

        assert_eq!(doc.menus.actif.titre, TITRE_ACTIF);
        assert_eq!(doc.menus.actif.plats.len(), 1);
        assert_eq!(doc.menus.actif.plats[0].nom, "Nouveau");
        assert_eq!(doc.menus.a_venir.titre, TITRE_A_VENIR);
        assert!(doc.menus.a_venir.plats.is_empty());
    }
}
