//! Operations over the flat sides (accompagnements) list.

use crate::models::{MenuDocument, Side, SideInput, SideUpdate};

use super::CatalogError;

const REQUIRED_FIELDS: &str = "Nom et emoji requis";
const NOT_FOUND: &str = "Accompagnement non trouvé";

/// Adds a side, active by default. Name and emoji are trimmed before
/// being stored.
pub fn add_side(doc: &mut MenuDocument, input: SideInput) -> Result<Side, CatalogError> {
    if input.nom.trim().is_empty() || input.emoji.trim().is_empty() {
        return Err(CatalogError::validation(REQUIRED_FIELDS));
    }

    let side = Side {
        id: doc.next_side_id(),
        nom: input.nom.trim().to_string(),
        emoji: input.emoji.trim().to_string(),
        actif: true,
    };
    doc.accompagnements.push(side.clone());

    Ok(side)
}

/// Replaces a side's name and emoji; `actif` is only changed when the
/// update carries an explicit value.
pub fn edit_side(doc: &mut MenuDocument, id: i64, update: SideUpdate) -> Result<Side, CatalogError> {
    if update.nom.trim().is_empty() || update.emoji.trim().is_empty() {
        return Err(CatalogError::validation(REQUIRED_FIELDS));
    }

    let side = find_mut(doc, id)?;
    side.nom = update.nom.trim().to_string();
    side.emoji = update.emoji.trim().to_string();
    if let Some(actif) = update.actif {
        side.actif = actif;
    }

    Ok(side.clone())
}

/// Flips a side's `actif` flag and returns the updated side.
pub fn toggle_side(doc: &mut MenuDocument, id: i64) -> Result<Side, CatalogError> {
    let side = find_mut(doc, id)?;
    side.actif = !side.actif;
    Ok(side.clone())
}

/// Removes a side, returning it. `None` when the id is unknown.
pub fn delete_side(doc: &mut MenuDocument, id: i64) -> Option<Side> {
    let index = doc.accompagnements.iter().position(|a| a.id == id)?;
    Some(doc.accompagnements.remove(index))
}

fn find_mut(doc: &mut MenuDocument, id: i64) -> Result<&mut Side, CatalogError> {
    doc.accompagnements
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or_else(|| CatalogError::not_found(NOT_FOUND))
}
