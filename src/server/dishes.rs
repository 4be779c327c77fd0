//! Dish routes under `/api/plats`.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::catalog::dishes;
use crate::models::{Dish, DishInput};

use super::{parse_category, parse_id, ApiError, AppState, StatusBody};

const INVALID_ID: &str = "ID de plat invalide";
const NOT_FOUND: &str = "Plat non trouvé";

#[derive(Debug, Deserialize)]
pub(super) struct DishRequest {
    categorie: Option<String>,
    plat: DishInput,
}

#[derive(Debug, Serialize)]
pub(super) struct AddedDish {
    success: bool,
    plat: Dish,
    message: String,
}

/// `POST /api/plats`: create a dish in a category.
pub(super) async fn add(
    State(state): State<AppState>,
    Json(body): Json<DishRequest>,
) -> Result<Json<AddedDish>, ApiError> {
    let category = parse_category(body.categorie.as_deref(), "Catégorie invalide")?;

    let mut store = state.store.write().await;
    let mut doc = store.load();
    let dish = dishes::add_dish(&mut doc, category, body.plat)?;
    store.save(&doc);

    Ok(Json(AddedDish {
        success: true,
        plat: dish,
        message: "Plat ajouté avec succès".to_string(),
    }))
}

/// `PUT /api/plats/{id}`: replace a dish's editable fields.
pub(super) async fn edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<DishRequest>,
) -> Result<Json<StatusBody>, ApiError> {
    let id = parse_id(&id, INVALID_ID)?;
    let category = parse_category(body.categorie.as_deref(), "Catégorie invalide")?;

    let mut store = state.store.write().await;
    let mut doc = store.load();
    dishes::edit_dish(&mut doc, category, id, body.plat)?;
    store.save(&doc);

    Ok(StatusBody::ok("Plat modifié avec succès"))
}

#[derive(Debug, Deserialize)]
pub(super) struct CategoryRequest {
    categorie: Option<String>,
}

/// `DELETE /api/plats/{id}`: permanent removal. Remaining ordres keep
/// their gaps, as documented in the catalog.
pub(super) async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<CategoryRequest>,
) -> Result<Json<StatusBody>, ApiError> {
    let id = parse_id(&id, INVALID_ID)?;
    let category = parse_category(body.categorie.as_deref(), "Catégorie invalide")?;

    let mut store = state.store.write().await;
    let mut doc = store.load();
    if !dishes::delete_dish(&mut doc, category, id) {
        return Err(ApiError::NotFound(NOT_FOUND.to_string()));
    }
    store.save(&doc);

    Ok(StatusBody::ok("Plat supprimé définitivement"))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ArchiveRequest {
    categorie_source: Option<String>,
}

/// `POST /api/plats/{id}/archiver`: move a dish to the archives.
pub(super) async fn archive(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ArchiveRequest>,
) -> Result<Json<StatusBody>, ApiError> {
    let id = parse_id(&id, INVALID_ID)?;
    let source = parse_category(body.categorie_source.as_deref(), "Catégorie invalide")?;

    let mut store = state.store.write().await;
    let mut doc = store.load();
    if !dishes::archive_dish(&mut doc, source, id) {
        return Err(ApiError::NotFound(NOT_FOUND.to_string()));
    }
    store.save(&doc);

    Ok(StatusBody::ok("Plat archivé avec succès"))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TransferRequest {
    categorie_source: Option<String>,
    categorie_destination: Option<String>,
}

/// `POST /api/plats/{id}/basculer`: move a dish between two categories.
pub(super) async fn transfer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<TransferRequest>,
) -> Result<Json<StatusBody>, ApiError> {
    let id = parse_id(&id, INVALID_ID)?;
    if body.categorie_source.is_none() || body.categorie_destination.is_none() {
        return Err(ApiError::BadRequest(
            "Catégorie source et destination requises".to_string(),
        ));
    }
    let source = parse_category(body.categorie_source.as_deref(), "Catégorie invalide")?;
    let dest = parse_category(body.categorie_destination.as_deref(), "Catégorie invalide")?;

    let mut store = state.store.write().await;
    let mut doc = store.load();
    if !dishes::move_dish(&mut doc, source, dest, id) {
        return Err(ApiError::NotFound(NOT_FOUND.to_string()));
    }
    store.save(&doc);

    Ok(StatusBody::ok(format!(
        "Plat basculé du menu {} vers le menu {}",
        source.label(),
        dest.label()
    )))
}

/// `POST /api/plats/{id}/monter`: one rank up. Already-first is a 200
/// with `success: false`, not an error.
pub(super) async fn move_up(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<CategoryRequest>,
) -> Result<Json<StatusBody>, ApiError> {
    let id = parse_id(&id, INVALID_ID)?;
    let category = parse_category(body.categorie.as_deref(), "Catégorie requise")?;

    let mut store = state.store.write().await;
    let mut doc = store.load();
    if !dishes::move_dish_up(&mut doc, category, id)? {
        return Ok(StatusBody::refused("Le plat est déjà en première position"));
    }
    store.save(&doc);

    Ok(StatusBody::ok("Plat déplacé vers le haut avec succès"))
}

/// `POST /api/plats/{id}/descendre`: one rank down.
pub(super) async fn move_down(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<CategoryRequest>,
) -> Result<Json<StatusBody>, ApiError> {
    let id = parse_id(&id, INVALID_ID)?;
    let category = parse_category(body.categorie.as_deref(), "Catégorie requise")?;

    let mut store = state.store.write().await;
    let mut doc = store.load();
    if !dishes::move_dish_down(&mut doc, category, id)? {
        return Ok(StatusBody::refused("Le plat est déjà en dernière position"));
    }
    store.save(&doc);

    Ok(StatusBody::ok("Plat déplacé vers le bas avec succès"))
}
