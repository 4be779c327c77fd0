//! Side (accompagnement) routes under `/api/accompagnements`.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::catalog::sides;
use crate::models::{Side, SideInput, SideUpdate};

use super::{parse_id, ApiError, AppState};

const INVALID_ID: &str = "ID d'accompagnement invalide";
const NOT_FOUND: &str = "Accompagnement non trouvé";

/// `{success, message, accompagnement}` — side mutations echo the
/// resulting (or removed) side back to the admin UI.
#[derive(Debug, Serialize)]
pub(super) struct SideBody {
    success: bool,
    message: String,
    accompagnement: Side,
}

impl SideBody {
    fn new(message: impl Into<String>, accompagnement: Side) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.into(),
            accompagnement,
        })
    }
}

/// `GET /api/accompagnements`: the flat list, active or not.
pub(super) async fn list(State(state): State<AppState>) -> Json<Vec<Side>> {
    let mut store = state.store.write().await;
    Json(store.load().accompagnements)
}

/// `POST /api/accompagnements`: create, active by default.
pub(super) async fn add(
    State(state): State<AppState>,
    Json(input): Json<SideInput>,
) -> Result<Json<SideBody>, ApiError> {
    let mut store = state.store.write().await;
    let mut doc = store.load();
    let side = sides::add_side(&mut doc, input)?;
    store.save(&doc);

    Ok(SideBody::new("Accompagnement ajouté avec succès", side))
}

/// `PUT /api/accompagnements/{id}`: rename; `actif` only changes when
/// the body carries it.
pub(super) async fn edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<SideUpdate>,
) -> Result<Json<SideBody>, ApiError> {
    let id = parse_id(&id, INVALID_ID)?;

    let mut store = state.store.write().await;
    let mut doc = store.load();
    let side = sides::edit_side(&mut doc, id, update)?;
    store.save(&doc);

    Ok(SideBody::new("Accompagnement modifié avec succès", side))
}

/// `PUT /api/accompagnements/{id}/toggle`: flip the active flag.
pub(super) async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SideBody>, ApiError> {
    let id = parse_id(&id, INVALID_ID)?;

    let mut store = state.store.write().await;
    let mut doc = store.load();
    let side = sides::toggle_side(&mut doc, id)?;
    store.save(&doc);

    let message = if side.actif {
        "Accompagnement activé avec succès"
    } else {
        "Accompagnement désactivé avec succès"
    };
    Ok(SideBody::new(message, side))
}

/// `DELETE /api/accompagnements/{id}`: remove, echoing the removed side.
pub(super) async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SideBody>, ApiError> {
    let id = parse_id(&id, INVALID_ID)?;

    let mut store = state.store.write().await;
    let mut doc = store.load();
    let side = sides::delete_side(&mut doc, id)
        .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_string()))?;
    store.save(&doc);

    Ok(SideBody::new("Accompagnement supprimé avec succès", side))
}
