//! Document-level routes: fetch/overwrite, week rollover, clear, status.

use axum::extract::State;
use axum::Json;
use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::dishes;
use crate::models::MenuDocument;
use crate::periods;

use super::{parse_category, ApiError, AppState, StatusBody};

/// Diagnostic report for `GET /api/status`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct StatusReport {
    status: &'static str,
    version: &'static str,
    timestamp: String,
    memory_data_exists: bool,
    file_exists: bool,
}

pub(super) async fn status(State(state): State<AppState>) -> Json<StatusReport> {
    let store = state.store.read().await;
    Json(StatusReport {
        status: "OK",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now().to_rfc3339(),
        memory_data_exists: store.has_memory(),
        file_exists: store.file_exists(),
    })
}

/// `GET /api/menus`: the document, freshly stamped and sorted. The
/// stamped version is persisted so the file never drifts from what
/// clients saw.
pub(super) async fn get_menus(State(state): State<AppState>) -> Json<MenuDocument> {
    let mut store = state.store.write().await;
    let doc = store.load();
    store.save(&doc);
    Json(doc)
}

/// `POST /api/menus`: overwrite-all, used by the admin UI bulk save.
pub(super) async fn save_menus(
    State(state): State<AppState>,
    Json(mut doc): Json<MenuDocument>,
) -> Json<StatusBody> {
    periods::stamp(&mut doc, Local::now().date_naive());

    let mut store = state.store.write().await;
    store.save(&doc);
    StatusBody::ok("Menus sauvegardés avec succès")
}

/// `POST /api/menus/basculer`: the upcoming menu becomes the active one.
pub(super) async fn rotate(State(state): State<AppState>) -> Json<StatusBody> {
    let mut store = state.store.write().await;
    let mut doc = store.load();

    dishes::rotate_menus(&mut doc);
    // The promoted section carried next week's period string.
    periods::stamp(&mut doc, Local::now().date_naive());

    store.save(&doc);
    StatusBody::ok("Menus basculés avec succès")
}

#[derive(Debug, Deserialize)]
pub(super) struct ClearRequest {
    categorie: Option<String>,
}

/// `POST /api/menus/vider`: empty one category's dish list.
pub(super) async fn clear(
    State(state): State<AppState>,
    Json(body): Json<ClearRequest>,
) -> Result<Json<StatusBody>, ApiError> {
    let category = parse_category(body.categorie.as_deref(), "Catégorie invalide")?;

    let mut store = state.store.write().await;
    let mut doc = store.load();
    dishes::clear_category(&mut doc, category);
    store.save(&doc);

    Ok(StatusBody::ok(format!(
        "Menu {} vidé avec succès",
        category
    )))
}
