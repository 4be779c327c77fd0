//! HTTP layer: router, shared state and the error-to-response mapping.
//!
//! Every failure body is `{"error": message}`; every success body carries
//! `success: true` plus a French message for the admin UI. Ids and
//! category keys arrive as strings and are normalized here, once, so the
//! catalogs only ever see integers and [`Category`] values.

mod dishes;
mod menus;
mod sides;

use std::str::FromStr;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::catalog::CatalogError;
use crate::models::Category;
use crate::store::MenuStore;

/// Application state shared across handlers. Each handler holds the write
/// guard for its whole read-modify-write cycle; the store itself stays
/// last-write-wins across processes.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<MenuStore>>,
}

impl AppState {
    pub fn new(store: MenuStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

/// Builds the API router. The caller layers tracing on top.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/status", get(menus::status))
        .route("/api/menus", get(menus::get_menus).post(menus::save_menus))
        .route("/api/menus/basculer", post(menus::rotate))
        .route("/api/menus/vider", post(menus::clear))
        .route("/api/plats", post(dishes::add))
        .route("/api/plats/{id}", put(dishes::edit).delete(dishes::remove))
        .route("/api/plats/{id}/archiver", post(dishes::archive))
        .route("/api/plats/{id}/basculer", post(dishes::transfer))
        .route("/api/plats/{id}/monter", post(dishes::move_up))
        .route("/api/plats/{id}/descendre", post(dishes::move_down))
        .route("/api/accompagnements", get(sides::list).post(sides::add))
        .route(
            "/api/accompagnements/{id}",
            put(sides::edit).delete(sides::remove),
        )
        .route("/api/accompagnements/{id}/toggle", put(sides::toggle))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Caller-visible failures. Validation problems are 400, missing
/// dishes/sides 404, both with an `{"error"}` body.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
}

impl ApiError {
    fn invalid_category() -> Self {
        ApiError::BadRequest("Catégorie invalide".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
            ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(m) => ApiError::BadRequest(m),
            CatalogError::NotFound(m) => ApiError::NotFound(m),
        }
    }
}

/// Shared `{success, message}` response shape.
#[derive(Debug, Serialize)]
pub(crate) struct StatusBody {
    success: bool,
    message: String,
}

impl StatusBody {
    /// Operation applied.
    fn ok(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.into(),
        })
    }

    /// Operation refused without being an error, e.g. moving the first
    /// dish further up. HTTP 200 with `success: false`.
    fn refused(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: false,
            message: message.into(),
        })
    }
}

/// Path ids must be strictly positive integers; anything else is a 400
/// with a resource-specific message.
fn parse_id(raw: &str, message: &str) -> Result<i64, ApiError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::BadRequest(message.to_string())),
    }
}

/// Parses a category key from a request body, with a dedicated message
/// when the field is absent.
fn parse_category(raw: Option<&str>, missing_message: &str) -> Result<Category, ApiError> {
    let raw = raw.ok_or_else(|| ApiError::BadRequest(missing_message.to_string()))?;
    Category::from_str(raw).map_err(|_| ApiError::invalid_category())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_valid() {
        assert_eq!(parse_id("12", "ID invalide").unwrap(), 12);
    }

    #[test]
    fn test_parse_id_rejects_zero_negative_and_garbage() {
        for raw in ["0", "-3", "abc", "1.5", ""] {
            let err = parse_id(raw, "ID de plat invalide").unwrap_err();
            assert!(matches!(err, ApiError::BadRequest(m) if m == "ID de plat invalide"));
        }
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(
            parse_category(Some("a_venir"), "Catégorie requise").unwrap(),
            Category::AVenir
        );
        assert!(matches!(
            parse_category(None, "Catégorie requise"),
            Err(ApiError::BadRequest(m)) if m == "Catégorie requise"
        ));
        assert!(matches!(
            parse_category(Some("autre"), "Catégorie requise"),
            Err(ApiError::BadRequest(m)) if m == "Catégorie invalide"
        ));
    }
}
