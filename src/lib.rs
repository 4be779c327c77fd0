//! FoodStory — restaurant menu API service.
//!
//! Three ordered dish lists (active week, upcoming week, archives) plus a
//! flat list of toggleable sides, persisted as a single JSON document
//! with an in-memory fallback, served over a small REST API.

pub mod catalog;
pub mod config;
pub mod models;
pub mod periods;
pub mod server;
pub mod store;

pub use catalog::CatalogError;
pub use config::Config;
pub use models::{
    Category, Dish, DishInput, MenuDocument, MenuSection, MenuSet, Side, SideInput, SideUpdate,
};
pub use server::{router, AppState};
pub use store::MenuStore;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
