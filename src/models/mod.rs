mod category;
mod dish;
mod document;
mod side;

pub use category::Category;
pub use dish::{Dish, DishInput};
pub use document::{MenuDocument, MenuSection, MenuSet, TITRE_ACTIF, TITRE_A_VENIR, TITRE_ARCHIVES};
pub use side::{Side, SideInput, SideUpdate};
