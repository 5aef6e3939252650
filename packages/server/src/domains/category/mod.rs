pub mod actions;
pub mod data;
pub mod models;

pub use data::{CategoryData, CategoryInput};
pub use models::Category;
