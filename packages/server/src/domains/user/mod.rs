pub mod actions;
pub mod data;
pub mod models;

pub use data::{UserData, UserInput};
pub use models::User;
