pub mod agency;
pub mod auth;
pub mod category;
pub mod compliance;
pub mod content;
pub mod user;
