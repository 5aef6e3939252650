pub mod mutations;
pub mod queries;

pub use mutations::{create_user, toggle_user_active};
pub use queries::{list_users, resolve_actor};
