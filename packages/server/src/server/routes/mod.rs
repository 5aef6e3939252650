// HTTP routes
pub mod export;
pub mod graphql;
pub mod health;

pub use export::*;
pub use graphql::*;
pub use health::*;
