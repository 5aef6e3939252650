//! Auth domain - bearer token issuing and verification
//!
//! Tokens carry the user id; the request's `Actor` is rebuilt from the users
//! table (see `user::actions::resolve_actor`).

pub mod jwt;

pub use jwt::{Claims, JwtService};
