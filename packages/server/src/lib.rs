// SKPD Content Publication - API Core
//
// Regional agencies (SKPD) submit content for publication, operators verify
// it, and compliance against each agency's monthly quota is reported.
//
// Layout: domains/*/{models,actions,data} with shared types in common/ and
// infrastructure in kernel/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
