pub mod actions;
pub mod data;
pub mod models;

pub use data::{AgencyData, AgencyInput};
pub use models::{Agency, AgencyStatus};
