pub mod mutations;
pub mod queries;

pub use mutations::{create_agency, delete_agency, toggle_agency_status, update_agency};
pub use queries::{get_agency, list_agencies};
