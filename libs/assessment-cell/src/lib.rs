pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use error::*;
pub use models::*;
pub use repository::{ClinicianRepository, InMemoryClinicRepository};
pub use services::*;
