//! Service layer: endpoint operations and the price rule.

pub mod crud;
pub mod validation;

pub use crud::CrudService;
pub use validation::{Price, ValidationError};
