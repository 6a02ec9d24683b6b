//! Menu

mod catalog;
pub mod errors;
pub mod models;
pub mod service;

pub use catalog::{Catalog, CatalogError};
pub use errors::MenuServiceError;
pub use service::*;
