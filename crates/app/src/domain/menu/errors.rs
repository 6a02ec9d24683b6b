//! Menu service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuServiceError {
    #[error("pizza not found")]
    NotFound,
}
