//! Basket Items

mod handlers;

pub(crate) use handlers::*;
