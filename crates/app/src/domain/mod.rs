//! Pizzeria Domain Concerns

pub mod baskets;
pub mod menu;
pub mod orders;
