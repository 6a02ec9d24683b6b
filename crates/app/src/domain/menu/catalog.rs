//! Static pizza catalog.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::domain::menu::models::{Pizza, PizzaId};

/// The menu every process starts with: `(id, name, description, ingredients)`.
const STANDARD_MENU: &[(u32, &str, &str, &[&str])] = &[
    (
        1,
        "Margherita",
        "Classic tomato, mozzarella and fresh basil.",
        &["tomato sauce", "mozzarella", "basil"],
    ),
    (
        2,
        "Pepperoni",
        "Tomato and mozzarella topped with spicy pepperoni.",
        &["tomato sauce", "mozzarella", "pepperoni"],
    ),
    (
        3,
        "Quattro Formaggi",
        "Four cheeses on a white base.",
        &["mozzarella", "gorgonzola", "parmesan", "fontina"],
    ),
    (
        4,
        "Vegetariana",
        "Seasonal vegetables on tomato and mozzarella.",
        &[
            "tomato sauce",
            "mozzarella",
            "peppers",
            "red onion",
            "mushrooms",
            "olives",
        ],
    ),
    (
        5,
        "Marinara",
        "Tomato, garlic and oregano. No cheese.",
        &["tomato sauce", "garlic", "oregano"],
    ),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("pizza id must be positive")]
    ZeroId,

    #[error("duplicate pizza id {0}")]
    DuplicateId(PizzaId),

    #[error("pizza {0} has an empty name")]
    EmptyName(PizzaId),
}

/// Read-only, ordered collection of orderable pizzas.
#[derive(Debug, Clone)]
pub struct Catalog {
    pizzas: Vec<Pizza>,
}

impl Catalog {
    /// Build a catalog from the given pizzas, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns an error when an id is zero or repeated, or a name is blank.
    pub fn new(pizzas: Vec<Pizza>) -> Result<Self, CatalogError> {
        let mut seen = FxHashSet::default();

        for pizza in &pizzas {
            if pizza.id.get() == 0 {
                return Err(CatalogError::ZeroId);
            }

            if !seen.insert(pizza.id) {
                return Err(CatalogError::DuplicateId(pizza.id));
            }

            if pizza.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(pizza.id));
            }
        }

        Ok(Self { pizzas })
    }

    /// The fixed house menu.
    #[must_use]
    pub fn standard() -> Self {
        let pizzas = STANDARD_MENU
            .iter()
            .map(|(id, name, description, ingredients)| Pizza {
                id: PizzaId::new(*id),
                name: (*name).to_owned(),
                description: (*description).to_owned(),
                ingredients: ingredients.iter().map(|i| (*i).to_owned()).collect(),
            })
            .collect();

        Self { pizzas }
    }

    #[must_use]
    pub fn list(&self) -> &[Pizza] {
        &self.pizzas
    }

    #[must_use]
    pub fn find(&self, id: PizzaId) -> Option<&Pizza> {
        self.pizzas.iter().find(|pizza| pizza.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
