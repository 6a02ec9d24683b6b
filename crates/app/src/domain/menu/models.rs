//! Menu Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use smallvec::SmallVec;

/// Pizza identifier, unique within the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PizzaId(u32);

impl PizzaId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Display for PizzaId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// Pizza Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pizza {
    pub id: PizzaId,
    pub name: String,
    pub description: String,
    pub ingredients: SmallVec<[String; 6]>,
}
