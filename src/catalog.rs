//! The fixed menu of drinks.

use std::collections::HashMap;

use crate::machine::{CatalogError, PurchaseError};
use crate::model::DrinkSpec;

/// Drinks on offer, in menu order. Read-only once built.
#[derive(Debug, Clone)]
pub struct Catalog {
    drinks: Vec<DrinkSpec>,
    /// Drink id -> position in `drinks`
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build the menu. Identifiers must be unique.
    pub fn new(drinks: impl IntoIterator<Item = DrinkSpec>) -> Result<Self, CatalogError> {
        let drinks: Vec<DrinkSpec> = drinks.into_iter().collect();
        let mut index = HashMap::with_capacity(drinks.len());

        for (pos, drink) in drinks.iter().enumerate() {
            if index.insert(drink.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateDrink(drink.id.clone()));
            }
        }

        Ok(Self { drinks, index })
    }

    pub fn lookup(&self, id: &str) -> Result<&DrinkSpec, PurchaseError> {
        self.index
            .get(id)
            .map(|&pos| &self.drinks[pos])
            .ok_or_else(|| PurchaseError::UnknownDrink(id.to_owned()))
    }

    /// Drinks in menu order.
    pub fn iter(&self) -> impl Iterator<Item = &DrinkSpec> + '_ {
        self.drinks.iter()
    }

    pub fn len(&self) -> usize {
        self.drinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drinks.is_empty()
    }
}
