use crate::model::{DrinkSpec, Resource};

use super::InsufficientResource;

/// Consumables left in the machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inventory {
    /// Millilitres.
    pub water: u32,
    /// Millilitres.
    pub milk: u32,
    /// Grams.
    pub coffee: u32,
}

impl Inventory {
    pub fn new(water: u32, milk: u32, coffee: u32) -> Self {
        Self {
            water,
            milk,
            coffee,
        }
    }

    pub fn level(&self, resource: Resource) -> u32 {
        match resource {
            Resource::Water => self.water,
            Resource::Milk => self.milk,
            Resource::Coffee => self.coffee,
        }
    }

    /// First resource (water, milk, coffee) that cannot cover `drink`.
    pub fn shortfall(&self, drink: &DrinkSpec) -> Option<InsufficientResource> {
        Resource::ALL.into_iter().find_map(|resource| {
            let available = self.level(resource);
            let required = resource.required_by(drink);
            (available < required).then_some(InsufficientResource {
                resource,
                available,
                required,
            })
        })
    }

    pub fn can_fulfill(&self, drink: &DrinkSpec) -> bool {
        self.shortfall(drink).is_none()
    }

    /// Take everything `drink` needs, or nothing at all.
    pub fn deduct(&mut self, drink: &DrinkSpec) -> Result<(), InsufficientResource> {
        if let Some(short) = self.shortfall(drink) {
            return Err(short);
        }

        self.water -= drink.water;
        self.milk -= drink.milk;
        self.coffee -= drink.coffee;
        Ok(())
    }
}
