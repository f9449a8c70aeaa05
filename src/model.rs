//! Core domain types for the coffee machine.

use std::fmt;

use chrono::NaiveDateTime;

use crate::Money;

/// Layout of order timestamps: `DD-MM-YYYY HH:MM:SS`.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// A consumable tracked by the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Water,
    Milk,
    Coffee,
}

impl Resource {
    /// Diagnostic order: the first short resource in this order is reported.
    pub const ALL: [Resource; 3] = [Resource::Water, Resource::Milk, Resource::Coffee];

    pub fn unit(self) -> &'static str {
        match self {
            Resource::Water | Resource::Milk => "ml",
            Resource::Coffee => "g",
        }
    }

    /// Quantity of this resource a drink consumes.
    pub fn required_by(self, drink: &DrinkSpec) -> u32 {
        match self {
            Resource::Water => drink.water,
            Resource::Milk => drink.milk,
            Resource::Coffee => drink.coffee,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Water => "water",
            Resource::Milk => "milk",
            Resource::Coffee => "coffee",
        };
        f.write_str(name)
    }
}

/// A drink on the menu: its recipe and its price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrinkSpec {
    /// Menu identifier, e.g. `espresso`.
    pub id: String,
    /// Display name, e.g. `Espresso`.
    pub name: String,
    /// Water in millilitres.
    pub water: u32,
    /// Milk in millilitres.
    pub milk: u32,
    /// Coffee in grams.
    pub coffee: u32,
    pub price: Money,
}

impl DrinkSpec {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        water: u32,
        milk: u32,
        coffee: u32,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            water,
            milk,
            coffee,
            price,
        }
    }
}

/// A committed sale. Holds a copy of the drink's identity so later catalog
/// changes never rewrite history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub drink: String,
    pub name: String,
    /// Price charged for the drink.
    pub price: Money,
    /// Cash tendered by the customer, always `>= price`.
    pub paid: Money,
    pub timestamp: NaiveDateTime,
}

impl OrderRecord {
    pub fn change(&self) -> Money {
        // `paid >= price` is checked before a record is ever created
        self.paid.checked_sub(self.price).unwrap_or(Money::ZERO)
    }

    pub fn formatted_timestamp(&self) -> impl fmt::Display + '_ {
        self.timestamp.format(TIMESTAMP_FORMAT)
    }
}

impl fmt::Display for OrderRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.formatted_timestamp(),
            self.name,
            self.price
        )
    }
}

/// A request coming from outside the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Buy a drink with the given cash.
    Purchase { drink: String, tendered: Money },
    /// Admin report, gated by a shared secret.
    Report { credential: String },
    /// Most recent orders.
    History,
    /// List the drinks on offer.
    Menu,
}
