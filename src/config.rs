//! Startup configuration for a machine.

use crate::Money;
use crate::machine::Inventory;
use crate::model::DrinkSpec;

/// Environment variable that overrides [`MachineConfig::admin_secret`].
pub const ADMIN_SECRET_ENV: &str = "COFFEE_ADMIN_SECRET";

/// Everything a machine needs at power-on.
#[derive(Debug, Clone)]
pub struct MachineConfig {
    pub inventory: Inventory,
    pub menu: Vec<DrinkSpec>,
    /// Plaintext secret for the admin report.
    pub admin_secret: String,
    /// Number of orders shown by `history`.
    pub history_depth: usize,
}

impl MachineConfig {
    /// Stock config with the admin secret taken from `COFFEE_ADMIN_SECRET` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(secret) = std::env::var(ADMIN_SECRET_ENV) {
            config.admin_secret = secret;
        }
        config
    }

    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn with_admin_secret(mut self, secret: impl Into<String>) -> Self {
        self.admin_secret = secret.into();
        self
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            inventory: Inventory::new(1000, 800, 300),
            menu: vec![
                DrinkSpec::new("espresso", "Espresso", 50, 0, 18, Money::new(100)),
                DrinkSpec::new("latte", "Latte", 200, 150, 24, Money::new(200)),
                DrinkSpec::new("cappuccino", "Cappuccino", 250, 100, 24, Money::new(250)),
            ],
            admin_secret: "gcuadmin".to_owned(),
            history_depth: 5,
        }
    }
}
