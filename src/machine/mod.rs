//! Transaction processing for a single coffee machine.
//!
//! The machine owns its inventory, its order ledger and its revenue total, and
//! only changes them when a purchase is committed. A rejected purchase leaves
//! every one of them as it was.

use tracing::{debug, info};

use crate::Money;
use crate::catalog::Catalog;
use crate::clock::{Clock, SystemClock};
use crate::config::MachineConfig;
use crate::model::OrderRecord;

mod error;
pub use error::{
    AccessDenied, CatalogError, InsufficientResource, MachineError, PurchaseError, Stage,
};

mod inventory;
pub use inventory::Inventory;

mod ledger;
pub use ledger::OrderLedger;

mod report;
pub use report::Snapshot;

mod shared;
pub use shared::SharedMachine;

/// Outcome of a committed purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Cash handed back, `tendered - price`.
    pub change: Money,
    pub order: OrderRecord,
}

/// A coffee machine: menu, consumables, sales.
pub struct Machine {
    catalog: Catalog,
    inventory: Inventory,
    orders: OrderLedger,
    /// Kept equal to `orders.revenue()`
    revenue: Money,
    clock: Box<dyn Clock>,
}

/// Public API
impl Machine {
    pub fn new(catalog: Catalog, inventory: Inventory) -> Self {
        Self {
            catalog,
            inventory,
            orders: OrderLedger::new(),
            revenue: Money::ZERO,
            clock: Box::new(SystemClock),
        }
    }

    /// Build a machine from its startup config. Fails on a misconfigured menu.
    pub fn from_config(config: &MachineConfig) -> Result<Self, CatalogError> {
        let catalog = Catalog::new(config.menu.iter().cloned())?;
        Ok(Self::new(catalog, config.inventory))
    }

    /// Replace the clock used to timestamp orders.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Try to sell `drink` for `tendered` cash.
    ///
    /// Checks, in order: the drink exists, the inventory covers it, the cash
    /// covers the price. Only when all three pass are inventory, revenue and
    /// order ledger updated.
    pub fn purchase(&mut self, drink: &str, tendered: Money) -> Result<Receipt, PurchaseError> {
        let result = self.try_purchase(drink, tendered);
        Self::log_result(drink, tendered, &result);
        result
    }

    /// Current inventory and sales totals.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            water: self.inventory.water,
            milk: self.inventory.milk,
            coffee: self.inventory.coffee,
            total_revenue: self.revenue,
            order_count: self.orders.len(),
        }
    }

    /// The last `n` orders, oldest first.
    pub fn recent_orders(&self, n: usize) -> &[OrderRecord] {
        self.orders.recent(n)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn orders(&self) -> &OrderLedger {
        &self.orders
    }

    pub fn total_revenue(&self) -> Money {
        self.revenue
    }
}

/// Private API
impl Machine {
    fn try_purchase(&mut self, drink: &str, tendered: Money) -> Result<Receipt, PurchaseError> {
        let spec = self.catalog.lookup(drink)?;

        if let Some(short) = self.inventory.shortfall(spec) {
            return Err(short.into());
        }
        debug!(drink, stage = ?Stage::ResourceChecked);

        let change =
            tendered
                .checked_sub(spec.price)
                .ok_or(PurchaseError::InsufficientPayment {
                    price: spec.price,
                    tendered,
                })?;
        debug!(drink, stage = ?Stage::PaymentValidated);

        // cannot fail: shortfall was checked above under the same &mut borrow
        self.inventory.deduct(spec)?;
        self.revenue += spec.price;
        let order = self
            .orders
            .record(&spec.id, &spec.name, spec.price, tendered, self.clock.now())
            .clone();
        debug!(drink, stage = ?Stage::Committed);

        Ok(Receipt { change, order })
    }

    /// Small helper to log `purchase` results
    fn log_result(drink: &str, tendered: Money, result: &Result<Receipt, PurchaseError>) {
        match result {
            Ok(receipt) => {
                info!(
                    drink,
                    paid = %tendered,
                    change = %receipt.change,
                    "purchase committed"
                );
            }
            Err(e) => {
                info!(
                    drink,
                    tendered = %tendered,
                    stage = ?e.stage(),
                    reason = %e,
                    "purchase rejected"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::model::Resource;
    use chrono::{NaiveDate, NaiveDateTime};

    // test utils

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn machine() -> Machine {
        Machine::from_config(&MachineConfig::default())
            .unwrap()
            .with_clock(FixedClock(noon()))
    }

    fn machine_with(inventory: Inventory) -> Machine {
        Machine::from_config(&MachineConfig::default().with_inventory(inventory))
            .unwrap()
            .with_clock(FixedClock(noon()))
    }

    /// Everything a rejected purchase must leave alone.
    fn state(machine: &Machine) -> (Inventory, Vec<OrderRecord>, Money) {
        (
            *machine.inventory(),
            machine.orders().iter().cloned().collect(),
            machine.total_revenue(),
        )
    }

    #[test]
    fn new_machine() {
        let machine = machine();
        let snapshot = machine.snapshot();
        assert_eq!(snapshot.order_count, 0);
        assert_eq!(snapshot.total_revenue, Money::ZERO);
        assert!(machine.recent_orders(5).is_empty());
    }

    #[test]
    fn duplicate_menu_entry_fails_at_startup() {
        let mut config = MachineConfig::default();
        let latte = config.menu[1].clone();
        config.menu.push(latte);

        let result = Machine::from_config(&config);
        assert!(matches!(result, Err(CatalogError::DuplicateDrink(id)) if id == "latte"));
    }

    // Committed purchases

    #[test]
    fn espresso_with_exact_money() {
        let mut machine = machine();
        let receipt = machine.purchase("espresso", Money::new(100)).unwrap();

        assert_eq!(receipt.change, Money::ZERO);
        assert_eq!(receipt.order.drink, "espresso");
        assert_eq!(receipt.order.name, "Espresso");
        assert_eq!(receipt.order.paid, Money::new(100));
        assert_eq!(receipt.order.timestamp, noon());

        let snapshot = machine.snapshot();
        assert_eq!(snapshot.water, 950);
        assert_eq!(snapshot.milk, 800);
        assert_eq!(snapshot.coffee, 282);
        assert_eq!(snapshot.total_revenue, Money::new(100));
        assert_eq!(snapshot.order_count, 1);
    }

    #[test]
    fn overpayment_returns_change_and_keeps_price() {
        let mut machine = machine();
        let receipt = machine.purchase("latte", Money::new(500)).unwrap();

        assert_eq!(receipt.change, Money::new(300));
        assert_eq!(receipt.order.paid, Money::new(500));
        assert_eq!(machine.total_revenue(), Money::new(200));
    }

    // Rejected purchases

    #[test]
    fn insufficient_payment_changes_nothing() {
        let mut machine = machine();
        machine.purchase("espresso", Money::new(100)).unwrap();
        let before = state(&machine);

        let err = machine.purchase("latte", Money::new(150)).unwrap_err();
        assert_eq!(
            err,
            PurchaseError::InsufficientPayment {
                price: Money::new(200),
                tendered: Money::new(150)
            }
        );
        assert_eq!(err.refund(), Money::new(150));
        assert_eq!(state(&machine), before);
    }

    #[test]
    fn insufficient_water_changes_nothing() {
        let mut machine = machine_with(Inventory::new(10, 800, 300));
        let before = state(&machine);

        let err = machine.purchase("cappuccino", Money::new(250)).unwrap_err();
        assert!(matches!(
            err,
            PurchaseError::InsufficientResource(InsufficientResource {
                resource: Resource::Water,
                available: 10,
                required: 250,
            })
        ));
        assert_eq!(err.refund(), Money::ZERO);
        assert_eq!(state(&machine), before);
    }

    #[test]
    fn water_drained_by_purchases_then_rejected() {
        let mut machine = machine();
        // 4 cappuccinos use exactly 1000 ml of water
        for _ in 0..4 {
            machine.purchase("cappuccino", Money::new(250)).unwrap();
        }
        assert_eq!(machine.inventory().water, 0);
        let before = state(&machine);

        let err = machine.purchase("cappuccino", Money::new(250)).unwrap_err();
        assert!(matches!(
            err,
            PurchaseError::InsufficientResource(InsufficientResource {
                resource: Resource::Water,
                ..
            })
        ));
        assert_eq!(state(&machine), before);
    }

    #[test]
    fn resource_check_comes_before_payment_check() {
        let mut machine = machine_with(Inventory::new(1000, 0, 300));
        let err = machine.purchase("latte", Money::new(1)).unwrap_err();
        assert!(matches!(
            err,
            PurchaseError::InsufficientResource(InsufficientResource {
                resource: Resource::Milk,
                ..
            })
        ));
        assert_eq!(err.stage(), Stage::Requested);
    }

    #[test]
    fn unknown_drink_changes_nothing() {
        let mut machine = machine();
        let before = state(&machine);

        let err = machine.purchase("mocha", Money::new(100)).unwrap_err();
        assert_eq!(err, PurchaseError::UnknownDrink("mocha".into()));
        assert_eq!(state(&machine), before);
    }

    #[test]
    fn machine_keeps_serving_after_rejection() {
        let mut machine = machine();
        machine.purchase("latte", Money::new(10)).unwrap_err();
        machine.purchase("latte", Money::new(200)).unwrap();
        assert_eq!(machine.snapshot().order_count, 1);
    }

    // Revenue

    #[test]
    fn revenue_matches_ledger_and_cash_kept() {
        let mut machine = machine();
        let attempts = [
            ("espresso", 100),
            ("latte", 150),
            ("latte", 300),
            ("mocha", 999),
            ("cappuccino", 250),
            ("espresso", 120),
        ];

        let mut kept = Money::ZERO;
        let mut prices = Money::ZERO;
        for (drink, tendered) in attempts {
            let tendered = Money::new(tendered);
            if let Ok(receipt) = machine.purchase(drink, tendered) {
                kept += tendered.checked_sub(receipt.change).unwrap();
                prices += receipt.order.price;
            }
        }

        assert_eq!(machine.total_revenue(), Money::new(650));
        assert_eq!(machine.total_revenue(), prices);
        assert_eq!(machine.total_revenue(), kept);
        assert_eq!(machine.total_revenue(), machine.orders().revenue());
    }

    #[test]
    fn revenue_tracks_ledger_across_long_session() {
        let mut machine = machine_with(Inventory::new(100_000, 100_000, 100_000));
        let menu = [("espresso", 100), ("latte", 200), ("cappuccino", 250)];

        for (i, (drink, price)) in menu.iter().cycle().take(300).enumerate() {
            // every fourth attempt underpays and is rejected
            let tendered = if i % 4 == 3 { price - 1 } else { price + 10 };
            let _ = machine.purchase(drink, Money::new(tendered));
            assert_eq!(machine.total_revenue(), machine.orders().revenue());
        }
        assert_eq!(machine.snapshot().order_count, 225);
    }

    // Reporting

    #[test]
    fn snapshot_is_idempotent() {
        let mut machine = machine();
        machine.purchase("latte", Money::new(200)).unwrap();
        assert_eq!(machine.snapshot(), machine.snapshot());
    }

    #[test]
    fn recent_orders_returns_last_five_oldest_first() {
        let mut machine = machine_with(Inventory::new(10_000, 10_000, 10_000));
        let drinks = ["espresso", "latte", "cappuccino", "latte", "espresso", "cappuccino", "latte"];
        for drink in drinks {
            machine.purchase(drink, Money::new(300)).unwrap();
        }

        let recent: Vec<_> = machine
            .recent_orders(5)
            .iter()
            .map(|o| o.drink.as_str())
            .collect();
        assert_eq!(recent, drinks[2..].to_vec());
    }

    #[test]
    fn orders_are_copies_of_catalog_data() {
        let mut machine = machine();
        let receipt = machine.purchase("espresso", Money::new(100)).unwrap();
        let spec = machine.catalog().lookup("espresso").unwrap();
        assert_eq!(receipt.order.price, spec.price);
        assert_eq!(receipt.order.name, spec.name);
    }
}
