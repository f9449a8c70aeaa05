use std::fmt;

use crate::Money;

/// Read-only view of a machine's inventory and sales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub water: u32,
    pub milk: u32,
    pub coffee: u32,
    pub total_revenue: Money,
    pub order_count: usize,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Water: {}ml", self.water)?;
        writeln!(f, "Milk: {}ml", self.milk)?;
        writeln!(f, "Coffee: {}g", self.coffee)?;
        writeln!(f, "Total Sales: {}", self.total_revenue)?;
        write!(f, "Total Orders: {}", self.order_count)
    }
}
