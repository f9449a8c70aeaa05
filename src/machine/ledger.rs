use chrono::NaiveDateTime;

use crate::Money;
use crate::model::OrderRecord;

/// Append-only history of committed orders, in commit order.
#[derive(Debug, Default)]
pub struct OrderLedger {
    records: Vec<OrderRecord>,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        drink: &str,
        name: &str,
        price: Money,
        paid: Money,
        timestamp: NaiveDateTime,
    ) -> &OrderRecord {
        self.records.push(OrderRecord {
            drink: drink.to_owned(),
            name: name.to_owned(),
            price,
            paid,
            timestamp,
        });
        &self.records[self.records.len() - 1]
    }

    /// The last `n` orders, oldest first.
    pub fn recent(&self, n: usize) -> &[OrderRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrderRecord> + '_ {
        self.records.iter()
    }

    /// Sum of prices over the whole history.
    pub fn revenue(&self) -> Money {
        self.records.iter().map(|order| order.price).sum()
    }
}
