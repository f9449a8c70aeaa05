use std::sync::Arc;

use parking_lot::Mutex;

use crate::Money;
use crate::model::OrderRecord;

use super::{Machine, PurchaseError, Receipt, Snapshot};

/// Cloneable handle for sharing one machine between threads.
///
/// Each purchase runs its check and commit under one lock, so two callers can
/// never both pass the resource check against the same inventory.
#[derive(Clone)]
pub struct SharedMachine {
    inner: Arc<Mutex<Machine>>,
}

impl SharedMachine {
    pub fn new(machine: Machine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(machine)),
        }
    }

    pub fn purchase(&self, drink: &str, tendered: Money) -> Result<Receipt, PurchaseError> {
        self.inner.lock().purchase(drink, tendered)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.inner.lock().snapshot()
    }

    pub fn recent_orders(&self, n: usize) -> Vec<OrderRecord> {
        self.inner.lock().recent_orders(n).to_vec()
    }

    /// Run `f` with exclusive access to the machine.
    pub fn with<R>(&self, f: impl FnOnce(&mut Machine) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl From<Machine> for SharedMachine {
    fn from(machine: Machine) -> Self {
        Self::new(machine)
    }
}
