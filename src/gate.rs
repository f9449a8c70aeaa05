//! Admin access to the machine report.
//!
//! This is a plaintext equality check against a shared secret, with no hashing
//! and no rate limiting. It keeps casual customers out of the report and
//! nothing more.

use tracing::warn;

use crate::machine::{AccessDenied, Machine, Snapshot};

#[derive(Debug, Clone)]
pub struct AdminGate {
    secret: String,
}

impl AdminGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn authorize(&self, credential: &str) -> Result<(), AccessDenied> {
        if credential == self.secret {
            Ok(())
        } else {
            warn!("admin access denied");
            Err(AccessDenied)
        }
    }

    /// Snapshot of `machine`, if `credential` matches the secret.
    pub fn report(&self, machine: &Machine, credential: &str) -> Result<Snapshot, AccessDenied> {
        self.authorize(credential)?;
        Ok(machine.snapshot())
    }
}
