//! Error types for the coffee machine.

use thiserror::Error;

use crate::Money;
use crate::model::Resource;

/// Top-level error returned by [`Session`](crate::Session) construction and request handling.
#[derive(Debug, Error)]
pub enum MachineError {
    #[error("purchase rejected: {0}")]
    Purchase(#[from] PurchaseError),

    #[error("{0}")]
    Access(#[from] AccessDenied),

    #[error("{0}")]
    Catalog(#[from] CatalogError),
}

/// Misconfigured menu. Fatal at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("drink '{0}' is defined more than once")]
    DuplicateDrink(String),
}

/// A resource is below what the drink needs.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("not enough {resource}: available {available} {unit}, required {required} {unit}", unit = .resource.unit())]
pub struct InsufficientResource {
    pub resource: Resource,
    pub available: u32,
    pub required: u32,
}

/// The stages a purchase moves through on its way to being committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Requested,
    ResourceChecked,
    PaymentValidated,
    Committed,
}

/// Why a purchase was turned down. The machine is untouched in every case.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("unknown drink '{0}'")]
    UnknownDrink(String),

    #[error(transparent)]
    InsufficientResource(#[from] InsufficientResource),

    #[error("not enough money: price {price}, tendered {tendered} (refunded)")]
    InsufficientPayment { price: Money, tendered: Money },
}

impl PurchaseError {
    /// Last stage the attempt reached before being rejected.
    pub fn stage(&self) -> Stage {
        match self {
            PurchaseError::UnknownDrink(_) | PurchaseError::InsufficientResource(_) => {
                Stage::Requested
            }
            PurchaseError::InsufficientPayment { .. } => Stage::ResourceChecked,
        }
    }

    /// Cash handed back to the customer. Only payment rejections take cash.
    pub fn refund(&self) -> Money {
        match self {
            PurchaseError::InsufficientPayment { tendered, .. } => *tendered,
            _ => Money::ZERO,
        }
    }
}

/// Wrong admin credential.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("access denied")]
pub struct AccessDenied;
