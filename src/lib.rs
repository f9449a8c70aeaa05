pub mod catalog;
pub mod clock;
pub mod config;
pub mod csv;
pub mod gate;
pub mod machine;
pub mod model;
pub mod money;
pub mod session;

pub use catalog::Catalog;
pub use config::MachineConfig;
pub use machine::{Machine, SharedMachine};
pub use model::{DrinkSpec, OrderRecord, Request};
pub use money::Money;
pub use session::Session;
