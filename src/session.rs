//! Request handling at the edge of the machine.
//!
//! A session pairs a machine with its admin gate and turns [`Request`]s into
//! printable [`Response`]s. It is the only place the admin secret is checked.

use std::fmt;
use std::io::{self, Write};

use tokio_stream::{Stream, StreamExt};

use crate::config::MachineConfig;
use crate::gate::AdminGate;
use crate::machine::{Machine, MachineError, Receipt, Snapshot};
use crate::model::{DrinkSpec, OrderRecord, Request};

/// Successful answer to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Served(Receipt),
    Report(Snapshot),
    /// Up to `depth` most recent orders, oldest first.
    History {
        depth: usize,
        orders: Vec<OrderRecord>,
    },
    Menu(Vec<DrinkSpec>),
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Served(receipt) => {
                if !receipt.change.is_zero() {
                    writeln!(f, "Here is your change: {}", receipt.change)?;
                }
                write!(f, "Here's your {}! Enjoy", receipt.order.name)
            }
            Response::Report(snapshot) => {
                writeln!(f, "Coffee Machine Report:")?;
                write!(f, "{snapshot}")
            }
            Response::History { orders, .. } if orders.is_empty() => {
                f.write_str("No orders placed yet.")
            }
            Response::History { depth, orders } => {
                write!(f, "Order History (Last {depth} orders):")?;
                for order in orders {
                    write!(f, "\n{order}")?;
                }
                Ok(())
            }
            Response::Menu(drinks) => {
                f.write_str("Menu:")?;
                for drink in drinks {
                    write!(f, "\n{} ({}) - {}", drink.name, drink.id, drink.price)?;
                }
                Ok(())
            }
        }
    }
}

pub struct Session {
    machine: Machine,
    gate: AdminGate,
    history_depth: usize,
}

impl Session {
    pub fn new(machine: Machine, gate: AdminGate, history_depth: usize) -> Self {
        Self {
            machine,
            gate,
            history_depth,
        }
    }

    pub fn from_config(config: &MachineConfig) -> Result<Self, MachineError> {
        Ok(Self::new(
            Machine::from_config(config)?,
            AdminGate::new(config.admin_secret.clone()),
            config.history_depth,
        ))
    }

    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// Handle a single request against the machine.
    pub fn handle(&mut self, request: Request) -> Result<Response, MachineError> {
        let response = match request {
            Request::Purchase { drink, tendered } => {
                Response::Served(self.machine.purchase(&drink, tendered)?)
            }
            Request::Report { credential } => {
                Response::Report(self.gate.report(&self.machine, &credential)?)
            }
            Request::History => Response::History {
                depth: self.history_depth,
                orders: self.machine.recent_orders(self.history_depth).to_vec(),
            },
            Request::Menu => Response::Menu(self.machine.catalog().iter().cloned().collect()),
        };
        Ok(response)
    }

    /// Handle every request from `stream`, writing one block per request to `out`.
    ///
    /// Rejected requests are written too; they never stop the session.
    pub async fn run(
        &mut self,
        mut stream: impl Stream<Item = Request> + Unpin,
        out: &mut impl Write,
    ) -> io::Result<()> {
        while let Some(request) = stream.next().await {
            match self.handle(request) {
                Ok(response) => writeln!(out, "{response}")?,
                Err(e) => writeln!(out, "{e}")?,
            }
        }
        out.flush()
    }
}
