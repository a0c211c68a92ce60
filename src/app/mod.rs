//! Application wiring: the reconciliation engine and the runtime loop.

pub mod engine;
pub mod runner;

pub use engine::{Reconciliation, ReconciliationEngine};
pub use runner::App;
