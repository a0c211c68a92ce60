//! Concrete implementations of the port traits.

pub mod gateway;
pub mod store;
