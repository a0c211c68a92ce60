//! Wishwatch - marketplace wishlist watcher and auto-purchase agent.
//!
//! Watches the ledger gateway's contract event feed for newly listed
//! marketplace items, buys the ones on the operator's wishlist, and keeps
//! the wishlist durable across restarts while an interactive terminal
//! reads and mutates the same list.
//!
//! # Architecture
//!
//! Hexagonal: pure domain types, port traits at the seams, adapters for
//! the external ledger collaborator.
//!
//! - [`domain`] - Wishlist, feed events, purchase outcomes
//! - [`port`] - Trait seams: market actions, event feed, wishlist storage
//! - [`adapter`] - Gateway HTTP/WebSocket client and the file-backed store
//! - [`app`] - The reconciliation engine and runtime wiring
//! - [`cli`] - Command-line surface and the interactive terminal
//! - [`config`] - TOML configuration
//! - [`error`] - Error types for the crate
//!
//! The reconciliation engine is the single owner of the wishlist; the
//! event feed pump and the terminal both serialize through it, so a
//! feed-triggered purchase and a user edit can never interleave
//! mid-operation.

pub mod adapter;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
