//! Ledger gateway adapter.
//!
//! Talks to the gateway service that fronts the ledger network: chaincode
//! transactions go over HTTP, contract events arrive over a WebSocket feed.
//! Identity enrollment and session setup live on the gateway side; this
//! adapter treats the remote system purely as an action sink and an event
//! source.

pub mod client;
pub mod stream;

pub use client::GatewayClient;
pub use stream::GatewayEventFeed;
