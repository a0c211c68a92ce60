//! Market action port for remote ledger operations.
//!
//! This is the primary integration point for the external ledger
//! collaborator: writes are submitted for ordering, reads are evaluated
//! against a single peer.

use async_trait::async_trait;

use crate::domain::PurchaseOutcome;
use crate::error::Result;

/// Remote marketplace operations.
///
/// Implementations own their timeout policy; a purchase attempt either
/// completes or reports failure, there is no mid-flight cancellation.
#[async_trait]
pub trait MarketPort: Send + Sync {
    /// Buy a listed item by its fully-qualified identifier.
    ///
    /// Rejections are an expected outcome, not an error: transport-level
    /// failures map into `PurchaseOutcome::Failed` as well so the engine
    /// sees one shape.
    async fn buy(&self, item_id: &str) -> PurchaseOutcome;

    /// Submit the one-time ledger bootstrap transaction.
    async fn init_ledger(&self) -> Result<()>;

    /// Add money to the identity's balance.
    async fn add_balance(&self, amount: u64) -> Result<()>;

    /// Add an item to the identity's inventory.
    async fn add_item(&self, name: &str, count: u64, price: u64) -> Result<()>;

    /// List an inventory item on the shared marketplace.
    async fn list_to_market(&self, name: &str, price: u64) -> Result<()>;

    /// Read the identity's current balance.
    async fn query_balance(&self) -> Result<String>;

    /// Read the identity's inventory as raw JSON (empty string when none).
    async fn query_inventory(&self) -> Result<String>;

    /// Read all items currently listed on the marketplace as raw JSON.
    async fn query_market(&self) -> Result<String>;

    /// Gateway name for logging/debugging.
    fn gateway_name(&self) -> &'static str;
}
