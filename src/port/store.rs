//! Persistence port for the durable wishlist.

use async_trait::async_trait;

use crate::domain::Wishlist;
use crate::error::Result;

/// Storage operations for the per-identity wishlist.
#[async_trait]
pub trait WishlistStore: Send + Sync {
    /// Load the wishlist for `identity`, creating an empty durable record
    /// if none exists. Fails only when the record cannot be created.
    async fn load(&self, identity: &str) -> Result<Wishlist>;

    /// Overwrite the durable record for `identity`.
    ///
    /// Atomic from a reader's perspective: a concurrent reader observes
    /// either the old or the new content, never a partial write. Names must
    /// not contain a line terminator; that is the caller's precondition.
    async fn save(&self, identity: &str, wishlist: &Wishlist) -> Result<()>;
}
