//! Reconciliation engine: matches feed events against the wishlist and
//! drives automatic purchases.
//!
//! The engine is the single owner of the wishlist. Both call paths — the
//! feed pump and the interactive terminal — go through the same async
//! mutex, and a feed-triggered match holds it across the whole
//! match/purchase/update sequence. A user addition therefore cannot race an
//! in-flight automated removal, and a removal cannot be undone by a stale
//! snapshot read on the other path.

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::domain::{FeedEvent, ItemListing, PurchaseOutcome, Wishlist};
use crate::error::Result;
use crate::port::{MarketPort, WishlistStore};

/// What the engine did with one feed event.
#[derive(Debug, Clone, PartialEq)]
pub enum Reconciliation {
    /// Event kind is not the recognized listing kind.
    UnknownKind { kind: String, payload: String },
    /// Payload of a recognized kind failed to decode; event dropped.
    DecodeFailed { reason: String },
    /// Listing is not on the wishlist; nothing to do.
    NotWanted { name: String },
    /// Wanted item bought and removed from the wishlist.
    Purchased { listing: ItemListing },
    /// Wanted item could not be bought; it stays on the wishlist and
    /// remains eligible for the next matching event.
    PurchaseFailed { listing: ItemListing, reason: String },
}

pub struct ReconciliationEngine<M, S> {
    market: M,
    store: S,
    identity: String,
    counterparty: String,
    wishlist: Mutex<Wishlist>,
}

impl<M, S> ReconciliationEngine<M, S>
where
    M: MarketPort,
    S: WishlistStore,
{
    /// Load the durable wishlist for `identity` and take ownership of it.
    /// Fails only when the durable record cannot be created.
    pub async fn load(
        market: M,
        store: S,
        identity: impl Into<String>,
        counterparty: impl Into<String>,
    ) -> Result<Self> {
        let identity = identity.into();
        let wishlist = store.load(&identity).await?;

        Ok(Self {
            market,
            store,
            identity,
            counterparty: counterparty.into(),
            wishlist: Mutex::new(wishlist),
        })
    }

    /// The market port, for commands outside the reconciliation path.
    pub fn market(&self) -> &M {
        &self.market
    }

    /// Process one feed event to completion.
    ///
    /// On a match the wishlist lock is held from the membership check
    /// through the purchase and the post-purchase update; persistence of a
    /// successful removal happens before this method returns.
    pub async fn handle_event(&self, event: FeedEvent) -> Reconciliation {
        if !event.is_listing_added() {
            warn!(kind = %event.kind, "unknown event kind");
            let payload = event.payload_lossy();
            return Reconciliation::UnknownKind {
                kind: event.kind,
                payload,
            };
        }

        let listing = match event.decode_listing() {
            Ok(listing) => listing,
            Err(e) => {
                warn!(error = %e, "dropping undecodable listing event");
                return Reconciliation::DecodeFailed {
                    reason: e.to_string(),
                };
            }
        };

        let mut wishlist = self.wishlist.lock().await;

        if !wishlist.contains(&listing.name) {
            return Reconciliation::NotWanted { name: listing.name };
        }

        info!(
            item = %listing.name,
            id = %listing.id,
            "wishlist item listed on the market, buying"
        );

        match self.market.buy(&listing.id).await {
            PurchaseOutcome::Completed => {
                wishlist.remove_first(&listing.name);
                self.persist(&wishlist).await;
                info!(item = %listing.name, "bought and removed from wishlist");
                Reconciliation::Purchased { listing }
            }
            PurchaseOutcome::Failed { reason } => {
                warn!(item = %listing.name, reason = %reason, "automatic purchase failed");
                Reconciliation::PurchaseFailed { listing, reason }
            }
        }
    }

    /// Append a name to the in-memory wishlist. Durable only at the next
    /// flush (automated removal or shutdown).
    pub async fn add(&self, name: impl Into<String>) {
        let name = name.into();
        let mut wishlist = self.wishlist.lock().await;
        wishlist.push(name.clone());
        info!(item = %name, "added to wishlist");
    }

    /// Try to buy `name` right now; on failure, watch it instead.
    ///
    /// Uses the same purchase path as automatic fulfillment, with the
    /// qualified identifier composed from the configured counterparty.
    pub async fn buy_or_watch(&self, name: &str) -> PurchaseOutcome {
        let item_id = format!("{}_{}", self.counterparty, name);

        let mut wishlist = self.wishlist.lock().await;
        let outcome = self.market.buy(&item_id).await;

        if let PurchaseOutcome::Failed { reason } = &outcome {
            warn!(item = %name, reason = %reason, "manual purchase failed, watching instead");
            wishlist.push(name.to_string());
        }

        outcome
    }

    /// Snapshot of the current wishlist.
    pub async fn snapshot(&self) -> Wishlist {
        self.wishlist.lock().await.clone()
    }

    /// Write the current wishlist to durable storage.
    pub async fn flush(&self) -> Result<()> {
        let wishlist = self.wishlist.lock().await;
        self.store.save(&self.identity, &wishlist).await
    }

    /// Persist after an automated removal. A failure here leaves the
    /// in-memory list authoritative for the rest of the process; the
    /// operator is warned about the divergence.
    async fn persist(&self, wishlist: &Wishlist) {
        if let Err(e) = self.store.save(&self.identity, wishlist).await {
            warn!(
                error = %e,
                "wishlist save failed; on-disk copy is stale until the next flush"
            );
        }
    }
}
