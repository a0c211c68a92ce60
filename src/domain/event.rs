//! Contract events delivered by the ledger gateway feed.

use serde::Deserialize;

use crate::error::Result;

/// Event kind emitted by the chaincode when a new listing enters the market.
pub const LISTING_ADDED: &str = "item_added";

/// A raw contract event: a kind plus an opaque payload, one per feed
/// notification. Ephemeral; nothing here is persisted.
#[derive(Debug, Clone)]
pub struct FeedEvent {
    pub kind: String,
    pub payload: Vec<u8>,
}

impl FeedEvent {
    #[must_use]
    pub fn new(kind: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            kind: kind.into(),
            payload: payload.into(),
        }
    }

    /// Check whether this is the recognized listing-added kind.
    #[must_use]
    pub fn is_listing_added(&self) -> bool {
        self.kind == LISTING_ADDED
    }

    /// Decode the payload as a market listing.
    pub fn decode_listing(&self) -> Result<ItemListing> {
        Ok(serde_json::from_slice(&self.payload)?)
    }

    /// Payload rendered for operator-facing logs of unknown events.
    #[must_use]
    pub fn payload_lossy(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }
}

/// Decoded `item_added` payload. Field names follow the chaincode's asset
/// JSON; fields beyond `ID` and `Name` are carried for display only.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ItemListing {
    /// Fully-qualified, organization-scoped identifier used to buy.
    #[serde(rename = "ID")]
    pub id: String,
    /// Catalog name matched against the wishlist.
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Price", default)]
    pub price: Option<i64>,
    #[serde(rename = "Count", default)]
    pub count: Option<i64>,
    #[serde(rename = "Org", default)]
    pub org: Option<String>,
}
