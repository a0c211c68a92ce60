//! Contract event feed port.

use async_trait::async_trait;

use crate::domain::FeedEvent;
use crate::error::Result;

/// Real-time contract event stream from the ledger gateway.
///
/// Implementations handle connection management and frame parsing. Events
/// are pulled one at a time, in delivery order; the consumer never sees two
/// events concurrently.
#[async_trait]
pub trait EventFeed: Send {
    /// Connect and register the subscription with the gateway.
    async fn subscribe(&mut self) -> Result<()>;

    /// Receive the next contract event.
    ///
    /// Blocks until an event is available. Returns `None` when the feed is
    /// closed.
    async fn next_event(&mut self) -> Option<FeedEvent>;

    /// Feed name for logging/debugging.
    fn feed_name(&self) -> &'static str;
}

/// Implement EventFeed for boxed trait objects to allow use with generic wrappers.
#[async_trait]
impl EventFeed for Box<dyn EventFeed> {
    async fn subscribe(&mut self) -> Result<()> {
        (**self).subscribe().await
    }

    async fn next_event(&mut self) -> Option<FeedEvent> {
        (**self).next_event().await
    }

    fn feed_name(&self) -> &'static str {
        (**self).feed_name()
    }
}
