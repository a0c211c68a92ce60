//! Shared mocks for integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use wishwatch::domain::{FeedEvent, PurchaseOutcome, Wishlist};
use wishwatch::error::{Error, Result};
use wishwatch::port::{EventFeed, MarketPort, WishlistStore};

/// Market port mock with queued buy results and call recording.
///
/// Clones share state, so a test can keep a handle for assertions after
/// moving a clone into the engine.
#[derive(Clone, Default)]
pub struct MockMarket {
    inner: Arc<MarketState>,
}

#[derive(Default)]
struct MarketState {
    buy_results: Mutex<VecDeque<PurchaseOutcome>>,
    buy_calls: Mutex<Vec<String>>,
    buy_delay: Mutex<Option<Duration>>,
}

impl MockMarket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_buy_results(self, results: Vec<PurchaseOutcome>) -> Self {
        *self.inner.buy_results.lock() = results.into();
        self
    }

    /// Make each buy take this long, to widen race windows in
    /// concurrency tests.
    pub fn with_buy_delay(self, delay: Duration) -> Self {
        *self.inner.buy_delay.lock() = Some(delay);
        self
    }

    pub fn buy_calls(&self) -> Vec<String> {
        self.inner.buy_calls.lock().clone()
    }
}

#[async_trait]
impl MarketPort for MockMarket {
    async fn buy(&self, item_id: &str) -> PurchaseOutcome {
        self.inner.buy_calls.lock().push(item_id.to_string());

        let delay = *self.inner.buy_delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.inner
            .buy_results
            .lock()
            .pop_front()
            .unwrap_or(PurchaseOutcome::Completed)
    }

    async fn init_ledger(&self) -> Result<()> {
        Ok(())
    }

    async fn add_balance(&self, _amount: u64) -> Result<()> {
        Ok(())
    }

    async fn add_item(&self, _name: &str, _count: u64, _price: u64) -> Result<()> {
        Ok(())
    }

    async fn list_to_market(&self, _name: &str, _price: u64) -> Result<()> {
        Ok(())
    }

    async fn query_balance(&self) -> Result<String> {
        Ok("0".into())
    }

    async fn query_inventory(&self) -> Result<String> {
        Ok(String::new())
    }

    async fn query_market(&self) -> Result<String> {
        Ok(String::new())
    }

    fn gateway_name(&self) -> &'static str {
        "mock"
    }
}

/// In-memory wishlist store with save counting and injectable failure.
#[derive(Clone, Default)]
pub struct MockStore {
    inner: Arc<StoreState>,
}

#[derive(Default)]
struct StoreState {
    records: Mutex<HashMap<String, Wishlist>>,
    save_count: AtomicU32,
    fail_saves: AtomicBool,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(self, identity: &str, names: &[&str]) -> Self {
        let wishlist: Wishlist = names.iter().map(|n| n.to_string()).collect();
        self.inner
            .records
            .lock()
            .insert(identity.to_string(), wishlist);
        self
    }

    pub fn fail_saves(&self, fail: bool) {
        self.inner.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub fn save_count(&self) -> u32 {
        self.inner.save_count.load(Ordering::SeqCst)
    }

    pub fn saved(&self, identity: &str) -> Option<Wishlist> {
        self.inner.records.lock().get(identity).cloned()
    }
}

#[async_trait]
impl WishlistStore for MockStore {
    async fn load(&self, identity: &str) -> Result<Wishlist> {
        Ok(self
            .inner
            .records
            .lock()
            .entry(identity.to_string())
            .or_default()
            .clone())
    }

    async fn save(&self, identity: &str, wishlist: &Wishlist) -> Result<()> {
        if self.inner.fail_saves.load(Ordering::SeqCst) {
            return Err(Error::Persistence {
                path: identity.to_string(),
                source: std::io::Error::other("injected save failure"),
            });
        }

        self.inner
            .records
            .lock()
            .insert(identity.to_string(), wishlist.clone());
        self.inner.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Event feed mock replaying a fixed sequence of events.
pub struct MockFeed {
    events: VecDeque<FeedEvent>,
    subscribe_result: Option<Error>,
}

impl MockFeed {
    pub fn new(events: Vec<FeedEvent>) -> Self {
        Self {
            events: events.into(),
            subscribe_result: None,
        }
    }

    pub fn failing_subscription(reason: &str) -> Self {
        Self {
            events: VecDeque::new(),
            subscribe_result: Some(Error::Subscription(reason.to_string())),
        }
    }
}

#[async_trait]
impl EventFeed for MockFeed {
    async fn subscribe(&mut self) -> Result<()> {
        match self.subscribe_result.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    async fn next_event(&mut self) -> Option<FeedEvent> {
        self.events.pop_front()
    }

    fn feed_name(&self) -> &'static str {
        "mock"
    }
}

/// Build a listing-added event with the standard payload shape.
pub fn listing_event(id: &str, name: &str) -> FeedEvent {
    FeedEvent::new(
        wishwatch::domain::LISTING_ADDED,
        format!(r#"{{"ID":"{id}","Name":"{name}","Price":10}}"#).into_bytes(),
    )
}
