//! Trait seams between the core and the external ledger collaborators.

pub mod feed;
pub mod market;
pub mod store;

pub use feed::EventFeed;
pub use market::MarketPort;
pub use store::WishlistStore;
