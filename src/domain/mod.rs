//! Exchange-agnostic domain types: wishlist, feed events, purchase outcomes.

pub mod event;
pub mod purchase;
pub mod wishlist;

pub use event::{FeedEvent, ItemListing, LISTING_ADDED};
pub use purchase::PurchaseOutcome;
pub use wishlist::Wishlist;
