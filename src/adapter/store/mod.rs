//! Durable wishlist storage adapters.

pub mod file;

pub use file::FileWishlistStore;
