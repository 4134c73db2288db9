//! Business logic services.

pub mod hot;

pub use hot::HotFetcher;
