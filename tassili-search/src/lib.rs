pub mod engine;
pub mod fields;
pub mod filter;
pub mod global;

pub use engine::{substring_search, SearchField};
pub use filter::{filter_items, Criterion};
pub use global::{global_search, SearchResults};
