//! Derived views over the medicine collection.
//!
//! Filtering, ordering and pagination are pure projections: each function is
//! a deterministic function of its inputs, mutates nothing, and is recomputed
//! on demand (no IO, no caches, no storage).

pub mod filter;
pub mod page;
pub mod sort;

pub use filter::filter;
pub use page::{paginate, total_pages};
pub use sort::{SortKey, SortOrder, SortSpec, sort};
