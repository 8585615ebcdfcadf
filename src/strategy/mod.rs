//! Lot selection strategy.
//!
//! Ranks priced lots by income-per-cost efficiency and admits them greedily
//! under the budget constraint.

mod allocator;

pub use allocator::{GreedyAllocator, Selection};
