//! # Coupon Harvester
//!
//! Selects the subset of exchange-quoted bond lots that maximizes projected
//! income under a fixed spending budget, using a greedy ranking by
//! income-per-cost efficiency.
//!
//! ## Architecture
//!
//! - `config`: Configuration management and validation
//! - `input`: Market record parsing and the validation taxonomy
//! - `pricing`: Per-lot income and cost computation
//! - `strategy`: Greedy budget allocation (the algorithmic core)
//! - `pipeline`: Parse → price → allocate → render orchestration
//! - `report`: Plain-text selection reports
//! - `shares`: Standalone percentage-distribution utility
//! - `fixtures`: Random market fixture generation
//! - `utils`: Shared decimal helpers and timing instrumentation

pub mod config;
pub mod error;
pub mod fixtures;
pub mod input;
pub mod pipeline;
pub mod pricing;
pub mod report;
pub mod shares;
pub mod strategy;
pub mod utils;

pub use config::Config;
pub use error::ValidationError;
