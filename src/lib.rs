pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod utils;

pub use engine::RiskScorer;
pub use error::types::*;
