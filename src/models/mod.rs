pub mod control;
pub mod risk_factors;
pub mod validation;

pub use control::*;
pub use risk_factors::*;
pub use validation::*;
