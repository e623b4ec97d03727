pub mod classify;
pub mod controls;
pub mod inherent;
pub mod residual;
pub mod scorer;
pub mod validation;

pub use classify::*;
pub use controls::*;
pub use inherent::*;
pub use residual::*;
pub use scorer::*;
pub use validation::*;

/// Bounds of the 1–5 probability/impact scale.
pub const SCALE_MIN: f64 = 1.0;
pub const SCALE_MAX: f64 = 5.0;
