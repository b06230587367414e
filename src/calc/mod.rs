//! Commission calculation: input/output bundles, tier formulas, and the engine

mod engine;
mod input;
mod output;
pub mod persistency;
pub mod settlement;

pub use engine::CommissionEngine;
pub use input::CalcInput;
pub use output::CalcOutput;
pub use persistency::persistency_multiplier;
pub use settlement::{settlement_support, SETTLEMENT_CAP, SETTLEMENT_FLOOR};
