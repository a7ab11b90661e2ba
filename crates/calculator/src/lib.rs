//! Decking material calculator.
//!
//! Turns a rectangular area (centimeters) and a selected board into the number
//! of boards to buy and their price. Pure, deterministic logic (no IO).

pub mod calculator;
pub mod estimate;
pub mod input;

pub use calculator::{CartRequest, Calculator, CalculatorState};
pub use estimate::{estimate, format_area, CalculationResult};
pub use input::{parse_centimeters, CalculatorInput};
