//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_eval_result, print_round_over};
pub use formatters::{colored_row, feedback_to_emoji};
