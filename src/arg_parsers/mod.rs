//! Parsers for the values of command-line arguments.

mod numbers;
pub use numbers::*;
mod sigma;
pub use sigma::*;
mod spacing;
pub use spacing::*;
