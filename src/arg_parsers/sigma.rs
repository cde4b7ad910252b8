use std::fmt::Display;
use std::str::FromStr;

use crate::{arg_parse_err::ArgParseErr, arg_parsers::parse_finite_float};

/// Standard deviation of the Gaussian, in physical units.
///
/// Zero is allowed and disables smoothing.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Sigma(f64);

impl Sigma {
    pub fn new(value: f64) -> Result<Self, ArgParseErr> {
        if !value.is_finite() {
            Err(ArgParseErr::with_msg("sigma must be a finite number"))
        } else if value.is_sign_negative() && value != 0.0 {
            Err(ArgParseErr::with_msg("sigma cannot be negative"))
        } else {
            // normalizes -0.0 to 0.0
            Ok(Self(value.abs()))
        }
    }

    pub fn get(&self) -> f64 {
        self.0
    }

    /// Converts to pixel units along an axis with the given pixel spacing
    pub fn in_pixels(&self, spacing: f64) -> f64 {
        self.0 / spacing
    }
}

impl Display for Sigma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Sigma {
    type Err = ArgParseErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_finite_float(s)?)
    }
}
