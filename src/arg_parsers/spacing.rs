use std::fmt::Display;
use std::str::FromStr;

use crate::{arg_parse_err::ArgParseErr, arg_parsers::parse_finite_float};

/// Physical size of a pixel along each axis, written as `X` or `XxY`.
///
/// A single value applies to both axes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Spacing {
    pub x: f64,
    pub y: f64,
}

impl Default for Spacing {
    fn default() -> Self {
        Self { x: 1.0, y: 1.0 }
    }
}

impl Display for Spacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

impl FromStr for Spacing {
    type Err = ArgParseErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || s.is_empty() {
            return Err(ArgParseErr::new());
        }

        let parts: Vec<&str> = s.split('x').collect();
        let (x, y) = match parts.as_slice() {
            [both] => {
                let value = parse_component(both)?;
                (value, value)
            }
            [x, y] => (parse_component(x)?, parse_component(y)?),
            _ => return Err(ArgParseErr::with_msg("expected spacing in the form X or XxY")),
        };
        Ok(Self { x, y })
    }
}

fn parse_component(s: &str) -> Result<f64, ArgParseErr> {
    let value = parse_finite_float(s)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ArgParseErr::with_msg("spacing must be greater than zero"))
    }
}
