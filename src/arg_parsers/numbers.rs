use crate::arg_parse_err::ArgParseErr;

/// Strips leading and trailing whitespace and parses the rest as a float.
///
/// Rust happily parses `inf` and `NaN`, neither of which is a usable
/// filter parameter, so those are rejected here.
pub fn parse_finite_float(input: &str) -> Result<f64, ArgParseErr> {
    let value: f64 = input.trim().parse()?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ArgParseErr::with_msg("value must be a finite number"))
    }
}
