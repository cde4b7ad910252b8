use std::fmt::{Debug, Display};
pub struct WmError(pub String);

impl Display for WmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for WmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("WmError").field(&self.0).finish()
    }
}

impl std::error::Error for WmError {}

/// Builds a [`WmError`] from format arguments, tagged with the source location.
#[macro_export]
macro_rules! wm_err {
    ($($arg:tt)*) => {
        $crate::error::WmError(format!(
            "wm-gaussian: {} @ {}:{}:{}",
            format_args!($($arg)*),
            file!(),
            line!(),
            column!()
        ))
    };
}

/// Like `?`, but converts any displayable error into a [`WmError`].
#[macro_export]
macro_rules! wm_try {
    ($expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::wm_err!("{}", err));
            }
        }
    };
}
