pub mod float_image;
pub mod recursive_gaussian;
mod smooth;

pub use smooth::smooth;
