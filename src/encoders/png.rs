use std::io::Write;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};

use crate::encoders::common::write_icc_and_exif;
use crate::{error::WmError, image::Image, wm_try};

/// Writes the pixels as-is.
///
/// Unlike `wm-convert` this does not shrink the pixel format even when it would be lossless,
/// because the output must keep the input's sample type.
pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<(), WmError> {
    let mut encoder =
        PngEncoder::new_with_quality(writer, CompressionType::Default, FilterType::Adaptive);
    write_icc_and_exif(&mut encoder, image);
    Ok(wm_try!(image.pixels.write_with_encoder(encoder)))
}
