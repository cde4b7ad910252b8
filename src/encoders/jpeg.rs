use std::io::Write;

use image::codecs::jpeg::JpegEncoder;
use image::ImageEncoder;

use crate::{error::WmError, image::Image, wm_try};

/// Matches imagemagick's default when the input quality is unknown
const DEFAULT_QUALITY: u8 = 92;

pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<(), WmError> {
    let mut encoder = JpegEncoder::new_with_quality(writer, DEFAULT_QUALITY);
    if let Some(icc) = image.icc.clone() {
        let _ = encoder.set_icc_profile(icc); // ignore UnsupportedError
    };
    Ok(wm_try!(image.pixels.write_with_encoder(encoder)))
}
