use std::path::Path;

use image::{DynamicImage, ImageDecoder, ImageReader};

use crate::{error::WmError, image::Image, wm_err, wm_try};

/// Reads the image at `file`, guessing the format from the file contents.
///
/// ICC profile and Exif are kept so that they can be written back out.
pub fn decode(file: &Path) -> Result<Image, WmError> {
    let reader = ImageReader::open(file)
        .map_err(|error| wm_err!("unable to open image `{}': {error}", file.display()))?;
    let reader = wm_try!(reader.with_guessed_format());
    let format = reader.format();
    let mut decoder = reader
        .into_decoder()
        .map_err(|error| wm_err!("no decode delegate for `{}': {error}", file.display()))?;
    let icc = wm_try!(decoder.icc_profile());
    let exif = wm_try!(decoder.exif_metadata());
    let pixels = wm_try!(DynamicImage::from_decoder(decoder));
    log::debug!(
        "decoded {} as {:?}: {}x{} {:?}",
        file.display(),
        format,
        pixels.width(),
        pixels.height(),
        pixels.color()
    );
    Ok(Image {
        format,
        exif,
        icc,
        pixels,
    })
}
