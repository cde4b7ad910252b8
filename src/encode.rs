use std::{
    ffi::OsStr,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::ImageFormat;

use crate::{encoders, error::WmError, image::Image, wm_err, wm_try};

/// Determines the output format from the file extension.
///
/// There is no fallback to the input format: an output file whose extension
/// doesn't name a format we can write is rejected before anything is created.
pub fn output_format(path: &Path) -> Result<ImageFormat, WmError> {
    match ImageFormat::from_path(path) {
        Ok(format) if format.writing_enabled() => Ok(format),
        _ => {
            // a missing extension is reported as an empty one
            let extension = path.extension().unwrap_or(OsStr::new(""));
            Err(wm_err!(
                "no encode delegate for this image format `{}'",
                extension.to_ascii_uppercase().to_string_lossy()
            ))
        }
    }
}

/// Writes the image to `path` in the given format.
///
/// If encoding fails, the partially written file is removed.
pub fn encode(image: &Image, path: &Path, format: ImageFormat) -> Result<(), WmError> {
    // `File::create` automatically truncates (overwrites) the file if it exists.
    let file = File::create(path)
        .map_err(|error| wm_err!("unable to open image `{}': {error}", path.display()))?;

    let result = encode_inner(image, BufWriter::new(file), format);
    if result.is_err() {
        if let Err(error) = std::fs::remove_file(path) {
            log::warn!("failed to clean up `{}': {error}", path.display());
        }
    }
    result
}

fn encode_inner(
    image: &Image,
    mut writer: BufWriter<File>,
    format: ImageFormat,
) -> Result<(), WmError> {
    match format {
        #[cfg(feature = "png")]
        ImageFormat::Png => encoders::png::encode(image, &mut writer)?,
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => encoders::jpeg::encode(image, &mut writer)?,
        #[cfg(feature = "tiff")]
        ImageFormat::Tiff => encoders::tiff::encode(image, &mut writer)?,
        // TODO: carry ICC and Exif through the remaining formats once `image`
        // exposes metadata setters on its generic writing path.
        _ => wm_try!(image.pixels.write_to(&mut writer, format)),
    }

    // Flush the buffers to write everything to disk.
    // The buffers will be flushed automatically when the writer goes out of scope,
    // but that will not report any errors. This handles errors.
    wm_try!(writer.flush());
    Ok(())
}
