use image::{DynamicImage, ImageFormat};

/// A decoded image along with the metadata we carry through to the output
#[derive(Debug, Clone)]
pub struct Image {
    /// Format detected from the input file contents, kept for logging.
    /// The output format comes from the output file name instead.
    pub format: Option<ImageFormat>,
    pub exif: Option<Vec<u8>>,
    pub icc: Option<Vec<u8>>,
    pub pixels: DynamicImage,
}

impl Image {
    pub fn new(pixels: DynamicImage) -> Self {
        Self {
            format: None,
            exif: None,
            icc: None,
            pixels,
        }
    }
}
