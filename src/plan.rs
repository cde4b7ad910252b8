use std::path::PathBuf;
use std::time::Instant;

use crate::arg_parsers::{Sigma, Spacing};
use crate::decode::decode;
use crate::encode::{encode, output_format};
use crate::error::WmError;
use crate::operations::smooth;

/// Everything needed to smooth a single file
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothingPlan {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub sigma: Sigma,
    pub spacing: Spacing,
}

impl SmoothingPlan {
    /// Reads the input, smooths it, restores its pixel format and writes it out.
    ///
    /// The output format is resolved first, so that a bad output name
    /// is reported without touching either file.
    pub fn execute(&self) -> Result<(), WmError> {
        let format = output_format(&self.output_file)?;
        crate::init::init();

        let start = Instant::now();
        let mut image = decode(&self.input_file)?;
        log::info!(
            "read {} ({:?}, {:?}, {}x{})",
            self.input_file.display(),
            image.format,
            image.pixels.color(),
            image.pixels.width(),
            image.pixels.height()
        );
        log::debug!("decoding took {:?}", start.elapsed());

        let start = Instant::now();
        smooth(&mut image, self.sigma, self.spacing)?;
        log::debug!("smoothing took {:?}", start.elapsed());

        let start = Instant::now();
        encode(&image, &self.output_file, format)?;
        log::info!("wrote {} as {format:?}", self.output_file.display());
        log::debug!("encoding took {:?}", start.elapsed());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GrayImage, ImageBuffer, Luma};
    use std::path::Path;

    fn plan(input: &Path, output: &Path, sigma: f64) -> SmoothingPlan {
        SmoothingPlan {
            input_file: input.to_owned(),
            output_file: output.to_owned(),
            sigma: Sigma::new(sigma).unwrap(),
            spacing: Spacing::default(),
        }
    }

    #[test]
    fn smooths_a_sixteen_bit_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.tiff");
        let pixels: ImageBuffer<Luma<u16>, Vec<u16>> =
            ImageBuffer::from_fn(16, 16, |x, _| Luma([if x < 8 { 1000 } else { 60000 }]));
        pixels.save(&input).unwrap();

        plan(&input, &output, 2.0).execute().unwrap();

        let result = image::open(&output).unwrap();
        assert_eq!(result.color(), image::ColorType::L16);
        assert_eq!((result.width(), result.height()), (16, 16));
        let result = result.to_luma16();
        // the edge got blurred, the far ends did not move much
        assert!(result.get_pixel(7, 0)[0] > 1000);
        assert!(result.get_pixel(8, 0)[0] < 60000);
        assert!(result.get_pixel(0, 0)[0].abs_diff(1000) < 1000);
    }

    #[test]
    fn missing_input_creates_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.png");
        let result = plan(&dir.path().join("nope.png"), &output, 1.0).execute();
        assert!(result.is_err());
        assert!(!output.exists());
    }

    #[test]
    fn bad_output_extension_is_reported_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        // the input does not exist either, but the output name is checked first
        let err = plan(&dir.path().join("nope.png"), &dir.path().join("out.nope"), 1.0)
            .execute()
            .unwrap_err();
        assert!(err.to_string().contains("no encode delegate"));
    }

    #[test]
    fn zero_sigma_reproduces_the_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        let pixels = GrayImage::from_fn(5, 5, |x, y| Luma([(x * 50 + y) as u8]));
        pixels.save(&input).unwrap();

        plan(&input, &output, 0.0).execute().unwrap();
        assert_eq!(image::open(&output).unwrap(), DynamicImage::ImageLuma8(pixels));
    }
}
