//! Planar floating-point representation of an image,
//! used as the intermediate format for filtering.
//!
//! Samples keep their raw values: a `u8` sample of 200 becomes `200.0`, not `0.78`.
//! This way casting back to the original type is just rounding and clamping.

use image::{ColorType, DynamicImage, ImageBuffer, Luma, LumaA, Pixel, Rgb, Rgba};
use strum::Display;

use crate::{error::WmError, wm_err};

/// Numeric representation of a single channel value
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum SampleType {
    U8,
    U16,
    F32,
}

/// Conversion of channel values to and from the `f32` working representation
trait Sample: Copy {
    const TYPE: SampleType;
    fn as_float(self) -> f32;
    fn from_float(value: f32) -> Self;
}

impl Sample for u8 {
    const TYPE: SampleType = SampleType::U8;

    #[inline]
    fn as_float(self) -> f32 {
        self as f32
    }

    #[inline]
    fn from_float(value: f32) -> Self {
        // float to int `as` casts saturate, and map NaN to 0
        value.round() as u8
    }
}

impl Sample for u16 {
    const TYPE: SampleType = SampleType::U16;

    #[inline]
    fn as_float(self) -> f32 {
        self as f32
    }

    #[inline]
    fn from_float(value: f32) -> Self {
        value.round() as u16
    }
}

impl Sample for f32 {
    const TYPE: SampleType = SampleType::F32;

    #[inline]
    fn as_float(self) -> f32 {
        self
    }

    #[inline]
    fn from_float(value: f32) -> Self {
        value
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatImage {
    width: u32,
    height: u32,
    /// Sample type of the image the planes were taken from
    sample_type: SampleType,
    /// One row-major plane per channel
    planes: Vec<Vec<f32>>,
}

impl FloatImage {
    /// Splits the image into one `f32` plane per channel.
    /// Also returns the original color type so that the result can be cast back into it.
    pub fn from_dynamic(image: &DynamicImage) -> Result<(Self, ColorType), WmError> {
        use DynamicImage::*;
        let planes = match image {
            ImageLuma8(pixels) => Self::from_buffer(pixels),
            ImageLumaA8(pixels) => Self::from_buffer(pixels),
            ImageRgb8(pixels) => Self::from_buffer(pixels),
            ImageRgba8(pixels) => Self::from_buffer(pixels),
            ImageLuma16(pixels) => Self::from_buffer(pixels),
            ImageLumaA16(pixels) => Self::from_buffer(pixels),
            ImageRgb16(pixels) => Self::from_buffer(pixels),
            ImageRgba16(pixels) => Self::from_buffer(pixels),
            ImageRgb32F(pixels) => Self::from_buffer(pixels),
            ImageRgba32F(pixels) => Self::from_buffer(pixels),
            other => {
                return Err(wm_err!(
                    "unsupported pixel format {:?}",
                    other.color()
                ))
            }
        };
        Ok((planes, image.color()))
    }

    fn from_buffer<P>(buffer: &ImageBuffer<P, Vec<P::Subpixel>>) -> Self
    where
        P: Pixel,
        P::Subpixel: Sample,
    {
        let channels = P::CHANNEL_COUNT as usize;
        let pixel_count = buffer.width() as usize * buffer.height() as usize;
        let mut planes = vec![Vec::with_capacity(pixel_count); channels];
        for pixel in buffer.as_raw().chunks_exact(channels) {
            for (plane, sample) in planes.iter_mut().zip(pixel) {
                plane.push(sample.as_float());
            }
        }
        Self {
            width: buffer.width(),
            height: buffer.height(),
            sample_type: P::Subpixel::TYPE,
            planes,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn sample_type(&self) -> SampleType {
        self.sample_type
    }

    pub fn channel_count(&self) -> usize {
        self.planes.len()
    }

    pub fn planes_mut(&mut self) -> impl Iterator<Item = &mut [f32]> {
        self.planes.iter_mut().map(|plane| plane.as_mut_slice())
    }

    /// Casts back to the given color type,
    /// rounding to the nearest value and clamping to the range of integer types.
    pub fn cast_to(&self, color: ColorType) -> Result<DynamicImage, WmError> {
        if color.channel_count() as usize != self.channel_count() {
            return Err(wm_err!(
                "cannot cast {} channels to {:?}",
                self.channel_count(),
                color
            ));
        }

        use DynamicImage::*;
        let image = match color {
            ColorType::L8 => ImageLuma8(self.to_buffer::<Luma<u8>>()?),
            ColorType::La8 => ImageLumaA8(self.to_buffer::<LumaA<u8>>()?),
            ColorType::Rgb8 => ImageRgb8(self.to_buffer::<Rgb<u8>>()?),
            ColorType::Rgba8 => ImageRgba8(self.to_buffer::<Rgba<u8>>()?),
            ColorType::L16 => ImageLuma16(self.to_buffer::<Luma<u16>>()?),
            ColorType::La16 => ImageLumaA16(self.to_buffer::<LumaA<u16>>()?),
            ColorType::Rgb16 => ImageRgb16(self.to_buffer::<Rgb<u16>>()?),
            ColorType::Rgba16 => ImageRgba16(self.to_buffer::<Rgba<u16>>()?),
            ColorType::Rgb32F => ImageRgb32F(self.to_buffer::<Rgb<f32>>()?),
            ColorType::Rgba32F => ImageRgba32F(self.to_buffer::<Rgba<f32>>()?),
            other => return Err(wm_err!("unsupported pixel format {other:?}")),
        };
        Ok(image)
    }

    fn to_buffer<P>(&self) -> Result<ImageBuffer<P, Vec<P::Subpixel>>, WmError>
    where
        P: Pixel,
        P::Subpixel: Sample,
    {
        let pixel_count = self.width as usize * self.height as usize;
        let mut raw = Vec::with_capacity(pixel_count * self.channel_count());
        for i in 0..pixel_count {
            for plane in &self.planes {
                raw.push(P::Subpixel::from_float(plane[i]));
            }
        }
        ImageBuffer::from_raw(self.width, self.height, raw)
            .ok_or_else(|| wm_err!("pixel buffer does not match image dimensions"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, GrayImage, Rgb32FImage, Rgba32FImage, RgbImage};

    #[test]
    fn sample_types() {
        let expected = [
            (DynamicImage::ImageLumaA8(GrayAlphaImage::new(1, 1)), SampleType::U8),
            (DynamicImage::ImageRgb16(ImageBuffer::new(1, 1)), SampleType::U16),
            (DynamicImage::ImageRgba32F(Rgba32FImage::new(1, 1)), SampleType::F32),
        ];
        for (img, sample_type) in expected {
            let (float, _) = FloatImage::from_dynamic(&img).unwrap();
            assert_eq!(float.sample_type(), sample_type);
        }
        assert_eq!(SampleType::U16.to_string(), "u16");
    }

    #[test]
    fn raw_values_are_kept() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([200, 0, 7])));
        let (float, color) = FloatImage::from_dynamic(&img).unwrap();
        assert_eq!(color, ColorType::Rgb8);
        assert_eq!(float.channel_count(), 3);
        assert_eq!(float.planes[0], vec![200.0; 4]);
        assert_eq!(float.planes[1], vec![0.0; 4]);
        assert_eq!(float.planes[2], vec![7.0; 4]);
    }

    #[test]
    fn round_trip_preserves_every_supported_type() {
        let base = DynamicImage::ImageRgba8(image::RgbaImage::from_fn(5, 3, |x, y| {
            image::Rgba([x as u8 * 40, y as u8 * 80, 3, 255 - x as u8])
        }));
        let variants = [
            DynamicImage::ImageLuma8(base.to_luma8()),
            DynamicImage::ImageLumaA8(base.to_luma_alpha8()),
            DynamicImage::ImageRgb8(base.to_rgb8()),
            base.clone(),
            DynamicImage::ImageLuma16(base.to_luma16()),
            DynamicImage::ImageLumaA16(base.to_luma_alpha16()),
            DynamicImage::ImageRgb16(base.to_rgb16()),
            DynamicImage::ImageRgba16(base.to_rgba16()),
            DynamicImage::ImageRgb32F(base.to_rgb32f()),
            DynamicImage::ImageRgba32F(base.to_rgba32f()),
        ];
        for img in variants {
            let (float, color) = FloatImage::from_dynamic(&img).unwrap();
            let back = float.cast_to(color).unwrap();
            assert_eq!(back, img, "{color:?} did not survive the round trip");
        }
    }

    #[test]
    fn integer_cast_rounds_and_saturates() {
        let float = FloatImage {
            width: 5,
            height: 1,
            sample_type: SampleType::F32,
            planes: vec![vec![-20.0, 0.4, 99.5, 254.6, 1000.0]],
        };
        let img = float.cast_to(ColorType::L8).unwrap();
        assert_eq!(img.as_luma8().unwrap().as_raw(), &vec![0, 0, 100, 255, 255]);

        let img = float.cast_to(ColorType::L16).unwrap();
        assert_eq!(img.as_luma16().unwrap().as_raw(), &vec![0, 0, 100, 255, 1000]);
    }

    #[test]
    fn float_cast_is_not_clamped() {
        let float = FloatImage {
            width: 1,
            height: 1,
            sample_type: SampleType::F32,
            planes: vec![vec![-0.5], vec![1.5], vec![0.25]],
        };
        let img = float.cast_to(ColorType::Rgb32F).unwrap();
        let expected = Rgb32FImage::from_pixel(1, 1, Rgb([-0.5, 1.5, 0.25]));
        assert_eq!(img.as_rgb32f().unwrap(), &expected);
    }

    #[test]
    fn channel_mismatch_is_an_error() {
        let img = DynamicImage::ImageLuma8(GrayImage::new(2, 2));
        let (float, _) = FloatImage::from_dynamic(&img).unwrap();
        assert!(float.cast_to(ColorType::Rgb8).is_err());
    }

    #[test]
    fn empty_image() {
        let img = DynamicImage::ImageLuma8(GrayImage::new(0, 0));
        let (float, color) = FloatImage::from_dynamic(&img).unwrap();
        assert_eq!(float.cast_to(color).unwrap(), img);
    }
}
