#![no_main]

use std::num::NonZeroU8;

use arbitrary::Unstructured;
use image::{DynamicImage, GrayImage, ImageBuffer, Luma};
use libfuzzer_sys::fuzz_target;
use wondermagick_gaussian::{
    arg_parsers::{Sigma, Spacing},
    image::Image,
    operations::{recursive_gaussian::MAX_SIGMA_PIXELS, smooth},
};

#[derive(Debug)]
struct StructuredImage {
    width: NonZeroU8,
    height: NonZeroU8,
    luma_data: Vec<u8>,
}

impl<'a> arbitrary::Arbitrary<'a> for StructuredImage {
    fn arbitrary(unstructured: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let width: NonZeroU8 = unstructured.arbitrary()?;
        let height: NonZeroU8 = unstructured.arbitrary()?;
        let luma_data_len = width.get() as usize * height.get() as usize;
        let luma_data = unstructured.bytes(luma_data_len)?;

        Ok(Self {
            width,
            height,
            luma_data: luma_data.to_vec(),
        })
    }
}

impl StructuredImage {
    fn to_luma8(&self) -> GrayImage {
        ImageBuffer::from_fn(self.width.get() as u32, self.height.get() as u32, |x, y| {
            Luma([self.luma_data[(y * self.width.get() as u32 + x) as usize]])
        })
    }
}

fuzz_target!(|input: (StructuredImage, f64, u8, u8)| {
    let (structured, sigma, spacing_x, spacing_y) = input;
    let Ok(sigma) = Sigma::new(sigma) else {
        return;
    };
    let spacing = Spacing {
        x: (spacing_x as f64 + 8.0) / 16.0,
        y: (spacing_y as f64 + 8.0) / 16.0,
    };
    let too_large = sigma.in_pixels(spacing.x.min(spacing.y)) > MAX_SIGMA_PIXELS;

    let pixels = structured.to_luma8();
    let min = *pixels.iter().min().expect("image is not empty");
    let max = *pixels.iter().max().expect("image is not empty");

    let mut image = Image::new(DynamicImage::ImageLuma8(pixels.clone()));
    if let Err(err) = smooth(&mut image, sigma, spacing) {
        assert!(too_large, "{err}");
        return;
    }
    assert!(!too_large);

    // Contract: same shape and pixel type
    let output = image.pixels.as_luma8().expect("pixel type changed");
    assert_eq!(output.dimensions(), pixels.dimensions());

    // The kernel has tiny negative lobes, so allow a little overshoot
    for &value in output.iter() {
        assert!(value as i32 >= min as i32 - 2 && value as i32 <= max as i32 + 2);
    }
});
