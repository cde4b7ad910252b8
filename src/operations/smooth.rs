use crate::{
    arg_parsers::{Sigma, Spacing},
    error::WmError,
    image::Image,
    operations::{
        float_image::FloatImage,
        recursive_gaussian::{smooth_plane, MAX_SIGMA_PIXELS, MIN_SIGMA_PIXELS},
    },
    wm_err,
};

/// Applies recursive Gaussian smoothing to every channel of the image,
/// then casts the result back to the pixel format it started out in.
pub fn smooth(image: &mut Image, sigma: Sigma, spacing: Spacing) -> Result<(), WmError> {
    let sigma_x = sigma_in_pixels(sigma, spacing.x, 'x')?;
    let sigma_y = sigma_in_pixels(sigma, spacing.y, 'y')?;
    let (mut planes, color) = FloatImage::from_dynamic(&image.pixels)?;
    log::info!(
        "smoothing {}x{} {color:?} image ({} samples) with sigma {sigma} at spacing {spacing}",
        planes.width(),
        planes.height(),
        planes.sample_type(),
    );
    log::debug!("sigma in pixels: {sigma_x} along x, {sigma_y} along y");

    if sigma_x == 0.0 && sigma_y == 0.0 {
        log::info!("sigma is below {MIN_SIGMA_PIXELS} pixels, leaving pixels unchanged");
        return Ok(());
    }

    let width = planes.width() as usize;
    let height = planes.height() as usize;
    for plane in planes.planes_mut() {
        smooth_plane(plane, width, height, sigma_x, sigma_y);
    }

    image.pixels = planes.cast_to(color)?;
    Ok(())
}

/// Sigma along one axis, in pixels.
/// Sigmas too small to have any effect come out as zero.
fn sigma_in_pixels(sigma: Sigma, spacing: f64, axis: char) -> Result<f64, WmError> {
    let pixels = sigma.in_pixels(spacing);
    if !pixels.is_finite() || pixels > MAX_SIGMA_PIXELS {
        return Err(wm_err!(
            "sigma {sigma} at spacing {spacing} is {pixels} pixels along {axis}, the limit is {MAX_SIGMA_PIXELS}"
        ));
    }
    Ok(if pixels < MIN_SIGMA_PIXELS { 0.0 } else { pixels })
}
