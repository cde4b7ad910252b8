//! Recursive (IIR) approximation of Gaussian convolution.
//!
//! This is Deriche's 4th-order filter: a causal pass running forward over a line
//! and an anti-causal pass running backward, summed together.
//! The cost per sample is constant regardless of sigma,
//! unlike a convolution with a sampled kernel.
//!
//! Reference: R. Deriche, "Recursively implementing the Gaussian and its derivatives",
//! INRIA research report 1893, 1993.

// Fitted constants for the Gaussian, from Deriche's paper
const A0: f64 = 1.680;
const A1: f64 = 3.735;
const B0: f64 = 1.783;
const W0: f64 = 0.6318;
const C0: f64 = -0.6803;
const C1: f64 = -0.2598;
const B1: f64 = 1.723;
const W1: f64 = 1.997;

/// Below this many pixels the kernel is a unit impulse to within `f32` precision,
/// and much smaller values overflow the coefficient math.
/// Axes with a smaller sigma are left untouched.
pub const MIN_SIGMA_PIXELS: f64 = 1e-3;

/// Above this many pixels the poles get so close to 1 that
/// the 4th-order recursion can no longer be evaluated accurately in `f64`.
pub const MAX_SIGMA_PIXELS: f64 = 1e3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DericheCoefficients {
    /// Causal numerator
    n: [f64; 4],
    /// Anti-causal numerator, applied to x[k+1]..x[k+4]
    m: [f64; 4],
    /// Denominator shared by both passes
    d: [f64; 4],
    /// Response of the anti-causal pass to a constant signal of 1.0
    anticausal_gain: f64,
}

impl DericheCoefficients {
    /// `sigma` is in pixels, within `MIN_SIGMA_PIXELS..=MAX_SIGMA_PIXELS`.
    pub fn new(sigma: f64) -> Self {
        debug_assert!((MIN_SIGMA_PIXELS..=MAX_SIGMA_PIXELS).contains(&sigma));

        let (sin0, cos0) = (W0 / sigma).sin_cos();
        let (sin1, cos1) = (W1 / sigma).sin_cos();
        let e0 = (-B0 / sigma).exp();
        let e1 = (-B1 / sigma).exp();

        let n0 = A0 + C0;
        let n1 = e1 * (C1 * sin1 - (C0 + 2.0 * A0) * cos1)
            + e0 * (A1 * sin0 - (2.0 * C0 + A0) * cos0);
        let n2 = 2.0 * e0 * e1 * ((A0 + C0) * cos1 * cos0 - A1 * cos1 * sin0 - C1 * cos0 * sin1)
            + C0 * e0 * e0
            + A0 * e1 * e1;
        let n3 = e1 * e0 * e0 * (C1 * sin1 - C0 * cos1) + e0 * e1 * e1 * (A1 * sin0 - A0 * cos0);

        let d1 = -2.0 * e1 * cos1 - 2.0 * e0 * cos0;
        let d2 = 4.0 * cos1 * cos0 * e0 * e1 + e1 * e1 + e0 * e0;
        let d3 = -2.0 * cos0 * e0 * e1 * e1 - 2.0 * cos1 * e1 * e0 * e0;
        let d4 = e0 * e0 * e1 * e1;

        let n = [n0, n1, n2, n3];
        let d = [d1, d2, d3, d4];
        // the impulse response is symmetric, so the anti-causal side
        // mirrors the causal one minus the shared center tap
        let m = [n1 - d1 * n0, n2 - d2 * n0, n3 - d3 * n0, -d4 * n0];

        let denominator = 1.0 + d.iter().sum::<f64>();
        let causal_sum = n.iter().sum::<f64>() / denominator;
        let anticausal_sum = m.iter().sum::<f64>() / denominator;

        // Scale the numerators so that the whole kernel sums to exactly 1,
        // otherwise flat regions drift in brightness.
        let scale = 1.0 / (causal_sum + anticausal_sum);
        Self {
            n: n.map(|c| c * scale),
            m: m.map(|c| c * scale),
            d,
            anticausal_gain: anticausal_sum * scale,
        }
    }

    /// Filters a single line of samples.
    ///
    /// `scratch` and `output` must be the same length as `input`.
    /// Samples beyond either end are treated as copies of the edge sample,
    /// and both recursions start from their steady state for that value.
    pub fn filter_line(&self, input: &[f32], scratch: &mut [f64], output: &mut [f32]) {
        debug_assert_eq!(input.len(), scratch.len());
        debug_assert_eq!(input.len(), output.len());
        let (Some(&first), Some(&last)) = (input.first(), input.last()) else {
            return;
        };
        let [n0, n1, n2, n3] = self.n;
        let [m1, m2, m3, m4] = self.m;
        let [d1, d2, d3, d4] = self.d;

        // The kernel sums to 1, so the recursions run on the difference from the first sample.
        // Flat runs are then exactly zero and rounding error does not build up on large sigmas.
        let offset = first as f64;

        // causal pass: x1..x3 are x[k-1]..x[k-3], y1..y4 are y[k-1]..y[k-4]
        let (mut x1, mut x2, mut x3) = (0.0, 0.0, 0.0);
        let (mut y1, mut y2, mut y3, mut y4) = (0.0, 0.0, 0.0, 0.0);
        for (&x0, y) in input.iter().zip(scratch.iter_mut()) {
            let x0 = x0 as f64 - offset;
            let y0 = n0 * x0 + n1 * x1 + n2 * x2 + n3 * x3 - d1 * y1 - d2 * y2 - d3 * y3 - d4 * y4;
            *y = y0;
            (x3, x2, x1) = (x2, x1, x0);
            (y4, y3, y2, y1) = (y3, y2, y1, y0);
        }

        // anti-causal pass: x1..x4 are x[k+1]..x[k+4], y1..y4 are y[k+1]..y[k+4]
        let last = last as f64 - offset;
        let (mut x1, mut x2, mut x3, mut x4) = (last, last, last, last);
        let steady = last * self.anticausal_gain;
        let (mut y1, mut y2, mut y3, mut y4) = (steady, steady, steady, steady);
        for ((&x0, &causal), out) in input
            .iter()
            .zip(scratch.iter())
            .zip(output.iter_mut())
            .rev()
        {
            let y0 = m1 * x1 + m2 * x2 + m3 * x3 + m4 * x4 - d1 * y1 - d2 * y2 - d3 * y3 - d4 * y4;
            *out = (causal + y0 + offset) as f32;
            (x4, x3, x2, x1) = (x3, x2, x1, x0 as f64 - offset);
            (y4, y3, y2, y1) = (y3, y2, y1, y0);
        }
    }
}

/// Smooths a single row-major plane in place, first along x and then along y.
///
/// A sigma below `MIN_SIGMA_PIXELS`, zero included, leaves that axis untouched.
/// Sigmas above `MAX_SIGMA_PIXELS` must be rejected by the caller.
pub fn smooth_plane(plane: &mut [f32], width: usize, height: usize, sigma_x: f64, sigma_y: f64) {
    debug_assert_eq!(plane.len(), width * height);
    if width == 0 || height == 0 {
        return;
    }

    if sigma_x >= MIN_SIGMA_PIXELS {
        let coefficients = DericheCoefficients::new(sigma_x);
        let mut line = vec![0.0; width];
        let mut scratch = vec![0.0; width];
        for row in plane.chunks_exact_mut(width) {
            line.copy_from_slice(row);
            coefficients.filter_line(&line, &mut scratch, row);
        }
    }

    if sigma_y >= MIN_SIGMA_PIXELS {
        let coefficients = DericheCoefficients::new(sigma_y);
        let mut line = vec![0.0; height];
        let mut scratch = vec![0.0; height];
        let mut filtered = vec![0.0; height];
        for x in 0..width {
            for (y, sample) in line.iter_mut().enumerate() {
                *sample = plane[y * width + x];
            }
            coefficients.filter_line(&line, &mut scratch, &mut filtered);
            for (y, sample) in filtered.iter().enumerate() {
                plane[y * width + x] = *sample;
            }
        }
    }
}
