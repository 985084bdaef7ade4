//! Post-resize sharpening: the three-tap unsharp pass and the generalized
//! symmetric convolution kernel.

use crate::error::ResizeError;

/// Three-tap unsharp in float space, one row, in place.
///
/// `pct` is clamped to `(0, 0.5]`; endpoints are left untouched. The
/// pre-update `left` value is held in a scalar so later pixels don't read an
/// already-sharpened neighbor.
pub fn sharpen_row_in_place(row: &mut [f32], channels: usize, pct: f64) {
    if pct <= 0.0 {
        return;
    }
    let pct = pct.min(0.5);
    let n = -pct / (pct - 1.0);
    let c_outer = (n / -2.0) as f32;
    let c_inner = (n + 1.0) as f32;

    let pixel_count = row.len() / channels;
    if pixel_count < 3 {
        return;
    }

    for c in 0..channels {
        let mut prev = row[c];
        for p in 1..pixel_count - 1 {
            let idx = p * channels + c;
            let left = prev;
            let center = row[idx];
            let right = row[idx + channels];
            prev = center;
            row[idx] = c_outer * left + c_inner * center + c_outer * right;
        }
    }
}

/// Gaussian-derived symmetric kernel weights of radius `r`, normalized so
/// the positive (center) lobe sums to `1 + amount` and the negative outer
/// taps sum to `-amount`.
fn build_kernel(radius: u32, sigma: f64, amount: f64) -> Vec<f64> {
    let r = radius as i64;
    let mut weights: Vec<f64> = (-r..=r)
        .map(|x| {
            let x = x as f64;
            (-x * x / (2.0 * sigma * sigma)).exp() / (sigma * (2.0 * std::f64::consts::PI).sqrt())
        })
        .collect();
    let center = r as usize;
    let outer_sum: f64 = weights
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != center)
        .map(|(_, w)| *w)
        .sum();
    if outer_sum > 0.0 {
        let scale = amount / outer_sum;
        for (i, w) in weights.iter_mut().enumerate() {
            if i != center {
                *w = -(*w * scale);
            }
        }
    }
    weights[center] = 1.0 + amount;
    weights
}

/// Derive the `amount` a percent-style sharpen knob maps to, the same way
/// the three-tap pass derives `n` from `pct`.
fn amount_from_percent(pct: f64) -> f64 {
    if pct <= 0.0 {
        return 0.0;
    }
    let pct = pct.min(0.5);
    -pct / (pct - 1.0) - 1.0
}

/// Apply the generalized kernel to one row, one channel at a time, gated by
/// `kernel_threshold`: a convolved value only replaces the original when
/// `|delta| >= kernel_threshold`.
pub fn convolve_row_in_place(
    row: &mut [f32],
    channels: usize,
    radius: u32,
    sigma: f64,
    percent: f64,
    threshold: f64,
) -> Result<(), ResizeError> {
    if radius == 0 || percent <= 0.0 {
        return Ok(());
    }
    let pixel_count = row.len() / channels;
    let r = radius as usize;
    if pixel_count <= 2 * r {
        return Err(ResizeError::invalid_filter_support(
            "convolution kernel radius exceeds row length",
        ));
    }
    let amount = amount_from_percent(percent);
    let kernel = build_kernel(radius, sigma, amount);

    let original: Vec<f32> = row.to_vec();
    for c in 0..channels {
        for p in r..pixel_count - r {
            let mut acc = 0.0f64;
            for (k, &w) in kernel.iter().enumerate() {
                let src_p = p + k - r;
                acc += w * original[src_p * channels + c] as f64;
            }
            let idx = p * channels + c;
            let delta = acc as f32 - original[idx];
            if delta.abs() as f64 >= threshold {
                row[idx] = acc as f32;
            }
        }
    }
    Ok(())
}

/// Apply a caller-supplied odd-length symmetric kernel to one row in place;
/// used for the standalone `convolution_a`/`convolution_b` kernels, as
/// opposed to the Gaussian-derived one [`convolve_row_in_place`] builds.
/// Endpoints within `radius` of either edge are left untouched.
pub fn apply_symmetric_kernel(row: &mut [f32], channels: usize, kernel: &[f32]) {
    if kernel.len() < 3 || kernel.len().is_multiple_of(2) {
        return;
    }
    let r = kernel.len() / 2;
    let pixel_count = row.len() / channels;
    if pixel_count <= 2 * r {
        return;
    }
    let original: Vec<f32> = row.to_vec();
    for c in 0..channels {
        for p in r..pixel_count - r {
            let mut acc = 0.0f32;
            for (k, &w) in kernel.iter().enumerate() {
                acc += w * original[(p + k - r) * channels + c];
            }
            row[p * channels + c] = acc;
        }
    }
}
