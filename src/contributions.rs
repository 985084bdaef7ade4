//! Per-axis contribution tables: for each destination pixel, which source
//! pixels feed it and with what weight.

use crate::error::ResizeError;
use crate::interpolation::InterpolationDetails;

const TONY: f64 = 1e-5;

/// One destination pixel's source range and normalized weights.
#[derive(Debug, Clone)]
pub struct Contribution {
    pub left: u32,
    pub right: u32,
    pub weights: Box<[f32]>,
}

/// The full per-axis table built by [`calculate`].
#[derive(Debug, Clone)]
pub struct LineContributions {
    pub line_length: u32,
    pub window_size: u32,
    pub contributions: Vec<Contribution>,
    /// Ratio of negative weight area to positive weight area, diagnostic only.
    pub percent_negative: f64,
}

/// Trapezoidal integration of the filter over `[-window, window]`, 50 steps,
/// matching `percent_negative_weight` in the reference implementation.
fn percent_negative_weight(details: &InterpolationDetails) -> f64 {
    let samples = 50usize;
    let step = details.window / samples as f64;
    let mut positive = 0.0f64;
    let mut negative = 0.0f64;
    let mut prev = details.eval(-step);
    for i in 0..=(samples + 2) {
        let x = step * i as f64;
        let cur = details.eval(x);
        let avg = (prev + cur) * 0.5 * step;
        if avg >= 0.0 {
            positive += avg;
        } else {
            negative += -avg;
        }
        prev = cur;
    }
    if positive <= 0.0 {
        0.0
    } else {
        negative / positive
    }
}

/// Build the contribution table for one axis: `src_size` source pixels
/// mapped onto `dst_size` destination pixels under `details`.
pub fn calculate(
    src_size: u32,
    dst_size: u32,
    details: &InterpolationDetails,
) -> Result<LineContributions, ResizeError> {
    if src_size == 0 || dst_size == 0 {
        return Err(ResizeError::geometry_unsupported(
            "source and destination size along an axis must be > 0",
        ));
    }

    let scale = dst_size as f64 / src_size as f64;
    let downscale = scale.min(1.0);
    let half_source_window = details.window * 0.5 / downscale;

    let window_size = (2.0 * (half_source_window - TONY)).ceil() as i64 + 1;
    if window_size < 1 {
        return Err(ResizeError::invalid_filter_support(
            "computed window size is non-positive",
        ));
    }

    let ratio = percent_negative_weight(details);
    let goal = details.sharpen_percent_goal;
    let extra_negative = if ratio > 0.0 && goal > 0.0 {
        (goal + ratio) / ratio
    } else {
        0.0
    };

    let mut contributions = Vec::with_capacity(dst_size as usize);
    let mut total_negative = 0.0f64;
    let mut total_positive = 0.0f64;

    for u in 0..dst_size {
        let center = (u as f64 + 0.5) / scale - 0.5;
        let left_edge = (center - half_source_window - 0.5 + TONY).ceil();
        let right_edge = (center + half_source_window + 0.5 - TONY).floor();

        let left = left_edge.max(0.0) as i64;
        let right = (right_edge as i64).min(src_size as i64 - 1);
        let left = left.min(src_size as i64 - 1).max(0);
        let right = right.max(left);

        let mut weights = Vec::with_capacity((right - left + 1) as usize);
        let mut total_weight = 0.0f64;
        for ix in left..=right {
            let mut w = details.eval(downscale * (ix as f64 - center));
            if extra_negative > 0.0 && w < 0.0 {
                w *= extra_negative;
            }
            if w < 0.0 {
                total_negative += -w;
            } else {
                total_positive += w;
            }
            total_weight += w;
            weights.push(w);
        }

        if total_weight.abs() <= TONY {
            return Err(ResizeError::invalid_filter_support(format!(
                "contribution row for destination pixel {u} has ~zero total weight"
            )));
        }

        let inv = 1.0 / total_weight;
        let weights: Box<[f32]> = weights.into_iter().map(|w| (w * inv) as f32).collect();

        contributions.push(Contribution {
            left: left as u32,
            right: right as u32,
            weights,
        });
    }

    let percent_negative = if total_positive > 0.0 {
        total_negative / total_positive
    } else {
        0.0
    };

    Ok(LineContributions {
        line_length: dst_size,
        window_size: window_size as u32,
        contributions,
        percent_negative,
    })
}
