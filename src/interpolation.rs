//! [`InterpolationDetails`]: a filter kernel plus the scalar parameters that
//! tune it, built from a [`crate::options::FilterKind`] and a
//! [`crate::options::ResizeOptions`].

use crate::filter::FilterKernel;
use crate::options::{FilterKind, ResizeOptions};

/// The four Mitchell-Netravali cubic coefficients on `[0,1)` and the four on
/// `[1,2)`, derived from `(B, C)` by `derive_cubic_coefficients` in the
/// reference implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicCoefficients {
    pub p1: f64,
    pub p2: f64,
    pub p3: f64,
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub q4: f64,
}

impl CubicCoefficients {
    /// Standard Mitchell-Netravali derivation.
    pub fn from_bc(b: f64, c: f64) -> Self {
        let bx2 = b + b;
        Self {
            p1: 1.0 - (1.0 / 3.0) * b,
            p2: -3.0 + bx2 + c,
            p3: 2.0 - 1.5 * b - c,
            q1: (4.0 / 3.0) * b + 4.0 * c,
            q2: -8.0 * c - bx2,
            q3: b + 5.0 * c,
            q4: (-1.0 / 6.0) * b - c,
        }
    }
}

/// A filter kernel bundled with the scalar parameters that drive the
/// contribution builder and the sharpening stages.
#[derive(Debug, Clone, Copy)]
pub struct InterpolationDetails {
    pub kernel: FilterKernel,
    /// Half-support of the kernel in source units, before blur scaling.
    pub window: f64,
    /// Multiplier applied to the effective support; `blur > 1` softens.
    pub blur: f64,
    /// Extra negative-weight amplification goal, in `[0, 0.5]`.
    pub sharpen_percent_goal: f64,
    pub post_resize_sharpen_percent: f64,
    pub integrated_sharpen_percent: f64,
    pub kernel_radius: u32,
    pub unsharp_sigma: f64,
    pub kernel_threshold: f64,
    pub use_luv: bool,
    pub linear_sharpen: bool,
    pub negative_multiplier: f64,
    pub use_halving: bool,
    pub use_interpolation_for_percent: f64,
}

impl InterpolationDetails {
    /// Evaluate the kernel at signed source offset `t`.
    #[inline]
    pub fn eval(&self, t: f64) -> f64 {
        self.kernel.eval(self.window, self.blur, t)
    }
}

/// Build [`InterpolationDetails`] for a filter id and the tuning knobs in
/// `options`. Returns [`crate::ResizeError::InvalidOption`] for an out-of-range
/// window or blur, matching §7 of the spec ("negative window/blur").
pub fn build_details(
    filter: FilterKind,
    options: &ResizeOptions,
) -> Result<InterpolationDetails, crate::ResizeError> {
    if let Some(window) = options.window_override {
        if !(window.is_finite() && window > 0.0) {
            return Err(crate::ResizeError::invalid_option(format!(
                "window override {window} must be a positive, finite number"
            )));
        }
    }
    if !(options.blur.is_finite() && options.blur > 0.0) {
        return Err(crate::ResizeError::invalid_option(format!(
            "blur {} must be a positive, finite number",
            options.blur
        )));
    }

    let (kernel, default_window, default_blur) = match filter {
        FilterKind::RobidouxDefault | FilterKind::Robidoux => (
            FilterKernel::FlexCubic(CubicCoefficients::from_bc(0.37822, 0.31089)),
            2.0,
            1.0,
        ),
        FilterKind::GeneralCubic => (
            FilterKernel::FlexCubic(CubicCoefficients::from_bc(
                options.cubic_b.unwrap_or(1.0 / 3.0),
                options.cubic_c.unwrap_or(1.0 / 3.0),
            )),
            2.0,
            1.0,
        ),
        FilterKind::CatmullRom => (
            FilterKernel::FlexCubic(CubicCoefficients::from_bc(0.0, 0.5)),
            2.0,
            1.0,
        ),
        FilterKind::Mitchell => (
            FilterKernel::FlexCubic(CubicCoefficients::from_bc(1.0 / 3.0, 1.0 / 3.0)),
            2.0,
            1.0,
        ),
        FilterKind::RobidouxSharp => (
            FilterKernel::FlexCubic(CubicCoefficients::from_bc(0.2620, 0.3690)),
            2.0,
            1.0,
        ),
        FilterKind::Hermite => (
            FilterKernel::FlexCubic(CubicCoefficients::from_bc(0.0, 0.0)),
            1.0,
            1.0,
        ),
        FilterKind::Lanczos3 | FilterKind::Lanczos => (FilterKernel::WindowedSinc, 3.0, 1.0),
        FilterKind::Lanczos3Sharp => (FilterKernel::WindowedSinc, 3.0, 0.9549),
        FilterKind::Lanczos2 => (FilterKernel::WindowedSinc, 2.0, 1.0),
        FilterKind::Lanczos2Sharp => (FilterKernel::WindowedSinc, 2.0, 0.9812),
        FilterKind::Triangle => (FilterKernel::Triangle, 1.0, 1.0),
        FilterKind::Box => (FilterKernel::Box, 2.0, 1.0),
    };

    let window = options.window_override.unwrap_or(default_window);
    let blur = default_blur * options.blur;

    Ok(InterpolationDetails {
        kernel,
        window,
        blur,
        sharpen_percent_goal: options.sharpen_percent_goal.clamp(0.0, 0.5),
        post_resize_sharpen_percent: options.post_sharpen_percent,
        integrated_sharpen_percent: options.integrated_sharpen_percent,
        kernel_radius: options.unsharp_radius,
        unsharp_sigma: options.unsharp_sigma,
        kernel_threshold: options.unsharp_threshold.max(options.kernel_threshold),
        use_luv: options.use_luv,
        linear_sharpen: options.linear_sharpen,
        negative_multiplier: options.negative_multiplier,
        use_halving: options.use_halving,
        use_interpolation_for_percent: options.use_interpolation_for_percent,
    })
}
