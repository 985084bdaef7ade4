//! The resize request surface: [`FilterKind`] (the closed filter family from
//! §4.1 of the spec this crate implements) and [`ResizeOptions`] (every
//! tuning knob from §6).

use clap::ValueEnum;

/// One of the supported interpolation filters.
///
/// Ids 0..=12 match the table in §4.1 exactly, via [`FilterKind::from_id`].
/// [`FilterKind::Box`] has no assigned id in that table — it exists for
/// in-process use (it's what the halving pre-pass is conceptually doing,
/// and end-to-end scenario 2 exercises it directly) but a host driving the
/// crate by numeric id can't select it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterKind {
    /// id 0 — flex-cubic, B=0.37822, C=0.31089 (same curve as `Robidoux`).
    RobidouxDefault,
    /// id 1 — flex-cubic, caller-supplied B/C via [`ResizeOptions::cubic_b`]/[`ResizeOptions::cubic_c`].
    GeneralCubic,
    /// id 2 — flex-cubic, B=0, C=0.5.
    CatmullRom,
    /// id 3 — flex-cubic, B=1/3, C=1/3.
    Mitchell,
    /// id 4 — flex-cubic, B=0.37822, C=0.31089.
    Robidoux,
    /// id 5 — flex-cubic, B=0.2620, C=0.3690.
    RobidouxSharp,
    /// id 6 — flex-cubic, B=0, C=0.
    Hermite,
    /// id 7 — windowed sinc, window 3.
    Lanczos3,
    /// id 8 — windowed sinc, window 3, blur 0.9549.
    Lanczos3Sharp,
    /// id 9 — windowed sinc, window 2.
    Lanczos2,
    /// id 10 — windowed sinc, window 2, blur 0.9812.
    Lanczos2Sharp,
    /// id 11 — windowed sinc, window 3 (see the open question on 7 vs 11 in DESIGN.md).
    Lanczos,
    /// id 12 — `1 - |t|` on `[-1,1]`.
    Triangle,
    /// No id: flat box filter, `1` on `[-window, window)`.
    Box,
}

impl FilterKind {
    /// Map a host-facing filter id (§6: `filter_id ∈ 0..12`) to a [`FilterKind`].
    pub fn from_id(id: u32) -> Result<Self, crate::ResizeError> {
        Ok(match id {
            0 => Self::RobidouxDefault,
            1 => Self::GeneralCubic,
            2 => Self::CatmullRom,
            3 => Self::Mitchell,
            4 => Self::Robidoux,
            5 => Self::RobidouxSharp,
            6 => Self::Hermite,
            7 => Self::Lanczos3,
            8 => Self::Lanczos3Sharp,
            9 => Self::Lanczos2,
            10 => Self::Lanczos2Sharp,
            11 => Self::Lanczos,
            12 => Self::Triangle,
            other => {
                return Err(crate::ResizeError::invalid_option(format!(
                    "filter id {other} is outside the supported range 0..=12"
                )))
            }
        })
    }
}

/// Every tuning knob a resize request can carry (§6).
#[derive(Debug, Clone)]
pub struct ResizeOptions {
    pub filter: FilterKind,
    pub blur: f64,
    pub window_override: Option<f64>,
    /// Custom cubic coefficients, only consulted for [`FilterKind::GeneralCubic`].
    pub cubic_b: Option<f64>,
    pub cubic_c: Option<f64>,
    pub sharpen_percent_goal: f64,
    pub post_sharpen_percent: f64,
    pub integrated_sharpen_percent: f64,
    pub unsharp_radius: u32,
    pub unsharp_sigma: f64,
    pub unsharp_threshold: f64,
    pub kernel_threshold: f64,
    pub use_luv: bool,
    pub linear_sharpen: bool,
    pub negative_multiplier: f64,
    pub use_halving: bool,
    pub use_interpolation_for_percent: f64,
    pub halve_only_when_perfect: bool,
    pub post_flip_x: bool,
    pub post_flip_y: bool,
    pub post_transpose: bool,
    /// 4x5 affine color matrix (bias row implicit, per §4.7).
    pub color_matrix: Option<[[f32; 5]; 4]>,
    /// Standalone symmetric convolution kernels (odd length), applied after
    /// resize independent of `post_sharpen_percent`.
    pub convolution_a: Option<Box<[f32]>>,
    pub convolution_b: Option<Box<[f32]>>,
}

impl Default for ResizeOptions {
    fn default() -> Self {
        Self {
            filter: FilterKind::RobidouxDefault,
            blur: 1.0,
            window_override: None,
            cubic_b: None,
            cubic_c: None,
            sharpen_percent_goal: 0.0,
            post_sharpen_percent: 0.0,
            integrated_sharpen_percent: 0.0,
            unsharp_radius: 0,
            unsharp_sigma: 1.4,
            unsharp_threshold: 0.0,
            kernel_threshold: 0.0,
            use_luv: false,
            linear_sharpen: false,
            negative_multiplier: 1.0,
            use_halving: false,
            use_interpolation_for_percent: 0.3,
            halve_only_when_perfect: false,
            post_flip_x: false,
            post_flip_y: false,
            post_transpose: false,
            color_matrix: None,
            convolution_a: None,
            convolution_b: None,
        }
    }
}
