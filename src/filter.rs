//! The closed family of 1-D interpolation kernels.
//!
//! Each kernel is a pure function `f(t) -> f64` of the signed source offset
//! `t` in source-pixel units, dispatched through [`FilterKernel`] rather
//! than a boxed closure: the set of filters is fixed (§4.1 of the spec this
//! crate implements enumerates exactly thirteen), so a closed enum lets the
//! contribution builder match on kind instead of carrying a trait object
//! per row.

use crate::interpolation::CubicCoefficients;

/// One of the thirteen supported kernel shapes, carrying only the state a
/// pure evaluation needs (cubic coefficients, or nothing for the sinc and
/// triangle family).
#[derive(Debug, Clone, Copy)]
pub enum FilterKernel {
    /// `p1 + t(p2 + t*p3)` on `[0,1)`, `q1 + t(q2 + t(q3 + t*q4))` on
    /// `[1,2)`, else 0, for `t = |x|/blur`.
    FlexCubic(CubicCoefficients),
    /// Windowed sinc: `window * sin(pi*x/window) * sin(x*pi) / (pi^2 * x^2)`.
    WindowedSinc,
    /// `1 - |x|` on `[-1,1]`, else 0.
    Triangle,
    /// `1` on `[-window, window)`, else 0.
    Box,
}

impl FilterKernel {
    /// Evaluate the kernel at signed source offset `t`, already divided by
    /// `blur` where the shape of the curve needs it.
    #[inline]
    pub fn eval(&self, window: f64, blur: f64, t: f64) -> f64 {
        match self {
            FilterKernel::FlexCubic(c) => flex_cubic(c, blur, t),
            FilterKernel::WindowedSinc => windowed_sinc(window, blur, t),
            FilterKernel::Triangle => triangle(blur, t),
            FilterKernel::Box => box_filter(window, blur, t),
        }
    }
}

#[inline]
fn flex_cubic(c: &CubicCoefficients, blur: f64, t: f64) -> f64 {
    let t = t.abs() / blur;
    if t < 1.0 {
        c.p1 + t * (t * (c.p2 + t * c.p3))
    } else if t < 2.0 {
        c.q1 + t * (c.q2 + t * (c.q3 + t * c.q4))
    } else {
        0.0
    }
}

#[inline]
fn windowed_sinc(window: f64, blur: f64, t: f64) -> f64 {
    let x = t / blur;
    let abs_x = x.abs();
    if abs_x == 0.0 {
        return 1.0;
    }
    if abs_x > window {
        return 0.0;
    }
    window * (std::f64::consts::PI * x / window).sin() * (x * std::f64::consts::PI).sin()
        / (std::f64::consts::PI * std::f64::consts::PI * x * x)
}

#[inline]
fn triangle(blur: f64, t: f64) -> f64 {
    let x = t.abs() / blur;
    if x < 1.0 {
        1.0 - x
    } else {
        0.0
    }
}

#[inline]
fn box_filter(window: f64, blur: f64, t: f64) -> f64 {
    let x = t / blur;
    if x >= -window && x < window {
        1.0
    } else {
        0.0
    }
}
