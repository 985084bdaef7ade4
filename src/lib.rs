//! # fastscale
//!
//! A CPU-bound, single-threaded separable resampler for 8-bit BGRA/BGR
//! raster images. Given a source pixel buffer, a crop rectangle, a
//! destination buffer and rectangle, and a set of [`ResizeOptions`],
//! [`resize`] produces a resized image using a configurable separable
//! filter kernel, optional integer box-halving pre-pass, optional
//! linear-light processing, optional post-resize sharpening, and an
//! optional 5x5 color matrix.
//!
//! ## Architecture
//!
//! The crate is organized around the same pipeline a separable resampler
//! always has, split one module per stage:
//!
//! - [`filter`]: the closed family of 1-D interpolation kernels.
//! - [`interpolation`]: [`interpolation::InterpolationDetails`], bundling a filter with its
//!   scalar parameters (window, blur, sharpen goal, cubic coefficients).
//! - [`contributions`]: [`contributions::ContributionsCalc`], building the per-output-pixel
//!   weighted source ranges that drive the scaler.
//! - [`halving`]: the integer box-average pre-pass used before a large downscale.
//! - [`floatbuf`]: the float intermediate format, sRGB LUT, and pack/unpack.
//! - [`scale`]: the separable two-pass scaler with internal pivoting.
//! - [`sharpen`]: three-tap unsharp and the generalized convolution kernel.
//! - [`colormatrix`]: the 5x5 affine color transform.
//! - [`pipeline`]: [`pipeline::resize`], orchestrating all of the above.
//!
//! ## Scope
//!
//! This crate implements only the resampling core. Pixel-format conversion
//! from/to a host bitmap type, option parsing from a query string, and
//! memory allocation strategy beyond what the algorithms require are all
//! treated as external collaborators and are not part of this crate.
//!
//! ## Threading
//!
//! A [`pipeline::resize`] call is single-threaded, synchronous, and has no
//! suspension points: it either runs to completion or returns a
//! [`error::ResizeError`]. There is no cancellation.

pub mod bitmap;
pub mod colormatrix;
pub mod contributions;
pub mod error;
pub mod filter;
pub mod floatbuf;
pub mod halving;
pub mod interpolation;
pub mod math;
pub mod options;
pub mod pipeline;
pub mod profiler;
pub mod scale;
pub mod sharpen;

pub use bitmap::{Bitmap8, Bitmap8Mut, Rect};
pub use error::ResizeError;
pub use options::{FilterKind, ResizeOptions};
pub use pipeline::resize;
pub use profiler::{NoopProfiler, Profiler};
