//! The separable scaler: applies a contribution table along one axis while
//! writing its output transposed, so two calls (src->tmp, tmp->dst) yield a
//! full 2-D resize without a dedicated transpose pass.

use crate::contributions::LineContributions;
use crate::error::ResizeError;
use crate::floatbuf::{BitmapFloat, GammaLut};
use crate::sharpen;

/// `(pixels, width, height, stride, channels, is_linear)` of a scaled,
/// transposed buffer.
pub type ScaledBuffer = (Vec<u8>, u32, u32, usize, u8, bool);

/// Scale `src` along its width axis per `contributions`, writing the result
/// transposed: the returned buffer has width `src.height` and height
/// `contributions.line_length`.
///
/// Row-at-a-time rather than the banded (depth-4) buffering a highly tuned
/// implementation would use for cache locality — functionally identical,
/// slower per byte touched.
pub fn run(
    src: &crate::bitmap::Bitmap8<'_>,
    contributions: &LineContributions,
    lut: &GammaLut,
    is_linear: bool,
    post_resize_sharpen_percent: f64,
) -> Result<ScaledBuffer, ResizeError> {
    let channels = src.channels;
    let dst_width = src.height;
    let dst_height = contributions.line_length;
    let dst_stride = dst_width as usize * channels as usize;
    let dst_len = dst_stride
        .checked_mul(dst_height as usize)
        .ok_or(ResizeError::OutOfMemory)?;
    let mut dst = vec![0u8; dst_len];

    // One-row-deep `BitmapFloat`s: the unpacked source row and the scaled
    // output row, before the output row is packed back transposed.
    let mut src_row_float = BitmapFloat::zeroed(src.width, 1, channels, is_linear);
    let mut out_row_float = BitmapFloat::zeroed(dst_height, 1, channels, is_linear);

    for y in 0..src.height {
        let src_row = src.row(y);
        src_row_float.unpack_row(0, src_row, channels, lut);

        for (u, contribution) in contributions.contributions.iter().enumerate() {
            for c in 0..channels as usize {
                let mut acc = 0.0f32;
                for (k, &w) in contribution.weights.iter().enumerate() {
                    let src_x = contribution.left as usize + k;
                    acc += w * src_row_float.row(0)[src_x * channels as usize + c];
                }
                out_row_float.row_mut(0)[u * channels as usize + c] = acc;
            }
        }

        sharpen::sharpen_row_in_place(out_row_float.row_mut(0), channels as usize, post_resize_sharpen_percent);

        for (u, chunk) in out_row_float.row(0).chunks(channels as usize).enumerate() {
            let dst_offset = u * dst_stride + y as usize * channels as usize;
            for (c, &v) in chunk.iter().enumerate() {
                dst[dst_offset + c] = lut.encode(v);
            }
        }
    }

    Ok((dst, dst_width, dst_height, dst_stride, channels, is_linear))
}
