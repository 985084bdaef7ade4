//! Integer box-halving pre-pass: a fast downscale by an integer divisor
//! before the filtered pass, used when the downscale ratio is large.

use crate::bitmap::Bitmap8;
use crate::error::ResizeError;
use crate::math::is_power_of_two;

/// The largest integer divisor `d >= 2` such that halving by `d` on both
/// axes doesn't overshoot the target, or `None` if no halving should happen.
///
/// Honors `halve_only_when_perfect`: when set, `d` is only returned if it
/// evenly divides both source dimensions.
pub fn choose_divisor(
    src_width: u32,
    src_height: u32,
    dst_width: u32,
    dst_height: u32,
    halve_only_when_perfect: bool,
) -> Option<u32> {
    if dst_width == 0 || dst_height == 0 {
        return None;
    }
    let dw = src_width / dst_width.max(1);
    let dh = src_height / dst_height.max(1);
    let d = dw.min(dh);
    if d < 2 {
        return None;
    }
    if halve_only_when_perfect && !(src_width.is_multiple_of(d) && src_height.is_multiple_of(d)) {
        return None;
    }
    Some(d)
}

/// Halve `src` by divisor `d` along both axes, writing into a freshly
/// allocated buffer of the halved dimensions.
pub fn halve_out_of_place(src: Bitmap8<'_>, d: u32) -> Result<(Vec<u8>, u32, u32, usize), ResizeError> {
    if d < 2 {
        return Err(ResizeError::internal("halving divisor must be >= 2"));
    }
    let channels = src.channels as usize;
    let dst_w = src.width / d;
    let dst_h = src.height / d;
    if dst_w == 0 || dst_h == 0 {
        return Err(ResizeError::geometry_unsupported(
            "halving divisor too large for source dimensions",
        ));
    }
    let dst_stride = dst_w as usize * channels;
    let mut dst = vec![0u8; dst_stride.checked_mul(dst_h as usize).ok_or(ResizeError::OutOfMemory)?];

    let divisor = d * d;
    let shift = if is_power_of_two(divisor) {
        Some(crate::math::int_log2(divisor) as u32)
    } else {
        None
    };

    let row_width_bytes = dst_w as usize * channels;
    let mut acc = vec![0u32; row_width_bytes];

    for oy in 0..dst_h {
        acc.iter_mut().for_each(|a| *a = 0);
        for ry in 0..d {
            let src_row = src.row(oy * d + ry);
            for ox in 0..dst_w as usize {
                for c in 0..channels {
                    let mut sum = 0u32;
                    for rx in 0..d as usize {
                        sum += src_row[(ox * d as usize + rx) * channels + c] as u32;
                    }
                    acc[ox * channels + c] += sum;
                }
            }
        }
        let dst_row = &mut dst[oy as usize * dst_stride..oy as usize * dst_stride + row_width_bytes];
        for (d, &a) in dst_row.iter_mut().zip(acc.iter()) {
            *d = (match shift {
                Some(s) => a >> s,
                None => a / divisor,
            }) as u8;
        }
    }

    Ok((dst, dst_w, dst_h, dst_stride))
}
