//! Orchestration: wires the halving pre-pass, the two scale-and-transpose
//! passes, sharpening, color matrix, and standalone convolution into one
//! `resize()` call.

use crate::bitmap::{Bitmap8, Bitmap8Mut, Rect};
use crate::colormatrix;
use crate::contributions;
use crate::error::ResizeError;
use crate::floatbuf::GammaLut;
use crate::halving;
use crate::interpolation;
use crate::options::ResizeOptions;
use crate::profiler::Profiler;
use crate::scale;
use crate::sharpen;

/// Resize `src` (cropped to `src_crop`) into the `dst_rect` region of `dst`,
/// per `options`.
///
/// On any error, `dst` is left untouched: every intermediate is computed
/// into owned scratch buffers and the final pack into `dst` is the last
/// step, so a failure never writes a partial result.
pub fn resize(
    src: Bitmap8<'_>,
    src_crop: Rect,
    mut dst: Bitmap8Mut<'_>,
    dst_rect: Rect,
    options: &ResizeOptions,
    profiler: &mut dyn Profiler,
) -> Result<(), ResizeError> {
    profiler.start("resize");
    let result = resize_inner(src, src_crop, &mut dst, dst_rect, options, profiler);
    profiler.stop("resize");
    result
}

fn resize_inner(
    src: Bitmap8<'_>,
    src_crop: Rect,
    dst: &mut Bitmap8Mut<'_>,
    dst_rect: Rect,
    options: &ResizeOptions,
    profiler: &mut dyn Profiler,
) -> Result<(), ResizeError> {
    let cropped = src.cropped(src_crop)?;
    dst.validate_target(dst_rect)?;

    let details = interpolation::build_details(options.filter, options)?;
    if details.use_luv {
        return Err(ResizeError::invalid_option(
            "use_luv has no RGB-independent implementation in this crate",
        ));
    }

    profiler.start("halving");
    let (src_buf, src_w, src_h, src_stride) =
        prepare_source(&cropped, dst_rect.width, dst_rect.height, options)?;
    profiler.stop("halving");

    let channels = cropped.channels;
    let alpha_meaningful = cropped.alpha_meaningful;
    let halved = Bitmap8::new(&src_buf, src_w, src_h, src_stride, channels, alpha_meaningful)?;

    profiler.start("contributions_width");
    let width_table = contributions::calculate(src_w, dst_rect.width, &details)?;
    profiler.stop("contributions_width");

    let lut = GammaLut::new(options.linear_sharpen);

    profiler.start("scale_pass_1");
    let (tmp_buf, tmp_w, tmp_h, tmp_stride, _c, is_linear) = scale::run(
        &halved,
        &width_table,
        &lut,
        options.linear_sharpen,
        details.integrated_sharpen_percent,
    )?;
    profiler.stop("scale_pass_1");

    let tmp = Bitmap8::new(&tmp_buf, tmp_w, tmp_h, tmp_stride, channels, alpha_meaningful)?;

    profiler.start("contributions_height");
    let height_table = contributions::calculate(src_h, dst_rect.height, &details)?;
    profiler.stop("contributions_height");

    profiler.start("scale_pass_2");
    let (mut final_buf, final_w, final_h, final_stride, _c2, _lin2) =
        scale::run(&tmp, &height_table, &lut, is_linear, details.integrated_sharpen_percent)?;
    profiler.stop("scale_pass_2");

    debug_assert_eq!(final_w, dst_rect.width);
    debug_assert_eq!(final_h, dst_rect.height);

    profiler.start("post_resize_sharpen");
    if details.post_resize_sharpen_percent > 0.0 {
        for y in 0..final_h {
            let row = row_mut(&mut final_buf, final_stride, channels, y);
            let mut float_row: Vec<f32> = row.iter().map(|&b| b as f32 / 255.0).collect();
            sharpen::sharpen_row_in_place(&mut float_row, channels as usize, details.post_resize_sharpen_percent);
            for (b, f) in row.iter_mut().zip(float_row.iter()) {
                *b = crate::math::clamp_to_u8(f * 255.0);
            }
        }
    }
    if details.kernel_radius > 0 {
        for y in 0..final_h {
            let row = row_mut(&mut final_buf, final_stride, channels, y);
            let mut float_row: Vec<f32> = row.iter().map(|&b| b as f32 / 255.0).collect();
            sharpen::convolve_row_in_place(
                &mut float_row,
                channels as usize,
                details.kernel_radius,
                details.unsharp_sigma,
                details.integrated_sharpen_percent.max(details.post_resize_sharpen_percent),
                details.kernel_threshold,
            )?;
            for (b, f) in row.iter_mut().zip(float_row.iter()) {
                *b = crate::math::clamp_to_u8(f * 255.0);
            }
        }
    }
    profiler.stop("post_resize_sharpen");

    profiler.start("post_transform");
    apply_post_transform(&mut final_buf, final_w, final_h, final_stride, channels, options)?;
    profiler.stop("post_transform");

    profiler.start("color_matrix");
    if let Some(matrix) = &options.color_matrix {
        for y in 0..final_h {
            let row = row_mut(&mut final_buf, final_stride, channels, y);
            colormatrix::apply_to_row(row, channels as usize, matrix);
        }
    }
    profiler.stop("color_matrix");

    profiler.start("standalone_convolution");
    if let Some(kernel) = &options.convolution_a {
        for y in 0..final_h {
            let row = row_mut(&mut final_buf, final_stride, channels, y);
            let mut float_row: Vec<f32> = row.iter().map(|&b| b as f32 / 255.0).collect();
            sharpen::apply_symmetric_kernel(&mut float_row, channels as usize, kernel);
            for (b, f) in row.iter_mut().zip(float_row.iter()) {
                *b = crate::math::clamp_to_u8(f * 255.0);
            }
        }
    }
    if let Some(kernel) = &options.convolution_b {
        apply_column_kernel(&mut final_buf, final_w, final_h, final_stride, channels, kernel);
    }
    profiler.stop("standalone_convolution");

    profiler.start("pack");
    pack_into_target(
        ScratchView {
            buf: &final_buf,
            width: final_w,
            height: final_h,
            stride: final_stride,
            channels,
            alpha_meaningful,
        },
        dst,
        dst_rect,
    )?;
    profiler.stop("pack");

    Ok(())
}

fn prepare_source(
    cropped: &Bitmap8<'_>,
    target_w: u32,
    target_h: u32,
    options: &ResizeOptions,
) -> Result<(Vec<u8>, u32, u32, usize), ResizeError> {
    if options.use_halving {
        if let Some(d) = halving::choose_divisor(
            cropped.width,
            cropped.height,
            target_w,
            target_h,
            options.halve_only_when_perfect,
        ) {
            return halving::halve_out_of_place(*cropped, d);
        }
    }

    let channels = cropped.channels as usize;
    let stride = cropped.width as usize * channels;
    let total = stride
        .checked_mul(cropped.height as usize)
        .ok_or(ResizeError::OutOfMemory)?;
    let mut buf = vec![0u8; total];
    for y in 0..cropped.height {
        let row = cropped.row(y);
        buf[y as usize * stride..y as usize * stride + stride].copy_from_slice(row);
    }
    Ok((buf, cropped.width, cropped.height, stride))
}

/// Scratch buffers built by this pipeline are always tightly packed
/// (`stride == width * channels`), so a row is simply one `stride`-sized
/// slice.
#[inline]
fn row_mut(buf: &mut [u8], stride: usize, _channels: u8, y: u32) -> &mut [u8] {
    let start = y as usize * stride;
    &mut buf[start..start + stride]
}

fn apply_post_transform(
    buf: &mut [u8],
    width: u32,
    height: u32,
    stride: usize,
    channels: u8,
    options: &ResizeOptions,
) -> Result<(), ResizeError> {
    if options.post_transpose {
        return Err(ResizeError::geometry_unsupported(
            "post_transpose is not supported by this pipeline's fixed-shape destination",
        ));
    }
    if options.post_flip_x {
        for y in 0..height {
            let row_start = y as usize * stride;
            let row = &mut buf[row_start..row_start + width as usize * channels as usize];
            let pixels = width as usize;
            for i in 0..pixels / 2 {
                let (a, b) = (i * channels as usize, (pixels - 1 - i) * channels as usize);
                for c in 0..channels as usize {
                    row.swap(a + c, b + c);
                }
            }
        }
    }
    if options.post_flip_y {
        for y in 0..height / 2 {
            let top = y as usize * stride;
            let bottom = (height - 1 - y) as usize * stride;
            let row_bytes = width as usize * channels as usize;
            let (top_slice, bottom_slice) = buf.split_at_mut(bottom);
            top_slice[top..top + row_bytes].swap_with_slice(&mut bottom_slice[..row_bytes]);
        }
    }
    Ok(())
}

fn apply_column_kernel(
    buf: &mut [u8],
    width: u32,
    height: u32,
    stride: usize,
    channels: u8,
    kernel: &[f32],
) {
    let channels = channels as usize;
    for x in 0..width as usize {
        let mut column: Vec<f32> = (0..height as usize)
            .flat_map(|y| {
                let base = y * stride + x * channels;
                let px = &buf[base..base + channels];
                px.iter().map(|&b| b as f32 / 255.0).collect::<Vec<_>>()
            })
            .collect();
        sharpen::apply_symmetric_kernel(&mut column, channels, kernel);
        for (y, chunk) in column.chunks(channels).enumerate() {
            let base = y * stride + x * channels;
            for (c, &v) in chunk.iter().enumerate() {
                buf[base + c] = crate::math::clamp_to_u8(v * 255.0);
            }
        }
    }
}

/// A packed scratch buffer plus the geometry needed to read it, bundled so
/// the final pack step doesn't carry its fields as five separate arguments.
struct ScratchView<'a> {
    buf: &'a [u8],
    width: u32,
    height: u32,
    stride: usize,
    channels: u8,
    alpha_meaningful: bool,
}

fn pack_into_target(
    src: ScratchView<'_>,
    dst: &mut Bitmap8Mut<'_>,
    dst_rect: Rect,
) -> Result<(), ResizeError> {
    let mut target = dst.windowed(dst_rect)?;
    let dst_channels = target.channels as usize;
    let src_channels = src.channels as usize;
    for y in 0..src.height {
        let src_row =
            &src.buf[y as usize * src.stride..y as usize * src.stride + src.width as usize * src_channels];
        let dst_row = target.row_mut(y);
        for x in 0..src.width as usize {
            let s = &src_row[x * src_channels..x * src_channels + src_channels];
            let d = &mut dst_row[x * dst_channels..x * dst_channels + dst_channels];
            d[0] = s[0];
            d[1] = s[1];
            d[2] = s[2];
            if dst_channels > 3 {
                d[3] = if src_channels > 3 && src.alpha_meaningful { s[3] } else { 255 };
            }
        }
    }
    Ok(())
}
