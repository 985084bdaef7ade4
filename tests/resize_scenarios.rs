//! End-to-end scenarios against the public `resize()` entry point.
//!
//! Plain `#[test]` functions over hand-built fixtures, no property-testing
//! crate — mirrors the teacher's own integration test style.

use fastscale::{resize, Bitmap8, Bitmap8Mut, FilterKind, NoopProfiler, Rect, ResizeError, ResizeOptions};

fn solid_bgra(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
    let mut data = vec![0u8; width as usize * height as usize * 4];
    for px in data.chunks_mut(4) {
        px.copy_from_slice(&pixel);
    }
    data
}

fn run_resize(
    src_data: &[u8],
    src_w: u32,
    src_h: u32,
    dst_w: u32,
    dst_h: u32,
    options: &ResizeOptions,
) -> Vec<u8> {
    let src = Bitmap8::new(src_data, src_w, src_h, src_w as usize * 4, 4, true).unwrap();
    let mut dst_data = vec![0u8; dst_w as usize * dst_h as usize * 4];
    let dst = Bitmap8Mut::new(&mut dst_data, dst_w, dst_h, dst_w as usize * 4, 4, true).unwrap();
    let mut profiler = NoopProfiler;
    resize(
        src,
        Rect::new(0, 0, src_w, src_h),
        dst,
        Rect::new(0, 0, dst_w, dst_h),
        options,
        &mut profiler,
    )
    .unwrap();
    dst_data
}

/// Scenario 1: a solid 4x4 downscaled to 2x2 with Triangle stays solid.
#[test]
fn solid_4x4_triangle_downscale_to_2x2_stays_solid() {
    let data = solid_bgra(4, 4, [128, 64, 32, 255]);
    let options = ResizeOptions {
        filter: FilterKind::Triangle,
        ..ResizeOptions::default()
    };
    let out = run_resize(&data, 4, 4, 2, 2, &options);
    for px in out.chunks(4) {
        assert_eq!(px, &[128, 64, 32, 255]);
    }
}

/// Scenario 2: a 4x4 checkerboard collapsed to a single pixel with a
/// window=2 box filter lands on the flat average of all 16 source pixels.
#[test]
fn checkerboard_4x4_box_window_two_to_1x1_is_the_mean() {
    let mut data = vec![0u8; 4 * 4 * 4];
    for y in 0..4u32 {
        for x in 0..4u32 {
            let on = (x + y) % 2 == 0;
            let v = if on { 255u8 } else { 0u8 };
            let idx = (y as usize * 4 + x as usize) * 4;
            data[idx..idx + 4].copy_from_slice(&[v, v, v, 255]);
        }
    }
    let options = ResizeOptions {
        filter: FilterKind::Box,
        window_override: Some(2.0),
        ..ResizeOptions::default()
    };
    let out = run_resize(&data, 4, 4, 1, 1, &options);
    // 8 pixels on (255) and 8 off (0): mean 127.5, rounds to 127 or 128.
    assert!((out[0] as i16 - 128).abs() <= 1);
    assert_eq!(out[3], 255);
}

/// Scenario 3: an 8x8 horizontal gradient scaled to 4x8 with Catmull-Rom
/// stays monotonically increasing left to right, with no overshoot past
/// the source's own min/max.
#[test]
fn horizontal_gradient_8x8_catmull_rom_to_4x8_stays_monotonic() {
    let width = 8u32;
    let height = 8u32;
    let mut data = vec![0u8; width as usize * height as usize * 4];
    for y in 0..height {
        for x in 0..width {
            let v = (x * 255 / (width - 1)) as u8;
            let idx = (y as usize * width as usize + x as usize) * 4;
            data[idx..idx + 4].copy_from_slice(&[v, v, v, 255]);
        }
    }
    let options = ResizeOptions {
        filter: FilterKind::CatmullRom,
        ..ResizeOptions::default()
    };
    let out = run_resize(&data, width, height, 4, height, &options);
    for y in 0..height {
        let row_start = y as usize * 4 * 4;
        let mut prev = out[row_start];
        for x in 1..4usize {
            let v = out[row_start + x * 4];
            assert!(v + 1 >= prev, "overshoot below previous sample: {v} < {prev}");
            prev = v;
        }
        let _ = prev;
    }
}

/// Scenario 4: a 100x100 flat-mean-preserving downscale to 50x50 with
/// Lanczos3 keeps the overall image mean stable (within rounding noise).
#[test]
fn lanczos3_downscale_100x100_to_50x50_preserves_mean() {
    let width = 100u32;
    let height = 100u32;
    let mut data = vec![0u8; width as usize * height as usize * 4];
    for y in 0..height {
        for x in 0..width {
            let v = ((x * 3 + y * 7) % 256) as u8;
            let idx = (y as usize * width as usize + x as usize) * 4;
            data[idx..idx + 4].copy_from_slice(&[v, v, v, 255]);
        }
    }
    let src_mean: f64 = data
        .chunks(4)
        .map(|px| px[0] as f64)
        .sum::<f64>()
        / (width as f64 * height as f64);

    let options = ResizeOptions {
        filter: FilterKind::Lanczos3,
        ..ResizeOptions::default()
    };
    let out = run_resize(&data, width, height, 50, 50, &options);
    let dst_mean: f64 = out.chunks(4).map(|px| px[0] as f64).sum::<f64>() / (50.0 * 50.0);

    assert!(
        (src_mean - dst_mean).abs() < 3.0,
        "mean drifted: src={src_mean} dst={dst_mean}"
    );
}

/// Scenario 5: applying the B/R swap color matrix after an identity-size
/// resize is equivalent to swapping channels directly in the source.
#[test]
fn color_matrix_swap_matches_manual_channel_swap() {
    let width = 6u32;
    let height = 6u32;
    let mut data = vec![0u8; width as usize * height as usize * 4];
    for (i, px) in data.chunks_mut(4).enumerate() {
        px.copy_from_slice(&[(i * 5 % 256) as u8, (i * 11 % 256) as u8, (i * 17 % 256) as u8, 255]);
    }

    let options = ResizeOptions {
        filter: FilterKind::Triangle,
        color_matrix: Some(fastscale::colormatrix::swap_b_and_r()),
        ..ResizeOptions::default()
    };
    let out = run_resize(&data, width, height, width, height, &options);

    for (src_px, dst_px) in data.chunks(4).zip(out.chunks(4)) {
        assert_eq!(dst_px[0], src_px[2]);
        assert_eq!(dst_px[1], src_px[1]);
        assert_eq!(dst_px[2], src_px[0]);
        assert_eq!(dst_px[3], src_px[3]);
    }
}

/// Scenario 6: a 1024x1024 solid image downscaled to 256x256 produces the
/// same result whether or not the halving pre-pass is enabled.
#[test]
fn halving_and_no_halving_agree_on_a_large_downscale() {
    let width = 1024u32;
    let height = 1024u32;
    let data = solid_bgra(width, height, [200, 100, 50, 255]);

    let with_halving = ResizeOptions {
        filter: FilterKind::RobidouxDefault,
        use_halving: true,
        ..ResizeOptions::default()
    };
    let without_halving = ResizeOptions {
        filter: FilterKind::RobidouxDefault,
        use_halving: false,
        ..ResizeOptions::default()
    };

    let out_halved = run_resize(&data, width, height, 256, 256, &with_halving);
    let out_direct = run_resize(&data, width, height, 256, 256, &without_halving);

    for (a, b) in out_halved.iter().zip(out_direct.iter()) {
        assert!((*a as i16 - *b as i16).abs() <= 1, "halving drifted: {a} vs {b}");
    }
}

/// Boundary: a 1x1 source stretched to any target size is a solid block of
/// that one source color.
#[test]
fn one_by_one_source_upscales_to_a_solid_block() {
    let data = solid_bgra(1, 1, [10, 20, 30, 255]);
    let options = ResizeOptions {
        filter: FilterKind::Lanczos3,
        ..ResizeOptions::default()
    };
    let out = run_resize(&data, 1, 1, 16, 9, &options);
    for px in out.chunks(4) {
        assert_eq!(px, &[10, 20, 30, 255]);
    }
}

/// Boundary: when the source declares `alpha_meaningful = false`, the
/// destination's alpha channel still comes out fully opaque.
#[test]
fn alpha_not_meaningful_source_still_yields_opaque_output() {
    let width = 4u32;
    let height = 4u32;
    let mut data = vec![0u8; width as usize * height as usize * 4];
    for (i, px) in data.chunks_mut(4).enumerate() {
        // Garbage alpha byte that must not leak into the output.
        px.copy_from_slice(&[(i * 3 % 256) as u8, (i * 9 % 256) as u8, (i * 13 % 256) as u8, 1]);
    }
    let src = Bitmap8::new(&data, width, height, width as usize * 4, 4, false).unwrap();
    let mut dst_data = vec![0u8; 2 * 2 * 4];
    let dst = Bitmap8Mut::new(&mut dst_data, 2, 2, 2 * 4, 4, true).unwrap();
    let options = ResizeOptions {
        filter: FilterKind::Triangle,
        ..ResizeOptions::default()
    };
    let mut profiler = NoopProfiler;
    resize(
        src,
        Rect::new(0, 0, width, height),
        dst,
        Rect::new(0, 0, 2, 2),
        &options,
        &mut profiler,
    )
    .unwrap();
    for px in dst_data.chunks(4) {
        assert_eq!(px[3], 255);
    }
}

/// Invariant: a non-axis-aligned request (post_transpose) is rejected
/// rather than silently producing a wrongly-shaped result.
#[test]
fn post_transpose_is_rejected_as_unsupported_geometry() {
    let data = solid_bgra(4, 4, [1, 2, 3, 255]);
    let options = ResizeOptions {
        post_transpose: true,
        ..ResizeOptions::default()
    };
    let src = Bitmap8::new(&data, 4, 4, 16, 4, true).unwrap();
    let mut dst_data = vec![0u8; 4 * 4 * 4];
    let dst = Bitmap8Mut::new(&mut dst_data, 4, 4, 16, 4, true).unwrap();
    let mut profiler = NoopProfiler;
    let err = resize(
        src,
        Rect::new(0, 0, 4, 4),
        dst,
        Rect::new(0, 0, 4, 4),
        &options,
        &mut profiler,
    )
    .unwrap_err();
    assert!(matches!(err, ResizeError::GeometryUnsupported { .. }));
}

/// Invariant: LUV-space sharpening is rejected outright rather than
/// silently falling back to RGB-space sharpening.
#[test]
fn use_luv_is_rejected_as_invalid_option() {
    let data = solid_bgra(4, 4, [1, 2, 3, 255]);
    let options = ResizeOptions {
        use_luv: true,
        ..ResizeOptions::default()
    };
    let src = Bitmap8::new(&data, 4, 4, 16, 4, true).unwrap();
    let mut dst_data = vec![0u8; 2 * 2 * 4];
    let dst = Bitmap8Mut::new(&mut dst_data, 2, 2, 8, 4, true).unwrap();
    let mut profiler = NoopProfiler;
    let err = resize(
        src,
        Rect::new(0, 0, 4, 4),
        dst,
        Rect::new(0, 0, 2, 2),
        &options,
        &mut profiler,
    )
    .unwrap_err();
    assert!(matches!(err, ResizeError::InvalidOption { .. }));
}

/// Round-trip: downscaling then upscaling back with Lanczos3 keeps the
/// per-channel mean absolute error against the original small.
#[test]
fn downscale_then_upscale_round_trip_stays_close_to_source() {
    let width = 32u32;
    let height = 32u32;
    let mut data = vec![0u8; width as usize * height as usize * 4];
    for y in 0..height {
        for x in 0..width {
            let idx = (y as usize * width as usize + x as usize) * 4;
            data[idx..idx + 4].copy_from_slice(&[
                ((x * 7 + y * 3) % 256) as u8,
                ((x * 5 + y * 11) % 256) as u8,
                ((x * 13 + y) % 256) as u8,
                255,
            ]);
        }
    }
    let options = ResizeOptions {
        filter: FilterKind::Lanczos3,
        ..ResizeOptions::default()
    };
    let down = run_resize(&data, width, height, width / 2, height / 2, &options);
    let back_up = run_resize(&down, width / 2, height / 2, width, height, &options);

    let mut total_abs_error = 0.0f64;
    let mut samples = 0usize;
    for (src_px, dst_px) in data.chunks(4).zip(back_up.chunks(4)) {
        for c in 0..3 {
            total_abs_error += (src_px[c] as i16 - dst_px[c] as i16).unsigned_abs() as f64;
            samples += 1;
        }
    }
    let mean_abs_error = total_abs_error / samples as f64;
    assert!(mean_abs_error < 8.0, "mean abs error too high: {mean_abs_error}");
}

/// Boundary: upscaling past the source's own dimensions with a wide-window
/// filter (Lanczos3) never reads source indices out of bounds — checked
/// indirectly by asserting the call succeeds and produces in-range bytes.
#[test]
fn upscale_with_wide_window_filter_stays_in_bounds() {
    let data = solid_bgra(3, 3, [9, 99, 199, 255]);
    let options = ResizeOptions {
        filter: FilterKind::Lanczos3,
        ..ResizeOptions::default()
    };
    let out = run_resize(&data, 3, 3, 40, 40, &options);
    assert_eq!(out.len(), 40 * 40 * 4);
    for px in out.chunks(4) {
        assert_eq!(px, &[9, 99, 199, 255]);
    }
}

/// Round-trip: cropping a source rectangle out of a larger canvas and
/// resizing it to identity size reproduces the cropped region exactly.
#[test]
fn crop_then_identity_resize_reproduces_the_cropped_region() {
    let width = 8u32;
    let height = 8u32;
    let mut data = vec![0u8; width as usize * height as usize * 4];
    for (i, px) in data.chunks_mut(4).enumerate() {
        px.copy_from_slice(&[(i * 3 % 256) as u8, (i * 7 % 256) as u8, (i * 13 % 256) as u8, 255]);
    }
    let src = Bitmap8::new(&data, width, height, width as usize * 4, 4, true).unwrap();
    let crop = Rect::new(2, 2, 4, 4);
    let mut dst_data = vec![0u8; 4 * 4 * 4];
    let dst = Bitmap8Mut::new(&mut dst_data, 4, 4, 16, 4, true).unwrap();
    let options = ResizeOptions {
        filter: FilterKind::Triangle,
        ..ResizeOptions::default()
    };
    let mut profiler = NoopProfiler;
    resize(src, crop, dst, Rect::new(0, 0, 4, 4), &options, &mut profiler).unwrap();

    for y in 0..4u32 {
        for x in 0..4u32 {
            let src_idx = ((y + 2) as usize * width as usize + (x + 2) as usize) * 4;
            let dst_idx = (y as usize * 4 + x as usize) * 4;
            for c in 0..4 {
                assert!((data[src_idx + c] as i16 - dst_data[dst_idx + c] as i16).abs() <= 1);
            }
        }
    }
}
