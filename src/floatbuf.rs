//! The float intermediate format and the 8-bit <-> float LUTs.
//!
//! `BitmapFloat` is the only owned, heap-backed buffer in the pipeline; every
//! other type either borrows a caller buffer or is `Copy`. It never crosses
//! the public API boundary.

use crate::math::clamp_to_u8;

/// 256-entry lookup tables for 8-bit <-> float conversion.
///
/// `forward` maps a byte to its float representation (identity `/255` when
/// not linearizing, sRGB-to-linear when it is); `inverse` is its approximate
/// right inverse, used at pack time.
pub struct GammaLut {
    forward: [f32; 256],
    linear: bool,
}

impl GammaLut {
    /// `linear == false`: `forward` is the identity table `byte/255`, and
    /// pack time is a plain scale-and-round.
    /// `linear == true`: `forward` applies the sRGB electro-optical transfer
    /// function; pack time applies its analytic inverse (a per-byte table
    /// inverse would need far more than 256 buckets to resolve the srgb
    /// curve's compressed dark end without visible banding).
    pub fn new(linear: bool) -> Self {
        let mut forward = [0f32; 256];
        for (i, f) in forward.iter_mut().enumerate() {
            let x = i as f32 / 255.0;
            *f = if linear { srgb_to_linear(x) } else { x };
        }
        Self { forward, linear }
    }

    #[inline]
    pub fn decode(&self, byte: u8) -> f32 {
        self.forward[byte as usize]
    }

    /// Pack a float back to a byte, applying the inverse transfer function
    /// when this LUT linearizes.
    #[inline]
    pub fn encode(&self, value: f32) -> u8 {
        let value = value.clamp(0.0, 1.0);
        let encoded = if self.linear { linear_to_srgb(value) } else { value };
        clamp_to_u8(encoded * 255.0)
    }
}

fn srgb_to_linear(x: f32) -> f32 {
    if x <= 0.04045 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(x: f32) -> f32 {
    if x <= 0.0031308 {
        x * 12.92
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    }
}

/// An owned row-major float buffer, one call's scratch space.
#[derive(Debug, Clone)]
pub struct BitmapFloat {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub float_stride: usize,
    pub is_linear: bool,
    data: Vec<f32>,
}

impl BitmapFloat {
    pub fn zeroed(width: u32, height: u32, channels: u8, is_linear: bool) -> Self {
        let float_stride = width as usize * channels as usize;
        let data = vec![0f32; float_stride * height as usize];
        Self { width, height, channels, float_stride, is_linear, data }
    }

    #[inline]
    pub fn row(&self, y: u32) -> &[f32] {
        let start = y as usize * self.float_stride;
        &self.data[start..start + self.width as usize * self.channels as usize]
    }

    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [f32] {
        let start = y as usize * self.float_stride;
        let len = self.width as usize * self.channels as usize;
        &mut self.data[start..start + len]
    }

    /// Unpack one row of an 8-bit bitmap into this float buffer's row `y`,
    /// through `lut`.
    pub fn unpack_row(&mut self, y: u32, src_row: &[u8], channels: u8, lut: &GammaLut) {
        let dst = self.row_mut(y);
        for (d, s) in dst.iter_mut().zip(src_row.iter()) {
            *d = lut.decode(*s);
        }
        let _ = channels;
    }

    /// Pack one row of this float buffer back into 8-bit bytes, through `lut`.
    pub fn pack_row(&self, y: u32, dst_row: &mut [u8], lut: &GammaLut) {
        let src = self.row(y);
        for (d, s) in dst_row.iter_mut().zip(src.iter()) {
            *d = lut.encode(*s);
        }
    }
}
