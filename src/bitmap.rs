//! The 8-bit BGRA/BGR surface type the pipeline reads from and writes to.
//!
//! `Bitmap8`/`Bitmap8Mut` borrow their pixel data rather than owning it —
//! the pipeline never allocates a caller-visible buffer, only scratch space
//! that's released at the end of [`crate::pipeline::resize`].

use crate::error::ResizeError;

/// An axis-aligned pixel rectangle, in source- or destination-pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

/// A read-only view over an 8-bit BGRA/BGR surface.
///
/// `(x, y, c)` is read at byte offset `y*stride + x*channels + c`, per the
/// invariant in §3 of the spec this crate implements.
#[derive(Debug, Clone, Copy)]
pub struct Bitmap8<'a> {
    pub width: u32,
    pub height: u32,
    pub stride: usize,
    pub channels: u8,
    pub alpha_meaningful: bool,
    data: &'a [u8],
    /// Row offset, in pixels, applied before `width`; nonzero for a view
    /// produced by [`Bitmap8::cropped`].
    x_offset: u32,
    y_offset: u32,
}

/// A mutable view over an 8-bit BGRA/BGR surface.
#[derive(Debug)]
pub struct Bitmap8Mut<'a> {
    pub width: u32,
    pub height: u32,
    pub stride: usize,
    pub channels: u8,
    pub alpha_meaningful: bool,
    data: &'a mut [u8],
    x_offset: u32,
    y_offset: u32,
}

fn validate(
    width: u32,
    height: u32,
    stride: usize,
    channels: u8,
    data_len: usize,
) -> Result<(), ResizeError> {
    if width == 0 || height == 0 {
        return Err(ResizeError::bad_pixel_format("width and height must be > 0"));
    }
    if channels != 3 && channels != 4 {
        return Err(ResizeError::bad_pixel_format(format!(
            "unsupported channel count {channels}; only BGR (3) and BGRA (4) are supported"
        )));
    }
    let min_stride = width as usize * channels as usize;
    if stride < min_stride {
        return Err(ResizeError::bad_pixel_format(format!(
            "stride {stride} is smaller than width*channels {min_stride}"
        )));
    }
    let required = stride
        .checked_mul(height as usize)
        .ok_or(ResizeError::OutOfMemory)?;
    if data_len < required {
        return Err(ResizeError::bad_pixel_format(format!(
            "buffer of {data_len} bytes is too small for stride*height {required}"
        )));
    }
    Ok(())
}

impl<'a> Bitmap8<'a> {
    pub fn new(
        data: &'a [u8],
        width: u32,
        height: u32,
        stride: usize,
        channels: u8,
        alpha_meaningful: bool,
    ) -> Result<Self, ResizeError> {
        validate(width, height, stride, channels, data.len())?;
        Ok(Self { width, height, stride, channels, alpha_meaningful, data, x_offset: 0, y_offset: 0 })
    }

    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = (y as usize + self.y_offset as usize) * self.stride
            + self.x_offset as usize * self.channels as usize;
        &self.data[start..start + self.width as usize * self.channels as usize]
    }

    /// The crop rectangle must lie entirely within `[0, width) x [0, height)`.
    pub fn validate_crop(&self, crop: Rect) -> Result<(), ResizeError> {
        let x_end = crop.x.checked_add(crop.width);
        let y_end = crop.y.checked_add(crop.height);
        match (x_end, y_end) {
            (Some(x_end), Some(y_end)) if x_end <= self.width && y_end <= self.height => Ok(()),
            _ => Err(ResizeError::geometry_unsupported(format!(
                "crop rect {crop:?} falls outside source bitmap {}x{}",
                self.width, self.height
            ))),
        }
    }

    /// A view restricted to `crop`, sharing the same backing data.
    pub fn cropped(&self, crop: Rect) -> Result<Bitmap8<'a>, ResizeError> {
        self.validate_crop(crop)?;
        Ok(Bitmap8 {
            width: crop.width,
            height: crop.height,
            stride: self.stride,
            channels: self.channels,
            alpha_meaningful: self.alpha_meaningful,
            data: self.data,
            x_offset: self.x_offset + crop.x,
            y_offset: self.y_offset + crop.y,
        })
    }
}

impl<'a> Bitmap8Mut<'a> {
    pub fn new(
        data: &'a mut [u8],
        width: u32,
        height: u32,
        stride: usize,
        channels: u8,
        alpha_meaningful: bool,
    ) -> Result<Self, ResizeError> {
        validate(width, height, stride, channels, data.len())?;
        Ok(Self { width, height, stride, channels, alpha_meaningful, data, x_offset: 0, y_offset: 0 })
    }

    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = (y as usize + self.y_offset as usize) * self.stride
            + self.x_offset as usize * self.channels as usize;
        let width_bytes = self.width as usize * self.channels as usize;
        &mut self.data[start..start + width_bytes]
    }

    pub fn as_bitmap8(&self) -> Bitmap8<'_> {
        Bitmap8 {
            width: self.width,
            height: self.height,
            stride: self.stride,
            channels: self.channels,
            alpha_meaningful: self.alpha_meaningful,
            data: self.data,
            x_offset: self.x_offset,
            y_offset: self.y_offset,
        }
    }

    /// Target area must be an axis-aligned box within the destination
    /// bitmap; non-axis-aligned target quadrilaterals are rejected per the
    /// redesign flag in §9 of the spec this crate implements (the original
    /// silently fell back to the host renderer; here it's an explicit error).
    pub fn validate_target(&self, target: Rect) -> Result<(), ResizeError> {
        let x_end = target.x.checked_add(target.width);
        let y_end = target.y.checked_add(target.height);
        match (x_end, y_end) {
            (Some(x_end), Some(y_end)) if x_end <= self.width && y_end <= self.height => Ok(()),
            _ => Err(ResizeError::geometry_unsupported(format!(
                "target rect {target:?} falls outside destination bitmap {}x{}",
                self.width, self.height
            ))),
        }
    }

    /// A mutable view restricted to `target`, sharing the same backing data.
    pub fn windowed(&mut self, target: Rect) -> Result<Bitmap8Mut<'_>, ResizeError> {
        self.validate_target(target)?;
        Ok(Bitmap8Mut {
            width: target.width,
            height: target.height,
            stride: self.stride,
            channels: self.channels,
            alpha_meaningful: self.alpha_meaningful,
            data: &mut *self.data,
            x_offset: self.x_offset + target.x,
            y_offset: self.y_offset + target.y,
        })
    }
}
