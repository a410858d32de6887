//! Mask views and grids shared by the tracing stages.

use std::fmt;

/// Dimension violation reported at the pipeline entry.
///
/// Raised when the width or height is zero or the buffer length does not
/// equal `width * height`. No tracing work happens on invalid input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidInput {
    pub width: usize,
    pub height: usize,
    pub len: usize,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid mask input: {}x{} grid does not match a buffer of {} values",
            self.width, self.height, self.len
        )
    }
}

impl std::error::Error for InvalidInput {}

/// Read-only view over a contiguous row-major `f32` mask.
///
/// `data[y * w + x]` is the cell at column `x`, row `y`. The view does not
/// own the buffer, so masks produced by an external pipeline can be traced
/// without a copy.
#[derive(Clone, Copy, Debug)]
pub struct MaskF32<'a> {
    /// Mask width in cells
    pub w: usize,
    /// Mask height in cells
    pub h: usize,
    /// Backing storage in row-major order, `w * h` values
    pub data: &'a [f32],
}

impl<'a> MaskF32<'a> {
    /// Wrap a buffer, checking that `data` holds exactly `w * h` values.
    pub fn new(w: usize, h: usize, data: &'a [f32]) -> Result<Self, InvalidInput> {
        let view = Self { w, h, data };
        view.validate()?;
        Ok(view)
    }

    /// Re-check the dimension invariant for views assembled field by field.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if self.w == 0 || self.h == 0 || self.data.len() != self.w * self.h {
            return Err(InvalidInput {
                width: self.w,
                height: self.h,
                len: self.data.len(),
            });
        }
        Ok(())
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    /// Get the cell value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// One row as a contiguous slice.
    pub fn row(&self, y: usize) -> &'a [f32] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

/// Owned W×H grid of 0/1 cells produced by binarization.
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryGrid {
    /// Grid width in cells
    pub w: usize,
    /// Grid height in cells
    pub h: usize,
    /// One byte per cell, 1 = foreground
    pub data: Vec<u8>,
}

impl BinaryGrid {
    /// Construct an all-background grid of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0u8; w * h],
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    /// Get the cell at (x, y).
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the cell at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
}
