//! Mask binarization: scalar values to a 0/1 grid.

use crate::mask::{BinaryGrid, InvalidInput, MaskF32};

/// Default foreground cutoff, matching sigmoid-activated mask conventions.
pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// Threshold a scalar mask into a 0/1 grid.
///
/// A cell is foreground iff `value >= threshold`, so a cell exactly at the
/// threshold counts as foreground. No smoothing or neighborhood operations
/// are applied. This is also the single place where the mask dimension
/// invariant is checked, so the tracing pipeline validates once at entry.
pub fn binarize(mask: &MaskF32<'_>, threshold: f32) -> Result<BinaryGrid, InvalidInput> {
    mask.validate()?;
    let mut grid = BinaryGrid::new(mask.w, mask.h);
    for y in 0..mask.h {
        let src = mask.row(y);
        let start = y * mask.w;
        let dst = &mut grid.data[start..start + mask.w];
        for (cell, &value) in dst.iter_mut().zip(src) {
            *cell = u8::from(value >= threshold);
        }
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::MaskF32;

    #[test]
    fn cell_at_threshold_is_foreground() {
        let data = [0.49f32, 0.5, 0.51, 0.0];
        let mask = MaskF32::new(2, 2, &data).unwrap();
        let grid = binarize(&mask, 0.5).unwrap();
        assert_eq!(grid.data, vec![0, 1, 1, 0]);
    }

    #[test]
    fn all_below_threshold_is_all_background() {
        let data = vec![0.2f32; 9];
        let mask = MaskF32::new(3, 3, &data).unwrap();
        let grid = binarize(&mask, DEFAULT_THRESHOLD).unwrap();
        assert!(grid.data.iter().all(|&c| c == 0));
        assert_eq!((grid.w, grid.h), (3, 3));
    }

    #[test]
    fn dimension_mismatch_is_rejected_at_entry() {
        let data = vec![1.0f32; 5];
        let mask = MaskF32 {
            w: 3,
            h: 2,
            data: &data,
        };
        let err = binarize(&mask, 0.5).unwrap_err();
        assert_eq!(err.width, 3);
        assert_eq!(err.height, 2);
        assert_eq!(err.len, 5);
    }
}
