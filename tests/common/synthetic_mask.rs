/// Generates an all-background mask.
pub fn empty_mask(width: usize, height: usize) -> Vec<f32> {
    assert!(width > 0 && height > 0, "mask dimensions must be positive");
    vec![0.0; width * height]
}

/// Generates a mask with a filled rectangle of foreground.
pub fn rect_mask(
    width: usize,
    height: usize,
    x0: usize,
    y0: usize,
    rw: usize,
    rh: usize,
) -> Vec<f32> {
    assert!(width > 0 && height > 0, "mask dimensions must be positive");
    assert!(
        x0 + rw <= width && y0 + rh <= height,
        "rectangle must fit inside the mask"
    );

    let mut mask = vec![0.0f32; width * height];
    for y in y0..y0 + rh {
        for x in x0..x0 + rw {
            mask[y * width + x] = 1.0;
        }
    }
    mask
}

/// Generates a 5x5 mask with a one-cell-thick foreground ring.
pub fn ring_mask_5x5() -> Vec<f32> {
    let mut mask = rect_mask(5, 5, 1, 1, 3, 3);
    mask[2 * 5 + 2] = 0.0;
    mask
}

/// Generates a checkerboard of `low` and `high` values, `high` on even cells.
pub fn checkerboard_mask(width: usize, height: usize, low: f32, high: f32) -> Vec<f32> {
    assert!(width > 0 && height > 0, "mask dimensions must be positive");

    let mut mask = vec![0.0f32; width * height];
    for y in 0..height {
        for x in 0..width {
            mask[y * width + x] = if (x + y) % 2 == 0 { high } else { low };
        }
    }
    mask
}
