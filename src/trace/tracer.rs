use crate::mask::BinaryGrid;
use crate::types::{BorderKind, Point};

/// Clockwise 8-neighbor ring, `(dx, dy)` with `y` growing downward.
const CW_NEIGHBORS: [(i32, i32); 8] = [
    (-1, 0),  // w
    (-1, -1), // nw
    (0, -1),  // n
    (1, -1),  // ne
    (1, 0),   // e
    (1, 1),   // se
    (0, 1),   // s
    (-1, 1),  // sw
];

const WEST: usize = 0;
const EAST: usize = 4;

/// One traced border before collection: the kind tag plus the walked loop.
#[derive(Clone, Debug, PartialEq)]
pub struct Border {
    pub kind: BorderKind,
    pub points: Vec<Point>,
}

/// Border-following state over one binarized grid.
///
/// `labels` starts as 1 for foreground and 0 for background. Each traced
/// border gets the next counter value (first border is 2); walked cells are
/// marked `+nbd`, or `-nbd` when the walk examined the cell's east neighbor
/// and found background. The negative mark is what keeps the raster scan
/// from re-starting an already-traced border, including the lower rows of a
/// multi-row hole.
pub(super) struct BorderTracer {
    width: i32,
    height: i32,
    labels: Vec<i32>,
    nbd: i32,
    borders: Vec<Border>,
}

impl BorderTracer {
    pub(super) fn new(grid: &BinaryGrid) -> Self {
        debug_assert_eq!(
            grid.data.len(),
            grid.w * grid.h,
            "binary grid storage must match its dimensions"
        );
        let labels = grid.data.iter().map(|&c| i32::from(c != 0)).collect();
        Self {
            width: grid.w as i32,
            height: grid.h as i32,
            labels,
            nbd: 1,
            borders: Vec::new(),
        }
    }

    pub(super) fn extract(mut self) -> Vec<Border> {
        for y in 0..self.height {
            for x in 0..self.width {
                self.process_cell(x, y);
            }
        }
        self.borders
    }

    /// Start-rule check for one scan position.
    ///
    /// An untraced foreground cell with background to its west starts an
    /// outer border; otherwise a foreground cell with background to its east
    /// starts a hole border. A cell satisfying both starts the outer one:
    /// its east-side background is then the surrounding background, not a
    /// pocket.
    fn process_cell(&mut self, x: i32, y: i32) {
        let v = self.label_at(x, y);
        if v == 0 {
            return;
        }
        if v == 1 && self.label_at(x - 1, y) == 0 {
            self.nbd += 1;
            self.follow_border(Point::new(x, y), WEST, BorderKind::Outer);
        } else if v >= 1 && self.label_at(x + 1, y) == 0 {
            self.nbd += 1;
            self.follow_border(Point::new(x, y), EAST, BorderKind::Hole);
        }
    }

    /// Walk one border starting at `start`, whose neighbor in direction
    /// `from_dir` is the background cell that triggered the start rule.
    fn follow_border(&mut self, start: Point, from_dir: usize, kind: BorderKind) {
        let Some(first_dir) = self.first_cw_neighbor(start, from_dir) else {
            // No foreground neighbor at all: a single-cell region.
            self.set_label(start, -self.nbd);
            self.borders.push(Border {
                kind,
                points: vec![start],
            });
            return;
        };
        let first = neighbor(start, first_dir);

        let mut points = Vec::new();
        let mut prev = first;
        let mut cur = start;
        loop {
            let (next, east_zero) = self.next_ccw_neighbor(cur, prev);
            if east_zero {
                self.set_label(cur, -self.nbd);
            } else if self.label_of(cur) == 1 {
                self.set_label(cur, self.nbd);
            }
            points.push(cur);
            // Back at the start cell in the starting configuration.
            if next == start && cur == first {
                break;
            }
            prev = cur;
            cur = next;
        }
        self.borders.push(Border { kind, points });
    }

    /// First foreground neighbor of `center`, scanning clockwise from
    /// `from_dir` inclusive. `None` for an isolated cell.
    fn first_cw_neighbor(&self, center: Point, from_dir: usize) -> Option<usize> {
        for k in 0..8 {
            let d = (from_dir + k) % 8;
            if self.label_of(neighbor(center, d)) != 0 {
                return Some(d);
            }
        }
        None
    }

    /// First foreground neighbor of `center` counterclockwise, starting just
    /// past the direction of `prev`.
    ///
    /// Also reports whether the east neighbor of `center` was examined and
    /// found to be background during the search; that examination is what
    /// earns `center` a negative label.
    fn next_ccw_neighbor(&self, center: Point, prev: Point) -> (Point, bool) {
        let start = dir_between(center, prev);
        let mut east_zero = false;
        for k in 1..8 {
            let d = (start + 8 - k) % 8;
            let q = neighbor(center, d);
            if self.label_of(q) != 0 {
                return (q, east_zero);
            }
            if d == EAST {
                east_zero = true;
            }
        }
        // Only `prev` remains after seven misses: the walk doubles back.
        (prev, east_zero)
    }

    /// Label at (x, y); out-of-grid reads are background.
    #[inline]
    fn label_at(&self, x: i32, y: i32) -> i32 {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return 0;
        }
        self.labels[(y * self.width + x) as usize]
    }

    #[inline]
    fn label_of(&self, p: Point) -> i32 {
        self.label_at(p.x, p.y)
    }

    #[inline]
    fn set_label(&mut self, p: Point, v: i32) {
        let i = (p.y * self.width + p.x) as usize;
        self.labels[i] = v;
    }
}

#[inline]
fn neighbor(p: Point, dir: usize) -> Point {
    let (dx, dy) = CW_NEIGHBORS[dir];
    Point::new(p.x + dx, p.y + dy)
}

/// Index in `CW_NEIGHBORS` of the step from `from` to its 8-neighbor `to`.
#[inline]
fn dir_between(from: Point, to: Point) -> usize {
    let delta = (to.x - from.x, to.y - from.y);
    debug_assert!(
        CW_NEIGHBORS.contains(&delta),
        "cells must be 8-adjacent, got delta {delta:?}"
    );
    CW_NEIGHBORS
        .iter()
        .position(|&offset| offset == delta)
        .unwrap_or(WEST)
}
