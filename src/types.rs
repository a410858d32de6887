use serde::Serialize;

/// Integer grid coordinate. `x` is the column, `y` the row, `y` grows
/// downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Row index (equals `y`).
    #[inline]
    pub fn row(&self) -> i32 {
        self.y
    }

    /// Column index (equals `x`).
    #[inline]
    pub fn col(&self) -> i32 {
        self.x
    }

    /// True when `other` is one of the eight neighbors of `self`
    /// (Chebyshev distance one).
    #[inline]
    pub fn is_neighbor8(&self, other: &Point) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx.max(dy) == 1
    }
}

/// Which side of the foreground a traced boundary encloses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderKind {
    /// Boundary between a region and the background surrounding it.
    Outer,
    /// Boundary between a region and a background pocket enclosed by it.
    Hole,
}

/// Stable identifier of a contour within one trace pass; equals the
/// contour's index in its `ContourSet`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContourId(pub u32);

/// One closed boundary loop.
///
/// Points are in trace order; the last point is 8-adjacent to the first and
/// the closing edge is implicit. A traced loop is never empty; a single
/// isolated cell yields a one-point loop. In one-cell-thick configurations a
/// cell may appear twice within the loop (the walk doubles back along a
/// spur).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Contour {
    pub id: ContourId,
    pub kind: BorderKind,
    pub points: Vec<Point>,
}

impl Contour {
    /// Number of traced points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Euclidean length of the closed loop, including the wrap-around edge.
    pub fn perimeter(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        self.points
            .iter()
            .zip(self.points.iter().cycle().skip(1))
            .map(|(a, b)| {
                let dx = f64::from(a.x - b.x);
                let dy = f64::from(a.y - b.y);
                (dx * dx + dy * dy).sqrt()
            })
            .sum()
    }

    /// Shoelace signed area of the loop. Outer and hole loops produced by
    /// the tracer wind in opposite directions, so their signs differ.
    pub fn signed_area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let acc: f64 = self
            .points
            .iter()
            .zip(self.points.iter().cycle().skip(1))
            .map(|(a, b)| f64::from(a.x) * f64::from(b.y) - f64::from(b.x) * f64::from(a.y))
            .sum();
        acc * 0.5
    }

    /// Arithmetic mean of the loop points.
    pub fn centroid(&self) -> [f32; 2] {
        if self.points.is_empty() {
            return [0.0, 0.0];
        }
        let n = self.points.len() as f32;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0f32, 0.0f32), |(sx, sy), p| {
                (sx + p.x as f32, sy + p.y as f32)
            });
        [sx / n, sy / n]
    }
}

/// Contours of one trace pass, in discovery order.
///
/// `contours[i].id == ContourId(i as u32)`; the collector maintains the
/// invariant.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContourSet {
    pub contours: Vec<Contour>,
}

impl ContourSet {
    /// Number of contours.
    #[inline]
    pub fn len(&self) -> usize {
        self.contours.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Contour by id (id equals index).
    pub fn get(&self, id: ContourId) -> Option<&Contour> {
        self.contours.get(id.0 as usize)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contour> {
        self.contours.iter()
    }

    /// Flat marshaling layout for FFI-style consumers: interleaved x, y
    /// pairs plus per-contour start offsets. `offsets[k]` indexes the first
    /// point pair of contour `k`; contour `k` ends where contour `k + 1`
    /// begins (or at `points.len() / 2` for the last one).
    pub fn flatten(&self) -> (Vec<i32>, Vec<i32>) {
        let total: usize = self.contours.iter().map(|c| c.points.len()).sum();
        let mut points = Vec::with_capacity(total * 2);
        let mut offsets = Vec::with_capacity(self.contours.len());
        for contour in &self.contours {
            offsets.push((points.len() / 2) as i32);
            for p in &contour.points {
                points.push(p.x);
                points.push(p.y);
            }
        }
        (points, offsets)
    }
}

impl<'a> IntoIterator for &'a ContourSet {
    type Item = &'a Contour;
    type IntoIter = std::slice::Iter<'a, Contour>;

    fn into_iter(self) -> Self::IntoIter {
        self.contours.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_loop() -> Contour {
        Contour {
            id: ContourId(0),
            kind: BorderKind::Outer,
            points: vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(1, 1),
                Point::new(1, 0),
            ],
        }
    }

    #[test]
    fn signed_area_flips_with_orientation() {
        let forward = square_loop();
        let mut reversed = square_loop();
        reversed.points.reverse();
        let area_fwd = forward.signed_area();
        let area_rev = reversed.signed_area();
        assert!(
            (area_fwd + area_rev).abs() < 1e-9,
            "areas must be opposite: {area_fwd} vs {area_rev}"
        );
        assert!(
            (area_fwd.abs() - 1.0).abs() < 1e-9,
            "unit square must have unit area, got {area_fwd}"
        );
    }

    #[test]
    fn centroid_is_the_mean_of_loop_points() {
        assert_eq!(square_loop().centroid(), [0.5, 0.5]);
    }

    #[test]
    fn perimeter_includes_the_closing_edge() {
        let p = square_loop().perimeter();
        assert!((p - 4.0).abs() < 1e-9, "expected 4.0, got {p}");
    }

    #[test]
    fn one_point_loop_has_zero_extent() {
        let c = Contour {
            id: ContourId(0),
            kind: BorderKind::Outer,
            points: vec![Point::new(3, 4)],
        };
        assert_eq!(c.len(), 1);
        assert_eq!(c.perimeter(), 0.0);
        assert_eq!(c.signed_area(), 0.0);
        assert_eq!(c.centroid(), [3.0, 4.0]);
    }

    #[test]
    fn neighbor8_is_chebyshev_distance_one() {
        let p = Point::new(2, 2);
        assert!(p.is_neighbor8(&Point::new(3, 3)));
        assert!(p.is_neighbor8(&Point::new(2, 1)));
        assert!(!p.is_neighbor8(&p));
        assert!(!p.is_neighbor8(&Point::new(4, 2)));
    }

    #[test]
    fn flatten_partitions_points_by_offsets() {
        let set = ContourSet {
            contours: vec![
                Contour {
                    id: ContourId(0),
                    kind: BorderKind::Outer,
                    points: vec![Point::new(1, 2), Point::new(2, 2)],
                },
                Contour {
                    id: ContourId(1),
                    kind: BorderKind::Hole,
                    points: vec![Point::new(5, 6)],
                },
            ],
        };
        let (points, offsets) = set.flatten();
        assert_eq!(points, vec![1, 2, 2, 2, 5, 6]);
        assert_eq!(offsets, vec![0, 2]);
    }
}
