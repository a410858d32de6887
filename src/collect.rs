//! Assembly of traced borders into an ordered contour set.
//!
//! Borders arrive in raster discovery order and keep that order here.
//! The only transformation is the optional minimum point-count filter;
//! ids are assigned after filtering so they stay dense and equal to the
//! contour's index in the set.

use crate::trace::Border;
use crate::types::{Contour, ContourId, ContourSet};

use log::debug;

/// Turn traced borders into a `ContourSet`, dropping those with fewer
/// than `min_perimeter` points.
pub fn collect_contours(borders: Vec<Border>, min_perimeter: usize) -> ContourSet {
    let total = borders.len();
    let contours: Vec<Contour> = borders
        .into_iter()
        .filter(|border| border.points.len() >= min_perimeter)
        .enumerate()
        .map(|(index, border)| Contour {
            id: ContourId(index as u32),
            kind: border.kind,
            points: border.points,
        })
        .collect();
    let dropped = total - contours.len();
    if dropped > 0 {
        debug!(
            "dropped {dropped} of {total} contours below {min_perimeter} points"
        );
    }
    ContourSet { contours }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BorderKind, Point};

    fn border(kind: BorderKind, coords: &[(i32, i32)]) -> Border {
        Border {
            kind,
            points: coords.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        }
    }

    #[test]
    fn keeps_discovery_order_and_indexes_ids() {
        let borders = vec![
            border(BorderKind::Outer, &[(1, 1), (1, 2), (2, 2), (2, 1)]),
            border(BorderKind::Hole, &[(3, 3)]),
        ];
        let set = collect_contours(borders, 0);
        assert_eq!(set.len(), 2);
        assert_eq!(set.contours[0].id, ContourId(0));
        assert_eq!(set.contours[0].kind, BorderKind::Outer);
        assert_eq!(set.contours[1].id, ContourId(1));
        assert_eq!(set.contours[1].kind, BorderKind::Hole);
        assert_eq!(set.get(ContourId(1)).map(Contour::len), Some(1));
    }

    #[test]
    fn min_perimeter_drops_short_borders_and_reassigns_ids() {
        let borders = vec![
            border(BorderKind::Outer, &[(0, 0)]),
            border(BorderKind::Outer, &[(2, 0), (2, 1), (3, 1), (3, 0)]),
            border(BorderKind::Outer, &[(5, 0), (6, 1)]),
        ];
        let set = collect_contours(borders, 3);
        assert_eq!(set.len(), 1, "only the four-point border survives");
        assert_eq!(set.contours[0].id, ContourId(0));
        assert_eq!(set.contours[0].points[0], Point::new(2, 0));
    }

    #[test]
    fn zero_threshold_keeps_everything() {
        let borders = vec![
            border(BorderKind::Outer, &[(0, 0)]),
            border(BorderKind::Hole, &[(4, 4)]),
        ];
        let set = collect_contours(borders, 0);
        assert_eq!(set.len(), 2);
    }
}
