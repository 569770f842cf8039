use glam::I64Vec2;
use itertools::Itertools;
use tracing::{debug, warn};

use crate::error::PolygonError;
use crate::grid::Grid;
use crate::parser::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    fn between(from: Point, to: Point) -> Option<Self> {
        if from.y == to.y {
            Some(Self::Horizontal)
        } else if from.x == to.x {
            Some(Self::Vertical)
        } else {
            None
        }
    }
}

/// Lattice-point area of the rectangle with opposite corners `a` and `b`.
///
/// Spans are taken in `i128`, so any pair of `i64` corners has a width and
/// height; only their product can overflow.
pub fn lattice_area(a: Point, b: Point) -> Result<u128, PolygonError> {
    let span = |p: i64, q: i64| (i128::from(p) - i128::from(q)).unsigned_abs() + 1;
    span(a.x, b.x)
        .checked_mul(span(a.y, b.y))
        .ok_or(PolygonError::AreaOverflow { a, b })
}

/// An axis-aligned segment between two consecutive vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
    pub orientation: Orientation,
}

impl Edge {
    pub fn lo(&self) -> Point {
        self.start.min(self.end)
    }

    pub fn hi(&self) -> Point {
        self.start.max(self.end)
    }

    /// Whether `point` lies on the segment, endpoints included.
    pub fn touches(&self, point: Point) -> bool {
        let (lo, hi) = (self.lo(), self.hi());
        lo.x <= point.x && point.x <= hi.x && lo.y <= point.y && point.y <= hi.y
    }

    /// Whether a ray cast from `origin` towards +x crosses this edge.
    ///
    /// Vertical edges are half-open: their upper end is trimmed by one unit, so
    /// a vertex shared by two vertical runs is counted for only one of them.
    /// A ray running along a horizontal edge is settled by the vertical edges
    /// at both of its ends, so horizontal edges never count on their own.
    fn crossed_by_ray(&self, origin: Point) -> bool {
        match self.orientation {
            Orientation::Horizontal => false,
            Orientation::Vertical => {
                let (lo, hi) = (self.lo(), self.hi() - I64Vec2::Y);
                lo.y <= origin.y && origin.y <= hi.y && origin.x <= lo.x
            }
        }
    }

    /// Every lattice cell on the segment, from `start` to `end` inclusive.
    pub fn cells(&self) -> impl Iterator<Item = Point> {
        let start = self.start;
        let delta = self.end - self.start;
        let step = delta.signum();
        let len = delta.abs().max_element();
        (0..=len).map(move |i| start + step * i)
    }
}

/// A closed rectilinear polygon; the last vertex connects back to the first.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<Point>,
    edges: Vec<Edge>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Result<Self, PolygonError> {
        if vertices.is_empty() {
            return Err(PolygonError::Empty);
        }

        let edges = vertices
            .iter()
            .copied()
            .circular_tuple_windows()
            .enumerate()
            .map(|(index, (from, to))| {
                let orientation = Orientation::between(from, to)
                    .ok_or(PolygonError::DiagonalEdge { index, from, to })?;
                Ok(Edge {
                    start: from,
                    end: to,
                    orientation,
                })
            })
            .collect::<Result<Vec<_>, PolygonError>>()?;

        Ok(Self { vertices, edges })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Ray-casting containment test. Points on the perimeter are outside.
    pub fn contains(&self, point: Point) -> bool {
        if self.edges.iter().any(|edge| edge.touches(point)) {
            return false;
        }

        let crossings = self
            .edges
            .iter()
            .filter(|edge| edge.crossed_by_ray(point))
            .count();

        crossings % 2 == 1
    }

    /// Marks every perimeter cell on `grid`.
    ///
    /// Returns how many cells were already marked by another edge. Such
    /// overlaps mean the perimeter crosses itself; they are reported but do not
    /// stop the rasterization.
    pub fn rasterize(&self, grid: &mut Grid) -> Result<usize, PolygonError> {
        let mut overlaps = 0;
        let closing = self.edges.len() - 1;
        for (index, edge) in self.edges.iter().enumerate() {
            for cell in edge.cells() {
                // Each edge starts where the previous one ended, and the closing
                // edge ends on the first vertex.
                let shared_vertex = cell == edge.start || (index == closing && cell == edge.end);
                if grid.get(cell)? && !shared_vertex {
                    warn!(edge = index, %cell, "self-intersecting perimeter detected");
                    overlaps += 1;
                }
                grid.set(cell, true)?;
            }
        }
        debug!(edges = self.edges.len(), overlaps, "perimeter marked");
        Ok(overlaps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn polygon(raw: &[(i64, i64)]) -> Polygon {
        Polygon::new(raw.iter().map(|&(x, y)| Point::new(x, y)).collect())
            .expect("test polygon should be rectilinear")
    }

    fn square() -> Polygon {
        polygon(&[(0, 0), (0, 4), (4, 4), (4, 0)])
    }

    fn example() -> Polygon {
        polygon(&[
            (7, 1),
            (7, 3),
            (2, 3),
            (2, 5),
            (9, 5),
            (9, 7),
            (11, 7),
            (11, 1),
        ])
    }

    #[rstest]
    #[case((2, 2), true)]
    #[case((1, 3), true)]
    #[case((10, 10), false)]
    #[case((2, 0), false)]
    #[case((4, 2), false)]
    #[case((0, 0), false)]
    #[case((-1, 0), false)]
    #[case((-1, 2), false)]
    #[case((-1, 4), false)]
    #[case((5, 2), false)]
    fn classifies_points_against_a_square(#[case] (x, y): (i64, i64), #[case] inside: bool) {
        assert_eq!(inside, square().contains(Point::new(x, y)));
    }

    #[rstest]
    #[case((8, 2), true)]
    #[case((3, 4), true)]
    #[case((10, 6), true)]
    #[case((8, 4), true)]
    #[case((3, 2), false)]
    #[case((8, 6), false)]
    #[case((1, 4), false)]
    #[case((0, 3), false)]
    #[case((0, 5), false)]
    #[case((12, 1), false)]
    #[case((7, 2), false)]
    #[case((5, 5), false)]
    fn classifies_points_against_a_notched_polygon(
        #[case] (x, y): (i64, i64),
        #[case] inside: bool,
    ) {
        assert_eq!(inside, example().contains(Point::new(x, y)));
    }

    #[rstest]
    #[case((7, 1), (11, 7), 35)]
    #[case((11, 7), (7, 1), 35)]
    #[case((2, 5), (11, 1), 50)]
    #[case((3, 3), (3, 3), 1)]
    #[case((-2, 0), (2, 0), 5)]
    #[case((0, 0), (5_000_000_000, 5_000_000_000), 25_000_000_010_000_000_001)]
    #[case((i64::MIN, 0), (i64::MAX, 0), 1 << 64)]
    fn lattice_area_counts_both_ends(
        #[case] (ax, ay): (i64, i64),
        #[case] (bx, by): (i64, i64),
        #[case] area: u128,
    ) -> miette::Result<()> {
        assert_eq!(area, lattice_area(Point::new(ax, ay), Point::new(bx, by))?);
        Ok(())
    }

    #[test]
    fn lattice_area_reports_overflow() {
        let result = lattice_area(Point::new(i64::MIN, i64::MIN), Point::new(i64::MAX, i64::MAX));
        assert!(matches!(result, Err(PolygonError::AreaOverflow { .. })));
    }

    #[test]
    fn diagonal_edge_is_rejected() {
        let result = Polygon::new(vec![Point::new(0, 0), Point::new(3, 3), Point::new(0, 3)]);
        assert!(matches!(
            result,
            Err(PolygonError::DiagonalEdge { index: 0, .. })
        ));
    }

    #[test]
    fn closing_edge_must_be_axis_aligned_too() {
        let result = Polygon::new(vec![Point::new(0, 0), Point::new(0, 3), Point::new(2, 3)]);
        assert!(matches!(
            result,
            Err(PolygonError::DiagonalEdge { index: 2, .. })
        ));
    }

    #[test]
    fn empty_polygon_is_rejected() {
        assert!(matches!(Polygon::new(vec![]), Err(PolygonError::Empty)));
    }

    #[test]
    fn edge_cells_run_from_start_to_end() {
        let edge = Edge {
            start: Point::new(3, 5),
            end: Point::new(3, 2),
            orientation: Orientation::Vertical,
        };
        assert_eq!(
            vec![
                Point::new(3, 5),
                Point::new(3, 4),
                Point::new(3, 3),
                Point::new(3, 2)
            ],
            edge.cells().collect::<Vec<_>>()
        );
    }

    #[test]
    fn rasterizes_a_simple_perimeter() -> miette::Result<()> {
        let square = square();
        let mut grid = Grid::new(Point::ZERO, Point::new(4, 4));

        assert_eq!(0, square.rasterize(&mut grid)?);
        assert_eq!(16, grid.count_set());
        assert!(grid.get(Point::new(0, 2))?);
        assert!(!grid.get(Point::new(2, 2))?);
        Ok(())
    }

    #[test]
    fn reports_vertex_landing_on_an_earlier_edge() -> miette::Result<()> {
        // The run down x = 2 ends in the middle of the first edge.
        let tee = polygon(&[(0, 2), (4, 2), (4, 4), (2, 4), (2, 2), (2, 0), (0, 0)]);
        let mut grid = Grid::new(Point::ZERO, Point::new(4, 4));

        assert_eq!(1, tee.rasterize(&mut grid)?);
        Ok(())
    }

    #[test]
    fn reports_self_intersections() -> miette::Result<()> {
        // A figure eight whose two loops share the segment from (2,0) to (2,2).
        let eight = polygon(&[(0, 0), (0, 2), (4, 2), (4, 0), (2, 0), (2, 2), (2, 0)]);
        let mut grid = Grid::new(Point::ZERO, Point::new(4, 2));

        assert!(eight.rasterize(&mut grid)? > 0);
        Ok(())
    }
}
