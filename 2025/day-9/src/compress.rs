use glam::I64Vec2;

use crate::error::{Axis, PolygonError};
use crate::parser::Point;

/// Sorted, deduplicated coordinates of one axis.
///
/// The position of a value in `values` is its rank, so ranks are dense and
/// follow the ordering of the original coordinates.
#[derive(Debug, Clone)]
pub struct AxisMap {
    axis: Axis,
    values: Vec<i64>,
}

impl AxisMap {
    pub fn new(axis: Axis, coords: impl IntoIterator<Item = i64>) -> Self {
        let mut values: Vec<i64> = coords.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        Self { axis, values }
    }

    /// Rank of an original coordinate.
    pub fn rank(&self, value: i64) -> Result<i64, PolygonError> {
        self.values
            .binary_search(&value)
            .map(|index| index as i64)
            .map_err(|_| PolygonError::MissingCoordinate {
                axis: self.axis,
                value,
            })
    }

    /// Original coordinate behind a rank.
    pub fn value(&self, rank: i64) -> Result<i64, PolygonError> {
        usize::try_from(rank)
            .ok()
            .and_then(|index| self.values.get(index).copied())
            .ok_or(PolygonError::MissingCoordinate {
                axis: self.axis,
                value: rank,
            })
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.values.len()
    }
}

/// The polygon re-indexed onto dense per-axis ranks.
#[derive(Debug, Clone)]
pub struct CompressedPolygon {
    pub x_map: AxisMap,
    pub y_map: AxisMap,
    /// Same order as the input, one entry per original vertex.
    pub vertices: Vec<Point>,
}

impl CompressedPolygon {
    pub fn new(points: &[Point]) -> Result<Self, PolygonError> {
        let x_map = AxisMap::new(Axis::X, points.iter().map(|p| p.x));
        let y_map = AxisMap::new(Axis::Y, points.iter().map(|p| p.y));

        let vertices = points
            .iter()
            .map(|p| Ok(Point::new(x_map.rank(p.x)?, y_map.rank(p.y)?)))
            .collect::<Result<Vec<_>, PolygonError>>()?;

        Ok(Self {
            x_map,
            y_map,
            vertices,
        })
    }

    /// Maps a compressed cell back to original coordinates.
    pub fn original(&self, cell: I64Vec2) -> Result<Point, PolygonError> {
        Ok(Point::new(self.x_map.value(cell.x)?, self.y_map.value(cell.y)?))
    }

    /// Inclusive bounding box of the compressed vertices.
    pub fn bounds(&self) -> Option<(I64Vec2, I64Vec2)> {
        let first = *self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(min, max), &v| (min.min(v), max.max(v))),
        )
    }
}
