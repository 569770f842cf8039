use itertools::Itertools;
use miette::*;
use tracing::{info, trace};

use crate::compress::CompressedPolygon;
use crate::error::PolygonError;
use crate::fill::{find_seed, flood_fill};
use crate::grid::Grid;
use crate::parser::{parse_points, Point};
use crate::polygon::{lattice_area, Polygon};

// -----------------------------------------------------------------------------
// Enclosure Engine
// -----------------------------------------------------------------------------

/// The polygon on its compressed grid with perimeter and interior filled in.
pub struct EnclosureEngine {
    compressed: CompressedPolygon,
    filled: Grid,
}

impl EnclosureEngine {
    pub fn build(points: Vec<Point>) -> Result<Self, PolygonError> {
        let original = Polygon::new(points)?;
        let compressed = CompressedPolygon::new(original.vertices())?;
        let polygon = Polygon::new(compressed.vertices.clone())?;

        let (min, max) = compressed.bounds().ok_or(PolygonError::Empty)?;
        let mut filled = Grid::new(min, max);
        info!(
            width = filled.width(),
            height = filled.height(),
            "compressed grid size"
        );

        let seed = find_seed(&polygon)?;
        info!(%seed, "insertion tile");

        polygon.rasterize(&mut filled)?;
        flood_fill(&mut filled, seed)?;
        trace!("filled grid:\n{filled}");

        Ok(Self { compressed, filled })
    }

    /// Whether the rectangle spanned by two compressed vertices lies on
    /// perimeter or interior cells only.
    pub fn encloses(&self, a: Point, b: Point) -> Result<bool, PolygonError> {
        self.filled.all_set(a, b)
    }

    /// Largest lattice area, in original coordinates, of a rectangle with two
    /// vertices as opposite corners that stays inside the polygon.
    pub fn largest_rectangle(&self) -> Result<u128, PolygonError> {
        self.compressed
            .vertices
            .iter()
            .tuple_combinations()
            .try_fold(0, |best, (&a, &b)| {
                if !self.encloses(a, b)? {
                    return Ok(best);
                }
                let area =
                    lattice_area(self.compressed.original(a)?, self.compressed.original(b)?)?;
                Ok(best.max(area))
            })
    }
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let points = parse_points(input)?;
    let engine = EnclosureEngine::build(points)?;
    let max_area = engine.largest_rectangle()?;

    Ok(max_area.to_string())
}
