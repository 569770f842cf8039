use glam::I64Vec2;
use tracing::info;

use crate::error::PolygonError;
use crate::grid::Grid;
use crate::parser::Point;
use crate::polygon::Polygon;

/// Chebyshev neighborhood, x-major.
const NEIGHBORS: [I64Vec2; 8] = [
    I64Vec2::new(-1, -1),
    I64Vec2::new(-1, 0),
    I64Vec2::new(-1, 1),
    I64Vec2::new(0, -1),
    I64Vec2::new(0, 1),
    I64Vec2::new(1, -1),
    I64Vec2::new(1, 0),
    I64Vec2::new(1, 1),
];

/// Picks the first neighbor of the polygon's first vertex that lies strictly
/// inside it.
pub fn find_seed(polygon: &Polygon) -> Result<Point, PolygonError> {
    let vertex = *polygon.vertices().first().ok_or(PolygonError::Empty)?;
    NEIGHBORS
        .iter()
        .map(|&offset| vertex + offset)
        .find(|&cell| polygon.contains(cell))
        .ok_or(PolygonError::NoSeed { vertex })
}

/// Fills every open cell of `blocked` that is 8-connected to `seed`.
///
/// A second grid remembers which cells are already on the stack, so no cell
/// is scheduled twice. Reaching the edge of the grid means the perimeter does
/// not enclose the seed, which is fatal. Returns the number of newly filled
/// cells.
pub fn flood_fill(blocked: &mut Grid, seed: Point) -> Result<usize, PolygonError> {
    let mut queued = blocked.cleared();
    let mut stack = Vec::with_capacity(blocked.width() + blocked.height());
    let mut filled = 0;

    queued.set(seed, true)?;
    stack.push(seed);

    info!(%seed, "starting flood fill");

    while let Some(cell) = stack.pop() {
        if blocked.get(cell)? {
            continue;
        }
        blocked.set(cell, true)?;
        filled += 1;

        for offset in NEIGHBORS {
            let neighbor = cell + offset;
            if !blocked.contains(neighbor) {
                return Err(PolygonError::FloodFillEscaped { cell: neighbor });
            }
            if blocked.get(neighbor)? || queued.get(neighbor)? {
                continue;
            }
            queued.set(neighbor, true)?;
            stack.push(neighbor);
        }
    }

    info!(filled, "flood fill complete");
    Ok(filled)
}
