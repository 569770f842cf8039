use std::fmt;

use bitvec::prelude::*;
use glam::I64Vec2;

use crate::error::PolygonError;

/// A dense boolean grid over the inclusive box `min..=max`.
///
/// Cells are addressed in the box's own coordinates; every access outside of
/// it is an error instead of a clamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    min: I64Vec2,
    width: usize,
    height: usize,
    cells: BitVec<u64, Lsb0>,
}

impl Grid {
    pub fn new(min: I64Vec2, max: I64Vec2) -> Self {
        let size = (max - min + I64Vec2::ONE).max(I64Vec2::ZERO);
        let width = size.x as usize;
        let height = size.y as usize;
        Self {
            min,
            width,
            height,
            cells: bitvec![u64, Lsb0; 0; width * height],
        }
    }

    /// An all-clear grid over the same box.
    pub fn cleared(&self) -> Self {
        Self {
            cells: bitvec![u64, Lsb0; 0; self.cells.len()],
            ..*self
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, cell: I64Vec2) -> bool {
        self.index(cell).is_some()
    }

    fn index(&self, cell: I64Vec2) -> Option<usize> {
        let local = cell - self.min;
        let x = usize::try_from(local.x).ok()?;
        let y = usize::try_from(local.y).ok()?;
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    fn checked_index(&self, cell: I64Vec2) -> Result<usize, PolygonError> {
        self.index(cell).ok_or(PolygonError::OutOfBounds {
            cell,
            min: self.min,
            width: self.width,
            height: self.height,
        })
    }

    pub fn get(&self, cell: I64Vec2) -> Result<bool, PolygonError> {
        Ok(self.cells[self.checked_index(cell)?])
    }

    pub fn set(&mut self, cell: I64Vec2, value: bool) -> Result<(), PolygonError> {
        let index = self.checked_index(cell)?;
        self.cells.set(index, value);
        Ok(())
    }

    /// Whether every cell of the inclusive rectangle spanned by `a` and `b` is set.
    pub fn all_set(&self, a: I64Vec2, b: I64Vec2) -> Result<bool, PolygonError> {
        let lo = a.min(b);
        let hi = a.max(b);
        for y in lo.y..=hi.y {
            let start = self.checked_index(I64Vec2::new(lo.x, y))?;
            let end = self.checked_index(I64Vec2::new(hi.x, y))?;
            if !self.cells[start..=end].all() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    #[cfg(test)]
    pub fn count_set(&self) -> usize {
        self.cells.count_ones()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.width) {
            for cell in row.iter().by_vals() {
                f.write_str(if cell { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
