use std::fmt;

use glam::I64Vec2;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Which compressed axis a coordinate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum PolygonError {
    #[error("malformed vertex list: {reason}")]
    #[diagnostic(
        code(day_9::parse),
        help("every line must look like `X,Y` with base-10 integers")
    )]
    Parse {
        #[source_code]
        src: String,
        #[label("here")]
        span: SourceSpan,
        reason: String,
    },

    #[error("polygon has no vertices")]
    #[diagnostic(code(day_9::empty))]
    Empty,

    #[error("edge {index} from {from} to {to} is not axis-aligned")]
    #[diagnostic(
        code(day_9::diagonal_edge),
        help("only rectilinear polygons are supported")
    )]
    DiagonalEdge {
        index: usize,
        from: I64Vec2,
        to: I64Vec2,
    },

    #[error("coordinate {value} is missing from the compressed {axis} axis")]
    #[diagnostic(code(day_9::missing_coordinate))]
    MissingCoordinate { axis: Axis, value: i64 },

    #[error("no interior cell found around the first vertex {vertex}")]
    #[diagnostic(code(day_9::no_seed))]
    NoSeed { vertex: I64Vec2 },

    #[error("cell {cell} lies outside the {width}x{height} grid starting at {min}")]
    #[diagnostic(code(day_9::out_of_bounds))]
    OutOfBounds {
        cell: I64Vec2,
        min: I64Vec2,
        width: usize,
        height: usize,
    },

    #[error("rectangle between {a} and {b} is too large to measure")]
    #[diagnostic(code(day_9::area_overflow))]
    AreaOverflow { a: I64Vec2, b: I64Vec2 },

    #[error("flood fill escaped the polygon at {cell}")]
    #[diagnostic(
        code(day_9::flood_fill_escaped),
        help("the perimeter is not closed or the seed was picked outside of it")
    )]
    FloodFillEscaped { cell: I64Vec2 },
}
