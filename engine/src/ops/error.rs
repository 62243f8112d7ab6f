// engine/src/ops/error.rs
#![deny(unsafe_code)]

use thiserror::Error;

use super::constants::Color;

/// Grid axis an operator acts along.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GridAxis {
    Rows,
    Cols,
}

impl std::fmt::Display for GridAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridAxis::Rows => f.write_str("rows"),
            GridAxis::Cols => f.write_str("cols"),
        }
    }
}

/// Rejected operator invocation.
///
/// Raw operator functions never return this: they degrade to the unchanged stack.
/// `Transform::try_apply` reports it instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpError {
    #[error("invalid color {color}: expected {min}..={max}")]
    InvalidColor { color: i64, min: Color, max: Color },

    #[error("invalid rotation count {0}: expected 1..=3 quarter turns")]
    InvalidRotation(i64),

    #[error("invalid scale factor {0}: expected >= 1")]
    InvalidScaleFactor(i64),

    #[error("{axis} extent {extent} exceeds the maximum of {max} for canvas extension")]
    ExtentTooLarge {
        axis: GridAxis,
        extent: usize,
        max: usize,
    },

    #[error("selection shape {selection:?} does not match grid shape {grid:?}")]
    ShapeMismatch {
        grid: (usize, usize),
        selection: (usize, usize),
    },

    #[error("unknown transform: {0:?}")]
    UnknownTransform(String),

    #[error("transform {transform} expects {expected} argument(s), got {got}")]
    MissingArgument {
        transform: &'static str,
        expected: usize,
        got: usize,
    },
}
