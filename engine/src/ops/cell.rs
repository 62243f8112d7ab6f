// engine/src/ops/cell.rs
#![deny(unsafe_code)]

/*
Cell-level primitives on a single grid (no selection stack).

Positions are flat row-major indices and wrap modulo the cell count, so any integer is a valid
position on a non-empty grid. Empty grids pass through unchanged.

Sequences parse from (name, args) pairs with `CellOp::from_name`; the Python module runs them
through `apply_cell_ops`.
*/

use ndarray::s;

use super::constants::{Color, Grid, GridView, PALETTE_SIZE};
use super::error::{GridAxis, OpError};
use super::geometry::rot90;

/// One primitive rewrite of a single grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CellOp {
    Transpose,
    /// Quarter turns counterclockwise, any integer (taken mod 4).
    Rotate(i64),
    Flip(GridAxis),
    DeleteCell(i64),
    /// Move a value; the source becomes 0.
    Drag { from: i64, to: i64 },
    /// Copy a value; the source keeps it.
    AltDrag { from: i64, to: i64 },
    /// Colour wraps modulo `PALETTE_SIZE`.
    ColorCell { pos: i64, color: i64 },
    /// Keep the block spanned by two positions (swapped if out of order).
    Crop { from: i64, to: i64 },
}

#[inline]
fn cell_at(grid: GridView<'_>, pos: i64) -> Option<(usize, usize)> {
    let cols = grid.ncols();
    let n = grid.len() as i64;
    if n == 0 {
        return None;
    }
    let p = pos.rem_euclid(n) as usize;
    Some((p / cols, p % cols))
}

pub fn transpose(grid: GridView<'_>) -> Grid {
    grid.t().to_owned()
}

pub fn rotate(grid: GridView<'_>, n: i64) -> Grid {
    rot90(grid, n.rem_euclid(4) as u8)
}

pub fn flip(grid: GridView<'_>, axis: GridAxis) -> Grid {
    match axis {
        GridAxis::Rows => grid.slice(s![..;-1, ..]).to_owned(),
        GridAxis::Cols => grid.slice(s![.., ..;-1]).to_owned(),
    }
}

pub fn delete_cell(grid: GridView<'_>, pos: i64) -> Grid {
    color_cell_raw(grid, pos, 0)
}

pub fn color_cell(grid: GridView<'_>, pos: i64, color: i64) -> Grid {
    color_cell_raw(grid, pos, color.rem_euclid(i64::from(PALETTE_SIZE)) as Color)
}

fn color_cell_raw(grid: GridView<'_>, pos: i64, color: Color) -> Grid {
    let mut out = grid.to_owned();
    if let Some(cell) = cell_at(grid, pos) {
        out[cell] = color;
    }
    out
}

fn move_cell(grid: GridView<'_>, from: i64, to: i64, clear_source: bool) -> Grid {
    let mut out = grid.to_owned();
    if let (Some(src), Some(dst)) = (cell_at(grid, from), cell_at(grid, to)) {
        out[dst] = grid[src];
        if clear_source {
            out[src] = 0;
        }
    }
    out
}

pub fn drag(grid: GridView<'_>, from: i64, to: i64) -> Grid {
    move_cell(grid, from, to, true)
}

pub fn alt_drag(grid: GridView<'_>, from: i64, to: i64) -> Grid {
    move_cell(grid, from, to, false)
}

/// Rows between the two positions' rows and columns from the first position's column to the
/// second's. The column range is empty when the first column lies right of the second.
pub fn crop(grid: GridView<'_>, from: i64, to: i64) -> Grid {
    let n = grid.len() as i64;
    if n == 0 {
        return grid.to_owned();
    }
    let (a, b) = (from.rem_euclid(n), to.rem_euclid(n));
    let (a, b) = if a > b { (b, a) } else { (a, b) };
    let (Some((r1, c1)), Some((r2, c2))) = (cell_at(grid, a), cell_at(grid, b)) else {
        return grid.to_owned();
    };
    let col_end = (c2 + 1).max(c1);
    grid.slice(s![r1..=r2, c1..col_end]).to_owned()
}

/// (name, number of integer arguments) for every cell primitive.
const CELL_NAMES: &[(&str, usize)] = &[
    ("transpose", 0),
    ("rotate", 1),
    ("flip", 1),
    ("delete_cell", 1),
    ("drag", 2),
    ("alt_drag", 2),
    ("color_cell", 2),
    ("crop", 2),
];

impl CellOp {
    pub fn all_names() -> impl Iterator<Item = &'static str> {
        CELL_NAMES.iter().map(|(name, _)| *name)
    }

    /// Parse a primitive name plus integer arguments. `flip` takes an axis: even is rows,
    /// odd is columns. Extra arguments are ignored.
    pub fn from_name(name: &str, args: &[i64]) -> Result<Self, OpError> {
        let key = name.trim().to_ascii_lowercase();
        let (static_name, arity) = CELL_NAMES
            .iter()
            .find(|(n, _)| *n == key)
            .copied()
            .ok_or_else(|| OpError::UnknownTransform(name.to_string()))?;
        if args.len() < arity {
            return Err(OpError::MissingArgument {
                transform: static_name,
                expected: arity,
                got: args.len(),
            });
        }
        let op = match static_name {
            "transpose" => CellOp::Transpose,
            "rotate" => CellOp::Rotate(args[0]),
            "flip" if args[0].rem_euclid(2) == 0 => CellOp::Flip(GridAxis::Rows),
            "flip" => CellOp::Flip(GridAxis::Cols),
            "delete_cell" => CellOp::DeleteCell(args[0]),
            "drag" => CellOp::Drag { from: args[0], to: args[1] },
            "alt_drag" => CellOp::AltDrag { from: args[0], to: args[1] },
            "color_cell" => CellOp::ColorCell { pos: args[0], color: args[1] },
            "crop" => CellOp::Crop { from: args[0], to: args[1] },
            _ => return Err(OpError::UnknownTransform(name.to_string())),
        };
        Ok(op)
    }

    pub fn apply(&self, grid: GridView<'_>) -> Grid {
        match *self {
            CellOp::Transpose => transpose(grid),
            CellOp::Rotate(n) => rotate(grid, n),
            CellOp::Flip(axis) => flip(grid, axis),
            CellOp::DeleteCell(pos) => delete_cell(grid, pos),
            CellOp::Drag { from, to } => drag(grid, from, to),
            CellOp::AltDrag { from, to } => alt_drag(grid, from, to),
            CellOp::ColorCell { pos, color } => color_cell(grid, pos, color),
            CellOp::Crop { from, to } => crop(grid, from, to),
        }
    }
}

/// Apply `ops` left to right.
pub fn apply_cell_ops(grid: GridView<'_>, ops: &[CellOp]) -> Grid {
    ops.iter()
        .fold(grid.to_owned(), |acc, op| op.apply(acc.view()))
}
