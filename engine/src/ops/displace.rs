// engine/src/ops/displace.rs
#![deny(unsafe_code)]

/*
Displacement operators: {copy, cut} x {overwrite, accumulate}.

All four share one pipeline per layer:
1. Collect selected cells in row-major order.
2. Shift each by (shift_y rows, shift_x cols); shifted cells outside the grid are dropped.
3. Read source values at the original positions of the surviving cells (before any write).
4. Cut variants zero EVERY originally selected cell, including the dropped ones.
5. Write (last write wins, row-major) or add (all sources landing on a cell are summed).
*/

use ndarray::{ArrayView2, ArrayViewMut2, Axis};

use super::constants::{Color, GridStack, GridView, SelectionView};
use super::stack::stack_layers;

/// How shifted values combine with the destination cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PasteMode {
    Overwrite,
    Accumulate,
}

/// Whether the source cells keep their value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SourceMode {
    Copy,
    Cut,
}

#[inline]
fn shifted(index: usize, shift: isize, limit: usize) -> Option<usize> {
    let moved = (index as isize).checked_add(shift)?;
    (0..limit as isize).contains(&moved).then_some(moved as usize)
}

/// Apply one displacement to a single layer in place.
pub(crate) fn displace_layer(
    mut layer: ArrayViewMut2<'_, Color>,
    selection: ArrayView2<'_, bool>,
    shift_x: isize,
    shift_y: isize,
    source: SourceMode,
    paste: PasteMode,
) {
    let (rows, cols) = layer.dim();
    debug_assert_eq!(selection.dim(), (rows, cols));

    let mut moves: Vec<((usize, usize), Color)> = Vec::new();
    for ((r, c), &on) in selection.indexed_iter() {
        if !on {
            continue;
        }
        if let (Some(nr), Some(nc)) = (shifted(r, shift_y, rows), shifted(c, shift_x, cols)) {
            moves.push(((nr, nc), layer[[r, c]]));
        }
    }

    if source == SourceMode::Cut {
        layer.zip_mut_with(&selection, |v, &on| {
            if on {
                *v = 0;
            }
        });
    }

    for (dst, value) in moves {
        match paste {
            PasteMode::Overwrite => layer[dst] = value,
            // Not clamped to the palette.
            PasteMode::Accumulate => layer[dst] = layer[dst].wrapping_add(value),
        }
    }
}

/// Shared entry point for the four displacement operators.
pub fn displace(
    grid: GridView<'_>,
    selection: SelectionView<'_>,
    shift_x: isize,
    shift_y: isize,
    source: SourceMode,
    paste: PasteMode,
) -> GridStack {
    let mut out = stack_layers(grid, selection);
    for (layer, sel) in out.axis_iter_mut(Axis(0)).zip(selection.axis_iter(Axis(0))) {
        displace_layer(layer, sel, shift_x, shift_y, source, paste);
    }
    out
}

/// Copy selected cells by `(shift_x, shift_y)`, overwriting destinations.
pub fn copy_paste(
    grid: GridView<'_>,
    selection: SelectionView<'_>,
    shift_x: isize,
    shift_y: isize,
) -> GridStack {
    displace(grid, selection, shift_x, shift_y, SourceMode::Copy, PasteMode::Overwrite)
}

/// Copy selected cells by `(shift_x, shift_y)`, adding onto destinations.
pub fn copy_sum(
    grid: GridView<'_>,
    selection: SelectionView<'_>,
    shift_x: isize,
    shift_y: isize,
) -> GridStack {
    displace(grid, selection, shift_x, shift_y, SourceMode::Copy, PasteMode::Accumulate)
}

/// Move selected cells by `(shift_x, shift_y)`: sources are zeroed, destinations overwritten.
pub fn cut_paste(
    grid: GridView<'_>,
    selection: SelectionView<'_>,
    shift_x: isize,
    shift_y: isize,
) -> GridStack {
    displace(grid, selection, shift_x, shift_y, SourceMode::Cut, PasteMode::Overwrite)
}

/// Move selected cells by `(shift_x, shift_y)`: sources are zeroed, destinations summed.
pub fn cut_sum(
    grid: GridView<'_>,
    selection: SelectionView<'_>,
    shift_x: isize,
    shift_y: isize,
) -> GridStack {
    displace(grid, selection, shift_x, shift_y, SourceMode::Cut, PasteMode::Accumulate)
}
