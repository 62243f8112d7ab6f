// engine/src/ops/tiling.rs
#![deny(unsafe_code)]

use ndarray::{ArrayView2, Axis};

use super::constants::{GridStack, GridView, SelectionView};
use super::displace::{PasteMode, SourceMode, displace_layer};
use super::error::GridAxis;
use super::stack::stack_layers;

/// First and last row containing a selected cell.
fn selected_row_span(sel: ArrayView2<'_, bool>) -> Option<(usize, usize)> {
    let mut rows = sel
        .axis_iter(Axis(0))
        .enumerate()
        .filter(|(_, row)| row.iter().any(|&b| b))
        .map(|(r, _)| r);
    let first = rows.next()?;
    let last = rows.last().unwrap_or(first);
    Some((first, last))
}

/// Repeat each layer's selection along `axis`, shifted by whole multiples of its own span,
/// as far as the grid allows in both directions.
///
/// Pastes run nearest-first toward the top/left, then nearest-first toward the bottom/right,
/// each overwriting earlier writes. Empty layers are left unchanged.
pub fn tile(grid: GridView<'_>, selection: SelectionView<'_>, axis: GridAxis) -> GridStack {
    let mut out = stack_layers(grid, selection);
    for (l, (mut layer, sel)) in out
        .axis_iter_mut(Axis(0))
        .zip(selection.axis_iter(Axis(0)))
        .enumerate()
    {
        let span_sel = match axis {
            GridAxis::Rows => sel,
            GridAxis::Cols => sel.reversed_axes(),
        };
        let Some((first, last)) = selected_row_span(span_sel) else {
            log::debug!("tile: layer {l} has an empty selection");
            continue;
        };
        let extent = span_sel.nrows();
        let period = last - first + 1;
        let before = first.div_ceil(period);
        let after = (extent - last - 1).div_ceil(period);

        let offsets = (1..=before)
            .map(|i| -((i * period) as isize))
            .chain((1..=after).map(|i| (i * period) as isize));
        for offset in offsets {
            let (dx, dy) = match axis {
                GridAxis::Rows => (0, offset),
                GridAxis::Cols => (offset, 0),
            };
            displace_layer(
                layer.view_mut(),
                sel,
                dx,
                dy,
                SourceMode::Copy,
                PasteMode::Overwrite,
            );
        }
    }
    out
}

/// Tile each selection upward and downward.
pub fn copy_paste_vertically(grid: GridView<'_>, selection: SelectionView<'_>) -> GridStack {
    tile(grid, selection, GridAxis::Rows)
}

/// Tile each selection leftward and rightward.
pub fn copy_paste_horizontally(grid: GridView<'_>, selection: SelectionView<'_>) -> GridStack {
    tile(grid, selection, GridAxis::Cols)
}
