// engine/src/ops/extend.rs
#![deny(unsafe_code)]

use ndarray::{Array3, Axis, s};

use super::checks::check_extension_extent;
use super::constants::{GridStack, GridView, SelectionView};
use super::error::GridAxis;
use super::stack::stack_layers;

/// How the new half of a doubled canvas is produced.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExtensionMode {
    /// New half is the mirror image, restricted to the mirrored selection.
    Mirror,
    /// New half repeats the selected cells at the same offsets.
    Duplicate,
}

/// Double the canvas along `axis`. The original occupies the first half; the second half
/// starts zeroed and receives only selected content.
///
/// An extent above `MAX_EXTENSION_EXTENT` returns the (stacked) grid unchanged.
pub fn extend(
    grid: GridView<'_>,
    selection: SelectionView<'_>,
    axis: GridAxis,
    mode: ExtensionMode,
) -> GridStack {
    let (layers, rows, cols) = selection.dim();
    let extent = match axis {
        GridAxis::Rows => rows,
        GridAxis::Cols => cols,
    };
    if let Err(e) = check_extension_extent(axis, extent) {
        log::warn!("extend: {e}; returning the grid unchanged");
        return stack_layers(grid, selection);
    }

    let shape = match axis {
        GridAxis::Rows => (layers, rows * 2, cols),
        GridAxis::Cols => (layers, rows, cols * 2),
    };
    let mut out = Array3::zeros(shape);
    for (l, sel) in selection.axis_iter(Axis(0)).enumerate() {
        let mut layer = out.index_axis_mut(Axis(0), l);
        layer.slice_mut(s![..rows, ..cols]).assign(&grid);
        let mut half = match axis {
            GridAxis::Rows => layer.slice_mut(s![rows.., ..]),
            GridAxis::Cols => layer.slice_mut(s![.., cols..]),
        };
        for ((r, c), v) in half.indexed_iter_mut() {
            let (sr, sc) = match (mode, axis) {
                (ExtensionMode::Duplicate, _) => (r, c),
                (ExtensionMode::Mirror, GridAxis::Rows) => (rows - 1 - r, c),
                (ExtensionMode::Mirror, GridAxis::Cols) => (r, cols - 1 - c),
            };
            if sel[[sr, sc]] {
                *v = grid[[sr, sc]];
            }
        }
    }
    out
}

pub fn mirror_horizontally(grid: GridView<'_>, selection: SelectionView<'_>) -> GridStack {
    extend(grid, selection, GridAxis::Cols, ExtensionMode::Mirror)
}

pub fn mirror_vertically(grid: GridView<'_>, selection: SelectionView<'_>) -> GridStack {
    extend(grid, selection, GridAxis::Rows, ExtensionMode::Mirror)
}

pub fn duplicate_horizontally(grid: GridView<'_>, selection: SelectionView<'_>) -> GridStack {
    extend(grid, selection, GridAxis::Cols, ExtensionMode::Duplicate)
}

pub fn duplicate_vertically(grid: GridView<'_>, selection: SelectionView<'_>) -> GridStack {
    extend(grid, selection, GridAxis::Rows, ExtensionMode::Duplicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};

    #[test]
    fn mirror_horizontally_keeps_only_the_mirrored_selection() {
        let grid = array![[1, 2, 3], [4, 5, 6]];
        let mut sel = Array3::from_elem((1, 2, 3), false);
        sel[[0, 0, 2]] = true;
        sel[[0, 1, 0]] = true;
        let out = mirror_horizontally(grid.view(), sel.view());
        assert_eq!(
            out.index_axis(Axis(0), 0),
            array![[1, 2, 3, 3, 0, 0], [4, 5, 6, 0, 0, 4]]
        );
    }

    #[test]
    fn mirror_vertically_full_selection() {
        let grid = array![[1, 2], [3, 4]];
        let sel = Array3::from_elem((1, 2, 2), true);
        let out = mirror_vertically(grid.view(), sel.view());
        assert_eq!(
            out.index_axis(Axis(0), 0),
            array![[1, 2], [3, 4], [3, 4], [1, 2]]
        );
    }

    #[test]
    fn duplicate_copies_selected_cells_verbatim() {
        let grid = array![[1, 2, 3], [4, 5, 6]];
        let mut sel = Array3::from_elem((1, 2, 3), false);
        sel[[0, 0, 2]] = true;
        let h = duplicate_horizontally(grid.view(), sel.view());
        assert_eq!(
            h.index_axis(Axis(0), 0),
            array![[1, 2, 3, 0, 0, 3], [4, 5, 6, 0, 0, 0]]
        );
        let v = duplicate_vertically(grid.view(), sel.view());
        assert_eq!(
            v.index_axis(Axis(0), 0),
            array![[1, 2, 3], [4, 5, 6], [0, 0, 3], [0, 0, 0]]
        );
    }

    #[test]
    fn oversized_extent_returns_the_grid() {
        let grid = Array2::from_shape_fn((2, 16), |(r, c)| (r * 16 + c) as i32);
        let sel = Array3::from_elem((2, 2, 16), true);
        let out = mirror_horizontally(grid.view(), sel.view());
        assert_eq!(out.dim(), (2, 2, 16));
        assert_eq!(out.index_axis(Axis(0), 1), grid);

        // The row extent is still small enough for vertical extension.
        assert_eq!(mirror_vertically(grid.view(), sel.view()).dim(), (2, 4, 16));
    }
}
