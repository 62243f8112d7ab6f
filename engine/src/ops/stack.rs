// engine/src/ops/stack.rs
#![deny(unsafe_code)]

use ndarray::{Array3, Axis};

use super::constants::{GridStack, GridView, SelectionView};

/// Replicate `grid` once per selection layer.
///
/// Every operator starts from this stack: before any rewrite, `stack[i] == grid` for all `i`.
/// Grid and selection must agree on rows/cols (checked in debug builds only).
pub fn stack_layers(grid: GridView<'_>, selection: SelectionView<'_>) -> GridStack {
    let (layers, rows, cols) = selection.dim();
    debug_assert_eq!(
        grid.dim(),
        (rows, cols),
        "grid {:?} and selection {:?} disagree on rows/cols",
        grid.dim(),
        selection.dim()
    );

    let mut out = Array3::zeros((layers, rows, cols));
    for mut layer in out.axis_iter_mut(Axis(0)) {
        layer.assign(&grid);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array3, array};

    #[test]
    fn every_layer_equals_the_grid() {
        let grid = array![[1, 2, 3], [4, 5, 6]];
        let sel = Array3::from_elem((3, 2, 3), false);
        let stack = stack_layers(grid.view(), sel.view());
        assert_eq!(stack.dim(), (3, 2, 3));
        for layer in stack.outer_iter() {
            assert_eq!(layer, grid);
        }
    }

    #[test]
    fn zero_layers_yield_an_empty_stack() {
        let grid = array![[7]];
        let sel = Array3::from_elem((0, 1, 1), true);
        assert_eq!(stack_layers(grid.view(), sel.view()).dim(), (0, 1, 1));
    }
}
