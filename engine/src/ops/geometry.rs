// engine/src/ops/geometry.rs
#![deny(unsafe_code)]

/*
Region-local geometric rewrites.

Every operator here reads the input grid, replicates it once per selection layer and rewrites
only the cells of that layer's bounding rectangle (flips, crop) or bounding square (rotation,
diagonal mirrors). Cells outside the region are left as in the input grid.

Rotation follows the "rotate the whole grid, copy back the region" construction: the rotated
block is written back into the region in row-major order. For a square region this is exactly
the local rotation; for a region clipped by a too-small grid it is a row-major reshape.
*/

use ndarray::{ArrayView2, Axis, s};

use super::checks::check_rotations;
use super::constants::{Color, Grid, GridStack, GridView, PAD_COLOR, SelectionView};
use super::region::{Region, bounding_rectangles, bounding_squares};
use super::stack::stack_layers;

/// Rewrite each layer's region with `f(block)`. Layers without a region are untouched.
fn rewrite_regions<F>(
    grid: GridView<'_>,
    selection: SelectionView<'_>,
    regions: &[Option<Region>],
    mut f: F,
) -> GridStack
where
    F: FnMut(ArrayView2<'_, Color>) -> Option<Grid>,
{
    let mut out = stack_layers(grid, selection);
    for (l, region) in regions.iter().enumerate() {
        let Some(r) = region else {
            continue;
        };
        let src = grid.slice(s![r.top..=r.bottom, r.left..=r.right]);
        let Some(block) = f(src) else {
            log::debug!("layer {l}: region {r:?} left unchanged");
            continue;
        };
        let mut dst = out.slice_mut(s![l, r.top..=r.bottom, r.left..=r.right]);
        if block.dim() == dst.dim() {
            dst.assign(&block);
        } else {
            for (d, v) in dst.iter_mut().zip(block.iter()) {
                *d = *v;
            }
        }
    }
    out
}

/// Quarter turns counterclockwise. `n` is taken mod 4.
pub(crate) fn rot90(block: ArrayView2<'_, Color>, n: u8) -> Grid {
    match n % 4 {
        1 => block.slice(s![.., ..;-1]).reversed_axes().to_owned(),
        2 => block.slice(s![..;-1, ..;-1]).to_owned(),
        3 => block.slice(s![..;-1, ..]).reversed_axes().to_owned(),
        _ => block.to_owned(),
    }
}

/// Reverse row order inside each layer's bounding rectangle.
pub fn flip_vertical(grid: GridView<'_>, selection: SelectionView<'_>) -> GridStack {
    let rects = bounding_rectangles(selection);
    rewrite_regions(grid, selection, &rects, |b| {
        Some(b.slice(s![..;-1, ..]).to_owned())
    })
}

/// Reverse column order inside each layer's bounding rectangle.
pub fn flip_horizontal(grid: GridView<'_>, selection: SelectionView<'_>) -> GridStack {
    let rects = bounding_rectangles(selection);
    rewrite_regions(grid, selection, &rects, |b| {
        Some(b.slice(s![.., ..;-1]).to_owned())
    })
}

/// Rotate each layer's bounding square by `90 * num_rotations` degrees counterclockwise.
///
/// `num_rotations` outside `1..=3` returns the unrotated stack.
pub fn rotate(grid: GridView<'_>, selection: SelectionView<'_>, num_rotations: u8) -> GridStack {
    if let Err(e) = check_rotations(i64::from(num_rotations)) {
        log::warn!("rotate: {e}; returning the grid unchanged");
        return stack_layers(grid, selection);
    }
    let squares = bounding_squares(selection);
    rewrite_regions(grid, selection, &squares, |b| Some(rot90(b, num_rotations)))
}

pub fn rotate90(grid: GridView<'_>, selection: SelectionView<'_>) -> GridStack {
    rotate(grid, selection, 1)
}

pub fn rotate180(grid: GridView<'_>, selection: SelectionView<'_>) -> GridStack {
    rotate(grid, selection, 2)
}

pub fn rotate270(grid: GridView<'_>, selection: SelectionView<'_>) -> GridStack {
    rotate(grid, selection, 3)
}

/// Overwrite every cell outside the bounding rectangle with `PAD_COLOR`. Shape is preserved.
///
/// An empty layer has no rectangle, so the whole layer becomes padding.
pub fn crop(grid: GridView<'_>, selection: SelectionView<'_>) -> GridStack {
    let rects = bounding_rectangles(selection);
    let mut out = stack_layers(grid, selection);
    for (rect, mut layer) in rects.iter().zip(out.axis_iter_mut(Axis(0))) {
        for ((r, c), v) in layer.indexed_iter_mut() {
            if !rect.is_some_and(|rect| rect.contains(r, c)) {
                *v = PAD_COLOR;
            }
        }
    }
    out
}

/// Transpose each layer's bounding square (mirror along the top-left to bottom-right diagonal).
///
/// A square clipped by the grid edge cannot be transposed in place; that layer is skipped.
pub fn mirror_main_diagonal(grid: GridView<'_>, selection: SelectionView<'_>) -> GridStack {
    let squares = bounding_squares(selection);
    rewrite_regions(grid, selection, &squares, |b| {
        (b.nrows() == b.ncols()).then(|| b.t().to_owned())
    })
}

/// Mirror each layer's bounding square along the top-right to bottom-left diagonal.
pub fn mirror_anti_diagonal(grid: GridView<'_>, selection: SelectionView<'_>) -> GridStack {
    let squares = bounding_squares(selection);
    rewrite_regions(grid, selection, &squares, |b| {
        (b.nrows() == b.ncols()).then(|| b.slice(s![..;-1, ..;-1]).reversed_axes().to_owned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array3, array};

    fn all_true(rows: usize, cols: usize) -> Array3<bool> {
        Array3::from_elem((1, rows, cols), true)
    }

    #[test]
    fn rot90_is_counterclockwise() {
        let b = array![[1, 2], [3, 4]];
        assert_eq!(rot90(b.view(), 1), array![[2, 4], [1, 3]]);
        assert_eq!(rot90(b.view(), 2), array![[4, 3], [2, 1]]);
        assert_eq!(rot90(b.view(), 3), array![[3, 1], [4, 2]]);
        assert_eq!(rot90(b.view(), 4), b);
    }

    #[test]
    fn rot90_of_rectangle_swaps_extents() {
        let b = array![[1, 2, 3], [4, 5, 6]];
        assert_eq!(rot90(b.view(), 1), array![[3, 6], [2, 5], [1, 4]]);
    }

    #[test]
    fn flip_vertical_is_local_to_the_rectangle() {
        let grid = array![[1, 2, 3], [4, 5, 6], [7, 8, 9]];
        let mut sel = Array3::from_elem((1, 3, 3), false);
        sel[[0, 0, 0]] = true;
        sel[[0, 1, 1]] = true;
        let out = flip_vertical(grid.view(), sel.view());
        assert_eq!(
            out.index_axis(Axis(0), 0),
            array![[4, 5, 3], [1, 2, 6], [7, 8, 9]]
        );
    }

    #[test]
    fn flip_horizontal_full_grid() {
        let grid = array![[1, 2, 3], [4, 5, 6]];
        let out = flip_horizontal(grid.view(), all_true(2, 3).view());
        assert_eq!(out.index_axis(Axis(0), 0), array![[3, 2, 1], [6, 5, 4]]);
    }

    #[test]
    fn rotate_rejects_out_of_range_counts() {
        let grid = array![[1, 2], [3, 4]];
        let sel = all_true(2, 2);
        assert_eq!(rotate(grid.view(), sel.view(), 0).index_axis(Axis(0), 0), grid);
        assert_eq!(rotate(grid.view(), sel.view(), 4).index_axis(Axis(0), 0), grid);
    }

    #[test]
    fn rotate_acts_on_the_bounding_square() {
        // Selection is a 1x2 bar; its bounding square is rows 0..=1, cols 0..=1.
        let grid = array![[1, 2, 0], [3, 4, 0], [0, 0, 9]];
        let mut sel = Array3::from_elem((1, 3, 3), false);
        sel[[0, 1, 0]] = true;
        sel[[0, 1, 1]] = true;
        let out = rotate90(grid.view(), sel.view());
        assert_eq!(
            out.index_axis(Axis(0), 0),
            array![[2, 4, 0], [1, 3, 0], [0, 0, 9]]
        );
    }

    #[test]
    fn rotate_on_a_clipped_square_refills_row_major() {
        // 2x3 grid: the 3x3 square clips to the whole grid. The rotated 3x2 block
        // [[3, 6], [2, 5], [1, 4]] is written back row by row.
        let grid = array![[1, 2, 3], [4, 5, 6]];
        let out = rotate90(grid.view(), all_true(2, 3).view());
        assert_eq!(out.index_axis(Axis(0), 0), array![[3, 6, 2], [5, 1, 4]]);

        // Same-shape rotation of the clipped region still reverses it.
        let out = rotate180(grid.view(), all_true(2, 3).view());
        assert_eq!(out.index_axis(Axis(0), 0), array![[6, 5, 4], [3, 2, 1]]);
    }

    #[test]
    fn crop_pads_outside_the_rectangle() {
        let grid = array![[1, 2, 3], [4, 5, 6]];
        let mut sel = Array3::from_elem((2, 2, 3), false);
        sel[[0, 0, 1]] = true;
        sel[[0, 1, 2]] = true;
        let out = crop(grid.view(), sel.view());
        assert_eq!(out.index_axis(Axis(0), 0), array![[-1, 2, 3], [-1, 5, 6]]);
        assert!(out.index_axis(Axis(0), 1).iter().all(|&v| v == PAD_COLOR));
    }

    #[test]
    fn diagonal_mirrors() {
        let grid = array![[1, 2], [3, 4]];
        let sel = all_true(2, 2);
        assert_eq!(
            mirror_main_diagonal(grid.view(), sel.view()).index_axis(Axis(0), 0),
            array![[1, 3], [2, 4]]
        );
        assert_eq!(
            mirror_anti_diagonal(grid.view(), sel.view()).index_axis(Axis(0), 0),
            array![[4, 2], [3, 1]]
        );
    }

    #[test]
    fn diagonal_mirror_skips_clipped_squares() {
        let grid = array![[1, 2, 3], [4, 5, 6]];
        let sel = all_true(2, 3);
        let out = mirror_main_diagonal(grid.view(), sel.view());
        assert_eq!(out.index_axis(Axis(0), 0), grid);
    }

    #[test]
    fn layers_use_their_own_regions() {
        let grid = array![[1, 2, 0], [3, 4, 0], [0, 0, 0]];
        let mut sel = Array3::from_elem((2, 3, 3), false);
        sel.slice_mut(s![0, 0..2, 0..2]).fill(true);
        sel[[1, 2, 2]] = true;
        let out = mirror_main_diagonal(grid.view(), sel.view());
        assert_eq!(
            out.index_axis(Axis(0), 0),
            array![[1, 3, 0], [2, 4, 0], [0, 0, 0]]
        );
        assert_eq!(out.index_axis(Axis(0), 1), grid);
    }
}
