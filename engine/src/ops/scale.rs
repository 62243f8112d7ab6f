// engine/src/ops/scale.rs
#![deny(unsafe_code)]

/*
Selection upscaling with centroid recentring.

Each selected row (vupscale) or column (hupscale) is repeated `factor` times. The enlarged
image is then cut back to the original extent through a window chosen so the selection's
centre of mass stays where it was:

1. Centre a window of the original extent on the upscaled centroid; if it runs off an edge,
   slide it flush against that edge.
2. Measure the centroid of the selection inside that window; shift the window by the
   truncated difference to the original centroid, then slide it back inside again.
3. Zero the original selection and write the windowed cells that are selected.

Two passes only: the result is not guaranteed to hit the original centroid exactly.
*/

use ndarray::{Array3, ArrayView2, ArrayViewMut2, Axis};

use super::constants::{Color, GridStack, GridView, Selection, SelectionView};
use super::error::GridAxis;
use super::stack::stack_layers;

/// Mean row index of selected cells after repeating every row `factor` times.
///
/// Closed form of the repeated mask's centre of mass: `k * mean + (k - 1) / 2`.
fn upscaled_row_centroid(sel: ArrayView2<'_, bool>, factor: usize) -> Option<f64> {
    let mut count = 0u64;
    let mut sum = 0u64;
    for ((r, _), &on) in sel.indexed_iter() {
        if on {
            sum += r as u64;
            count += 1;
        }
    }
    (count > 0).then(|| {
        let k = factor as f64;
        k * (sum as f64 / count as f64) + (k - 1.0) / 2.0
    })
}

/// Mean local row of selected cells inside the upscaled window starting at row `upper`.
fn window_row_centroid(sel: ArrayView2<'_, bool>, factor: usize, upper: usize) -> Option<f64> {
    let (rows, cols) = sel.dim();
    let mut count = 0u64;
    let mut sum = 0u64;
    for i in 0..rows {
        let src = (upper + i) / factor;
        for c in 0..cols {
            if sel[[src, c]] {
                sum += i as u64;
                count += 1;
            }
        }
    }
    (count > 0).then(|| sum as f64 / count as f64)
}

/// Keep a window of `extent` rows inside `[0, total)`.
#[inline]
fn slide_inside(upper: &mut i64, lower: &mut i64, extent: i64, total: i64) {
    if *lower >= total {
        *lower = total;
        *upper = total - extent;
    } else if *upper <= 0 {
        *upper = 0;
        *lower = extent;
    }
}

/// First upscaled row of the recentred window, or `None` for an empty layer.
///
/// Arithmetic saturates, so any `factor >= 1` is safe; the window always satisfies
/// `(upper + rows - 1) / factor < rows`.
fn recentred_window(sel: ArrayView2<'_, bool>, factor: usize) -> Option<usize> {
    let rows = sel.nrows();
    let original = upscaled_row_centroid(sel, 1)?;
    let upscaled = upscaled_row_centroid(sel, factor)?;

    let extent = rows as i64;
    let total = extent.saturating_mul(i64::try_from(factor).unwrap_or(i64::MAX));
    let half_top = extent / 2 + extent % 2;
    let half_bottom = extent / 2;

    // f64 -> i64 casts saturate
    let mut lower = ((upscaled + half_bottom as f64) as i64).min(total);
    let mut upper = ((upscaled - half_top as f64) as i64).max(0);
    slide_inside(&mut upper, &mut lower, extent, total);

    let offset = window_row_centroid(sel, factor, upper as usize)
        .map(|capped| (capped - original) as i64)
        .unwrap_or(0);
    upper = upper.saturating_add(offset);
    lower = lower.saturating_add(offset);
    slide_inside(&mut upper, &mut lower, extent, total);

    Some(upper as usize)
}

/// Write the recentred window's selected cells into `out` (a copy of `grid`).
fn upscale_layer_rows(
    mut out: ArrayViewMut2<'_, Color>,
    grid: ArrayView2<'_, Color>,
    sel: ArrayView2<'_, bool>,
    factor: usize,
) {
    let Some(upper) = recentred_window(sel, factor) else {
        return;
    };
    let (rows, cols) = sel.dim();
    out.zip_mut_with(&sel, |v, &on| {
        if on {
            *v = 0;
        }
    });
    for i in 0..rows {
        let src = (upper + i) / factor;
        for c in 0..cols {
            if sel[[src, c]] {
                out[[i, c]] = grid[[src, c]];
            }
        }
    }
}

/// Mask of the recentred window: the cells the upscaled selection occupies.
fn upscale_mask_rows(mut out: ArrayViewMut2<'_, bool>, sel: ArrayView2<'_, bool>, factor: usize) {
    let Some(upper) = recentred_window(sel, factor) else {
        return;
    };
    for ((i, c), v) in out.indexed_iter_mut() {
        *v = sel[[(upper + i) / factor, c]];
    }
}

/// Upscale the selection of every layer by `factor` along `axis`, recentred onto the
/// original extent. `factor == 0` returns the grid unchanged.
pub fn upscale(
    grid: GridView<'_>,
    selection: SelectionView<'_>,
    axis: GridAxis,
    factor: usize,
) -> GridStack {
    let mut out = stack_layers(grid, selection);
    if factor == 0 {
        log::warn!("upscale: scale factor must be >= 1; returning the grid unchanged");
        return out;
    }
    for (layer, sel) in out.axis_iter_mut(Axis(0)).zip(selection.axis_iter(Axis(0))) {
        match axis {
            GridAxis::Rows => upscale_layer_rows(layer, grid, sel, factor),
            GridAxis::Cols => upscale_layer_rows(
                layer.reversed_axes(),
                grid.reversed_axes(),
                sel.reversed_axes(),
                factor,
            ),
        }
    }
    out
}

/// Selection stack after upscaling: where each layer's enlarged selection lands.
///
/// Cells that change under `upscale` are exactly the originally selected cells plus the
/// cells of this mask. `factor == 0` returns the selection unchanged.
pub fn upscaled_selection(
    selection: SelectionView<'_>,
    axis: GridAxis,
    factor: usize,
) -> Selection {
    if factor == 0 {
        return selection.to_owned();
    }
    let mut out = Array3::from_elem(selection.dim(), false);
    for (layer, sel) in out.axis_iter_mut(Axis(0)).zip(selection.axis_iter(Axis(0))) {
        match axis {
            GridAxis::Rows => upscale_mask_rows(layer, sel, factor),
            GridAxis::Cols => upscale_mask_rows(layer.reversed_axes(), sel.reversed_axes(), factor),
        }
    }
    out
}

/// Upscale vertically: repeat selected rows.
pub fn vupscale(grid: GridView<'_>, selection: SelectionView<'_>, factor: usize) -> GridStack {
    upscale(grid, selection, GridAxis::Rows, factor)
}

/// Upscale horizontally: repeat selected columns.
pub fn hupscale(grid: GridView<'_>, selection: SelectionView<'_>, factor: usize) -> GridStack {
    upscale(grid, selection, GridAxis::Cols, factor)
}
