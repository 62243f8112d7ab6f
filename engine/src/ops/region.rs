// engine/src/ops/region.rs
#![deny(unsafe_code)]

use ndarray::{Array3, ArrayView2, Axis, s};

use super::constants::SelectionView;

/// Axis-aligned region of one layer, inclusive on all four sides.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Region {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl Region {
    #[inline]
    pub fn height(&self) -> usize {
        self.bottom - self.top + 1
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.right - self.left + 1
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.height() == self.width()
    }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.top..=self.bottom).contains(&row) && (self.left..=self.right).contains(&col)
    }
}

/// Smallest rectangle containing every `true` cell of `layer`, or `None` if the layer is empty.
pub fn layer_bounds(layer: ArrayView2<'_, bool>) -> Option<Region> {
    let mut bounds: Option<Region> = None;
    for ((r, c), &on) in layer.indexed_iter() {
        if !on {
            continue;
        }
        bounds = Some(match bounds {
            None => Region {
                top: r,
                left: c,
                bottom: r,
                right: c,
            },
            Some(b) => Region {
                top: b.top.min(r),
                left: b.left.min(c),
                bottom: b.bottom.max(r),
                right: b.right.max(c),
            },
        });
    }
    bounds
}

/// Grow a span to `side` cells, centred on the original span.
///
/// An odd surplus puts the extra cell before the span (toward top/left). The result is slid
/// back inside `[0, limit)`; if `side > limit` it is clipped to the whole axis.
fn expand_span(start: usize, end: usize, side: usize, limit: usize) -> (usize, usize) {
    let span = end - start + 1;
    if span >= side {
        return (start, end);
    }
    let lead = (side - span).div_ceil(2);
    let mut new_start = start.saturating_sub(lead);
    if new_start + side > limit {
        new_start = limit.saturating_sub(side);
    }
    let new_end = (new_start + side - 1).min(limit - 1);
    (new_start, new_end)
}

/// Smallest square enclosing `rect`, kept inside a `rows x cols` grid.
///
/// When the grid is too narrow for the full side, the result is clipped and is not square.
pub fn square_around(rect: Region, rows: usize, cols: usize) -> Region {
    let side = rect.height().max(rect.width());
    let (top, bottom) = expand_span(rect.top, rect.bottom, side, rows);
    let (left, right) = expand_span(rect.left, rect.right, side, cols);
    Region {
        top,
        left,
        bottom,
        right,
    }
}

/// Per-layer bounding rectangles, indexed by layer.
pub fn bounding_rectangles(selection: SelectionView<'_>) -> Vec<Option<Region>> {
    selection.axis_iter(Axis(0)).map(layer_bounds).collect()
}

/// Per-layer bounding squares, indexed by layer.
pub fn bounding_squares(selection: SelectionView<'_>) -> Vec<Option<Region>> {
    let (_, rows, cols) = selection.dim();
    selection
        .axis_iter(Axis(0))
        .map(|layer| layer_bounds(layer).map(|rect| square_around(rect, rows, cols)))
        .collect()
}

/// Rasterize per-layer regions into a mask stack of `shape`.
pub fn regions_to_mask(regions: &[Option<Region>], shape: (usize, usize, usize)) -> Array3<bool> {
    debug_assert_eq!(regions.len(), shape.0);
    let mut mask = Array3::from_elem(shape, false);
    for (l, region) in regions.iter().enumerate() {
        if let Some(r) = region {
            mask.slice_mut(s![l, r.top..=r.bottom, r.left..=r.right])
                .fill(true);
        }
    }
    mask
}

pub fn bounding_rectangle_mask(selection: SelectionView<'_>) -> Array3<bool> {
    regions_to_mask(&bounding_rectangles(selection), selection.dim())
}

pub fn bounding_square_mask(selection: SelectionView<'_>) -> Array3<bool> {
    regions_to_mask(&bounding_squares(selection), selection.dim())
}
