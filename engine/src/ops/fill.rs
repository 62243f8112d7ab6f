// engine/src/ops/fill.rs
#![deny(unsafe_code)]

use std::collections::VecDeque;

use ndarray::{Array2, ArrayView2, Axis};
use rustc_hash::FxHashMap;

use super::checks::color_or_warn;
use super::constants::{Color, GridStack, GridView, SelectionView};
use super::region::{Region, bounding_rectangles, bounding_squares};
use super::stack::stack_layers;

/// Most frequent value in `grid` (the background). Ties go to the smallest colour.
///
/// Returns `None` only for an empty grid.
pub fn most_common_color(grid: GridView<'_>) -> Option<Color> {
    let mut counts: FxHashMap<Color, usize> = FxHashMap::default();
    for &v in grid.iter() {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .max_by(|(ca, na), (cb, nb)| na.cmp(nb).then(cb.cmp(ca)))
        .map(|(color, _)| color)
}

/// Cells enclosed by `sel`: unselected cells that cannot reach the border through
/// 4-connected unselected cells.
pub fn enclosed_holes(sel: ArrayView2<'_, bool>) -> Array2<bool> {
    let (rows, cols) = sel.dim();
    let mut outside = Array2::from_elem((rows, cols), false);
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();

    for ((r, c), &on) in sel.indexed_iter() {
        let on_border = r == 0 || c == 0 || r + 1 == rows || c + 1 == cols;
        if on_border && !on {
            outside[[r, c]] = true;
            queue.push_back((r, c));
        }
    }

    while let Some((r, c)) = queue.pop_front() {
        let neighbors = [
            (r.wrapping_sub(1), c),
            (r + 1, c),
            (r, c.wrapping_sub(1)),
            (r, c + 1),
        ];
        for (nr, nc) in neighbors {
            if nr >= rows || nc >= cols || sel[[nr, nc]] || outside[[nr, nc]] {
                continue;
            }
            outside[[nr, nc]] = true;
            queue.push_back((nr, nc));
        }
    }

    Array2::from_shape_fn((rows, cols), |(r, c)| !sel[[r, c]] && !outside[[r, c]])
}

/// Fill the enclosed holes of each layer's selected shape with `fill_color`.
///
/// An invalid colour returns the grid unchanged.
pub fn fill_with_color(
    grid: GridView<'_>,
    selection: SelectionView<'_>,
    fill_color: Color,
) -> GridStack {
    let mut out = stack_layers(grid, selection);
    let Some(color) = color_or_warn("fill_with_color", fill_color) else {
        return out;
    };
    for (mut layer, sel) in out.axis_iter_mut(Axis(0)).zip(selection.axis_iter(Axis(0))) {
        layer.zip_mut_with(&enclosed_holes(sel), |v, &hole| {
            if hole {
                *v = color;
            }
        });
    }
    out
}

fn fill_regions_outside_selection(
    grid: GridView<'_>,
    selection: SelectionView<'_>,
    regions: &[Option<Region>],
    color: Color,
) -> GridStack {
    let mut out = stack_layers(grid, selection);
    for (l, region) in regions.iter().enumerate() {
        let Some(region) = region else {
            continue;
        };
        for r in region.top..=region.bottom {
            for c in region.left..=region.right {
                if !selection[[l, r, c]] {
                    out[[l, r, c]] = color;
                }
            }
        }
    }
    out
}

/// Paint the unselected part of each layer's bounding rectangle.
pub fn fill_bounding_rectangle_with_color(
    grid: GridView<'_>,
    selection: SelectionView<'_>,
    color: Color,
) -> GridStack {
    let Some(color) = color_or_warn("fill_bounding_rectangle_with_color", color) else {
        return stack_layers(grid, selection);
    };
    let rects = bounding_rectangles(selection);
    fill_regions_outside_selection(grid, selection, &rects, color)
}

/// Paint the unselected part of each layer's bounding square.
pub fn fill_bounding_square_with_color(
    grid: GridView<'_>,
    selection: SelectionView<'_>,
    color: Color,
) -> GridStack {
    let Some(color) = color_or_warn("fill_bounding_square_with_color", color) else {
        return stack_layers(grid, selection);
    };
    let squares = bounding_squares(selection);
    fill_regions_outside_selection(grid, selection, &squares, color)
}

/// Recolour every background cell (the grid's most common colour) to `new_color`.
pub fn change_background_color(
    grid: GridView<'_>,
    selection: SelectionView<'_>,
    new_color: Color,
) -> GridStack {
    let mut out = stack_layers(grid, selection);
    let Some(new_color) = color_or_warn("change_background_color", new_color) else {
        return out;
    };
    if let Some(background) = most_common_color(grid) {
        out.mapv_inplace(|v| if v == background { new_color } else { v });
    }
    out
}

/// Recolour the selected cells of each layer with the grid's most common colour.
pub fn change_selection_to_background_color(
    grid: GridView<'_>,
    selection: SelectionView<'_>,
) -> GridStack {
    match most_common_color(grid) {
        Some(background) => paint_selection(grid, selection, background),
        None => stack_layers(grid, selection),
    }
}

fn paint_selection(grid: GridView<'_>, selection: SelectionView<'_>, color: Color) -> GridStack {
    let mut out = stack_layers(grid, selection);
    out.zip_mut_with(&selection, |v, &on| {
        if on {
            *v = color;
        }
    });
    out
}

/// Set every selected cell to `color`.
pub fn color(grid: GridView<'_>, selection: SelectionView<'_>, color: Color) -> GridStack {
    match color_or_warn("color", color) {
        Some(c) => paint_selection(grid, selection, c),
        None => stack_layers(grid, selection),
    }
}

/// Set every selected cell to 0.
pub fn delete(grid: GridView<'_>, selection: SelectionView<'_>) -> GridStack {
    paint_selection(grid, selection, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array3, array};

    fn ring() -> (Array2<Color>, Array3<bool>) {
        let grid = array![
            [0, 0, 0, 0, 0],
            [0, 3, 3, 3, 0],
            [0, 3, 0, 3, 0],
            [0, 3, 3, 3, 0],
            [0, 0, 0, 0, 0],
        ];
        let sel = grid.mapv(|v| v == 3).insert_axis(Axis(0));
        (grid, sel)
    }

    #[test]
    fn most_common_color_breaks_ties_low() {
        assert_eq!(most_common_color(array![[1, 2], [2, 1]].view()), Some(1));
        assert_eq!(most_common_color(array![[4, 2, 4]].view()), Some(4));
        assert_eq!(most_common_color(Array2::<Color>::zeros((0, 3)).view()), None);
    }

    #[test]
    fn holes_are_cells_cut_off_from_the_border() {
        let (_, sel) = ring();
        let holes = enclosed_holes(sel.index_axis(Axis(0), 0));
        assert_eq!(holes.iter().filter(|&&h| h).count(), 1);
        assert!(holes[[2, 2]]);
    }

    #[test]
    fn diagonal_gaps_do_not_leak() {
        // The centre touches the outside only diagonally: still a hole.
        let sel = array![
            [false, true, false],
            [true, false, true],
            [false, true, false],
        ];
        let holes = enclosed_holes(sel.view());
        assert!(holes[[1, 1]]);
        assert!(!holes[[0, 0]]);
    }

    #[test]
    fn fill_with_color_paints_holes_only() {
        let (grid, sel) = ring();
        let out = fill_with_color(grid.view(), sel.view(), 7);
        let mut expected = grid.clone();
        expected[[2, 2]] = 7;
        assert_eq!(out.index_axis(Axis(0), 0), expected);
    }

    #[test]
    fn invalid_fill_color_is_a_no_op() {
        let (grid, sel) = ring();
        let out = fill_with_color(grid.view(), sel.view(), 201);
        assert_eq!(out.index_axis(Axis(0), 0), grid);
    }

    #[test]
    fn bounding_fills_skip_the_selection() {
        let grid = array![[1, 0, 0], [0, 0, 0], [0, 0, 0]];
        let mut sel = Array3::from_elem((1, 3, 3), false);
        sel[[0, 0, 0]] = true;
        sel[[0, 1, 1]] = true;
        let out = fill_bounding_rectangle_with_color(grid.view(), sel.view(), 5);
        assert_eq!(
            out.index_axis(Axis(0), 0),
            array![[1, 5, 0], [5, 0, 0], [0, 0, 0]]
        );

        sel[[0, 1, 1]] = false;
        sel[[0, 0, 1]] = true;
        // 1x2 bar -> square rows 0..=1
        let out = fill_bounding_square_with_color(grid.view(), sel.view(), 5);
        assert_eq!(
            out.index_axis(Axis(0), 0),
            array![[1, 0, 0], [5, 5, 0], [0, 0, 0]]
        );
    }

    #[test]
    fn background_recolouring() {
        let grid = array![[0, 0, 2], [0, 1, 2]];
        let mut sel = Array3::from_elem((1, 2, 3), false);
        sel[[0, 1, 1]] = true;
        sel[[0, 0, 2]] = true;

        let out = change_background_color(grid.view(), sel.view(), 8);
        assert_eq!(out.index_axis(Axis(0), 0), array![[8, 8, 2], [8, 1, 2]]);

        let out = change_selection_to_background_color(grid.view(), sel.view());
        assert_eq!(out.index_axis(Axis(0), 0), array![[0, 0, 0], [0, 0, 2]]);
    }

    #[test]
    fn color_and_delete() {
        let grid = array![[1, 2], [3, 4]];
        let mut sel = Array3::from_elem((2, 2, 2), false);
        sel[[0, 0, 0]] = true;
        sel[[1, 1, 1]] = true;
        let out = color(grid.view(), sel.view(), 9);
        assert_eq!(out.index_axis(Axis(0), 0), array![[9, 2], [3, 4]]);
        assert_eq!(out.index_axis(Axis(0), 1), array![[1, 2], [3, 9]]);

        let out = delete(grid.view(), sel.view());
        assert_eq!(out.index_axis(Axis(0), 1), array![[1, 2], [3, 0]]);
    }
}
