// engine/tests/ops_characterization.rs
#![deny(unsafe_code)]

/**
 * Operator characterization tests.
 *
 * Purpose:
 * - Lock the observable output of each operator family on small hand-checked boards.
 * - Cover the concrete scenarios the operator contract is documented with (rotation of a full
 *   2x2 square, copy vs cut displacement of a single cell).
 *
 * How the tests work:
 * - Boards are tiny and written out literally so expected outputs can be checked by eye.
 * - Only the public `ops` API is used; internals can change as long as outputs hold.
 */
use grid_dsl_engine::ops::{
    self, Color, Grid, PAD_COLOR, Selection, copy_paste, copy_paste_horizontally, crop,
    cut_paste, cut_sum, fill_with_color, flip_vertical, mirror_main_diagonal, rotate,
};
use ndarray::{Array3, Axis, array};

fn mask_from(layers: &[&[&[u8]]]) -> Selection {
    let n = layers.len();
    let rows = layers[0].len();
    let cols = layers[0][0].len();
    Array3::from_shape_fn((n, rows, cols), |(l, r, c)| layers[l][r][c] != 0)
}

fn layer(stack: &Array3<Color>, i: usize) -> Grid {
    stack.index_axis(Axis(0), i).to_owned()
}

#[test]
fn rotate_full_two_by_two_square() {
    let grid = array![[1, 2], [3, 4]];
    let sel = Array3::from_elem((1, 2, 2), true);
    let out = rotate(grid.view(), sel.view(), 1);
    assert_eq!(layer(&out, 0), array![[2, 4], [1, 3]]);
}

#[test]
fn copy_paste_single_cell_right() {
    let grid = array![[0, 0, 0], [0, 5, 0], [0, 0, 0]];
    let sel = mask_from(&[&[&[0, 0, 0], &[0, 1, 0], &[0, 0, 0]]]);
    let out = copy_paste(grid.view(), sel.view(), 1, 0);
    assert_eq!(out[[0, 1, 2]], 5);
    // Copy semantics: the source keeps its value.
    assert_eq!(out[[0, 1, 1]], 5);
}

#[test]
fn cut_paste_single_cell_right_zeroes_the_source() {
    let grid = array![[0, 0, 0], [0, 5, 0], [0, 0, 0]];
    let sel = mask_from(&[&[&[0, 0, 0], &[0, 1, 0], &[0, 0, 0]]]);
    let out = cut_paste(grid.view(), sel.view(), 1, 0);
    assert_eq!(layer(&out, 0), array![[0, 0, 0], [0, 0, 5], [0, 0, 0]]);
    assert_eq!(out[[0, 1, 1]], 0);
}

#[test]
fn cut_erases_cells_shifted_off_the_grid() {
    let grid = array![[1, 2, 3]];
    let sel = mask_from(&[&[&[0, 1, 1]]]);
    let out = cut_paste(grid.view(), sel.view(), 1, 0);
    // 2 lands on col 2, 3 falls off and is gone.
    assert_eq!(layer(&out, 0), array![[1, 0, 2]]);

    let out = cut_sum(grid.view(), sel.view(), -1, 0);
    assert_eq!(layer(&out, 0), array![[3, 3, 0]]);
}

#[test]
fn candidates_are_rewritten_independently() {
    let grid = array![[1, 2, 0], [3, 4, 0], [0, 0, 7]];
    let sel = mask_from(&[
        &[&[1, 1, 0], &[1, 1, 0], &[0, 0, 0]],
        &[&[0, 0, 0], &[0, 0, 0], &[0, 0, 1]],
        &[&[0, 0, 0], &[0, 0, 0], &[0, 0, 0]],
    ]);
    let out = flip_vertical(grid.view(), sel.view());
    assert_eq!(layer(&out, 0), array![[3, 4, 0], [1, 2, 0], [0, 0, 7]]);
    assert_eq!(layer(&out, 1), grid);
    assert_eq!(layer(&out, 2), grid);
}

#[test]
fn crop_masks_the_complement() {
    let grid = array![[1, 2, 3], [4, 5, 6], [7, 8, 9]];
    let sel = mask_from(&[&[&[0, 0, 0], &[0, 1, 1], &[0, 0, 0]]]);
    let out = crop(grid.view(), sel.view());
    assert_eq!(
        layer(&out, 0),
        array![
            [PAD_COLOR, PAD_COLOR, PAD_COLOR],
            [PAD_COLOR, 5, 6],
            [PAD_COLOR, PAD_COLOR, PAD_COLOR]
        ]
    );
}

#[test]
fn diagonal_mirror_of_an_l_shape() {
    let grid = array![[1, 0, 0], [1, 0, 0], [1, 1, 1]];
    let sel = grid.mapv(|v| v == 1).insert_axis(Axis(0));
    let out = mirror_main_diagonal(grid.view(), sel.view());
    assert_eq!(layer(&out, 0), array![[1, 1, 1], [0, 0, 1], [0, 0, 1]]);
}

#[test]
fn fill_closes_a_donut() {
    let grid = array![
        [2, 2, 2, 0],
        [2, 0, 2, 0],
        [2, 0, 2, 0],
        [2, 2, 2, 0],
    ];
    let sel = grid.mapv(|v| v == 2).insert_axis(Axis(0));
    let out = fill_with_color(grid.view(), sel.view(), 4);
    assert_eq!(
        layer(&out, 0),
        array![[2, 2, 2, 0], [2, 4, 2, 0], [2, 4, 2, 0], [2, 2, 2, 0]]
    );
}

#[test]
fn horizontal_tiling_repeats_a_motif() {
    let grid = array![[0, 0, 0, 3, 5, 0, 0, 0], [0, 0, 0, 5, 3, 0, 0, 0]];
    let sel = grid.mapv(|v| v != 0).insert_axis(Axis(0));
    let out = copy_paste_horizontally(grid.view(), sel.view());
    assert_eq!(
        layer(&out, 0),
        array![[5, 3, 5, 3, 5, 3, 5, 3], [3, 5, 3, 5, 3, 5, 3, 5]]
    );
}

#[test]
fn upscale_and_extension_shapes() {
    let grid = array![[0, 1, 0], [0, 2, 0], [0, 0, 0]];
    let sel = grid.mapv(|v| v != 0).insert_axis(Axis(0));

    let up = ops::hupscale(grid.view(), sel.view(), 3);
    assert_eq!(layer(&up, 0), array![[0, 1, 1], [0, 2, 2], [0, 0, 0]]);

    let doubled = ops::mirror_vertically(grid.view(), sel.view());
    assert_eq!(doubled.dim(), (1, 6, 3));
    assert_eq!(
        layer(&doubled, 0),
        array![[0, 1, 0], [0, 2, 0], [0, 0, 0], [0, 0, 0], [0, 2, 0], [0, 1, 0]]
    );
}
