// engine/src/sampling/selection.rs
#![deny(unsafe_code)]

use std::collections::VecDeque;

use ndarray::{Array2, Array3, Axis, s};
use rand::Rng;

use crate::ops::{Color, GridView, Selection};

/// Selection predicate family used to build candidate stacks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SelectionKind {
    /// Each layer is an independent random rectangle.
    Rectangle,
    /// One layer per 4-connected shape of a colour present on the board.
    ColorShapes,
    /// Each cell selected independently with probability 1/4.
    Scatter,
}

impl SelectionKind {
    pub const ALL: [SelectionKind; 3] = [
        SelectionKind::Rectangle,
        SelectionKind::ColorShapes,
        SelectionKind::Scatter,
    ];

    pub fn from_cli(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rect" | "rectangle" => Some(Self::Rectangle),
            "color" | "shapes" | "color_shapes" => Some(Self::ColorShapes),
            "scatter" | "random" => Some(Self::Scatter),
            _ => None,
        }
    }
}

/// 4-connected components of cells equal to `color`, in row-major order of their first cell.
pub fn color_components(grid: GridView<'_>, color: Color) -> Vec<Array2<bool>> {
    let (rows, cols) = grid.dim();
    let mut seen = Array2::from_elem((rows, cols), false);
    let mut components = Vec::new();

    for ((r0, c0), &v) in grid.indexed_iter() {
        if v != color || seen[[r0, c0]] {
            continue;
        }
        let mut mask = Array2::from_elem((rows, cols), false);
        let mut queue = VecDeque::from([(r0, c0)]);
        seen[[r0, c0]] = true;
        while let Some((r, c)) = queue.pop_front() {
            mask[[r, c]] = true;
            let neighbors = [
                (r.wrapping_sub(1), c),
                (r + 1, c),
                (r, c.wrapping_sub(1)),
                (r, c + 1),
            ];
            for (nr, nc) in neighbors {
                if nr < rows && nc < cols && !seen[[nr, nc]] && grid[[nr, nc]] == color {
                    seen[[nr, nc]] = true;
                    queue.push_back((nr, nc));
                }
            }
        }
        components.push(mask);
    }
    components
}

fn stack_masks(masks: &[Array2<bool>], rows: usize, cols: usize) -> Selection {
    let mut out = Array3::from_elem((masks.len(), rows, cols), false);
    for (mut layer, mask) in out.axis_iter_mut(Axis(0)).zip(masks) {
        layer.assign(mask);
    }
    out
}

/// Random candidate stack for `grid`. `ColorShapes` yields one layer per shape (capped at
/// `max_layers`, at least one possibly empty layer); the other kinds yield `max_layers` layers.
pub fn random_selection<R: Rng + ?Sized>(
    rng: &mut R,
    grid: GridView<'_>,
    kind: SelectionKind,
    max_layers: usize,
) -> Selection {
    let (rows, cols) = grid.dim();
    let layers = max_layers.max(1);
    if rows == 0 || cols == 0 {
        return Array3::from_elem((layers, rows, cols), false);
    }

    match kind {
        SelectionKind::Rectangle => {
            let mut sel = Array3::from_elem((layers, rows, cols), false);
            for l in 0..layers {
                let (r0, r1) = ordered(rng.gen_range(0..rows), rng.gen_range(0..rows));
                let (c0, c1) = ordered(rng.gen_range(0..cols), rng.gen_range(0..cols));
                sel.slice_mut(s![l, r0..=r1, c0..=c1]).fill(true);
            }
            sel
        }
        SelectionKind::ColorShapes => {
            let r = rng.gen_range(0..rows);
            let c = rng.gen_range(0..cols);
            let mut shapes = color_components(grid, grid[[r, c]]);
            shapes.truncate(layers);
            stack_masks(&shapes, rows, cols)
        }
        SelectionKind::Scatter => {
            Array3::from_shape_simple_fn((layers, rows, cols), || rng.gen_bool(0.25))
        }
    }
}

#[inline]
fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}
