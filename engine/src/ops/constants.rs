// engine/src/ops/constants.rs
#![deny(unsafe_code)]

use ndarray::{Array2, Array3, ArrayView2, ArrayView3};

/// Cell value. Real colours live in `[0, 9]`; sums and padding may leave that range.
pub type Color = i32;

pub type Grid = Array2<Color>;
pub type GridView<'a> = ArrayView2<'a, Color>;

/// Stack of candidate selection masks, shape `(layers, rows, cols)`.
pub type Selection = Array3<bool>;
pub type SelectionView<'a> = ArrayView3<'a, bool>;

/// One transformed grid per selection layer, shape `(layers, rows, cols)`.
pub type GridStack = Array3<Color>;

/// Written outside the bounding rectangle by `crop`; also the padding value used by callers
/// that batch grids of different sizes.
pub const PAD_COLOR: Color = -1;

/// Largest row/col extent the canvas-doubling operators accept.
pub const MAX_EXTENSION_EXTENT: usize = 15;

/// Inclusive colour range accepted by colour-taking operators.
pub const MIN_COLOR: Color = 0;
pub const MAX_COLOR: Color = 200;

/// Inclusive quarter-turn range accepted by `rotate`.
pub const MIN_ROTATIONS: u8 = 1;
pub const MAX_ROTATIONS: u8 = 3;

/// Modulus used by cell-level primitives to wrap arbitrary integers into palette colours.
pub const PALETTE_SIZE: Color = 9;
