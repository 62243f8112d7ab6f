// engine/src/lib.rs
#![deny(unsafe_code)]

pub mod ops;
pub mod sampling;

// Re-export the bits the CLI and Python bindings need:
pub use ops::{
    Color, Grid, GridAxis, GridStack, OpError, PAD_COLOR, Region, Selection, Transform,
    bounding_rectangles, bounding_squares, most_common_color, stack_layers,
};
pub use sampling::{BoardSpec, SelectionKind, random_grid, random_selection};
