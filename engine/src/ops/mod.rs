// engine/src/ops/mod.rs
#![deny(unsafe_code)]

mod checks;
mod constants;
mod displace;
mod error;
mod extend;
mod fill;
mod geometry;
mod region;
mod scale;
mod stack;
mod tiling;
mod transform;

pub mod cell;

/**
 * Curated operator public API.
 *
 * Every operator is `op(grid, selection, ...params) -> GridStack`: a pure function returning one
 * rewritten grid per selection layer. Internal modules stay private.
 */
pub use checks::{
    check_color, check_extension_extent, check_rotations, check_scale_factor, check_shapes,
};
pub use constants::{
    Color, Grid, GridStack, GridView, MAX_COLOR, MAX_EXTENSION_EXTENT, MAX_ROTATIONS, MIN_COLOR,
    MIN_ROTATIONS, PAD_COLOR, PALETTE_SIZE, Selection, SelectionView,
};
pub use displace::{PasteMode, SourceMode, copy_paste, copy_sum, cut_paste, cut_sum, displace};
pub use error::{GridAxis, OpError};
pub use extend::{
    ExtensionMode, duplicate_horizontally, duplicate_vertically, extend, mirror_horizontally,
    mirror_vertically,
};
pub use fill::{
    change_background_color, change_selection_to_background_color, color, delete,
    enclosed_holes, fill_bounding_rectangle_with_color, fill_bounding_square_with_color,
    fill_with_color, most_common_color,
};
pub use geometry::{
    crop, flip_horizontal, flip_vertical, mirror_anti_diagonal, mirror_main_diagonal, rotate,
    rotate90, rotate180, rotate270,
};
pub use region::{
    Region, bounding_rectangle_mask, bounding_rectangles, bounding_square_mask, bounding_squares,
    layer_bounds, regions_to_mask, square_around,
};
pub use scale::{hupscale, upscale, upscaled_selection, vupscale};
pub use stack::stack_layers;
pub use tiling::{copy_paste_horizontally, copy_paste_vertically, tile};
pub use transform::Transform;
