// engine/src/ops/checks.rs
#![deny(unsafe_code)]

use super::constants::{
    Color, GridView, MAX_COLOR, MAX_EXTENSION_EXTENT, MAX_ROTATIONS, MIN_COLOR, MIN_ROTATIONS,
    SelectionView,
};
use super::error::{GridAxis, OpError};

pub fn check_color(color: i64) -> Result<Color, OpError> {
    if color < i64::from(MIN_COLOR) || color > i64::from(MAX_COLOR) {
        return Err(OpError::InvalidColor {
            color,
            min: MIN_COLOR,
            max: MAX_COLOR,
        });
    }
    Ok(color as Color)
}

pub fn check_rotations(num_rotations: i64) -> Result<u8, OpError> {
    if num_rotations < i64::from(MIN_ROTATIONS) || num_rotations > i64::from(MAX_ROTATIONS) {
        return Err(OpError::InvalidRotation(num_rotations));
    }
    Ok(num_rotations as u8)
}

pub fn check_scale_factor(factor: i64) -> Result<usize, OpError> {
    if factor < 1 {
        return Err(OpError::InvalidScaleFactor(factor));
    }
    usize::try_from(factor).map_err(|_| OpError::InvalidScaleFactor(factor))
}

pub fn check_extension_extent(axis: GridAxis, extent: usize) -> Result<(), OpError> {
    if extent > MAX_EXTENSION_EXTENT {
        return Err(OpError::ExtentTooLarge {
            axis,
            extent,
            max: MAX_EXTENSION_EXTENT,
        });
    }
    Ok(())
}

/// Grid and selection must agree on rows and cols.
pub fn check_shapes(grid: GridView<'_>, selection: SelectionView<'_>) -> Result<(), OpError> {
    let (_, rows, cols) = selection.dim();
    if grid.dim() != (rows, cols) {
        return Err(OpError::ShapeMismatch {
            grid: grid.dim(),
            selection: (rows, cols),
        });
    }
    Ok(())
}

/// Colour check used by the raw operators: warn and report `None` instead of failing.
pub(crate) fn color_or_warn(op: &str, color: Color) -> Option<Color> {
    match check_color(i64::from(color)) {
        Ok(c) => Some(c),
        Err(e) => {
            log::warn!("{op}: {e}; returning the grid unchanged");
            None
        }
    }
}
