// engine/src/ops/transform.rs
#![deny(unsafe_code)]

use super::checks::{
    check_color, check_extension_extent, check_rotations, check_scale_factor, check_shapes,
};
use super::constants::{Color, GridStack, GridView, SelectionView};
use super::displace::{copy_paste, copy_sum, cut_paste, cut_sum};
use super::error::{GridAxis, OpError};
use super::extend::{
    duplicate_horizontally, duplicate_vertically, mirror_horizontally, mirror_vertically,
};
use super::fill::{
    change_background_color, change_selection_to_background_color, color, delete,
    fill_bounding_rectangle_with_color, fill_bounding_square_with_color, fill_with_color,
};
use super::geometry::{
    crop, flip_horizontal, flip_vertical, mirror_anti_diagonal, mirror_main_diagonal, rotate,
};
use super::scale::{hupscale, vupscale};
use super::tiling::{copy_paste_horizontally, copy_paste_vertically};

/// Every selection-driven operator with its scalar parameters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Transform {
    FlipVertical,
    FlipHorizontal,
    Rotate(u8),
    Crop,
    MirrorMainDiagonal,
    MirrorAntiDiagonal,
    Delete,
    Color(Color),
    FillWithColor(Color),
    FillBoundingRectangle(Color),
    FillBoundingSquare(Color),
    ChangeBackgroundColor(Color),
    ChangeSelectionToBackground,
    CopyPaste { shift_x: isize, shift_y: isize },
    CopySum { shift_x: isize, shift_y: isize },
    CutPaste { shift_x: isize, shift_y: isize },
    CutSum { shift_x: isize, shift_y: isize },
    VUpscale(usize),
    HUpscale(usize),
    MirrorHorizontally,
    MirrorVertically,
    DuplicateHorizontally,
    DuplicateVertically,
    CopyPasteVertically,
    CopyPasteHorizontally,
}

/// (name, number of integer arguments) for every accepted transform name.
const NAMES: &[(&str, usize)] = &[
    ("flipv", 0),
    ("fliph", 0),
    ("rotate", 1),
    ("rotate90", 0),
    ("rotate180", 0),
    ("rotate270", 0),
    ("crop", 0),
    ("mirror_main_diagonal", 0),
    ("mirror_anti_diagonal", 0),
    ("delete", 0),
    ("color", 1),
    ("fill_with_color", 1),
    ("fill_bounding_rectangle_with_color", 1),
    ("fill_bounding_square_with_color", 1),
    ("change_background_color", 1),
    ("change_selection_to_background_color", 0),
    ("copy_paste", 2),
    ("copy_sum", 2),
    ("cut_paste", 2),
    ("cut_sum", 2),
    ("vupscale", 1),
    ("hupscale", 1),
    ("mirror_horizontally", 0),
    ("mirror_vertically", 0),
    ("duplicate_horizontally", 0),
    ("duplicate_vertically", 0),
    ("copy_paste_vertically", 0),
    ("copy_paste_horizontally", 0),
];

impl Transform {
    /// All accepted names, in a stable order.
    pub fn all_names() -> impl Iterator<Item = &'static str> {
        NAMES.iter().map(|(name, _)| *name)
    }

    /// Number of integer arguments `from_name` expects for `name`.
    pub fn arity(name: &str) -> Option<usize> {
        NAMES.iter().find(|(n, _)| *n == name).map(|(_, a)| *a)
    }

    /// Parse a snake_case name plus integer arguments.
    ///
    /// Arguments are range-checked here; extra arguments are ignored.
    pub fn from_name(name: &str, args: &[i64]) -> Result<Self, OpError> {
        let key = name.trim().to_ascii_lowercase();
        let (static_name, arity) = NAMES
            .iter()
            .find(|(n, _)| *n == key)
            .copied()
            .ok_or_else(|| OpError::UnknownTransform(name.to_string()))?;
        if args.len() < arity {
            return Err(OpError::MissingArgument {
                transform: static_name,
                expected: arity,
                got: args.len(),
            });
        }
        let shift = || (args[0] as isize, args[1] as isize);

        let t = match static_name {
            "flipv" => Self::FlipVertical,
            "fliph" => Self::FlipHorizontal,
            "rotate" => Self::Rotate(check_rotations(args[0])?),
            "rotate90" => Self::Rotate(1),
            "rotate180" => Self::Rotate(2),
            "rotate270" => Self::Rotate(3),
            "crop" => Self::Crop,
            "mirror_main_diagonal" => Self::MirrorMainDiagonal,
            "mirror_anti_diagonal" => Self::MirrorAntiDiagonal,
            "delete" => Self::Delete,
            "color" => Self::Color(check_color(args[0])?),
            "fill_with_color" => Self::FillWithColor(check_color(args[0])?),
            "fill_bounding_rectangle_with_color" => {
                Self::FillBoundingRectangle(check_color(args[0])?)
            }
            "fill_bounding_square_with_color" => Self::FillBoundingSquare(check_color(args[0])?),
            "change_background_color" => Self::ChangeBackgroundColor(check_color(args[0])?),
            "change_selection_to_background_color" => Self::ChangeSelectionToBackground,
            "copy_paste" => {
                let (shift_x, shift_y) = shift();
                Self::CopyPaste { shift_x, shift_y }
            }
            "copy_sum" => {
                let (shift_x, shift_y) = shift();
                Self::CopySum { shift_x, shift_y }
            }
            "cut_paste" => {
                let (shift_x, shift_y) = shift();
                Self::CutPaste { shift_x, shift_y }
            }
            "cut_sum" => {
                let (shift_x, shift_y) = shift();
                Self::CutSum { shift_x, shift_y }
            }
            "vupscale" => Self::VUpscale(check_scale_factor(args[0])?),
            "hupscale" => Self::HUpscale(check_scale_factor(args[0])?),
            "mirror_horizontally" => Self::MirrorHorizontally,
            "mirror_vertically" => Self::MirrorVertically,
            "duplicate_horizontally" => Self::DuplicateHorizontally,
            "duplicate_vertically" => Self::DuplicateVertically,
            "copy_paste_vertically" => Self::CopyPasteVertically,
            "copy_paste_horizontally" => Self::CopyPasteHorizontally,
            _ => return Err(OpError::UnknownTransform(name.to_string())),
        };
        Ok(t)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::FlipVertical => "flipv",
            Self::FlipHorizontal => "fliph",
            Self::Rotate(_) => "rotate",
            Self::Crop => "crop",
            Self::MirrorMainDiagonal => "mirror_main_diagonal",
            Self::MirrorAntiDiagonal => "mirror_anti_diagonal",
            Self::Delete => "delete",
            Self::Color(_) => "color",
            Self::FillWithColor(_) => "fill_with_color",
            Self::FillBoundingRectangle(_) => "fill_bounding_rectangle_with_color",
            Self::FillBoundingSquare(_) => "fill_bounding_square_with_color",
            Self::ChangeBackgroundColor(_) => "change_background_color",
            Self::ChangeSelectionToBackground => "change_selection_to_background_color",
            Self::CopyPaste { .. } => "copy_paste",
            Self::CopySum { .. } => "copy_sum",
            Self::CutPaste { .. } => "cut_paste",
            Self::CutSum { .. } => "cut_sum",
            Self::VUpscale(_) => "vupscale",
            Self::HUpscale(_) => "hupscale",
            Self::MirrorHorizontally => "mirror_horizontally",
            Self::MirrorVertically => "mirror_vertically",
            Self::DuplicateHorizontally => "duplicate_horizontally",
            Self::DuplicateVertically => "duplicate_vertically",
            Self::CopyPasteVertically => "copy_paste_vertically",
            Self::CopyPasteHorizontally => "copy_paste_horizontally",
        }
    }

    /// Parameter checks that do not depend on the grid.
    pub fn validate(&self) -> Result<(), OpError> {
        match *self {
            Self::Rotate(n) => check_rotations(i64::from(n)).map(|_| ()),
            Self::Color(c)
            | Self::FillWithColor(c)
            | Self::FillBoundingRectangle(c)
            | Self::FillBoundingSquare(c)
            | Self::ChangeBackgroundColor(c) => check_color(i64::from(c)).map(|_| ()),
            Self::VUpscale(f) | Self::HUpscale(f) => {
                check_scale_factor(f as i64).map(|_| ())
            }
            _ => Ok(()),
        }
    }

    /// Run the operator with the raw "unchanged on invalid input" contract.
    pub fn apply(&self, grid: GridView<'_>, selection: SelectionView<'_>) -> GridStack {
        match *self {
            Self::FlipVertical => flip_vertical(grid, selection),
            Self::FlipHorizontal => flip_horizontal(grid, selection),
            Self::Rotate(n) => rotate(grid, selection, n),
            Self::Crop => crop(grid, selection),
            Self::MirrorMainDiagonal => mirror_main_diagonal(grid, selection),
            Self::MirrorAntiDiagonal => mirror_anti_diagonal(grid, selection),
            Self::Delete => delete(grid, selection),
            Self::Color(c) => color(grid, selection, c),
            Self::FillWithColor(c) => fill_with_color(grid, selection, c),
            Self::FillBoundingRectangle(c) => fill_bounding_rectangle_with_color(grid, selection, c),
            Self::FillBoundingSquare(c) => fill_bounding_square_with_color(grid, selection, c),
            Self::ChangeBackgroundColor(c) => change_background_color(grid, selection, c),
            Self::ChangeSelectionToBackground => {
                change_selection_to_background_color(grid, selection)
            }
            Self::CopyPaste { shift_x, shift_y } => copy_paste(grid, selection, shift_x, shift_y),
            Self::CopySum { shift_x, shift_y } => copy_sum(grid, selection, shift_x, shift_y),
            Self::CutPaste { shift_x, shift_y } => cut_paste(grid, selection, shift_x, shift_y),
            Self::CutSum { shift_x, shift_y } => cut_sum(grid, selection, shift_x, shift_y),
            Self::VUpscale(f) => vupscale(grid, selection, f),
            Self::HUpscale(f) => hupscale(grid, selection, f),
            Self::MirrorHorizontally => mirror_horizontally(grid, selection),
            Self::MirrorVertically => mirror_vertically(grid, selection),
            Self::DuplicateHorizontally => duplicate_horizontally(grid, selection),
            Self::DuplicateVertically => duplicate_vertically(grid, selection),
            Self::CopyPasteVertically => copy_paste_vertically(grid, selection),
            Self::CopyPasteHorizontally => copy_paste_horizontally(grid, selection),
        }
    }

    /// Validate parameters, shapes and extension preconditions, then run the operator.
    pub fn try_apply(
        &self,
        grid: GridView<'_>,
        selection: SelectionView<'_>,
    ) -> Result<GridStack, OpError> {
        self.validate()?;
        check_shapes(grid, selection)?;
        let (_, rows, cols) = selection.dim();
        match self {
            Self::MirrorHorizontally | Self::DuplicateHorizontally => {
                check_extension_extent(GridAxis::Cols, cols)?
            }
            Self::MirrorVertically | Self::DuplicateVertically => {
                check_extension_extent(GridAxis::Rows, rows)?
            }
            _ => {}
        }
        Ok(self.apply(grid, selection))
    }
}
