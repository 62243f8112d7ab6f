// py/src/ops.rs
#![forbid(unsafe_code)]

use numpy::{PyArray2, PyArray3, PyReadonlyArray2, PyReadonlyArray3};
use pyo3::prelude::*;

use grid_dsl_engine::ops::cell::{CellOp, apply_cell_ops as engine_apply_cell_ops};
use grid_dsl_engine::ops::{bounding_rectangle_mask, bounding_square_mask};
use grid_dsl_engine::{Transform, most_common_color as engine_most_common_color};

use crate::util::{op_error_to_py, require_stack};

/// apply(name, grid, selection, args=None) -> int32 array (layers, rows, cols)
///
/// Raises ValueError for unknown names, missing or out-of-range arguments, shape mismatch and
/// oversized canvas extension.
#[pyfunction]
#[pyo3(signature = (name, grid, selection, args=None))]
pub(crate) fn apply<'py>(
    py: Python<'py>,
    name: &str,
    grid: PyReadonlyArray2<'py, i32>,
    selection: PyReadonlyArray3<'py, bool>,
    args: Option<Vec<i64>>,
) -> PyResult<Bound<'py, PyArray3<i32>>> {
    let args = args.unwrap_or_default();
    let t = Transform::from_name(name, &args).map_err(op_error_to_py)?;
    let out = t
        .try_apply(grid.as_array(), selection.as_array())
        .map_err(op_error_to_py)?;
    Ok(PyArray3::from_owned_array_bound(py, out))
}

#[pyfunction]
pub(crate) fn transform_names() -> Vec<&'static str> {
    Transform::all_names().collect()
}

/// Bool mask of each layer's bounding rectangle.
#[pyfunction]
pub(crate) fn bounding_rectangle<'py>(
    py: Python<'py>,
    selection: PyReadonlyArray3<'py, bool>,
) -> PyResult<Bound<'py, PyArray3<bool>>> {
    require_stack(&selection)?;
    let mask = bounding_rectangle_mask(selection.as_array());
    Ok(PyArray3::from_owned_array_bound(py, mask))
}

/// Bool mask of each layer's bounding square.
#[pyfunction]
pub(crate) fn bounding_square<'py>(
    py: Python<'py>,
    selection: PyReadonlyArray3<'py, bool>,
) -> PyResult<Bound<'py, PyArray3<bool>>> {
    require_stack(&selection)?;
    let mask = bounding_square_mask(selection.as_array());
    Ok(PyArray3::from_owned_array_bound(py, mask))
}

/// Background colour; None for an empty grid.
#[pyfunction]
pub(crate) fn most_common_color(grid: PyReadonlyArray2<'_, i32>) -> Option<i32> {
    engine_most_common_color(grid.as_array())
}

/// apply_cell_ops(grid, ops) -> int32 array
///
/// `ops` is a list of `(name, args)` pairs, e.g. `[("flip", [1]), ("drag", [0, 5])]`, applied
/// left to right. Unknown names or missing arguments raise ValueError.
#[pyfunction]
pub(crate) fn apply_cell_ops<'py>(
    py: Python<'py>,
    grid: PyReadonlyArray2<'py, i32>,
    ops: Vec<(String, Vec<i64>)>,
) -> PyResult<Bound<'py, PyArray2<i32>>> {
    let ops = ops
        .iter()
        .map(|(name, args)| CellOp::from_name(name, args))
        .collect::<Result<Vec<_>, _>>()
        .map_err(op_error_to_py)?;
    let out = engine_apply_cell_ops(grid.as_array(), &ops);
    Ok(PyArray2::from_owned_array_bound(py, out))
}

#[pyfunction]
pub(crate) fn cell_op_names() -> Vec<&'static str> {
    CellOp::all_names().collect()
}
