// py/src/util.rs
#![forbid(unsafe_code)]

use numpy::PyReadonlyArray3;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use grid_dsl_engine::OpError;

/// Engine errors surface as `ValueError` with the engine's message.
pub(crate) fn op_error_to_py(e: OpError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Region finders only need a selection; reject anything that is not a layer stack.
pub(crate) fn require_stack(selection: &PyReadonlyArray3<'_, bool>) -> PyResult<()> {
    let (_, rows, cols) = selection.as_array().dim();
    if rows == 0 || cols == 0 {
        return Err(PyValueError::new_err(format!(
            "selection must have non-empty rows and cols, got ({rows}, {cols})"
        )));
    }
    Ok(())
}
