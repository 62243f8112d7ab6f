// py/src/lib.rs
#![forbid(unsafe_code)]
#![allow(unsafe_op_in_unsafe_fn)] // pyo3 macro-generated glue triggers this on Rust 2024

mod ops;
mod util;

use pyo3::prelude::*;

#[pymodule]
fn grid_dsl(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ops::apply, m)?)?;
    m.add_function(wrap_pyfunction!(ops::transform_names, m)?)?;
    m.add_function(wrap_pyfunction!(ops::bounding_rectangle, m)?)?;
    m.add_function(wrap_pyfunction!(ops::bounding_square, m)?)?;
    m.add_function(wrap_pyfunction!(ops::most_common_color, m)?)?;
    m.add_function(wrap_pyfunction!(ops::apply_cell_ops, m)?)?;
    m.add_function(wrap_pyfunction!(ops::cell_op_names, m)?)?;
    m.add("PAD_COLOR", grid_dsl_engine::PAD_COLOR)?;
    Ok(())
}
