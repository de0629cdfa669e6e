use common::vector::Vector;
use hashgrid::grid::Body;
use pyo3::prelude::*;
use pyo3::pymethods;
use pyo3::types::PyModule;
use pyo3::{Bound, PyResult, Python};

mod grid;

use crate::grid::{GridWrapper, PyConfig};

#[pymodule]
fn pyhashgrid(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<GridWrapper>()?;
    m.add_class::<PyConfig>()?;
    m.add_class::<PyBody>()?;
    m.add_function(wrap_pyfunction!(key, m)?)?;
    m.add_function(wrap_pyfunction!(wide_key, m)?)?;
    Ok(())
}

/// Cell key of `(x, y)` for the given cell size, independent of any grid.
#[pyfunction]
pub fn key(x: f32, y: f32, cell_size: f32) -> i64 {
    hashgrid::key(x, y, cell_size)
}

#[pyfunction]
pub fn wide_key(x: f32, y: f32, cell_size: f32) -> i64 {
    hashgrid::wide_key(x, y, cell_size)
}

#[derive(Clone, Debug)]
#[pyclass(name = "Body")]
pub struct PyBody {
    #[pyo3(get, set)]
    pub id: u32,
    #[pyo3(get, set)]
    pub x: f32,
    #[pyo3(get, set)]
    pub y: f32,
    #[pyo3(get, set)]
    pub size: f32,
}

#[pymethods]
impl PyBody {
    #[new]
    pub fn new(id: u32, x: f32, y: f32, size: f32) -> Self {
        PyBody { id, x, y, size }
    }

    fn __repr__(&self) -> String {
        format!(
            "Body(id={}, x={}, y={}, size={})",
            self.id, self.x, self.y, self.size
        )
    }
}

impl From<&Body> for PyBody {
    fn from(body: &Body) -> Self {
        PyBody {
            id: body.id,
            x: body.position.x,
            y: body.position.y,
            size: body.size,
        }
    }
}

impl From<&PyBody> for Body {
    fn from(body: &PyBody) -> Self {
        Body {
            id: body.id,
            position: Vector::new(body.x, body.y),
            size: body.size,
        }
    }
}
