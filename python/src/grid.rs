use ::hashgrid::grid::{Body, Config, Grid, KeyScheme};
use ::hashgrid::GridError;
use common::vector::Vector;

use crate::PyBody;
use pyo3::exceptions::PyValueError;
use pyo3::pyclass;
use pyo3::pymethods;
use pyo3::{PyErr, PyResult};

#[derive(Clone)]
#[pyclass(name = "Config")]
pub struct PyConfig {
    cell_size: f32,
    padding_factor: f32,
    query_slack: f32,
    wide_keys: bool,
    pool_size: usize,
}

#[pymethods]
impl PyConfig {
    #[new]
    #[pyo3(signature = (cell_size, padding_factor=None, query_slack=None, wide_keys=None, pool_size=None))]
    pub fn new(
        cell_size: f32,
        padding_factor: Option<f32>,
        query_slack: Option<f32>,
        wide_keys: Option<bool>,
        pool_size: Option<usize>,
    ) -> Self {
        let defaults = Config::default();
        PyConfig {
            cell_size,
            padding_factor: padding_factor.unwrap_or(defaults.padding_factor),
            query_slack: query_slack.unwrap_or(defaults.query_slack),
            wide_keys: wide_keys.unwrap_or(false),
            pool_size: pool_size.unwrap_or(defaults.pool_size),
        }
    }
}

impl From<&PyConfig> for Config {
    fn from(config: &PyConfig) -> Self {
        Config {
            cell_size: config.cell_size,
            padding_factor: config.padding_factor,
            query_slack: config.query_slack,
            key_scheme: if config.wide_keys {
                KeyScheme::Wide
            } else {
                KeyScheme::Packed16
            },
            pool_size: config.pool_size,
        }
    }
}

#[pyclass(name = "Grid", unsendable)]
pub struct GridWrapper {
    grid: Grid<Body>,
}

fn map_grid_error(err: GridError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn to_vector(point: Option<(f32, f32)>) -> Option<Vector> {
    point.map(Vector::from)
}

#[pymethods]
impl GridWrapper {
    #[new]
    pub fn new(cell_size: f32) -> PyResult<Self> {
        Ok(GridWrapper {
            grid: Grid::new(cell_size).map_err(map_grid_error)?,
        })
    }

    #[staticmethod]
    pub fn new_with_config(config: PyConfig) -> PyResult<Self> {
        Ok(GridWrapper {
            grid: Grid::new_with_config(Config::from(&config)).map_err(map_grid_error)?,
        })
    }

    #[getter]
    pub fn cell_size(&self) -> f32 {
        self.grid.cell_size()
    }

    pub fn key(&self, x: f32, y: f32) -> i64 {
        self.grid.key(x, y)
    }

    pub fn register(&mut self, id: u32, x: f32, y: f32, size: f32) -> PyResult<u32> {
        self.grid
            .register(Body::new(id, x, y, size))
            .map_err(map_grid_error)
    }

    pub fn register_body(&mut self, body: PyBody) -> PyResult<u32> {
        self.grid
            .register(Body::from(&body))
            .map_err(map_grid_error)
    }

    pub fn get(&self, id: u32) -> Option<PyBody> {
        self.grid.get(id).map(PyBody::from)
    }

    pub fn remove(&mut self, id: u32) -> bool {
        self.grid.remove(id).is_some()
    }

    /// Moves a stored entity. Takes effect at the next `rebuild`.
    pub fn move_to(&mut self, id: u32, x: f32, y: f32) -> PyResult<bool> {
        if !(x.is_finite() && y.is_finite()) {
            return Err(PyValueError::new_err("position must be finite"));
        }
        Ok(match self.grid.get_mut(id) {
            Some(body) => {
                body.move_to(x, y);
                true
            }
            None => false,
        })
    }

    pub fn set_size(&mut self, id: u32, size: f32) -> PyResult<bool> {
        if !(size.is_finite() && size >= 0.0) {
            return Err(PyValueError::new_err("size must be finite and non-negative"));
        }
        Ok(match self.grid.get_mut(id) {
            Some(body) => {
                body.size = size;
                true
            }
            None => false,
        })
    }

    pub fn rebuild(&mut self) {
        self.grid.rebuild();
    }

    #[pyo3(signature = (position=None))]
    pub fn closest(&self, position: Option<(f32, f32)>) -> PyResult<Vec<u32>> {
        self.grid
            .closest(to_vector(position))
            .map(<[u32]>::to_vec)
            .map_err(map_grid_error)
    }

    #[pyo3(signature = (center=None, half_extent=None))]
    pub fn area_keys(
        &self,
        center: Option<(f32, f32)>,
        half_extent: Option<f32>,
    ) -> PyResult<Vec<i64>> {
        self.grid
            .area_keys(to_vector(center), half_extent.unwrap_or(0.0))
            .map_err(map_grid_error)
    }

    #[pyo3(signature = (center=None, half_extent=None))]
    pub fn area_ids(
        &self,
        center: Option<(f32, f32)>,
        half_extent: Option<f32>,
    ) -> PyResult<Vec<u32>> {
        self.grid
            .area_ids(to_vector(center), half_extent.unwrap_or(0.0))
            .map_err(map_grid_error)
    }

    pub fn bucket(&self, key: i64) -> Vec<u32> {
        self.grid.bucket(key).to_vec()
    }

    /// `(entities, indexed, cells, references, largest_bucket)`
    pub fn stats(&self) -> (usize, usize, usize, usize, usize) {
        let stats = self.grid.stats();
        (
            stats.entities,
            stats.indexed,
            stats.cells,
            stats.references,
            stats.largest_bucket,
        )
    }

    fn __len__(&self) -> usize {
        self.grid.len()
    }
}
