//! Python bindings for modgroup.
//!
//! This module exposes the group constructors, subgroup lattice and
//! reports to Python using PyO3. Enable the `python` feature to use this.

use pyo3::prelude::*;
use pyo3::types::PyList;

use crate::error::Error;
use crate::group::{additive_group, multiplicative_group, Group};
use crate::properties::{is_commutative, is_cyclic, legacy_is_abelian};
use crate::report::GroupReport;
use crate::subgroup::{all_subgroups, distinct_subgroups, generate, Subgroup};
use crate::utils::divisors;

fn to_py_err(e: Error) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(e.to_string())
}

fn subgroup_list(py: Python<'_>, subgroups: &[Subgroup]) -> PyResult<PyObject> {
    let list = PyList::empty(py);
    for h in subgroups {
        list.append(PyList::new(py, h.elements()))?;
    }
    Ok(list.into())
}

/// Python wrapper for Group
#[pyclass(name = "Group")]
pub struct PyGroup {
    inner: Group,
}

#[pymethods]
impl PyGroup {
    /// Display name of the group.
    #[getter]
    fn name(&self) -> String {
        self.inner.name().to_string()
    }

    /// Number of elements.
    #[getter]
    fn order(&self) -> usize {
        self.inner.order()
    }

    /// The carrier as a list.
    #[getter]
    fn carrier(&self) -> Vec<u32> {
        self.inner.carrier().to_vec()
    }

    /// The identity element.
    #[getter]
    fn identity(&self) -> u32 {
        self.inner.identity()
    }

    /// Compose two elements.
    fn operate(&self, a: u32, b: u32) -> u32 {
        self.inner.operate(a, b)
    }

    /// The cyclic subgroup generated by `element`.
    fn generate(&self, element: u32) -> PyResult<Vec<u32>> {
        let h = generate(element, &self.inner).map_err(to_py_err)?;
        Ok(h.elements().to_vec())
    }

    /// One subgroup per element, duplicates included.
    fn all_subgroups(&self, py: Python<'_>) -> PyResult<PyObject> {
        let subs = all_subgroups(&self.inner).map_err(to_py_err)?;
        subgroup_list(py, &subs)
    }

    /// Subgroups deduplicated by element set.
    fn distinct_subgroups(&self, py: Python<'_>) -> PyResult<PyObject> {
        let subs = distinct_subgroups(&self.inner).map_err(to_py_err)?;
        subgroup_list(py, &subs)
    }

    /// Whether a single element generates the group.
    fn is_cyclic(&self) -> PyResult<bool> {
        is_cyclic(&self.inner).map_err(to_py_err)
    }

    /// The historical check; always true.
    fn legacy_is_abelian(&self) -> bool {
        legacy_is_abelian(&self.inner)
    }

    /// Whether the operation commutes.
    fn is_commutative(&self) -> bool {
        is_commutative(&self.inner)
    }

    /// The full text report.
    fn report(&self) -> PyResult<String> {
        let report = GroupReport::new(&self.inner).map_err(to_py_err)?;
        Ok(report.to_string())
    }

    fn __len__(&self) -> usize {
        self.inner.order()
    }

    fn __repr__(&self) -> String {
        format!("Group({})", self.inner.name())
    }
}

/// Build the additive group Z/nZ.
#[pyfunction]
fn additive(n: u32) -> PyResult<PyGroup> {
    let inner = additive_group(n).map_err(to_py_err)?;
    Ok(PyGroup { inner })
}

/// Build the multiplicative group (Z/nZ)^×.
#[pyfunction]
fn multiplicative(n: u32) -> PyResult<PyGroup> {
    let inner = multiplicative_group(n).map_err(to_py_err)?;
    Ok(PyGroup { inner })
}

/// All divisors of n.
#[pyfunction]
#[pyo3(name = "divisors")]
fn py_divisors(n: u32) -> PyResult<Vec<u32>> {
    divisors(n).map_err(to_py_err)
}

/// The modgroup Python module.
#[pymodule]
fn modgroup(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyGroup>()?;
    m.add_function(wrap_pyfunction!(additive, m)?)?;
    m.add_function(wrap_pyfunction!(multiplicative, m)?)?;
    m.add_function(wrap_pyfunction!(py_divisors, m)?)?;
    Ok(())
}
