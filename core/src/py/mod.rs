// core/src/py/mod.rs
//
// Python-grensesnittet for studie-driveren (Flask-dashboardet og
// preprocess-skriptene). Tar JSON-strenger eller vilkårlige Python-objekter
// (serialiseres via json.dumps) og returnerer Python-objekter via json.loads.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

// ──────────────────────────────────────────────────────────────────────────────
// HJELPERE
// ──────────────────────────────────────────────────────────────────────────────

/// Få payload som JSON-streng uansett om kalleren sender str eller dict/list.
fn payload_to_json(py: Python<'_>, payload: &PyAny) -> PyResult<String> {
    if let Ok(s) = payload.extract::<&str>() {
        return Ok(s.to_owned());
    }
    // Bruk Python sin json.dumps for å serialisere hvilket som helst objekt
    let json_mod = py
        .import("json")
        .map_err(|e| PyValueError::new_err(format!("failed to import json: {e}")))?;
    json_mod
        .call_method1("dumps", (payload,))
        .and_then(|o| o.extract::<String>())
        .map_err(|e| PyValueError::new_err(format!("failed to serialize payload with json.dumps: {e}")))
}

/// Returnér JSON-strengen som Python-objekt (dict/list) via json.loads.
fn json_to_py(py: Python<'_>, out: &str) -> PyResult<PyObject> {
    let json_mod = py
        .import("json")
        .map_err(|e| PyValueError::new_err(format!("failed to import json: {e}")))?;
    let obj = json_mod
        .call_method1("loads", (out,))
        .map_err(|e| PyValueError::new_err(format!("internal JSON parse error via json.loads: {e}")))?;
    Ok(obj.into_py(py))
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-FUNKSJONER
// ──────────────────────────────────────────────────────────────────────────────

/// Full session-pipeline: {"sublevels": [[{watch_timestamp, bpm}, ...], ...]}
/// → {"sublevels": [...], "combined": [...], "events": [...]}.
#[pyfunction]
fn run_session_json(py: Python<'_>, payload: &PyAny) -> PyResult<PyObject> {
    let json_in = payload_to_json(py, payload)?;
    let out = crate::pipeline::run_session_json(&json_in).map_err(PyValueError::new_err)?;
    json_to_py(py, &out)
}

/// Reparasjon av én enkelt serie: [{watch_timestamp, bpm}, ...] → reparerte rader.
#[pyfunction]
fn repair_series_json(py: Python<'_>, payload: &PyAny) -> PyResult<PyObject> {
    let json_in = payload_to_json(py, payload)?;
    let out = crate::pipeline::repair_series_json(&json_in).map_err(PyValueError::new_err)?;
    json_to_py(py, &out)
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-MODUL
// ──────────────────────────────────────────────────────────────────────────────

#[pymodule]
fn pulsegraph_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(run_session_json, m)?)?;
    m.add_function(wrap_pyfunction!(repair_series_json, m)?)?;
    Ok(())
}
