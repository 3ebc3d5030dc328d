use pasture_core::config::GameConfig;
use pasture_core::world::World;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Minimal PyO3 module exposing pasture-core to Python.
#[pyfunction]
fn version() -> &'static str {
    "0.1.0"
}

/// One game instance. Python drives the tick and purchases; state comes
/// back as a JSON snapshot per day.
#[pyclass]
struct Game {
    world: World,
}

#[pymethods]
impl Game {
    #[new]
    #[pyo3(signature = (seed = 42))]
    fn new(seed: u64) -> PyResult<Self> {
        let config = GameConfig {
            seed,
            ..GameConfig::default()
        };
        let world = World::try_new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { world })
    }

    fn advance_day(&mut self) {
        self.world.advance_day();
    }

    /// Purchase an upgrade by key. Unknown keys and unaffordable or
    /// maxed upgrades return False without changing state.
    fn purchase(&mut self, key: &str) -> bool {
        self.world.purchase_by_key(key)
    }

    fn money(&self) -> f64 {
        self.world.money()
    }

    fn snapshot_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.world.snapshot())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Game>()?;
    m.add_function(wrap_pyfunction!(version, m)?)?;
    Ok(())
}
