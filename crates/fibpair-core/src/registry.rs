//! Calculator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::calculator::{Calculator, CoreCalculator, FibCalculator};
use crate::error::FibError;
use crate::fastdoubling::FastDoubling;
use crate::iterative::IterativeDoubling;
use crate::iterator::LinearIteration;
use crate::memo::MemoizedDoubling;

/// Registry names, in the order `available` reports them.
const CALCULATOR_NAMES: [&str; 4] = ["fast", "iterative", "memo", "linear"];

/// Factory trait for creating calculators.
pub trait CalculatorFactory: Send + Sync {
    /// Get or create a calculator by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError>;

    /// List all available calculator names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn Calculator>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_calculator(name: &str) -> Result<Arc<dyn Calculator>, FibError> {
        let core: Arc<dyn CoreCalculator> = match name {
            "fast" | "fastdoubling" => Arc::new(FastDoubling::new()),
            "iterative" => Arc::new(IterativeDoubling::new()),
            "memo" => Arc::new(MemoizedDoubling::new()),
            "linear" => Arc::new(LinearIteration::new()),
            _ => return Err(FibError::Config(format!("unknown calculator: {name}"))),
        };
        Ok(Arc::new(FibCalculator::new(core)))
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError> {
        if let Some(calc) = self.cache.read().get(name) {
            return Ok(Arc::clone(calc));
        }

        let mut cache = self.cache.write();
        // Another thread may have created it between the two locks.
        if let Some(calc) = cache.get(name) {
            return Ok(Arc::clone(calc));
        }
        let calc = Self::create_calculator(name)?;
        debug!(name, algorithm = calc.name(), "created calculator");
        cache.insert(name.to_string(), Arc::clone(&calc));
        Ok(calc)
    }

    fn available(&self) -> Vec<&str> {
        CALCULATOR_NAMES.to_vec()
    }
}
