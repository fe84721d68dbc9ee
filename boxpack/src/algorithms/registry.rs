use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::Result;

use crate::algorithms::{AlgorithmType, PackingAlgorithm, PivotPacker};
use crate::error::PackingError;
use crate::util::PackingConfig;

/// Maps algorithm identifiers to their implementations.
///
/// By default only the pivot heuristic ([`AlgorithmType::Sharp3dPacking`]) is available.
/// Other implementations, such as one for [`AlgorithmType::EbAfit`], can be added with [`AlgorithmRegistry::register`].
#[derive(Clone)]
pub struct AlgorithmRegistry {
    algorithms: BTreeMap<AlgorithmType, Arc<dyn PackingAlgorithm>>,
}

impl AlgorithmRegistry {
    /// A registry without any algorithms
    pub fn empty() -> Self {
        Self {
            algorithms: BTreeMap::new(),
        }
    }

    /// The default registry, with the pivot heuristic configured according to `config`
    pub fn new(config: PackingConfig) -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(PivotPacker::new(config.pivot_config)));
        registry
    }

    /// Registers `algorithm` under its own [`AlgorithmType`], replacing any previous implementation.
    pub fn register(&mut self, algorithm: Arc<dyn PackingAlgorithm>) -> &mut Self {
        self.algorithms.insert(algorithm.algorithm_type(), algorithm);
        self
    }

    /// Resolves an identifier to its implementation.
    ///
    /// Fails with [`PackingError::InvalidAlgorithm`] for identifiers outside [`AlgorithmType`],
    /// and with [`PackingError::UnsupportedAlgorithm`] for known algorithms without an implementation.
    pub fn resolve(&self, id: u32) -> Result<Arc<dyn PackingAlgorithm>> {
        let algorithm_type = AlgorithmType::try_from(id)?;
        match self.algorithms.get(&algorithm_type) {
            Some(algorithm) => Ok(algorithm.clone()),
            None => Err(PackingError::UnsupportedAlgorithm(algorithm_type).into()),
        }
    }

    /// Resolves all identifiers, in order. Fails on the first one that cannot be resolved.
    pub fn resolve_all(&self, ids: &[u32]) -> Result<Vec<Arc<dyn PackingAlgorithm>>> {
        ids.iter().map(|&id| self.resolve(id)).collect()
    }

    pub fn algorithm_types(&self) -> impl Iterator<Item = AlgorithmType> + '_ {
        self.algorithms.keys().copied()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new(PackingConfig::default())
    }
}
