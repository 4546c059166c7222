//! Model registry holding one loaded predictor per domain
//!
//! Loaded once at startup and passed by reference everywhere a prediction is
//! made; there is no ambient global lookup. After construction the registry
//! is read-only, so shared access needs no synchronization.

use crate::domain::Domain;
use crate::errors::Result;
use crate::predictor::{LinearModel, Predictor};
use std::path::Path;

/// Immutable registry of the three domain predictors
pub struct ModelRegistry {
    predictors: [Box<dyn Predictor>; Domain::COUNT],
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("predictors", &self.predictors.len())
            .finish()
    }
}

impl ModelRegistry {
    /// Load every domain's artifact from `models_dir`
    ///
    /// Any artifact that is missing, unreadable, or inconsistent aborts the
    /// whole load: serving a subset of domains is not a supported mode.
    pub fn load(models_dir: &Path) -> Result<Self> {
        let predictors: [Box<dyn Predictor>; Domain::COUNT] = [
            Box::new(LinearModel::load(Domain::Diabetes, models_dir)?),
            Box::new(LinearModel::load(Domain::HeartDisease, models_dir)?),
            Box::new(LinearModel::load(Domain::Parkinsons, models_dir)?),
        ];

        Ok(ModelRegistry { predictors })
    }

    /// Build a registry from pre-constructed predictors, in [`Domain::ALL`]
    /// order. Mainly useful for tests with stub models.
    pub fn from_predictors(predictors: [Box<dyn Predictor>; Domain::COUNT]) -> Self {
        ModelRegistry { predictors }
    }

    /// The predictor for a domain
    ///
    /// Infallible: the domain set is closed and `load` populates every slot.
    pub fn predictor(&self, domain: Domain) -> &dyn Predictor {
        self.predictors[domain.index()].as_ref()
    }
}
