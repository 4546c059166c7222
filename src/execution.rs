//! Shared screening execution for the CLI and the interactive session
//!
//! One routine runs a submission end to end: invoke, render the outcome, and
//! produce the session record. Recoverable errors are rendered and folded
//! into the record; anything else propagates.

use crate::domain::Domain;
use crate::errors::Result;
use crate::invoker;
use crate::registry::ModelRegistry;
use crate::repl::display::DisplayManager;
use crate::repl::session::ScreeningRecord;
use chrono::Utc;
use std::time::Instant;

/// Run one screening and render its result
pub fn run_screening(
    registry: &ModelRegistry,
    domain: Domain,
    raw_fields: &[String],
    display: &DisplayManager,
) -> Result<ScreeningRecord> {
    let start = Instant::now();

    let (message, success) = match invoker::invoke(registry, domain, raw_fields) {
        Ok(diagnosis) => {
            display.show_success(diagnosis.message);
            (diagnosis.message.to_string(), true)
        }
        Err(err) if err.is_recoverable() => {
            display.show_error(&err.to_string());
            (err.to_string(), false)
        }
        Err(err) => return Err(err),
    };

    Ok(ScreeningRecord {
        domain: domain.name().to_string(),
        message,
        success,
        duration_ms: start.elapsed().as_millis() as u64,
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictor::{LinearModel, ModelArtifact, Predictor, ARTIFACT_SCHEMA};

    /// Diabetes model that flags glucose (slot 1) above 125
    fn test_registry() -> ModelRegistry {
        let make = |domain: Domain, weights: Vec<f64>, intercept: f64| {
            let artifact = ModelArtifact {
                schema: ARTIFACT_SCHEMA,
                domain: domain.key().to_string(),
                weights,
                intercept,
                scaler: None,
            };
            Box::new(LinearModel::from_artifact(domain, artifact).unwrap()) as Box<dyn Predictor>
        };

        let mut diabetes_weights = vec![0.0; Domain::Diabetes.arity()];
        diabetes_weights[1] = 1.0;

        ModelRegistry::from_predictors([
            make(Domain::Diabetes, diabetes_weights, -125.0),
            make(
                Domain::HeartDisease,
                vec![0.0; Domain::HeartDisease.arity()],
                -1.0,
            ),
            make(
                Domain::Parkinsons,
                vec![0.0; Domain::Parkinsons.arity()],
                1.0,
            ),
        ])
    }

    fn raw(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_successful_screening_produces_record() {
        let registry = test_registry();
        let display = DisplayManager::new();
        let fields = raw(&["2", "130", "70", "20", "85", "28.0", "0.5", "33"]);

        let record = run_screening(&registry, Domain::Diabetes, &fields, &display).unwrap();

        assert!(record.success);
        assert_eq!(record.domain, "Diabetes");
        assert_eq!(record.message, "The person is diabetic");
    }

    #[test]
    fn test_recoverable_error_folds_into_record() {
        let registry = test_registry();
        let display = DisplayManager::new();
        let fields = raw(&["2", "abc", "70", "20", "85", "28.0", "0.5", "33"]);

        let record = run_screening(&registry, Domain::Diabetes, &fields, &display).unwrap();

        assert!(!record.success);
        assert!(record.message.contains("Glucose Level"));
    }

    #[test]
    fn test_arity_error_folds_into_record() {
        let registry = test_registry();
        let display = DisplayManager::new();
        let fields: Vec<String> = (0..12).map(|i| i.to_string()).collect();

        let record = run_screening(&registry, Domain::HeartDisease, &fields, &display).unwrap();

        assert!(!record.success);
        assert!(record.message.contains("13"));
    }
}
