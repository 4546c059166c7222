//! Predictor trait and the serialized linear-classifier implementation
//!
//! A predictor is an opaque pre-trained binary classifier: it takes an
//! ordered feature vector and returns a 0/1 outcome. The shipped
//! implementation deserializes a JSON artifact describing a linear decision
//! function with optional per-feature standardization. The artifact's
//! training provenance is an external concern; this module only loads and
//! evaluates it.

use crate::domain::Domain;
use crate::errors::{Result, ScreenError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Artifact schema version this build understands
pub const ARTIFACT_SCHEMA: u32 = 1;

/// Binary classification outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Negative,
    Positive,
}

impl Outcome {
    /// True for the positive (disease present) class
    pub fn is_positive(&self) -> bool {
        matches!(self, Outcome::Positive)
    }

    /// The classifier contract's 0/1 encoding
    pub fn as_u8(&self) -> u8 {
        match self {
            Outcome::Negative => 0,
            Outcome::Positive => 1,
        }
    }
}

/// A loaded binary classifier
///
/// Implementations must be deterministic and internally immutable: the same
/// feature vector always yields the same outcome, and handles may be shared
/// across threads without locking.
pub trait Predictor: Send + Sync {
    /// Number of features the model expects
    fn arity(&self) -> usize;

    /// Classify a feature vector
    ///
    /// Rejects vectors whose length differs from [`Predictor::arity`] with
    /// `ScreenError::FeatureArity`.
    fn predict(&self, features: &[f64]) -> Result<Outcome>;
}

/// Per-feature standardization parameters baked into the artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// On-disk model artifact
///
/// ```json
/// {
///   "schema": 1,
///   "domain": "diabetes",
///   "weights": [0.41, 1.13, ...],
///   "intercept": -0.86,
///   "scaler": { "mean": [...], "scale": [...] }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub schema: u32,
    pub domain: String,
    pub weights: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub scaler: Option<Scaler>,
}

/// Linear classifier evaluated as sign(w . z + b)
///
/// With a scaler present, each input is standardized as (x - mean) / scale
/// before the dot product, matching how the artifact was trained.
#[derive(Debug)]
pub struct LinearModel {
    domain: Domain,
    weights: Vec<f64>,
    intercept: f64,
    scaler: Option<Scaler>,
}

impl LinearModel {
    /// Load and validate the artifact for `domain` from `models_dir`
    pub fn load(domain: Domain, models_dir: &Path) -> Result<Self> {
        let path = models_dir.join(domain.artifact_file());

        let load_err = |reason: String| ScreenError::ModelLoad {
            domain: domain.name().to_string(),
            path: path.clone(),
            reason,
        };

        let contents = fs::read_to_string(&path).map_err(|e| load_err(e.to_string()))?;
        let artifact: ModelArtifact =
            serde_json::from_str(&contents).map_err(|e| load_err(e.to_string()))?;

        Self::from_artifact(domain, artifact).map_err(load_err)
    }

    /// Build a model from a deserialized artifact, checking internal
    /// consistency and agreement with the domain's field spec
    pub fn from_artifact(
        domain: Domain,
        artifact: ModelArtifact,
    ) -> std::result::Result<Self, String> {
        if artifact.schema != ARTIFACT_SCHEMA {
            return Err(format!(
                "unsupported artifact schema {} (expected {})",
                artifact.schema, ARTIFACT_SCHEMA
            ));
        }

        if artifact.domain != domain.key() {
            return Err(format!(
                "artifact is tagged '{}', expected '{}'",
                artifact.domain,
                domain.key()
            ));
        }

        if artifact.weights.len() != domain.arity() {
            return Err(format!(
                "artifact has {} weights, field spec requires {}",
                artifact.weights.len(),
                domain.arity()
            ));
        }

        if let Some(scaler) = &artifact.scaler {
            if scaler.mean.len() != artifact.weights.len()
                || scaler.scale.len() != artifact.weights.len()
            {
                return Err(format!(
                    "scaler dimensions ({}, {}) do not match {} weights",
                    scaler.mean.len(),
                    scaler.scale.len(),
                    artifact.weights.len()
                ));
            }
            if scaler.scale.iter().any(|s| *s == 0.0 || !s.is_finite()) {
                return Err("scaler contains a zero or non-finite scale entry".to_string());
            }
        }

        Ok(LinearModel {
            domain,
            weights: artifact.weights,
            intercept: artifact.intercept,
            scaler: artifact.scaler,
        })
    }

    /// Domain this model was loaded for
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Raw decision score (w . z + b) before thresholding
    fn score(&self, features: &[f64]) -> f64 {
        let mut score = self.intercept;
        for (i, (&x, &w)) in features.iter().zip(&self.weights).enumerate() {
            let z = match &self.scaler {
                Some(s) => (x - s.mean[i]) / s.scale[i],
                None => x,
            };
            score += w * z;
        }
        score
    }
}

impl Predictor for LinearModel {
    fn arity(&self) -> usize {
        self.weights.len()
    }

    fn predict(&self, features: &[f64]) -> Result<Outcome> {
        if features.len() != self.weights.len() {
            return Err(ScreenError::FeatureArity {
                domain: self.domain.name().to_string(),
                expected: self.weights.len(),
                actual: features.len(),
            });
        }

        if self.score(features) > 0.0 {
            Ok(Outcome::Positive)
        } else {
            Ok(Outcome::Negative)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unscaled diabetes-shaped artifact: positive iff glucose (slot 1) > 125
    fn glucose_threshold_artifact() -> ModelArtifact {
        ModelArtifact {
            schema: ARTIFACT_SCHEMA,
            domain: "diabetes".to_string(),
            weights: vec![0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            intercept: -125.0,
            scaler: None,
        }
    }

    #[test]
    fn test_outcome_encoding() {
        assert_eq!(Outcome::Negative.as_u8(), 0);
        assert_eq!(Outcome::Positive.as_u8(), 1);
        assert!(Outcome::Positive.is_positive());
        assert!(!Outcome::Negative.is_positive());
    }

    #[test]
    fn test_predict_thresholds_on_score() {
        let model =
            LinearModel::from_artifact(Domain::Diabetes, glucose_threshold_artifact()).unwrap();

        let high = [2.0, 130.0, 70.0, 20.0, 85.0, 28.0, 0.5, 33.0];
        let low = [2.0, 100.0, 70.0, 20.0, 85.0, 28.0, 0.5, 33.0];

        assert_eq!(model.predict(&high).unwrap(), Outcome::Positive);
        assert_eq!(model.predict(&low).unwrap(), Outcome::Negative);
    }

    #[test]
    fn test_predict_is_deterministic() {
        let model =
            LinearModel::from_artifact(Domain::Diabetes, glucose_threshold_artifact()).unwrap();
        let features = [2.0, 130.0, 70.0, 20.0, 85.0, 28.0, 0.5, 33.0];

        let first = model.predict(&features).unwrap();
        let second = model.predict(&features).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_predict_rejects_wrong_arity() {
        let model =
            LinearModel::from_artifact(Domain::Diabetes, glucose_threshold_artifact()).unwrap();

        let short = [1.0; 7];
        let long = [1.0; 9];

        assert!(matches!(
            model.predict(&short),
            Err(ScreenError::FeatureArity {
                expected: 8,
                actual: 7,
                ..
            })
        ));
        assert!(matches!(
            model.predict(&long),
            Err(ScreenError::FeatureArity {
                expected: 8,
                actual: 9,
                ..
            })
        ));
    }

    #[test]
    fn test_scaler_standardizes_inputs() {
        // weight 1 on a single standardized feature: positive iff x > mean
        let artifact = ModelArtifact {
            schema: ARTIFACT_SCHEMA,
            domain: "diabetes".to_string(),
            weights: vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            intercept: 0.0,
            scaler: Some(Scaler {
                mean: vec![100.0; 8],
                scale: vec![10.0; 8],
            }),
        };
        let model = LinearModel::from_artifact(Domain::Diabetes, artifact).unwrap();

        let above = [110.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let below = [90.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];

        assert_eq!(model.predict(&above).unwrap(), Outcome::Positive);
        assert_eq!(model.predict(&below).unwrap(), Outcome::Negative);
    }

    #[test]
    fn test_rejects_unsupported_schema() {
        let mut artifact = glucose_threshold_artifact();
        artifact.schema = 99;

        let err = LinearModel::from_artifact(Domain::Diabetes, artifact).unwrap_err();
        assert!(err.contains("schema"));
    }

    #[test]
    fn test_rejects_mismatched_domain_tag() {
        let mut artifact = glucose_threshold_artifact();
        artifact.domain = "parkinsons".to_string();

        let err = LinearModel::from_artifact(Domain::Diabetes, artifact).unwrap_err();
        assert!(err.contains("tagged"));
    }

    #[test]
    fn test_rejects_weight_count_mismatch() {
        let mut artifact = glucose_threshold_artifact();
        artifact.weights.pop();

        let err = LinearModel::from_artifact(Domain::Diabetes, artifact).unwrap_err();
        assert!(err.contains("weights"));
    }

    #[test]
    fn test_rejects_bad_scaler() {
        let mut artifact = glucose_threshold_artifact();
        artifact.scaler = Some(Scaler {
            mean: vec![0.0; 8],
            scale: vec![0.0; 8],
        });

        let err = LinearModel::from_artifact(Domain::Diabetes, artifact).unwrap_err();
        assert!(err.contains("scale"));

        let mut artifact = glucose_threshold_artifact();
        artifact.scaler = Some(Scaler {
            mean: vec![0.0; 3],
            scale: vec![1.0; 3],
        });
        let err = LinearModel::from_artifact(Domain::Diabetes, artifact).unwrap_err();
        assert!(err.contains("dimensions"));
    }

    #[test]
    fn test_load_missing_file_is_model_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LinearModel::load(Domain::Diabetes, dir.path()).unwrap_err();

        match err {
            ScreenError::ModelLoad { domain, path, .. } => {
                assert_eq!(domain, "Diabetes");
                assert!(path.ends_with("diabetes.json"));
            }
            other => panic!("expected ModelLoad, got {other:?}"),
        }
    }

    #[test]
    fn test_load_corrupt_file_is_model_load_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("diabetes.json"), "{ not json").unwrap();

        let err = LinearModel::load(Domain::Diabetes, dir.path()).unwrap_err();
        assert!(matches!(err, ScreenError::ModelLoad { .. }));
    }

    #[test]
    fn test_artifact_round_trip() {
        let artifact = glucose_threshold_artifact();
        let json = serde_json::to_string(&artifact).unwrap();
        let back: ModelArtifact = serde_json::from_str(&json).unwrap();

        assert_eq!(back.weights, artifact.weights);
        assert_eq!(back.intercept, artifact.intercept);
        assert!(back.scaler.is_none());
    }
}
