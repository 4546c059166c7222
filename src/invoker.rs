//! Prediction invoker: raw text fields to a rendered diagnosis
//!
//! The only path from user input to a predictor. Raw strings are parsed into
//! typed values first, the vector's arity is checked against the domain's
//! field spec, and only then does the predictor see it. Every failure mode is
//! a `Result`, caught and rendered by the presentation layer.

use crate::domain::Domain;
use crate::errors::{Result, ScreenError};
use crate::predictor::{Outcome, Predictor};
use crate::registry::ModelRegistry;

/// Result of one successful screening
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnosis {
    pub domain: Domain,
    pub outcome: Outcome,
    pub message: &'static str,
}

impl Diagnosis {
    /// Map a predictor outcome to the domain's fixed message pair
    pub fn new(domain: Domain, outcome: Outcome) -> Self {
        let (positive, negative) = domain.diagnosis_messages();
        let message = if outcome.is_positive() { positive } else { negative };

        Diagnosis {
            domain,
            outcome,
            message,
        }
    }
}

/// Parse raw text fields into a feature vector, positionally
///
/// Field labels come from the domain's field list; a value past the end of
/// the list is reported by position. The first bad field wins: an empty
/// field yields `EmptyField`, a non-numeric one `FieldParse`.
pub fn parse_features(domain: Domain, raw_fields: &[String]) -> Result<Vec<f64>> {
    let labels = domain.field_labels();
    let mut features = Vec::with_capacity(raw_fields.len());

    for (i, raw) in raw_fields.iter().enumerate() {
        let field = labels
            .get(i)
            .map(|l| l.to_string())
            .unwrap_or_else(|| format!("field {}", i + 1));

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ScreenError::EmptyField { field });
        }

        let value = trimmed.parse::<f64>().map_err(|_| ScreenError::FieldParse {
            field,
            value: trimmed.to_string(),
        })?;
        features.push(value);
    }

    Ok(features)
}

/// Run one screening: parse, check arity, predict, map to a diagnosis
///
/// Synchronous and single-shot; a failed invocation simply waits for the
/// user to resubmit.
pub fn invoke(registry: &ModelRegistry, domain: Domain, raw_fields: &[String]) -> Result<Diagnosis> {
    let features = parse_features(domain, raw_fields)?;

    if features.len() != domain.arity() {
        return Err(ScreenError::FeatureArity {
            domain: domain.name().to_string(),
            expected: domain.arity(),
            actual: features.len(),
        });
    }

    let outcome = registry.predictor(domain).predict(&features)?;
    Ok(Diagnosis::new(domain, outcome))
}
