//! Doctor command for artifact diagnostics
//!
//! Checks that every domain's model artifact is present, deserializes, and
//! answers a probe prediction.

use crate::domain::Domain;
use crate::predictor::{LinearModel, Predictor};
use colored::Colorize;
use std::path::PathBuf;

/// Health check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Pass,
    Warn(String),
    Fail(String),
}

/// Individual health check
#[derive(Debug)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
}

/// Doctor diagnostics system
pub struct Doctor {
    models_dir: PathBuf,
}

impl Doctor {
    /// Create a new doctor instance
    pub fn new(models_dir: PathBuf) -> Self {
        Self { models_dir }
    }

    /// Run all health checks
    pub fn run_diagnostics(&self) -> Vec<HealthCheck> {
        let mut checks = Vec::new();

        checks.push(self.check_models_dir());
        for domain in Domain::ALL {
            checks.push(self.check_domain(domain));
        }

        checks
    }

    /// Check 1: models directory exists
    fn check_models_dir(&self) -> HealthCheck {
        let status = if self.models_dir.is_dir() {
            HealthStatus::Pass
        } else {
            HealthStatus::Fail(format!(
                "Models directory {} does not exist",
                self.models_dir.display()
            ))
        };

        HealthCheck {
            name: "Models Directory".to_string(),
            status,
        }
    }

    /// Checks 2-4: per-domain artifact loads and answers a probe vector
    fn check_domain(&self, domain: Domain) -> HealthCheck {
        let name = format!("{} Model", domain.name());
        let path = self.models_dir.join(domain.artifact_file());

        if !path.exists() {
            return HealthCheck {
                name,
                status: HealthStatus::Fail(format!("Artifact not found at {}", path.display())),
            };
        }

        let model = match LinearModel::load(domain, &self.models_dir) {
            Ok(model) => model,
            Err(e) => {
                return HealthCheck {
                    name,
                    status: HealthStatus::Fail(e.to_string()),
                }
            }
        };

        let probe = vec![0.0; domain.arity()];
        match model.predict(&probe) {
            Ok(_) => HealthCheck {
                name,
                status: HealthStatus::Pass,
            },
            Err(e) => HealthCheck {
                name,
                status: HealthStatus::Fail(format!("Probe prediction failed: {}", e)),
            },
        }
    }

    /// Display diagnostics results
    pub fn display_results(checks: &[HealthCheck]) {
        println!("\n{}\n", "MedScreen Artifact Diagnostics".bold().cyan());
        println!("{:<22} {}", "Check", "Status");
        println!("{}", "=".repeat(50));

        for check in checks {
            let status = match &check.status {
                HealthStatus::Pass => "PASS".green().to_string(),
                HealthStatus::Warn(msg) => format!("WARN: {}", msg).yellow().to_string(),
                HealthStatus::Fail(msg) => format!("FAIL: {}", msg).red().to_string(),
            };

            println!("{:<22} {}", check.name, status);
        }

        println!();
    }

    /// Get overall health status
    pub fn overall_status(checks: &[HealthCheck]) -> bool {
        !checks.iter().any(|c| matches!(c.status, HealthStatus::Fail(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictor::{ModelArtifact, ARTIFACT_SCHEMA};
    use std::fs;
    use std::path::Path;

    fn write_artifact(dir: &Path, domain: Domain) {
        let artifact = ModelArtifact {
            schema: ARTIFACT_SCHEMA,
            domain: domain.key().to_string(),
            weights: vec![0.0; domain.arity()],
            intercept: -1.0,
            scaler: None,
        };
        fs::write(
            dir.join(domain.artifact_file()),
            serde_json::to_string(&artifact).unwrap(),
        )
        .unwrap();
    }

    #[test]
    fn test_all_checks_pass_with_valid_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        for domain in Domain::ALL {
            write_artifact(dir.path(), domain);
        }

        let doctor = Doctor::new(dir.path().to_path_buf());
        let checks = doctor.run_diagnostics();

        assert_eq!(checks.len(), 1 + Domain::COUNT);
        assert!(Doctor::overall_status(&checks));
    }

    #[test]
    fn test_missing_artifact_fails() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), Domain::Diabetes);
        write_artifact(dir.path(), Domain::HeartDisease);

        let doctor = Doctor::new(dir.path().to_path_buf());
        let checks = doctor.run_diagnostics();

        assert!(!Doctor::overall_status(&checks));
        let parkinsons = checks
            .iter()
            .find(|c| c.name == "Parkinson's Model")
            .unwrap();
        assert!(matches!(parkinsons.status, HealthStatus::Fail(_)));
    }

    #[test]
    fn test_missing_dir_fails() {
        let doctor = Doctor::new(PathBuf::from("/nonexistent/medscreen/models"));
        let checks = doctor.run_diagnostics();
        assert!(!Doctor::overall_status(&checks));
    }

    #[test]
    fn test_corrupt_artifact_fails() {
        let dir = tempfile::tempdir().unwrap();
        for domain in Domain::ALL {
            write_artifact(dir.path(), domain);
        }
        fs::write(dir.path().join(Domain::Diabetes.artifact_file()), "{}").unwrap();

        let doctor = Doctor::new(dir.path().to_path_buf());
        let checks = doctor.run_diagnostics();
        assert!(!Doctor::overall_status(&checks));
    }

    #[test]
    fn test_overall_status_ignores_warnings() {
        let checks = vec![
            HealthCheck {
                name: "Test 1".to_string(),
                status: HealthStatus::Pass,
            },
            HealthCheck {
                name: "Test 2".to_string(),
                status: HealthStatus::Warn("warning".to_string()),
            },
        ];
        assert!(Doctor::overall_status(&checks));
    }
}
