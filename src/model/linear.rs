//! Linear sleep regression model
//!
//! Formula: `awake_seconds = intercept + wake*wake_seconds
//! + sleep_hours*desired_hours + coffee*cups`
//!
//! The weights come from an externally-trained artifact bundled with the
//! binary; training is out of scope here.

use crate::error::{RestwiseError, Result};
use crate::model::{SleepFeatures, SleepModel};
use serde::Deserialize;
use tracing::debug;

/// Weights artifact bundled at build time
const EMBEDDED_ARTIFACT: &str = include_str!("../../assets/sleep_model.json");

/// Trained weights for the linear model
#[derive(Debug, Clone, Deserialize)]
pub struct LinearWeights {
    pub intercept: f64,
    pub wake: f64,
    pub sleep_hours: f64,
    pub coffee: f64,
}

impl LinearWeights {
    /// Check that every weight is a usable real number
    fn is_finite(&self) -> bool {
        self.intercept.is_finite()
            && self.wake.is_finite()
            && self.sleep_hours.is_finite()
            && self.coffee.is_finite()
    }
}

/// Linear sleep regression model
#[derive(Debug, Clone)]
pub struct LinearSleepModel {
    weights: LinearWeights,
}

impl LinearSleepModel {
    /// Create a model from already-validated weights
    pub fn new(weights: LinearWeights) -> Result<Self> {
        if !weights.is_finite() {
            return Err(RestwiseError::ModelLoad(
                "weights artifact contains non-finite values".to_string(),
            ));
        }
        Ok(Self { weights })
    }

    /// Deserialize a weights artifact from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let weights: LinearWeights = serde_json::from_str(json)
            .map_err(|e| RestwiseError::ModelLoad(format!("failed to parse weights: {}", e)))?;
        Self::new(weights)
    }

    /// Load the artifact bundled with the binary
    pub fn from_embedded() -> Result<Self> {
        let model = Self::from_json(EMBEDDED_ARTIFACT)?;
        debug!("Loaded embedded sleep model: {:?}", model.weights);
        Ok(model)
    }

    /// Access the trained weights
    pub fn weights(&self) -> &LinearWeights {
        &self.weights
    }
}

impl SleepModel for LinearSleepModel {
    fn predict(&self, features: &SleepFeatures) -> Result<f64> {
        if !features.is_finite() {
            return Err(RestwiseError::Prediction(format!(
                "non-finite feature vector: {:?}",
                features
            )));
        }

        let awake_seconds = self.weights.intercept
            + self.weights.wake * features.wake_seconds
            + self.weights.sleep_hours * features.sleep_hours
            + self.weights.coffee * features.coffee_cups;

        if !awake_seconds.is_finite() || awake_seconds < 0.0 {
            return Err(RestwiseError::Prediction(format!(
                "model produced unusable output: {}",
                awake_seconds
            )));
        }

        Ok(awake_seconds)
    }

    fn name(&self) -> &str {
        "linear-v1"
    }
}
