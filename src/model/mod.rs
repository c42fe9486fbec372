//! The regression model boundary
//!
//! The sleep model is an externally-trained artifact consumed as a black
//! box: three real-valued features in, one real-valued output (seconds of
//! wakefulness before ideal sleep onset). Everything behind [`SleepModel`]
//! is opaque to the rest of the application.

mod linear;

pub use linear::{LinearSleepModel, LinearWeights};

use crate::error::Result;

/// Feature vector for one prediction request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepFeatures {
    /// Wake-up time as seconds since midnight
    pub wake_seconds: f64,
    /// Desired sleep duration in hours
    pub sleep_hours: f64,
    /// Daily coffee intake in cups
    pub coffee_cups: f64,
}

impl SleepFeatures {
    /// Check that every feature is a usable real number
    pub fn is_finite(&self) -> bool {
        self.wake_seconds.is_finite() && self.sleep_hours.is_finite() && self.coffee_cups.is_finite()
    }
}

/// Trait for pre-trained sleep regression models.
///
/// The output is the number of seconds the subject should stay awake before
/// sleep onset, to be subtracted from the wake-up time.
pub trait SleepModel: Send {
    /// Run inference on one feature vector
    fn predict(&self, features: &SleepFeatures) -> Result<f64>;

    /// Human-readable model identifier, for logging
    fn name(&self) -> &str;
}

/// Load the bundled sleep model artifact
pub fn load_default() -> Result<LinearSleepModel> {
    LinearSleepModel::from_embedded()
}
