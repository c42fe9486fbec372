//! Prediction request/response flow
//!
//! Packages the user inputs into a feature vector, runs the model, and
//! turns its output into a bedtime. The worker half lives in
//! [`worker`]; [`compute_bedtime`] is the synchronous core both the worker
//! and the tests call.

mod worker;

pub use worker::PredictorHandle;

use crate::error::Result;
use crate::inputs::UserInputs;
use crate::model::{SleepFeatures, SleepModel};
use crate::timeofday::{bedtime_from, wake_seconds};
use chrono::NaiveTime;
use tracing::debug;
use uuid::Uuid;

/// A computed bedtime recommendation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Recommended time to fall asleep
    pub bedtime: NaiveTime,
}

/// Commands sent to the predictor worker
#[derive(Debug, Clone)]
pub enum PredictCommand {
    /// Run one prediction for the given inputs
    Compute {
        inputs: UserInputs,
        request_id: Uuid,
    },
    /// Stop the worker thread
    Shutdown,
}

/// Events emitted by the predictor worker
#[derive(Debug, Clone)]
pub enum PredictEvent {
    /// Inference succeeded
    Computed {
        prediction: Prediction,
        request_id: Uuid,
    },
    /// Inference failed; the display state must not change
    Failed {
        error: crate::RestwiseError,
        request_id: Uuid,
    },
}

/// Build the model's feature vector from the user inputs
pub fn features_from_inputs(inputs: &UserInputs) -> SleepFeatures {
    SleepFeatures {
        wake_seconds: f64::from(wake_seconds(inputs.wake_time)),
        sleep_hours: inputs.sleep_hours,
        coffee_cups: f64::from(inputs.coffee_cups),
    }
}

/// Compute a bedtime recommendation for the given inputs.
///
/// The model output is a wakefulness duration in seconds, subtracted from
/// the wake-up time with wrap-around-midnight arithmetic.
pub fn compute_bedtime(inputs: &UserInputs, model: &dyn SleepModel) -> Result<Prediction> {
    let features = features_from_inputs(inputs);
    let awake_seconds = model.predict(&features)?;

    let bedtime = bedtime_from(inputs.wake_time, awake_seconds);
    debug!(
        "Model {} predicted {:.0}s awake, bedtime {}",
        model.name(),
        awake_seconds,
        bedtime
    );

    Ok(Prediction { bedtime })
}
