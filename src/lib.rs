//! Restwise - bedtime recommendation from a pre-trained sleep model
//!
//! This crate provides a single-screen desktop app that collects desired
//! sleep duration, daily coffee intake and wake-up time, runs them through
//! an externally-trained regression model, and displays a recommended
//! bedtime.

pub mod error;
pub mod inputs;
pub mod model;
pub mod predictor;
pub mod timeofday;
pub mod ui;

// Re-export error types
pub use error::{RestwiseError, Result};

// Re-export model boundary types
pub use model::{LinearSleepModel, SleepFeatures, SleepModel};

// Re-export prediction flow types
pub use predictor::{compute_bedtime, PredictCommand, PredictEvent, Prediction, PredictorHandle};

// Re-export state types
pub use ui::{AppState, DisplayState, RestwiseApp, Theme};
