//! Error types for the Restwise application
//!
//! The model boundary is the only real failure source: the weights artifact
//! can be missing or corrupt, and a feature vector can be rejected.

use thiserror::Error;

/// Restwise application errors
#[derive(Error, Debug, Clone)]
pub enum RestwiseError {
    /// Model artifact missing, corrupt, or failed to deserialize
    #[error("Model load error: {0}")]
    ModelLoad(String),

    /// Model rejected the feature vector or produced an unusable output
    #[error("Prediction error: {0}")]
    Prediction(String),

    /// Worker channel disconnected
    #[error("Channel error: {0}")]
    Channel(String),
}

impl RestwiseError {
    /// Check if this error is recoverable
    ///
    /// Recoverable errors allow the application to continue running,
    /// while non-recoverable errors may require user intervention or restart.
    pub fn is_recoverable(&self) -> bool {
        match self {
            // A broken artifact stays broken until the install is fixed
            RestwiseError::ModelLoad(_) => false,
            // A rejected feature vector clears on the next valid input
            RestwiseError::Prediction(_) => true,
            // Channel errors indicate internal issues
            RestwiseError::Channel(_) => false,
        }
    }

    /// Get a user-friendly description of the error
    ///
    /// Returns a message suitable for display in the UI.
    pub fn user_message(&self) -> String {
        match self {
            RestwiseError::ModelLoad(_) => {
                "Failed to load the sleep model. Please verify the installation.".to_string()
            }
            RestwiseError::Prediction(_) => {
                "Bedtime calculation failed. Please adjust your inputs and try again.".to_string()
            }
            RestwiseError::Channel(_) => {
                "Internal communication error. Please restart the application.".to_string()
            }
        }
    }
}

/// Result type alias for Restwise operations
pub type Result<T> = std::result::Result<T, RestwiseError>;
