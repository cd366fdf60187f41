//! Error types for the fittrack_core library.

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fittrack_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The reading carried a type code outside {SWM, RUN, WLK}
    #[error("unknown workout type: {0}")]
    UnknownWorkoutType(String),

    /// The reading carried the wrong number of sensor values for its type
    #[error("workout type {workout_type} takes {expected} sensor values, got {got}")]
    Construction {
        workout_type: String,
        expected: usize,
        got: usize,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
