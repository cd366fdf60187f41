#![forbid(unsafe_code)]

//! Core domain model and metric computation for the FitTrack sensor pipeline.
//!
//! This crate provides:
//! - Workout variants (running, sports walking, swimming) and their metric
//!   formulas (distance, mean speed, calories)
//! - Dispatch from raw sensor readings to workout instances
//! - Report rendering (fixed human-readable summary line)

pub mod dispatch;
pub mod error;
pub mod logging;
pub mod model;
pub mod report;

// Re-export commonly used types
pub use dispatch::{create_workout, WorkoutReading};
pub use error::{Error, Result};
pub use model::{Running, SportsWalking, Swimming, Training, Workout};
pub use report::{render_report, Report};
