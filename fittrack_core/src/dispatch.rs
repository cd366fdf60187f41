//! Dispatch from raw sensor readings to workout instances.
//!
//! The sensor unit delivers packages as a short type code plus a positional
//! list of numeric values. The mapping is closed: `SWM`, `RUN` and `WLK` are
//! the only known codes, and values bind to variant fields strictly in
//! declared order. Value content is not validated here; wrong numbers in the
//! right positions produce wrong metrics, not errors.

use crate::{Error, Result, Running, SportsWalking, Swimming, Workout};
use serde::{Deserialize, Serialize};

/// One raw package from the sensor unit.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutReading {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl WorkoutReading {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    /// Parse a reading from a single JSON line
    pub fn from_json(line: &str) -> Result<Self> {
        Ok(serde_json::from_str(line)?)
    }

    /// Build the workout this reading describes
    pub fn to_workout(&self) -> Result<Workout> {
        create_workout(&self.workout_type, &self.data)
    }
}

/// Build a workout from a type code and positional sensor values
///
/// Field order per code:
/// - `RUN`: action, duration_h, weight_kg
/// - `WLK`: action, duration_h, weight_kg, height_cm
/// - `SWM`: action, duration_h, weight_kg, pool_length_m, lap_count
pub fn create_workout(workout_type: &str, data: &[f64]) -> Result<Workout> {
    let workout = match workout_type {
        "RUN" => match *data {
            [action, duration_h, weight_kg] => Workout::Running(Running {
                action: action as u32,
                duration_h,
                weight_kg,
            }),
            _ => return Err(wrong_arity(workout_type, 3, data.len())),
        },
        "WLK" => match *data {
            [action, duration_h, weight_kg, height_cm] => {
                Workout::SportsWalking(SportsWalking {
                    action: action as u32,
                    duration_h,
                    weight_kg,
                    height_cm,
                })
            }
            _ => return Err(wrong_arity(workout_type, 4, data.len())),
        },
        "SWM" => match *data {
            [action, duration_h, weight_kg, pool_length_m, lap_count] => {
                Workout::Swimming(Swimming {
                    action: action as u32,
                    duration_h,
                    weight_kg,
                    pool_length_m,
                    lap_count: lap_count as u32,
                })
            }
            _ => return Err(wrong_arity(workout_type, 5, data.len())),
        },
        other => {
            tracing::warn!("rejecting reading with unknown workout type {other}");
            return Err(Error::UnknownWorkoutType(other.to_string()));
        }
    };

    tracing::debug!(workout_type, "constructed workout from reading");
    Ok(workout)
}

fn wrong_arity(workout_type: &str, expected: usize, got: usize) -> Error {
    Error::Construction {
        workout_type: workout_type.to_string(),
        expected,
        got,
    }
}
