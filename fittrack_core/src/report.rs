//! Report rendering for computed workout metrics.
//!
//! Reports are display-only: every quantity is fixed to three decimals the
//! moment the report is built, and the summary template never changes.

use crate::Workout;
use std::fmt;

/// Display-ready view of one workout's computed metrics.
///
/// Quantities are stored pre-formatted, so rendering is a plain template
/// substitution and formatting an already-built report is idempotent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub workout_type: &'static str,
    pub duration: String,
    pub distance: String,
    pub speed: String,
    pub calories: String,
}

impl Report {
    /// Compute and fix all four quantities for the given workout
    pub fn for_workout(workout: &Workout) -> Self {
        tracing::debug!(workout_type = workout.label(), "building report");

        Self {
            workout_type: workout.label(),
            duration: format!("{:.3}", workout.duration_h()),
            distance: format!("{:.3}", workout.distance_km()),
            speed: format!("{:.3}", workout.mean_speed_kmh()),
            calories: format!("{:.3}", workout.calories_kcal()),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {} ч.; Дистанция: {} км; \
             Ср. скорость: {} км/ч; Потрачено ккал: {}.",
            self.workout_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

/// Render the fixed one-line summary for a workout
pub fn render_report(workout: &Workout) -> String {
    Report::for_workout(workout).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_workout;

    fn assert_three_decimals(quantity: &str) {
        let (_, frac) = quantity
            .split_once('.')
            .unwrap_or_else(|| panic!("{quantity} has no decimal point"));
        assert_eq!(frac.len(), 3, "{quantity} must carry exactly 3 decimals");
    }

    #[test]
    fn test_swimming_summary_line() {
        let workout = create_workout("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();

        assert_eq!(
            render_report(&workout),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; \
             Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; \
             Потрачено ккал: 336.000."
        );
    }

    #[test]
    fn test_running_summary_line() {
        let workout = create_workout("RUN", &[15_000.0, 1.0, 75.0]).unwrap();

        assert_eq!(
            render_report(&workout),
            "Тип тренировки: Running; Длительность: 1.000 ч.; \
             Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; \
             Потрачено ккал: 797.805."
        );
    }

    #[test]
    fn test_walking_summary_line() {
        let workout = create_workout("WLK", &[9_000.0, 1.0, 75.0, 180.0]).unwrap();

        assert_eq!(
            render_report(&workout),
            "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; \
             Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; \
             Потрачено ккал: 349.252."
        );
    }

    #[test]
    fn test_quantities_always_carry_three_decimals() {
        let workouts = [
            create_workout("RUN", &[3.0, 0.017, 120.0]).unwrap(),
            create_workout("WLK", &[2_000_000.0, 48.0, 40.0, 210.0]).unwrap(),
            create_workout("SWM", &[1.0, 0.5, 55.0, 12.5, 1.0]).unwrap(),
        ];

        for workout in &workouts {
            let report = Report::for_workout(workout);
            assert_three_decimals(&report.duration);
            assert_three_decimals(&report.distance);
            assert_three_decimals(&report.speed);
            assert_three_decimals(&report.calories);
        }
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let workout = create_workout("RUN", &[15_000.0, 1.0, 75.0]).unwrap();
        let report = Report::for_workout(&workout);

        assert_eq!(report.to_string(), report.to_string());
        assert_eq!(report, Report::for_workout(&workout));
    }
}
