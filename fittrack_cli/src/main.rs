use clap::Parser;
use fittrack_core::{create_workout, render_report, Result, WorkoutReading};

/// Fixed sensor packages processed at startup, in wire order.
const PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15_000.0, 1.0, 75.0]),
    ("WLK", &[9_000.0, 1.0, 75.0, 180.0]),
];

#[derive(Parser)]
#[command(name = "fittrack")]
#[command(about = "Fitness metrics from raw sensor readings", long_about = None)]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    // Initialize logging
    fittrack_core::logging::init();

    Cli::parse();

    for (workout_type, data) in PACKAGES {
        let reading = WorkoutReading::new(workout_type, data.to_vec());
        tracing::info!(workout_type = %reading.workout_type, "processing reading");

        // An unknown type code aborts the whole run; no partial handling
        let workout = create_workout(&reading.workout_type, &reading.data)?;
        println!("{}", render_report(&workout));
    }

    Ok(())
}
