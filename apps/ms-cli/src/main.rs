use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use ms_solver::{MotionState, calculator};

mod error;
mod inputs;
mod state_file;

use error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "ms-cli")]
#[command(about = "MotionSolver CLI - constant-acceleration kinematics calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Coordinate after a given time
    #[command(allow_negative_numbers = true)]
    Coordinate {
        /// Elapsed time
        #[arg(long)]
        time: f64,
        /// Initial coordinate
        #[arg(long)]
        x0: f64,
        /// Initial velocity
        #[arg(long)]
        v0: f64,
        /// Acceleration
        #[arg(long)]
        accel: f64,
    },
    /// Displacement after a given time
    #[command(allow_negative_numbers = true)]
    Displacement(DisplacementArgs),
    /// Displacement from initial and current velocity
    #[command(allow_negative_numbers = true)]
    DisplacementWithoutTime {
        /// Current velocity
        #[arg(long)]
        velocity: f64,
        /// Initial velocity
        #[arg(long)]
        v0: f64,
        /// Acceleration
        #[arg(long)]
        accel: f64,
    },
    /// Velocity after a given time
    #[command(allow_negative_numbers = true)]
    Velocity {
        /// Elapsed time
        #[arg(long)]
        time: f64,
        /// Initial velocity
        #[arg(long)]
        v0: f64,
        /// Acceleration
        #[arg(long)]
        accel: f64,
    },
    /// Acceleration from a velocity change over a given time
    #[command(allow_negative_numbers = true)]
    Acceleration {
        /// Elapsed time
        #[arg(long)]
        time: f64,
        /// Current velocity
        #[arg(long)]
        velocity: f64,
        /// Initial velocity
        #[arg(long)]
        v0: f64,
    },
    /// Elapsed time from whichever quantities are known
    #[command(allow_negative_numbers = true)]
    Time {
        /// Initial coordinate
        #[arg(long, default_value_t = 0.0)]
        x0: f64,
        /// Final coordinate
        #[arg(long, default_value_t = 0.0)]
        x: f64,
        /// Initial velocity
        #[arg(long, default_value_t = 0.0)]
        v0: f64,
        /// Final velocity
        #[arg(long, default_value_t = 0.0)]
        v: f64,
        /// Acceleration
        #[arg(long, default_value_t = 0.0)]
        accel: f64,
        /// Displacement
        #[arg(long, default_value_t = 0.0)]
        displacement: f64,
    },
    /// Run the sample calculations
    Demo,
}

#[derive(Args)]
struct DisplacementArgs {
    /// YAML or JSON file holding a motion state
    #[arg(long, conflicts_with_all = ["time", "v0", "accel"])]
    state: Option<PathBuf>,
    /// Elapsed time
    #[arg(long)]
    time: Option<f64>,
    /// Initial velocity
    #[arg(long)]
    v0: Option<f64>,
    /// Acceleration
    #[arg(long)]
    accel: Option<f64>,
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Coordinate {
            time,
            x0,
            v0,
            accel,
        } => {
            inputs::check_finite(&[("time", time), ("x0", x0), ("v0", v0), ("accel", accel)])?;
            print_value(calculator::coordinate_from_time(time, x0, v0, accel)?)
        }
        Commands::Displacement(args) => cmd_displacement(args),
        Commands::DisplacementWithoutTime {
            velocity,
            v0,
            accel,
        } => {
            inputs::check_finite(&[("velocity", velocity), ("v0", v0), ("accel", accel)])?;
            print_value(calculator::displacement_without_time(velocity, v0, accel)?)
        }
        Commands::Velocity { time, v0, accel } => {
            inputs::check_finite(&[("time", time), ("v0", v0), ("accel", accel)])?;
            print_value(calculator::velocity_from_time(time, v0, accel)?)
        }
        Commands::Acceleration { time, velocity, v0 } => {
            inputs::check_finite(&[("time", time), ("velocity", velocity), ("v0", v0)])?;
            print_value(calculator::acceleration(time, velocity, v0)?)
        }
        Commands::Time {
            x0,
            x,
            v0,
            v,
            accel,
            displacement,
        } => cmd_time(x0, x, v0, v, accel, displacement),
        Commands::Demo => cmd_demo(),
    }
}

fn print_value(value: f64) -> CliResult<()> {
    println!("{}", value);
    Ok(())
}

fn cmd_displacement(args: DisplacementArgs) -> CliResult<()> {
    let state = match args.state {
        Some(path) => state_file::load_state(&path)?,
        None => match (args.time, args.v0, args.accel) {
            (Some(time), Some(v0), Some(accel)) => MotionState::new()
                .with_time(time)
                .with_initial_velocity(v0)
                .with_acceleration(accel),
            _ => {
                return Err(CliError::InvalidInput {
                    what: "displacement needs --state or all of --time, --v0, --accel".to_string(),
                });
            }
        },
    };
    state_file::check_finite(&state)?;
    print_value(state.displacement()?)
}

fn cmd_time(x0: f64, x: f64, v0: f64, v: f64, accel: f64, displacement: f64) -> CliResult<()> {
    inputs::check_finite(&[
        ("x0", x0),
        ("x", x),
        ("v0", v0),
        ("v", v),
        ("accel", accel),
        ("displacement", displacement),
    ])?;
    let solution = calculator::resolve_time(x0, x, v0, v, accel, displacement)?;
    println!("{}", solution.time);
    println!("  relation: {}", solution.relation);
    Ok(())
}

fn cmd_demo() -> CliResult<()> {
    println!("{}", calculator::coordinate_from_time(10.0, 0.0, 20.0, 1.0)?);

    let motion = MotionState::new()
        .with_time(10.0)
        .with_initial_velocity(5.0)
        .with_acceleration(2.0);
    println!("{}", motion.displacement()?);

    let initial_coordinate = 0.0;
    let initial_velocity = 5.0;
    let velocity = 5.0;
    let acceleration = 2.0;
    let time = 2.0;

    let coordinate =
        calculator::coordinate_from_time(time, initial_coordinate, initial_velocity, acceleration)?;
    let displacement_without_time =
        calculator::displacement_without_time(velocity, initial_velocity, acceleration)?;
    let velocity_at_time = calculator::velocity_from_time(time, initial_velocity, acceleration)?;
    println!("{}", coordinate);
    println!("{}", displacement_without_time);
    println!("{}", velocity_at_time);
    Ok(())
}
