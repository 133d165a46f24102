//! CLI frontend for the Uhrwerk day/night clock simulation.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

use commands::ModeArg;

#[derive(Parser)]
#[command(
    name = "uw",
    about = "Uhrwerk — a day/night analog clock simulation",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the clock state for a single frame
    Show {
        /// Time-source policy
        #[arg(short, long, value_enum, default_value_t = ModeArg::Discrete)]
        mode: ModeArg,

        /// Clock time as HH:MM:SS (default: the current wall clock)
        #[arg(short, long)]
        time: Option<String>,

        /// Emit the state as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Run a fixed number of frames and report events and final state
    Simulate {
        /// Number of frames to run
        #[arg(short, long, default_value = "60")]
        frames: u64,

        /// Seconds of wall-clock time per frame
        #[arg(long, default_value = "1.0")]
        dt: f64,

        /// Start time as HH:MM:SS
        #[arg(short, long, default_value = "12:00:00")]
        start: String,

        /// Time-source policy
        #[arg(short, long, value_enum, default_value_t = ModeArg::Continuous)]
        mode: ModeArg,

        /// Sun smoothing-rate multiplier
        #[arg(long, default_value = "1.0")]
        speed: f32,

        /// Frame numbers (1-based) that carry a lighting-toggle request
        #[arg(long = "toggle-at")]
        toggle_at: Vec<u64>,

        /// Print a per-frame trace in addition to the event log
        #[arg(short, long)]
        verbose: bool,
    },

    /// Drive the clock live from the wall clock in the terminal
    Watch {
        /// Time-source policy
        #[arg(short, long, value_enum, default_value_t = ModeArg::Continuous)]
        mode: ModeArg,

        /// Frames per second
        #[arg(long, default_value = "10")]
        fps: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show { mode, time, json } => commands::show::run(mode, time.as_deref(), json),
        Commands::Simulate {
            frames,
            dt,
            start,
            mode,
            speed,
            toggle_at,
            verbose,
        } => commands::simulate::run(frames, dt, &start, mode, speed, &toggle_at, verbose),
        Commands::Watch { mode, fps } => commands::watch::run(mode, fps),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
