//! Launch - command line utility for launching applications.
//!
//! Thin wrapper over `launch-core`: parses arguments, sets up logging and
//! turns library results into user-facing messages and exit codes.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "launch")]
#[command(about = "Command line utility for launching applications")]
#[command(subcommand_required = true, arg_required_else_help = true)]
struct Args {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run some application
    Run {
        /// Application to be launched as daemon
        #[arg(value_name = "APPLICATION")]
        program: PathBuf,

        /// Run application in the current terminal, replacing this process
        #[arg(short, long)]
        exec: bool,

        /// Launch application in a terminal emulator window
        #[arg(short, long)]
        terminal: bool,

        /// Current directory of launched process
        #[arg(short = 'd', long, default_value = ".")]
        directory: PathBuf,

        /// Log file to which the process output will be redirected
        #[arg(long)]
        logfile: Option<PathBuf>,

        /// Arguments passed to the application after `--`
        #[arg(last = true, value_name = "ARGS")]
        args: Vec<String>,
    },

    /// Show content of $PATH environment variable
    Path,

    /// Relaunch a process that got frozen given its PID
    RelaunchPid {
        /// PID of application to be relaunched
        #[arg(value_name = "PID", value_parser = clap::value_parser!(u32).range(1..))]
        pid: u32,
    },
}

fn init_logging(debug: bool) {
    // Warnings by default so the report lines on stdout stay readable
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    match commands::execute(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!(" [ERROR] {:#}", err);
            ExitCode::FAILURE
        }
    }
}
