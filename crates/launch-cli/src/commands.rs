//! Subcommand implementations.

use crate::Command;
use anyhow::{Context, Result};
use launch_core::platform::{search_path_entries, Environment, SystemEnvironment};
use launch_core::{LaunchConfig, LaunchError, LaunchSupervisor, Relaunched};
use std::io::Write;
use tracing::debug;

pub fn execute(command: Command) -> Result<()> {
    let env = SystemEnvironment;
    let mut stdout = std::io::stdout().lock();

    match command {
        Command::Run {
            program,
            exec,
            terminal,
            directory,
            logfile,
            args,
        } => {
            let mut config = LaunchConfig::new(&program)
                .with_args(args)
                .with_working_directory(&directory)
                .in_terminal(terminal)
                .replacing_current(exec);
            if let Some(logfile) = logfile {
                config = config.with_log_file(logfile);
            }
            run(&env, config, &mut stdout)
        }
        Command::Path => show_dirs_in_path(&env, &mut stdout),
        Command::RelaunchPid { pid } => relaunch(&env, pid, &mut stdout),
    }
}

fn run(env: &dyn Environment, config: LaunchConfig, out: &mut impl Write) -> Result<()> {
    let program = config.program.display().to_string();
    debug!("Launch mode for {}: {:?}", program, config.mode());

    let supervisor = LaunchSupervisor::from_env(env);
    let handle = supervisor
        .run(config)
        .with_context(|| format!("failed to launch {}", program))?;

    writeln!(out, " [INFO] Forked process launched successfully.")?;
    writeln!(out, " [INFO] Process pid = {}", handle.pid())?;
    if let Some(log_file) = handle.log_file() {
        writeln!(out, " [INFO] Output redirected to {}", log_file.display())?;
    }
    Ok(())
}

fn show_dirs_in_path(env: &dyn Environment, out: &mut impl Write) -> Result<()> {
    for dir in search_path_entries(env) {
        writeln!(out, "{}", dir.display())?;
    }
    Ok(())
}

fn relaunch(env: &dyn Environment, pid: u32, out: &mut impl Write) -> Result<()> {
    let supervisor = LaunchSupervisor::from_env(env);
    let relaunched = supervisor.relaunch(pid).map_err(relaunch_error)?;
    write_relaunch_report(&relaunched, out)
}

fn relaunch_error(err: LaunchError) -> anyhow::Error {
    if err.is_destructive() {
        let pid = err.pid().unwrap_or_default();
        anyhow::Error::new(err).context(format!(
            "process {} was terminated and no replacement is running; manual intervention required",
            pid
        ))
    } else {
        anyhow::Error::new(err)
    }
}

fn write_relaunch_report(relaunched: &Relaunched, out: &mut impl Write) -> Result<()> {
    writeln!(out, " [INFO] Relaunched application: ")?;
    writeln!(out, "        pid = {}", relaunched.handle.pid())?;
    writeln!(
        out,
        " executable = {}",
        relaunched.location.executable_path.display()
    )?;
    writeln!(
        out,
        "  directory = {}",
        relaunched.location.working_directory.display()
    )?;
    Ok(())
}
