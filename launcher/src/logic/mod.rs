
use log::{debug, info};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::Command;

use crate::error::LauncherError;

/// Where the organizing script runs, what interprets it, and what it acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    pub target_dir: PathBuf,
    pub interpreter: PathBuf,
    pub script: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    Success,
    ChildFailure(i32),
}

pub trait Acknowledge {
    fn wait(&mut self, out: &mut dyn Write) -> io::Result<()>;
}

/// Prompts on `out` and blocks until one line arrives on stdin.
pub struct StdinAcknowledge;

impl Acknowledge for StdinAcknowledge {
    fn wait(&mut self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "Press Enter to close...")?;
        out.flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(())
    }
}

pub struct NoAcknowledge;

impl Acknowledge for NoAcknowledge {
    fn wait(&mut self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

impl LaunchConfig {
    pub fn new(target_dir: PathBuf, interpreter: PathBuf, script: PathBuf) -> Self {
        LaunchConfig {
            target_dir,
            interpreter,
            script,
        }
    }

    /// Checks every configured path before any side effect happens.
    /// Returns the canonicalized target directory.
    fn validate(&self) -> Result<PathBuf, LauncherError> {
        if !self.target_dir.is_dir() {
            return Err(LauncherError::TargetDirectoryNotFound(
                self.target_dir.clone(),
            ));
        }
        if !self.script.is_file() {
            return Err(LauncherError::ScriptNotFound(self.script.clone()));
        }
        // A bare interpreter name is left for the OS to resolve via PATH at
        // spawn time; only an explicit path is checked here.
        if self.interpreter.components().count() > 1 && !self.interpreter.exists() {
            return Err(LauncherError::InterpreterNotFound(self.interpreter.clone()));
        }
        debug!("validated launch configuration: {:?}", self);
        Ok(self.target_dir.canonicalize()?)
    }
}

/// Runs `<interpreter> <script>` inside the target directory and reports the
/// child's exit status as a typed outcome. The completion banner is printed
/// after the child terminates whether it succeeded or not.
pub fn launch(
    config: &LaunchConfig,
    ack: &mut dyn Acknowledge,
    out: &mut impl Write,
) -> Result<LaunchOutcome, LauncherError> {
    let target = config.validate()?;

    std::env::set_current_dir(&target)?;
    writeln!(out, "Working directory: {}", target.display())?;
    info!(
        "running {} {}",
        config.interpreter.display(),
        config.script.display()
    );

    let status = Command::new(&config.interpreter)
        .arg(&config.script)
        .current_dir(&target)
        .status()
        .map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => {
                LauncherError::InterpreterNotFound(config.interpreter.clone())
            }
            _ => LauncherError::IoError(err),
        })?;
    debug!("child exited with status {:?}", status.code());

    writeln!(out, "Done. The organizing script has finished.")?;
    ack.wait(&mut *out)?;

    if status.success() {
        Ok(LaunchOutcome::Success)
    } else {
        Ok(LaunchOutcome::ChildFailure(status.code().unwrap_or(-1)))
    }
}
