pub mod error;
pub mod logic;

use anyhow::Context;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use error::LauncherError;
use logic::{Acknowledge, LaunchConfig, LaunchOutcome, NoAcknowledge, StdinAcknowledge};

#[derive(Debug, Args, Clone, PartialEq)]
#[command(
    version,
    about = "Run an organizing script against a target directory",
    author
)]
pub struct Launcher {
    #[arg(help = "Directory the organizing script acts on")]
    target_dir: PathBuf,
    #[arg(short, long, help = "Organizing script passed to the interpreter")]
    script: PathBuf,
    #[arg(
        short,
        long,
        default_value = "python3",
        help = "Interpreter executable"
    )]
    interpreter: PathBuf,
    #[arg(short = 'n', long, help = "Skip the final acknowledgment prompt")]
    no_pause: bool,
}

impl Launcher {
    pub fn run(&self) -> anyhow::Result<()> {
        let config = LaunchConfig::new(
            self.target_dir.clone(),
            self.interpreter.clone(),
            self.script.clone(),
        );
        let mut ack: Box<dyn Acknowledge> = if self.no_pause {
            Box::new(NoAcknowledge)
        } else {
            Box::new(StdinAcknowledge)
        };
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        match logic::launch(&config, ack.as_mut(), &mut out) {
            Ok(LaunchOutcome::Success) => Ok(()),
            Ok(LaunchOutcome::ChildFailure(code)) => {
                Err(LauncherError::ChildProcessFailed(code).into())
            }
            Err(err) => {
                writeln!(out, "Error: {}", err).context("Failed to report launch error")?;
                ack.wait(&mut out)
                    .context("Failed to wait for acknowledgment")?;
                drop(out);
                std::process::exit(1);
            }
        }
    }
}
