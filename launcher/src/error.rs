use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("Target directory not found: {}", .0.display())]
    TargetDirectoryNotFound(PathBuf),
    #[error("Interpreter not found: {}", .0.display())]
    InterpreterNotFound(PathBuf),
    #[error("Organizing script not found: {}", .0.display())]
    ScriptNotFound(PathBuf),
    #[error("Child process failed with exit code {0}")]
    ChildProcessFailed(i32),
    #[error("I/O Error: {0}")]
    IoError(#[from] std::io::Error),
}
