//! Developer tasks: thin wrappers that run the documentation build tool.
//!
//! The set of tasks is closed. Anything that goes wrong is reported to the
//! caller as a [`TaskError`], and `main` treats every error as fatal.

use std::fmt;
use std::process::{Command, ExitStatus, Stdio};

use tracing::info;

use crate::config::TaskConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Live-preview the spec.
    Dev,
    /// Render the spec once.
    Build,
}

#[derive(Debug)]
pub enum TaskError {
    NoTask,
    UnknownTask(String),
    Args(pico_args::Error),
    Spawn(std::io::Error),
    Failed(ExitStatus),
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskError::NoTask => write!(f, "no task"),
            TaskError::UnknownTask(_) => write!(f, "no such task"),
            TaskError::Args(err) => write!(f, "{}", err),
            TaskError::Spawn(err) => write!(f, "{}", err),
            TaskError::Failed(status) => write!(f, "{}", status),
        }
    }
}

impl std::error::Error for TaskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TaskError::Args(err) => Some(err),
            TaskError::Spawn(err) => Some(err),
            _ => None,
        }
    }
}

impl From<pico_args::Error> for TaskError {
    fn from(err: pico_args::Error) -> Self {
        TaskError::Args(err)
    }
}

impl Task {
    pub fn from_name(name: &str) -> Result<Task, TaskError> {
        match name {
            "dev" => Ok(Task::Dev),
            "build" => Ok(Task::Build),
            _ => Err(TaskError::UnknownTask(name.to_string())),
        }
    }

    /// Bikeshed subcommand for this task.
    pub fn subcommand(&self) -> &'static str {
        match self {
            Task::Dev => "serve",
            Task::Build => "spec",
        }
    }

    pub fn command(&self, cfg: &TaskConfig) -> Command {
        let mut cmd = Command::new(&cfg.program);
        cmd.args(&cfg.args)
            .arg(self.subcommand())
            .envs(&cfg.env)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }

    pub fn run(&self, cfg: &TaskConfig) -> Result<(), TaskError> {
        let mut cmd = self.command(cfg);
        info!("$ {}", display_command(&cmd));

        let status = cmd.status().map_err(TaskError::Spawn)?;
        if !status.success() {
            return Err(TaskError::Failed(status));
        }
        Ok(())
    }
}

/// Resolves `name` and runs the task. A missing name is an error.
pub fn dispatch(name: Option<&str>, cfg: &TaskConfig) -> Result<(), TaskError> {
    let name = name.ok_or(TaskError::NoTask)?;
    Task::from_name(name)?.run(cfg)
}

fn display_command(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|s| s.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}
