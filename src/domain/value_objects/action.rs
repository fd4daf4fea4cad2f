//! Install actions and the external commands they map to

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::ports::Invocation;
use crate::domain::value_objects::project_files::DOT_VENV_DIR;

/// One step of setting up an environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `python -m venv .venv`
    CreateVenv,
    /// Upgrade pip, setuptools and wheel inside `.venv`
    UpgradeSeeds,
    /// `pip install -r <file>` inside `.venv`
    InstallRequirements { file: String },
    /// `pip install -e .` (or `.[dev]`) inside `.venv`
    InstallEditable { dev_extras: bool },
    /// `poetry install`
    PoetryInstall,
    /// `flit install` symlinked into `.venv`
    FlitInstall,
}

impl Action {
    /// Short description used in progress and error messages
    pub fn description(&self) -> String {
        match self {
            Action::CreateVenv => "create virtual environment".to_string(),
            Action::UpgradeSeeds => "update seed packages".to_string(),
            Action::InstallRequirements { file } => format!("install requirements from {}", file),
            Action::InstallEditable { dev_extras: true } => "install .[dev]".to_string(),
            Action::InstallEditable { dev_extras: false } => "install .".to_string(),
            Action::PoetryInstall => "create poetry environment".to_string(),
            Action::FlitInstall => "create flit environment".to_string(),
        }
    }

    /// Resolve the concrete command for a project rooted at `root`
    pub fn invocation(&self, root: &Path) -> Invocation {
        match self {
            Action::CreateVenv => Invocation::new("python", &["-m", "venv", DOT_VENV_DIR], root),
            Action::UpgradeSeeds => Invocation::new(
                venv_python(root),
                &["-m", "pip", "install", "--upgrade", "pip", "setuptools", "wheel"],
                root,
            ),
            Action::InstallRequirements { file } => Invocation::new(
                venv_python(root),
                &["-m", "pip", "install", "-r", file.as_str()],
                root,
            ),
            Action::InstallEditable { dev_extras } => {
                let target = if *dev_extras { ".[dev]" } else { "." };
                Invocation::new(
                    venv_python(root),
                    &["-m", "pip", "install", "-e", target],
                    root,
                )
            }
            Action::PoetryInstall => Invocation::new("poetry", &["install"], root),
            Action::FlitInstall => {
                let python = venv_python_relative();
                let python = python.to_string_lossy();
                Invocation::new(
                    "flit",
                    &["install", "--deps", "develop", "--symlink", "--python", python.as_ref()],
                    root,
                )
            }
        }
    }

    /// Whether this step leaves a `.venv` behind once it succeeds
    pub fn creates_venv(&self) -> bool {
        matches!(self, Action::CreateVenv)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Interpreter inside `.venv`, relative to the project root
pub fn venv_python_relative() -> PathBuf {
    if cfg!(windows) {
        Path::new(DOT_VENV_DIR).join("Scripts").join("python.exe")
    } else {
        Path::new(DOT_VENV_DIR).join("bin").join("python")
    }
}

/// Absolute interpreter path inside `<root>/.venv`
pub fn venv_python(root: &Path) -> PathBuf {
    root.join(venv_python_relative())
}
