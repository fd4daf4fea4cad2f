//! Well-known file and directory names probed in the project root

pub const DOT_VENV_DIR: &str = ".venv";
pub const VENV_DIR: &str = "venv";
pub const REQUIREMENTS_DEV: &str = "requirements_dev.txt";
pub const REQUIREMENTS: &str = "requirements.txt";
pub const PYPROJECT_TOML: &str = "pyproject.toml";
pub const SETUP_CFG: &str = "setup.cfg";
pub const SETUP_PY: &str = "setup.py";

/// Environment directories, in the order they are checked
pub const ENV_DIRS: [&str; 2] = [DOT_VENV_DIR, VENV_DIR];

/// Requirements files, in the order they are checked
pub const REQUIREMENTS_FILES: [&str; 2] = [REQUIREMENTS_DEV, REQUIREMENTS];
