use clap::Parser;
use venv::NextStep;

const ABOUT: &str = "CLI to take the pain out of python virtual environments";

const LONG_ABOUT: &str = "\
CLI to take the pain out of python virtual environments

venv aims to eliminate the hassle of creating python virtual environments
and installing project dependencies. It works out what to do from the
files in the current directory, checked in this order:

  .venv/ or venv/            already set up, nothing to do
  requirements_dev.txt       create .venv and pip install -r it
  requirements.txt           create .venv and pip install -r it
  pyproject.toml + setup.cfg create .venv and pip install -e .[dev]
  pyproject.toml + setup.py  create .venv and pip install -e .
  pyproject.toml (poetry)    poetry install
  pyproject.toml (flit)      flit install --deps develop --symlink

If nothing matches it will ask you. Pass '-c/--create' or '-a/--abort' to
answer that question up front so venv can run in scripts without a prompt.";

const AFTER_HELP: &str = "\
Environment Variables:
  VENV_DEBUG   If set to anything, print debug information to stderr";

/// venv - take the pain out of python virtual environments
#[derive(Parser, Debug)]
#[command(name = "venv")]
#[command(about = ABOUT, long_about = LONG_ABOUT, after_help = AFTER_HELP)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Show venv's version info
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Bypass interactive prompt, telling it to create a new virtual environment
    #[arg(short, long, conflicts_with = "abort")]
    pub create: bool,

    /// Bypass interactive prompt, telling it to abort and exit
    #[arg(short, long)]
    pub abort: bool,
}

impl Cli {
    /// Answer to the "nothing detected" prompt given on the command line
    pub fn preset(&self) -> Option<NextStep> {
        match (self.create, self.abort) {
            (true, _) => Some(NextStep::Create),
            (_, true) => Some(NextStep::Abort),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_parse_no_flags() {
        let cli = Cli::try_parse_from(["venv"]).unwrap();
        assert!(!cli.version);
        assert_eq!(cli.preset(), None);
    }

    #[test]
    fn test_cli_parse_create() {
        let cli = Cli::try_parse_from(["venv", "--create"]).unwrap();
        assert_eq!(cli.preset(), Some(NextStep::Create));

        let cli = Cli::try_parse_from(["venv", "-c"]).unwrap();
        assert_eq!(cli.preset(), Some(NextStep::Create));
    }

    #[test]
    fn test_cli_parse_abort() {
        let cli = Cli::try_parse_from(["venv", "-a"]).unwrap();
        assert_eq!(cli.preset(), Some(NextStep::Abort));
    }

    #[test]
    fn test_cli_create_and_abort_conflict() {
        let err = Cli::try_parse_from(["venv", "--create", "--abort"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_cli_rejects_positional_arguments() {
        let err = Cli::try_parse_from(["venv", "myproject"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_cli_short_v_is_version() {
        let cli = Cli::try_parse_from(["venv", "-v"]).unwrap();
        assert!(cli.version);
    }

    #[test]
    fn test_cli_help_is_display_help() {
        let err = Cli::try_parse_from(["venv", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}
