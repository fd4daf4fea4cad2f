//! Build backend declared in `pyproject.toml`

use std::fmt;

use serde::Deserialize;

/// `build-system.build-backend` value that marks a Poetry project
pub const POETRY_MARKER: &str = "poetry.core.masonry.api";

/// `build-system.build-backend` value that marks a Flit project
pub const FLIT_MARKER: &str = "flit.buildapi";

/// Which packaging tool a manifest asks to build with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildBackend {
    Poetry,
    Flit,
    /// A backend this tool does not know how to install
    Other(String),
    /// No `build-system` table or no `build-backend` key
    Missing,
}

#[derive(Debug, Default, Deserialize)]
struct PyProject {
    #[serde(rename = "build-system", default)]
    build_system: Option<BuildSystem>,
}

#[derive(Debug, Deserialize)]
struct BuildSystem {
    #[serde(rename = "build-backend", default)]
    build_backend: Option<String>,
}

impl BuildBackend {
    /// Classify a manifest by its build backend.
    ///
    /// Every other field in the document is ignored, but the whole document
    /// must be valid TOML.
    pub fn from_manifest(content: &str) -> Result<Self, toml::de::Error> {
        let manifest: PyProject = toml::from_str(content)?;
        let backend = manifest.build_system.and_then(|bs| bs.build_backend);

        Ok(match backend.as_deref() {
            Some(POETRY_MARKER) => BuildBackend::Poetry,
            Some(FLIT_MARKER) => BuildBackend::Flit,
            Some(other) => BuildBackend::Other(other.to_string()),
            None => BuildBackend::Missing,
        })
    }

    pub fn is_poetry(&self) -> bool {
        matches!(self, BuildBackend::Poetry)
    }

    pub fn is_flit(&self) -> bool {
        matches!(self, BuildBackend::Flit)
    }
}

impl fmt::Display for BuildBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildBackend::Poetry => write!(f, "{}", POETRY_MARKER),
            BuildBackend::Flit => write!(f, "{}", FLIT_MARKER),
            BuildBackend::Other(name) => write!(f, "{}", name),
            BuildBackend::Missing => write!(f, "<none>"),
        }
    }
}
