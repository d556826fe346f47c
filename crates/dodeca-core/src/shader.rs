use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::constants::{FRAGMENT_SHADER_PATH, VERTEX_SHADER_PATH};

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("failed to read shader source {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn default_path(self) -> &'static Path {
        match self {
            ShaderStage::Vertex => Path::new(VERTEX_SHADER_PATH),
            ShaderStage::Fragment => Path::new(FRAGMENT_SHADER_PATH),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

pub fn read_shader_source(path: impl AsRef<Path>) -> Result<String, ShaderError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| ShaderError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Source text for both pipeline stages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    /// Read both stages, substituting an empty source for any stage that
    /// fails to load. Failures are logged and never abort.
    pub fn load_or_empty(vertex: impl AsRef<Path>, fragment: impl AsRef<Path>) -> Self {
        Self {
            vertex: read_or_empty(ShaderStage::Vertex, vertex.as_ref()),
            fragment: read_or_empty(ShaderStage::Fragment, fragment.as_ref()),
        }
    }

    pub fn load_default() -> Self {
        Self::load_or_empty(
            ShaderStage::Vertex.default_path(),
            ShaderStage::Fragment.default_path(),
        )
    }
}

fn read_or_empty(stage: ShaderStage, path: &Path) -> String {
    match read_shader_source(path) {
        Ok(src) => {
            log::debug!("[shader] loaded {} stage from {}", stage.label(), path.display());
            src
        }
        Err(e) => {
            log::error!("[shader] {} stage: {e}", stage.label());
            String::new()
        }
    }
}
