use thiserror::Error;

/// Why the phone asset could not be used.
///
/// Every variant leads to the procedural fallback; the reason is only kept for
/// logging and for the debug global.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("asset could not be parsed: {0}")]
    Parse(String),
    #[error("asset contains no triangle meshes")]
    Empty,
}

impl From<gltf::Error> for LoadError {
    fn from(e: gltf::Error) -> Self {
        LoadError::Parse(e.to_string())
    }
}
