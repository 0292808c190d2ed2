use std::path::{Path, PathBuf};

/// Relative locations of the four profiler exports inside a profile directory.
///
/// The defaults match the layout the profiler writes next to its HTML
/// front-end:
/// ```text
/// <dir>/json/overview.json
/// <dir>/json/properties.json
/// <dir>/json/rel.json
/// <dir>/json/rul.json
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePaths {
    pub overview: PathBuf,
    pub properties: PathBuf,
    pub relations: PathBuf,
    pub rules: PathBuf,
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self {
            overview: PathBuf::from("json/overview.json"),
            properties: PathBuf::from("json/properties.json"),
            relations: PathBuf::from("json/rel.json"),
            rules: PathBuf::from("json/rul.json"),
        }
    }
}

impl ResourcePaths {
    /// Resolve every resource against `dir`.
    pub fn under(&self, dir: &Path) -> Self {
        Self {
            overview: dir.join(&self.overview),
            properties: dir.join(&self.properties),
            relations: dir.join(&self.relations),
            rules: dir.join(&self.rules),
        }
    }
}
