//! Where the profiler exports live on disk and how they are read.

pub mod paths;
pub mod read;

pub use paths::ResourcePaths;
pub use read::read_json;
