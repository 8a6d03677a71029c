//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;

pub use config::{load_tag_policies, CustomizationConfig, ExcludeRule};
pub use repository::{ReleaseWriter, SourceRepository};
