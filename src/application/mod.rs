//! Application layer - Use cases and orchestration

pub mod build;
pub mod customize;
pub mod filelist;

pub use build::{parse_min_entries, BuildOptions, BuildReport, BuildService};
pub use customize::{CustomizeReport, CustomizeService};
pub use filelist::{FilelistReport, FilelistService};
