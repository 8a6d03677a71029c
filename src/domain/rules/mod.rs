//! Rule-file system

pub mod partition;
pub mod resolver;
pub mod statement;
pub mod tags;

// Re-export main types
pub use partition::{partition, Artifact, PolicySet, TagPolicy};
pub use resolver::{ContentSource, Diagnostic, ResolvedDocument, Resolver};
pub use statement::{normalize, Entry, Statement, StatementKind};
pub use tags::{TagSet, TagToken};
