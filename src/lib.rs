//! domset - Tagged domain rule flattener
//!
//! Resolves a directed graph of domain rule files (plain domain lists with
//! optional tag annotations and cross-file `include` references) into
//! deterministic, tag-partitioned plain-text domain sets.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DomsetError;
