//! Domain layer - rule parsing and graph resolution

pub mod rules;
