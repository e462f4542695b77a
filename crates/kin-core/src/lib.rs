//! Core types, errors, configuration, and progress events for the kin
//! catalog-normalization pipeline.
//!
//! This crate carries no algorithmic logic. The normalization, clustering,
//! and aggregation live in `kin-pipeline`; the attribute-fetch collaborator
//! lives in `kin-fetch`.

pub mod config;
pub mod errors;
pub mod events;
pub mod types;
