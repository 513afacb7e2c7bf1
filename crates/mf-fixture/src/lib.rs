//! `mf-fixture` - Tier catalog, deterministic generation, serialization, and
//! orchestration for matmul-fixtures.
//!
//! This crate provides:
//! - A closed `Tier` enum mapping the named size tiers to their dimensions
//! - A seeded `MatrixGenerator` producing reproducible uniform matrices
//! - Flattened comma-separated record serialization and parsing
//! - An orchestrator that writes the per-tier test and golden files

pub mod config;
pub mod error;
pub mod generator;
pub mod orchestrator;
pub mod serialize;
pub mod tier;

// Re-export primary types at the crate root for convenience.
pub use config::GenConfig;
pub use error::{FixtureError, Result};
pub use generator::MatrixGenerator;
pub use orchestrator::run;
pub use tier::{Tier, TierDims};
