use std::path::PathBuf;

use crate::tier::Tier;

/// Process parameters for a generation run.
///
/// These are fixed in the reference behavior rather than exposed as flags;
/// `Default` reproduces it exactly.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Ordered tier names to generate, resolved when the run reaches them.
    pub tiers: Vec<String>,
    /// Seed for the deterministic matrix source, applied once per run.
    pub seed: u64,
    /// Number of test cases generated per tier.
    pub cases_per_tier: usize,
    /// Directory the per-tier output files are written into.
    pub out_dir: PathBuf,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            tiers: Tier::ALL.iter().map(|t| t.name().to_string()).collect(),
            seed: 0xdead_beef,
            cases_per_tier: 1,
            out_dir: PathBuf::from("."),
        }
    }
}
