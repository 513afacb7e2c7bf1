use std::fs::File;

use tracing::{error, info};

use crate::config::GenConfig;
use crate::error::{FixtureError, Result};
use crate::generator::MatrixGenerator;
use crate::serialize::write_row;
use crate::tier::Tier;

/// Run fixture generation for every configured tier, in order.
///
/// One generator seeded from `config.seed` is threaded through the whole
/// run, so the output depends only on the configured tier order and case
/// count. An unknown tier name halts the run before any of that tier's
/// files exist; an I/O failure ends only the affected tier, with its file
/// handles released, and the run moves on to the next tier.
pub fn run(config: &GenConfig) -> Result<()> {
    let mut generator = MatrixGenerator::new(config.seed);

    for name in &config.tiers {
        let tier: Tier = name.parse()?;
        let dims = tier.dims();
        info!(%tier, n = dims.n, m = dims.m, p = dims.p, "resolved tier");

        match generate_tier(tier, &mut generator, config) {
            Ok(()) => {
                info!(%tier, cases = config.cases_per_tier, "tier complete");
            }
            Err(FixtureError::Io(err)) => {
                error!(%tier, %err, "tier aborted on I/O failure, continuing with next tier");
            }
            Err(other) => return Err(other),
        }
    }

    Ok(())
}

/// Generate all cases for one tier.
///
/// Both output files are bound to this scope; every exit path, including an
/// early `?` on a write failure, drops and thereby closes them. Records
/// written before a failure are kept.
fn generate_tier(tier: Tier, generator: &mut MatrixGenerator, config: &GenConfig) -> Result<()> {
    let dims = tier.dims();
    let mut test_file = File::create(config.out_dir.join(format!("{tier}_test.csv")))?;
    let mut golden_file = File::create(config.out_dir.join(format!("{tier}_golden.csv")))?;

    for case in 0..config.cases_per_tier {
        // A before B: the generator's draw order is part of the format.
        let a = generator.generate(dims.n, dims.m);
        let b = generator.generate(dims.m, dims.p);
        let r = a.matmul(&b)?;

        write_row(&a, &mut test_file)?;
        write_row(&b, &mut test_file)?;
        write_row(&r, &mut golden_file)?;

        if case != 0 && (case + 1) % 100 == 0 {
            info!(%tier, done = case + 1, "progress");
        }
    }

    Ok(())
}
