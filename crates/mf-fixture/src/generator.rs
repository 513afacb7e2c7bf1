use mf_matrix::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic uniform matrix source.
///
/// Wraps a single RNG seeded once at construction and advanced monotonically
/// across the whole run. For a fixed seed the produced matrices depend only
/// on the order of `generate` calls; reordering calls changes every
/// subsequent output.
pub struct MatrixGenerator {
    rng: StdRng,
}

impl MatrixGenerator {
    /// Create a generator seeded once with the given value.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a rows×cols matrix with entries drawn i.i.d. uniform over
    /// [0, 1), filled in row-major order.
    pub fn generate(&mut self, rows: usize, cols: usize) -> Matrix {
        let data = (0..rows * cols).map(|_| self.rng.gen::<f64>()).collect();
        Matrix::new(data, rows, cols)
    }
}
