use crate::error::{MatrixError, Result};

/// Reference dense matrix multiplication over row-major f64 slices.
///
/// Computes `c[i*p + j] = Σ_k a[i*m + k] * b[k*p + j]` with a scalar f64
/// accumulator in ascending k order. No blocking or reassociation, so each
/// entry rounds exactly as the naive dot product does; the output is usable
/// as a bit-exact golden reference.
pub fn matmul(a: &[f64], b: &[f64], n: usize, m: usize, p: usize) -> Result<Vec<f64>> {
    if a.len() != n * m {
        return Err(MatrixError::DataLength {
            len: a.len(),
            rows: n,
            cols: m,
        });
    }
    if b.len() != m * p {
        return Err(MatrixError::DataLength {
            len: b.len(),
            rows: m,
            cols: p,
        });
    }

    let mut c = vec![0.0f64; n * p];
    for i in 0..n {
        for j in 0..p {
            let mut sum = 0.0f64;
            for k in 0..m {
                sum += a[i * m + k] * b[k * p + j];
            }
            c[i * p + j] = sum;
        }
    }
    Ok(c)
}
