use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("data length {len} does not match shape {rows}x{cols}")]
    DataLength {
        len: usize,
        rows: usize,
        cols: usize,
    },
    #[error("matmul dimension mismatch: [{n}x{m}] @ [{m2}x{p}]")]
    DimensionMismatch {
        n: usize,
        m: usize,
        m2: usize,
        p: usize,
    },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
