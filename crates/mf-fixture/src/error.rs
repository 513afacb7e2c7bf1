use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("unknown tier '{0}': please choose one of: testing, small, medium, large, native")]
    UnknownTier(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("record parse error: {0}")]
    Parse(String),
    #[error("matrix error: {0}")]
    Matrix(#[from] mf_matrix::MatrixError),
}

pub type Result<T> = std::result::Result<T, FixtureError>;
