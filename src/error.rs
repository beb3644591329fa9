use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeightError {
    /// Invalid objective count or division count.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed `.dat` content.
    #[error("parse error on line {line}: {msg}")]
    Parse { line: usize, msg: String },

    /// Ragged, empty or misnamed weight matrix.
    #[error("shape error: {0}")]
    Shape(String),

    /// A loaded matrix is not a set of distinct points on the unit simplex.
    #[error("simplex error: {0}")]
    Simplex(String),
}

impl From<tempfile::PersistError> for WeightError {
    fn from(err: tempfile::PersistError) -> Self {
        WeightError::Io(err.error)
    }
}
