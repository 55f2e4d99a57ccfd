use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayrunError {
    #[error("input sheet contains no rows")]
    EmptyInput,
    #[error(
        "no header row found in the first {scanned} rows (searched labels: {})",
        .labels.join(", ")
    )]
    HeaderNotFound { scanned: usize, labels: Vec<String> },
}

pub type Result<T> = std::result::Result<T, PayrunError>;
