use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrandSignalError {
    #[error("Template error: {0}")]
    Template(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
