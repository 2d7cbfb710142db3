use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChromosomeError {
    #[error("'{0}' is not a valid chromosome (expected 1-22, X, Y or MT)")]
    InvalidToken(String),
}
