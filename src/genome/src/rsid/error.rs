use thiserror::Error;

#[derive(Error, Debug)]
pub enum RsidError {
    #[error("'{0}' is not a valid RSID (expected 'rs<digits>' or 'i<digits>')")]
    InvalidToken(String),

    #[error("RSID numeric part of '{0}' overflows a 32-bit integer")]
    Overflow(String),
}
