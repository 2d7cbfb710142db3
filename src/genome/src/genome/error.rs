use thiserror::Error;

use crate::rsid::RsidError;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum GenomeError {
    #[error("No SNP found for key '{0}'")]
    KeyNotFound(String),

    #[error("'{0}' is not a valid RSID key")]
    InvalidKey(#[from] RsidError),

    #[error("orientation must be +1 or -1, got {0}")]
    InvalidOrientation(i8),

    #[error(transparent)]
    Store(#[from] StoreError),
}
