use thiserror::Error;

use crate::nucleotide::NucleotideError;

#[derive(Error, Debug)]
pub enum GenotypeError {
    #[error("'{0}' is not a valid genotype field (expected 1 or 2 characters)")]
    InvalidLength(String),

    #[error("Failed to parse genotype base")]
    ParseNucleotide(#[from] NucleotideError),
}
