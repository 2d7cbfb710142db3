use thiserror::Error;

#[derive(Error, Debug)]
pub enum NucleotideError {
    #[error("'{0}' is not a valid nucleotide (expected one of A, C, G, T, D, I, -)")]
    InvalidToken(char),
}
