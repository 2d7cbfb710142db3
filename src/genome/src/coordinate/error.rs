use thiserror::Error;

use super::ParsePositionError;
use crate::chromosome::ChromosomeError;

#[derive(Error, Debug)]
pub enum CoordinateError {
    #[error("Failed to parse Coordinate because of an invalid Chromosome value")]
    ParseChromosome(#[from] ChromosomeError),

    #[error("Failed to parse Coordinate because of an invalid Position value")]
    ParsePosition(#[from] ParsePositionError),

    #[error("Failed to parse Coordinate: missing delimiter '{0}' in string")]
    MissingDelimiter(char),
}
