use std::fmt::Display;
use std::str::FromStr;

pub mod position;
pub use position::{Position, ParsePositionError};

mod error;
pub use error::CoordinateError;

use crate::chromosome::Chromosome;

// import for internal use
extern crate coordinate_derive;
use coordinate_derive::*;

// Derive macro prelude.
pub mod derive {
    extern crate coordinate_derive;
    pub use coordinate_derive::*;
}

/// Padding values for chromosome display
pub const CHR_FORMAT_LEN: usize = 2;
/// Padding values for position display
pub const POS_FORMAT_LEN: usize = 9;

/// Public method trait to access the genomic coordinate of any struct containing a Coordinate struct.
pub trait GenomeCoordinate {
    /// Return a reference to an inner Coordinate struct, representing the genomic location of
    /// the outer struct
    fn coordinate(&self) -> &'_ Coordinate;

    /// Match the genomic coordinate of the struct with any struct implementing this trait.
    fn matches(&self, other: &impl GenomeCoordinate) -> bool {
        self.coordinate() == other.coordinate()
    }
}

/// Coordinate represents a discrete genomic position, as in `10:591321`.
///
/// Coordinates are compared and ordered using chromosome and position
/// information, chromosome taking priority.
/// # Example:
/// ```rust
/// use genome::coordinate::{Coordinate, Position};
/// use genome::chromosome::Chromosome;
///
/// let chr_10_200k = Coordinate::new(Chromosome::Autosome(10), Position(200_000));
/// let chr_20_100k = Coordinate::new(Chromosome::Autosome(20), Position(100_000));
///
/// assert!(chr_10_200k < chr_20_100k);
/// assert_ne!(chr_10_200k, chr_20_100k);
/// ```
/// Notice the chromosome takes priority over the position: the first
/// coordinate is considered _**less**_ than the second, despite having a
/// greater position (200k vs 100k).
///
/// This behavior extends to any struct housing a `Coordinate` within a
/// `coordinate` field, via the provided derive macros.
///
/// # Example:
/// ```rust
/// use genome::coordinate::{Coordinate, Position, GenomeCoordinate};
/// use genome::coordinate::derive::*;
/// use genome::chromosome::Chromosome;
///
/// #[derive(Debug, CoordBorrow, CoordEq)]
/// struct Marker { coordinate: Coordinate, label: &'static str }
///
/// impl GenomeCoordinate for Marker {
///     fn coordinate(&self) -> &Coordinate { &self.coordinate }
/// }
///
/// let coordinate = Coordinate::new(Chromosome::Autosome(10), Position(20));
/// let a = Marker{coordinate, label: "ref"};
/// let b = Marker{coordinate, label: "alt"};
/// // Since we derived CoordEq, these two values are equal despite differing labels.
/// assert_eq!(a, b)
/// ```
#[derive(Debug, Clone, Copy, CoordEq, CoordOrd, CoordHash)]
pub struct Coordinate {
    pub chromosome: Chromosome,
    pub position  : Position,
}

impl GenomeCoordinate for Coordinate {
    fn coordinate(&self) -> &'_ Coordinate {
        self
    }
    fn matches(&self, other: &impl GenomeCoordinate) -> bool {
        self == other.coordinate()
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&format!("[{: <CHR_FORMAT_LEN$} {: >POS_FORMAT_LEN$}]", self.chromosome, self.position), f)
    }
}

impl Coordinate {
    #[must_use]
    pub fn new(chromosome: impl Into<Chromosome>, position: impl Into<Position>) -> Self {
        Self{chromosome: chromosome.into(), position: position.into()}
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    /// Parse a `"chromosome:position"` string, e.g. `"10:591321"` or `"X:2500"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (chr, pos) = s.split_once(':').ok_or(CoordinateError::MissingDelimiter(':'))?;
        let chromosome: Chromosome = chr.parse()?;
        let position: Position = pos.parse()?;
        Ok(Self::new(chromosome, position))
    }
}
