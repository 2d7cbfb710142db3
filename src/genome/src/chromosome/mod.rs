use std::{cmp::Ordering, fmt::{self, Display, Formatter}, hash::{Hash, Hasher}, str::FromStr};

mod error;
pub use error::ChromosomeError;

/// A chromosome label: an autosome (1-22) or one of the sex/mitochondrial
/// labels X, Y, MT.
///
/// Ordering places numeric autosomes before X, Y and MT, matching the order
/// `SNP` uses when sorting by genomic coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chromosome {
    Autosome(u8),
    X,
    Y,
    Mt,
}

impl Chromosome {
    /// Compact ordinal used by the packed SNP store encoding. Autosomes map
    /// to their own number (1-22), X/Y/MT follow immediately after. Fits in
    /// 5 bits (max value 25).
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Autosome(n) => n,
            Self::X  => 23,
            Self::Y  => 24,
            Self::Mt => 25,
        }
    }

    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=22 => Some(Self::Autosome(code)),
            23     => Some(Self::X),
            24     => Some(Self::Y),
            25     => Some(Self::Mt),
            _      => None,
        }
    }
}

impl FromStr for Chromosome {
    type Err = ChromosomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X"  => Ok(Self::X),
            "Y"  => Ok(Self::Y),
            "MT" => Ok(Self::Mt),
            other => match other.parse::<u8>() {
                Ok(n) if (1..=22).contains(&n) => Ok(Self::Autosome(n)),
                _ => Err(ChromosomeError::InvalidToken(other.to_string())),
            }
        }
    }
}

impl Display for Chromosome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Autosome(n) => Display::fmt(n, f),
            Self::X  => f.write_str("X"),
            Self::Y  => f.write_str("Y"),
            Self::Mt => f.write_str("MT"),
        }
    }
}

impl Hash for Chromosome {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code().hash(state);
    }
}

impl Ord for Chromosome {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code().cmp(&other.code())
    }
}

impl PartialOrd for Chromosome {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_autosomes() {
        for i in 1..=22 {
            assert_eq!(Chromosome::from_str(&i.to_string()).unwrap(), Chromosome::Autosome(i));
        }
    }

    #[test]
    fn from_str_sex_and_mt() {
        assert_eq!(Chromosome::from_str("X").unwrap(), Chromosome::X);
        assert_eq!(Chromosome::from_str("Y").unwrap(), Chromosome::Y);
        assert_eq!(Chromosome::from_str("MT").unwrap(), Chromosome::Mt);
    }

    #[test]
    fn from_str_invalid() {
        assert!(Chromosome::from_str("0").is_err());
        assert!(Chromosome::from_str("23").is_err());
        assert!(Chromosome::from_str("chr1").is_err());
    }

    #[test]
    fn ordering_autosomes_before_sex_and_mt() {
        assert!(Chromosome::Autosome(22) < Chromosome::X);
        assert!(Chromosome::X < Chromosome::Y);
        assert!(Chromosome::Y < Chromosome::Mt);
        assert!(Chromosome::Autosome(1) < Chromosome::Autosome(2));
    }

    #[test]
    fn code_roundtrip() {
        for chr in (1..=22).map(Chromosome::Autosome).chain([Chromosome::X, Chromosome::Y, Chromosome::Mt]) {
            assert_eq!(Chromosome::from_code(chr.code()), Some(chr));
        }
    }

    #[test]
    fn display() {
        assert_eq!(Chromosome::Autosome(7).to_string(), "7");
        assert_eq!(Chromosome::X.to_string(), "X");
        assert_eq!(Chromosome::Y.to_string(), "Y");
        assert_eq!(Chromosome::Mt.to_string(), "MT");
    }
}
