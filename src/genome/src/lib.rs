pub mod chromosome;
pub use chromosome::Chromosome;

pub mod coordinate;
pub use coordinate::{Coordinate, GenomeCoordinate, Position};

pub mod nucleotide;
pub use nucleotide::Nucleotide;

pub mod genotype;
pub use genotype::Genotype;

pub mod rsid;

pub mod snp;
pub use snp::SNP;

pub mod store;
pub use store::{SnpStore, StoreConfig, StoreError};

pub mod genome;
pub use crate::genome::{Genome, GenomeError};

pub mod matcher;
pub use matcher::{unphased_match, Phenotypes};
