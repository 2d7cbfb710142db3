pub use genome::{self, unphased_match, Chromosome, Genome, GenomeError, Genotype, Nucleotide, Phenotypes, StoreConfig, SNP};
pub use parser::{load, parse_into, ParserError};
