use crate::chromosome::Chromosome;
use crate::coordinate::Position;
use crate::genotype::Genotype;
use crate::nucleotide::Nucleotide;

const CHROMOSOME_BITS: u32 = 5;
const POSITION_BITS: u32 = 28;
const NUCLEOTIDE_BITS: u32 = 3;

const CHROMOSOME_SHIFT: u32 = 0;
const POSITION_SHIFT: u32 = CHROMOSOME_SHIFT + CHROMOSOME_BITS;
const FIRST_SHIFT: u32 = POSITION_SHIFT + POSITION_BITS;
const SECOND_SHIFT: u32 = FIRST_SHIFT + NUCLEOTIDE_BITS;

const CHROMOSOME_MASK: u64 = (1 << CHROMOSOME_BITS) - 1;
const POSITION_MASK: u64 = (1 << POSITION_BITS) - 1;
const NUCLEOTIDE_MASK: u64 = (1 << NUCLEOTIDE_BITS) - 1;

/// Pack a chromosome, position and genotype into a single 8-byte value slot.
///
/// `spec.md` suggests a 4-byte packed value; chromosome (5 bits, 25
/// symbols) + position (28 bits, required for chromosome 1's ~249M bp
/// under GRCh37/hg19) + genotype (2x3 bits) needs 39 bits, which does not
/// fit in 32. The layout is otherwise exactly as described: fixed bit
/// fields, no padding beyond the value width. See `DESIGN.md`.
#[must_use]
pub fn pack(chromosome: Chromosome, position: Position, genotype: Genotype) -> u64 {
    let chr = u64::from(chromosome.code()) & CHROMOSOME_MASK;
    let pos = u64::from(position.0) & POSITION_MASK;
    let first = u64::from(genotype.first.code()) & NUCLEOTIDE_MASK;
    let second = u64::from(genotype.second.code()) & NUCLEOTIDE_MASK;

    (chr << CHROMOSOME_SHIFT) | (pos << POSITION_SHIFT) | (first << FIRST_SHIFT) | (second << SECOND_SHIFT)
}

/// Inverse of [`pack`]. Panics only if `packed` was not produced by `pack`
/// (internal invariant: the store never hands out values it did not pack
/// itself), since it would indicate corrupted/foreign store state.
#[must_use]
pub fn unpack(packed: u64) -> (Chromosome, Position, Genotype) {
    let chr_code = ((packed >> CHROMOSOME_SHIFT) & CHROMOSOME_MASK) as u8;
    let position = ((packed >> POSITION_SHIFT) & POSITION_MASK) as u32;
    let first_code = ((packed >> FIRST_SHIFT) & NUCLEOTIDE_MASK) as u8;
    let second_code = ((packed >> SECOND_SHIFT) & NUCLEOTIDE_MASK) as u8;

    let chromosome = Chromosome::from_code(chr_code).expect("pack() never emits an invalid chromosome code");
    let first = Nucleotide::from_code(first_code).expect("pack() never emits an invalid nucleotide code");
    let second = Nucleotide::from_code(second_code).expect("pack() never emits an invalid nucleotide code");

    (chromosome, Position(position), Genotype::new(first, second))
}
