use genome::{Chromosome, Genome, Genotype, Position};

use crate::ParserError;

/// Strip a single trailing `\r` (from a `\r\n` line terminator), if present.
fn strip_cr(b: &[u8]) -> &[u8] {
    b.strip_suffix(b"\r").unwrap_or(b)
}

/// Attempt to decode one data line's four tab-separated fields. Returns
/// `None` on any malformed field (unknown RSID prefix, chromosome,
/// position, or genotype token, or a missing field), so the caller can
/// silently skip the line rather than aborting the whole parse.
fn try_parse_fields(line: &[u8]) -> Option<(i32, Chromosome, Position, Genotype)> {
    let mut fields = line.split(|&b| b == b'\t');

    let rsid_str = std::str::from_utf8(fields.next()?).ok()?;
    let chr_str = std::str::from_utf8(fields.next()?).ok()?;
    let pos_str = std::str::from_utf8(fields.next()?).ok()?;
    let gt_str = std::str::from_utf8(strip_cr(fields.next()?)).ok()?;

    let rsid = genome::rsid::encode(rsid_str).ok()?;
    let chromosome: Chromosome = chr_str.parse().ok()?;
    let position: Position = pos_str.parse().ok()?;
    let genotype: Genotype = gt_str.parse().ok()?;

    Some((rsid, chromosome, position, genotype))
}

fn parse_line(line: &[u8], genome: &mut Genome) -> Result<(), ParserError> {
    let Some((rsid, chromosome, position, genotype)) = try_parse_fields(line) else {
        return Ok(());
    };
    genome.record(rsid, chromosome, position, genotype)?;
    Ok(())
}

/// Scan a whole byte view of a 23andMe file into `genome`, one line at a
/// time. Comment lines (`#...`) and blank lines (including a tolerated
/// trailing one) are skipped outright; malformed data lines are skipped
/// field-parse-error by field-parse-error via [`try_parse_fields`]. The
/// only error that propagates is the store reaching its fixed capacity.
///
/// # Errors
/// [`ParserError::Genome`] if the backing [`genome::SnpStore`] is full.
pub fn parse_into(bytes: &[u8], genome: &mut Genome) -> Result<(), ParserError> {
    for raw_line in bytes.split(|&b| b == b'\n') {
        let line = strip_cr(raw_line);
        if line.is_empty() || line[0] == b'#' {
            continue;
        }
        parse_line(line, genome)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use genome::StoreConfig;

    fn fresh_genome() -> Genome {
        Genome::new(StoreConfig::new(64, 0.7), "test")
    }

    #[test]
    fn parses_diploid_autosomal_record() {
        let mut genome = fresh_genome();
        parse_into(b"rs12913832\t15\t28365618\tAG\n", &mut genome).unwrap();
        assert_eq!(genome.len(), 1);
        assert_eq!(genome.get("rs12913832").unwrap().genotype.to_string(), "AG");
    }

    #[test]
    fn skips_comment_lines() {
        let mut genome = fresh_genome();
        parse_into(b"# this is a comment\nrs1\t1\t100\tAA\n", &mut genome).unwrap();
        assert_eq!(genome.len(), 1);
    }

    #[test]
    fn tolerates_crlf_line_endings() {
        let mut genome = fresh_genome();
        parse_into(b"rs1\t1\t100\tAA\r\nrs2\t2\t200\tTT\r\n", &mut genome).unwrap();
        assert_eq!(genome.len(), 2);
    }

    #[test]
    fn tolerates_trailing_blank_line() {
        let mut genome = fresh_genome();
        parse_into(b"rs1\t1\t100\tAA\n\n", &mut genome).unwrap();
        assert_eq!(genome.len(), 1);
    }

    #[test]
    fn skips_malformed_lines_without_failing() {
        let mut genome = fresh_genome();
        parse_into(b"rs1\t1\t100\tAA\nnotarsid\t1\t200\tTT\nrs2\tchrZ\t300\tGG\n", &mut genome).unwrap();
        assert_eq!(genome.len(), 1);
    }

    #[test]
    fn duplicate_rsid_overwrites() {
        let mut genome = fresh_genome();
        parse_into(b"rs1\t1\t100\tAA\nrs1\t1\t100\tTT\n", &mut genome).unwrap();
        assert_eq!(genome.len(), 1);
        assert_eq!(genome.get("rs1").unwrap().genotype.to_string(), "TT");
    }

    #[test]
    fn y_chromosome_call_sets_flag() {
        let mut genome = fresh_genome();
        parse_into(b"i3001754\tY\t2649757\tA\n", &mut genome).unwrap();
        assert!(genome.y_chromosome);
    }

    #[test]
    fn double_dash_no_call_parses_as_two_gaps() {
        let mut genome = fresh_genome();
        parse_into(b"rs1\t1\t100\t--\n", &mut genome).unwrap();
        assert_eq!(genome.get("rs1").unwrap().genotype.to_string(), "--");
    }

    #[test]
    fn empty_input_yields_empty_genome() {
        let mut genome = fresh_genome();
        parse_into(b"", &mut genome).unwrap();
        assert!(genome.is_empty());
    }

    #[test]
    fn store_overflow_propagates_as_error() {
        let mut genome = Genome::new(StoreConfig::new(1, 0.99), "tiny");
        let mut data = Vec::new();
        for i in 1..=8 {
            data.extend_from_slice(format!("rs{i}\t1\t{i}\tAA\n").as_bytes());
        }
        assert!(parse_into(&data, &mut genome).is_err());
    }
}
