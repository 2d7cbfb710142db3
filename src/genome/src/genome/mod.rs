mod error;
pub use error::GenomeError;

use crate::chromosome::Chromosome;
use crate::coordinate::{Coordinate, Position};
use crate::genotype::Genotype;
use crate::rsid;
use crate::snp::SNP;
use crate::store::{pack, unpack, SnpStore, StoreConfig};

/// Accepts either the textual (`"rs123"`, `"i456"`) or already-encoded
/// (`i32`) form of an RSID key for lookup, mirroring the dynamic
/// string-or-int keys `arv`'s original Python API accepted. Floating-point
/// keys are a compile-time impossibility here rather than a runtime
/// `TypeError`, since this trait is only ever implemented for the two
/// legal key representations, see `DESIGN.md`.
pub trait RsidKey {
    fn into_rsid(self) -> Result<i32, GenomeError>;
}

impl RsidKey for i32 {
    fn into_rsid(self) -> Result<i32, GenomeError> {
        Ok(self)
    }
}

impl RsidKey for &str {
    fn into_rsid(self) -> Result<i32, GenomeError> {
        rsid::encode(self).map_err(GenomeError::InvalidKey)
    }
}

impl RsidKey for &String {
    fn into_rsid(self) -> Result<i32, GenomeError> {
        rsid::encode(self).map_err(GenomeError::InvalidKey)
    }
}

/// Owns a populated [`SnpStore`] plus the summary metadata a 23andMe
/// export carries: whether a Y-chromosome call was seen (sex inference),
/// the encoded RSID range, and caller-set descriptive tags.
///
/// Constructed empty, populated exclusively by the parser via [`Genome::record`],
/// and read-only with respect to SNP content from then on; only `ethnicity`,
/// `name` and `orientation` remain mutable afterward.
#[derive(Debug, Clone)]
pub struct Genome {
    store: SnpStore,
    pub y_chromosome: bool,
    first: Option<i32>,
    last: Option<i32>,
    pub ethnicity: String,
    orientation: i8,
    pub name: String,
}

impl Genome {
    #[must_use]
    pub fn new(config: StoreConfig, name: impl Into<String>) -> Self {
        Self {
            store: SnpStore::with_config(config),
            y_chromosome: false,
            first: None,
            last: None,
            ethnicity: String::new(),
            orientation: 1,
            name: name.into(),
        }
    }

    /// Record one parsed SNP. The sole mutator of store content; called by
    /// the parser once per successfully parsed data line.
    ///
    /// # Errors
    /// Returns [`GenomeError::Store`] if the backing store has reached its
    /// fixed capacity.
    pub fn record(&mut self, rsid: i32, chromosome: Chromosome, position: Position, genotype: Genotype) -> Result<(), GenomeError> {
        let packed = pack(chromosome, position, genotype);
        self.store.insert(rsid, packed)?;

        if chromosome == Chromosome::Y && !self.y_chromosome {
            log::debug!("'{}' carries a Y-chromosome call ({rsid}); inferring male", self.name);
            self.y_chromosome = true;
        }
        self.first = Some(self.first.map_or(rsid, |f| f.min(rsid)));
        self.last = Some(self.last.map_or(rsid, |l| l.max(rsid)));
        Ok(())
    }

    /// Look up a SNP by its RSID, in either string or encoded integer form.
    ///
    /// # Errors
    /// [`GenomeError::InvalidKey`] if a string key is not a well-formed
    /// RSID; [`GenomeError::KeyNotFound`] if the key is well-formed but
    /// absent from the store.
    pub fn get<K: RsidKey>(&self, key: K) -> Result<SNP, GenomeError> {
        let rsid = key.into_rsid()?;
        let packed = self.store.lookup(rsid).ok_or_else(|| GenomeError::KeyNotFound(rsid::decode(rsid)))?;
        let (chromosome, position, genotype) = unpack(packed);
        Ok(SNP::new(rsid, Coordinate::new(chromosome, position), genotype))
    }

    #[must_use]
    pub fn contains<K: RsidKey>(&self, key: K) -> bool {
        key.into_rsid().is_ok_and(|rsid| self.store.contains(rsid))
    }

    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.store.iter().map(|(rsid, _)| rsid::decode(rsid))
    }

    pub fn values(&self) -> impl Iterator<Item = SNP> + '_ {
        self.store.iter().map(|(rsid, packed)| {
            let (chromosome, position, genotype) = unpack(packed);
            SNP::new(rsid, Coordinate::new(chromosome, position), genotype)
        })
    }

    pub fn items(&self) -> impl Iterator<Item = (String, SNP)> + '_ {
        self.keys().zip(self.values())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.store.load_factor()
    }

    /// Minimum encoded RSID seen so far, or `None` for an empty genome.
    #[must_use]
    pub fn first(&self) -> Option<i32> {
        self.first
    }

    /// Maximum encoded RSID seen so far, or `None` for an empty genome.
    #[must_use]
    pub fn last(&self) -> Option<i32> {
        self.last
    }

    #[must_use]
    pub fn orientation(&self) -> i8 {
        self.orientation
    }

    /// # Errors
    /// [`GenomeError::InvalidOrientation`] unless `value` is `1` or `-1`.
    pub fn set_orientation(&mut self, value: i8) -> Result<(), GenomeError> {
        if value != 1 && value != -1 {
            return Err(GenomeError::InvalidOrientation(value));
        }
        self.orientation = value;
        Ok(())
    }
}
