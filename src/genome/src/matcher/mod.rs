use std::collections::HashMap;

mod error;
pub use error::MatchError;

use crate::genotype::Genotype;

/// A small mapping from genotype string to some value `V`, with an
/// optional fallback entry used when no genotype key matches.
///
/// The fallback corresponds to the mapping entry keyed by the host
/// language's "no match" sentinel in the original API (`None` in Python);
/// here it is simply an explicit field, since Rust has no analogous
/// universal sentinel key.
#[derive(Debug, Clone, Default)]
pub struct Phenotypes<V> {
    entries: HashMap<String, V>,
    default: Option<V>,
}

impl<V> Phenotypes<V> {
    #[must_use]
    pub fn new() -> Self {
        Self { entries: HashMap::new(), default: None }
    }

    #[must_use]
    pub fn with(mut self, genotype: impl Into<String>, value: V) -> Self {
        self.entries.insert(genotype.into(), value);
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: V) -> Self {
        self.default = Some(value);
        self
    }
}

impl<V> FromIterator<(String, V)> for Phenotypes<V> {
    fn from_iter<T: IntoIterator<Item = (String, V)>>(iter: T) -> Self {
        Self { entries: iter.into_iter().collect(), default: None }
    }
}

fn reverse(genotype: &str) -> String {
    genotype.chars().rev().collect()
}

/// Look up a genotype (or SNP, via its `Display` string form) in `mapping`,
/// treating unphased calls as order-insensitive: `"AG"` and `"GA"` resolve
/// to the same entry.
///
/// Lookup order: the genotype string as given, then its character-reversed
/// form, then `mapping`'s default entry. Matching is case-sensitive;
/// inputs are assumed uppercase, as the parser always produces.
///
/// # Errors
/// [`MatchError::NoMatch`] if none of the three lookups succeed.
pub fn unphased_match<V: Clone>(genotype: impl ToGenotypeString, mapping: &Phenotypes<V>) -> Result<V, MatchError> {
    let g = genotype.to_genotype_string();

    if let Some(value) = mapping.entries.get(&g) {
        return Ok(value.clone());
    }

    let reversed = reverse(&g);
    if reversed != g {
        if let Some(value) = mapping.entries.get(&reversed) {
            return Ok(value.clone());
        }
    }

    mapping.default.clone().ok_or(MatchError::NoMatch(g))
}

/// Anything that can be matched: a genotype string, a [`Genotype`], or a
/// type displaying as one (e.g. `SNP`).
pub trait ToGenotypeString {
    fn to_genotype_string(&self) -> String;
}

impl ToGenotypeString for &str {
    fn to_genotype_string(&self) -> String {
        (*self).to_string()
    }
}

impl ToGenotypeString for String {
    fn to_genotype_string(&self) -> String {
        self.clone()
    }
}

impl ToGenotypeString for Genotype {
    fn to_genotype_string(&self) -> String {
        self.to_string()
    }
}
