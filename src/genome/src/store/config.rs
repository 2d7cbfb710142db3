/// Sizing hints for a [`super::SnpStore`], applied once at construction time.
///
/// The store never resizes: `capacity` is derived from `expected_count` and
/// `max_load_factor` up front, so a hint that undershoots the file's actual
/// SNP count surfaces as [`super::StoreError::Full`] during parsing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoreConfig {
    /// Expected number of SNP records. A 23andMe file produces roughly
    /// 600,000 entries; the default comfortably covers that with headroom.
    pub expected_count: usize,
    /// Target load factor in `(0, 1)`. Capacity is sized so that, once
    /// `expected_count` entries are inserted, `len / capacity` stays at or
    /// below this bound.
    pub max_load_factor: f64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { expected_count: 1_000_000, max_load_factor: 0.7 }
    }
}

impl StoreConfig {
    #[must_use]
    pub fn new(expected_count: usize, max_load_factor: f64) -> Self {
        Self { expected_count, max_load_factor }
    }

    /// Smallest power-of-two capacity satisfying `expected_count / capacity <= max_load_factor`.
    #[must_use]
    pub(crate) fn capacity(&self) -> usize {
        let min_capacity = (self.expected_count as f64 / self.max_load_factor).ceil() as usize;
        min_capacity.max(1).next_power_of_two()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let cfg = StoreConfig::default();
        assert_eq!(cfg.expected_count, 1_000_000);
        assert!((cfg.max_load_factor - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn capacity_is_power_of_two_and_covers_hint() {
        let cfg = StoreConfig::new(1_000_000, 0.7);
        let cap = cfg.capacity();
        assert!(cap.is_power_of_two());
        assert!((cfg.expected_count as f64 / cap as f64) <= 0.7);
    }

    #[test]
    fn tiny_hint_still_yields_nonzero_capacity() {
        assert!(StoreConfig::new(0, 0.7).capacity() >= 1);
    }
}
