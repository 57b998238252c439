//! Optional post-search filtering of ranked results.

use crate::types::RankedTryout;

/// Filter criteria applied as a conjunction; absent fields are not applied.
#[derive(Debug, Clone, Default)]
pub struct TryoutFilters {
    /// Exact match on the category field.
    pub categoria: Option<String>,
    /// Inclusive upper bound, in km, compared against the parsed distance
    /// value.
    pub max_distance: Option<f64>,
    /// Case-insensitive substring match on the club name.
    pub clube: Option<String>,
}

impl TryoutFilters {
    fn matches(&self, tryout: &RankedTryout) -> bool {
        if let Some(ref categoria) = self.categoria {
            if tryout.tryout.categoria != *categoria {
                return false;
            }
        }
        if let Some(max_distance) = self.max_distance {
            if tryout.distance_km() > max_distance {
                return false;
            }
        }
        if let Some(ref clube) = self.clube {
            if !tryout
                .tryout
                .clube
                .to_lowercase()
                .contains(&clube.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

/// Keep the ranked tryouts satisfying every supplied criterion.
///
/// Never fails; an empty result set is valid output.
#[must_use]
pub fn filter_tryouts(tryouts: &[RankedTryout], filters: &TryoutFilters) -> Vec<RankedTryout> {
    tryouts
        .iter()
        .filter(|t| filters.matches(t))
        .cloned()
        .collect()
}
