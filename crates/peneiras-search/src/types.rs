//! Domain types produced by the search pipeline.

use peneiras_core::{Coordinates, TryoutRecord};
use serde::{Deserialize, Serialize};

/// A resolved search origin.
///
/// Built fresh per search call, either from a ViaCEP address or from a
/// free-text locality; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Formatted CEP when the search came in as one; `None` for free text.
    pub cep: Option<String>,
    pub logradouro: Option<String>,
    pub bairro: Option<String>,
    pub localidade: String,
    /// Two-letter state abbreviation; free-text searches carry the `"SP"`
    /// placeholder.
    pub uf: String,
    pub coordinates: Coordinates,
}

/// A catalog record annotated with its formatted distance from the search
/// origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedTryout {
    #[serde(flatten)]
    pub tryout: TryoutRecord,
    /// Display distance: one fractional digit plus unit, e.g. `"12.3 km"`.
    pub distancia: String,
}

impl RankedTryout {
    /// Numeric distance parsed back from the display string.
    ///
    /// Ranking and the `max_distance` filter compare these parsed values, so
    /// ordering happens on the figure already rounded to one decimal: two
    /// tryouts within 0.05 km of each other can tie or swap relative to
    /// their true unrounded order. Callers rely on this, keep it.
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.distancia
            .split_whitespace()
            .next()
            .and_then(|v| v.parse().ok())
            .unwrap_or(f64::INFINITY)
    }
}

/// Search result: the resolved origin plus the full catalog ranked by
/// proximity. The ranked list always has the catalog's cardinality;
/// filtering is a separate step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub location: Location,
    pub tryouts: Vec<RankedTryout>,
}
