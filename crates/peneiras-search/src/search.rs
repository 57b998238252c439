//! Proximity search over the tryout catalog.
//!
//! One search call resolves the query to an origin (ViaCEP for CEP-shaped
//! input, the city table for free text), annotates a copy of every catalog
//! record with its distance and returns the whole list sorted nearest-first.
//! The shared catalog is never mutated.

use peneiras_core::{catalog, Coordinates, TryoutRecord};
use peneiras_viacep::{looks_like_cep, ViacepClient};

use crate::error::SearchError;
use crate::geo::haversine_km;
use crate::geocode::geocode_city;
use crate::types::{Location, RankedTryout, SearchOutcome};

/// Region placeholder for free-text searches, which carry no state
/// information of their own.
const FREE_TEXT_UF: &str = "SP";

/// Search front door.
#[derive(Debug, Clone)]
pub struct SearchService {
    viacep: ViacepClient,
}

impl SearchService {
    #[must_use]
    pub fn new(viacep: ViacepClient) -> Self {
        Self { viacep }
    }

    /// Run a proximity search for a CEP or a free-text locality.
    ///
    /// Input whose digits form the 8-digit CEP shape goes through ViaCEP;
    /// anything else is treated as a locality name and geocoded from the
    /// fixed city table. The returned list always covers the full catalog;
    /// narrowing it down is the job of [`crate::filter_tryouts`].
    ///
    /// # Errors
    ///
    /// - [`SearchError::EmptyQuery`] for empty or whitespace-only input.
    /// - [`SearchError::Resolve`] wrapping any resolver error from the CEP
    ///   path.
    pub async fn search(&self, raw: &str) -> Result<SearchOutcome, SearchError> {
        let query = raw.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let location = if looks_like_cep(query) {
            tracing::debug!(query, "search classified as CEP");
            self.resolve_cep(query).await?
        } else {
            tracing::debug!(query, "search classified as free-text locality");
            free_text_location(query)
        };

        let tryouts = rank_tryouts(catalog(), location.coordinates);
        Ok(SearchOutcome { location, tryouts })
    }

    async fn resolve_cep(&self, query: &str) -> Result<Location, SearchError> {
        let address = self.viacep.lookup(query).await?;
        let coordinates = geocode_city(&address.localidade);
        Ok(Location {
            cep: Some(address.cep),
            logradouro: Some(address.logradouro),
            bairro: Some(address.bairro),
            localidade: address.localidade,
            uf: address.uf,
            coordinates,
        })
    }
}

fn free_text_location(query: &str) -> Location {
    Location {
        cep: None,
        logradouro: None,
        bairro: None,
        localidade: query.to_string(),
        uf: FREE_TEXT_UF.to_string(),
        coordinates: geocode_city(query),
    }
}

/// Annotate every record with its distance from `origin` and sort the copies
/// nearest-first.
///
/// The sort key is the value parsed back from the formatted display string
/// (see [`RankedTryout::distance_km`]), so comparison happens after rounding
/// to one decimal place.
#[must_use]
pub fn rank_tryouts(records: &[TryoutRecord], origin: Coordinates) -> Vec<RankedTryout> {
    let mut ranked: Vec<RankedTryout> = records
        .iter()
        .map(|record| {
            let km = haversine_km(origin, record.coordinates);
            RankedTryout {
                tryout: record.clone(),
                distancia: format!("{km:.1} km"),
            }
        })
        .collect();

    ranked.sort_by(|a, b| a.distance_km().total_cmp(&b.distance_km()));
    ranked
}
