pub mod error;
pub mod filter;
pub mod geo;
pub mod geocode;
pub mod search;
pub mod types;

pub use error::SearchError;
pub use filter::{filter_tryouts, TryoutFilters};
pub use geo::haversine_km;
pub use geocode::{geocode_city, DEFAULT_COORDINATES};
pub use search::{rank_tryouts, SearchService};
pub use types::{Location, RankedTryout, SearchOutcome};
