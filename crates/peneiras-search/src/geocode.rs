//! Approximate geocoding for known Brazilian cities.
//!
//! This is a fixed table lookup, not a real geocoder: city names match
//! exactly (case-sensitive) and anything else falls back to the São Paulo
//! default, so a search always resolves to some origin.

use peneiras_core::Coordinates;

struct CityPoint {
    name: &'static str,
    coordinates: Coordinates,
}

/// Fallback origin (São Paulo) for localities missing from the table.
pub const DEFAULT_COORDINATES: Coordinates = Coordinates {
    lat: -23.5505,
    lng: -46.6333,
};

const CITY_COORDINATES: &[CityPoint] = &[
    CityPoint {
        name: "São Paulo",
        coordinates: Coordinates {
            lat: -23.5505,
            lng: -46.6333,
        },
    },
    CityPoint {
        name: "Rio de Janeiro",
        coordinates: Coordinates {
            lat: -22.9068,
            lng: -43.1729,
        },
    },
    CityPoint {
        name: "Belo Horizonte",
        coordinates: Coordinates {
            lat: -19.9167,
            lng: -43.9345,
        },
    },
    CityPoint {
        name: "Salvador",
        coordinates: Coordinates {
            lat: -12.9714,
            lng: -38.5014,
        },
    },
    CityPoint {
        name: "Brasília",
        coordinates: Coordinates {
            lat: -15.7942,
            lng: -47.8822,
        },
    },
    CityPoint {
        name: "Curitiba",
        coordinates: Coordinates {
            lat: -25.4284,
            lng: -49.2733,
        },
    },
    CityPoint {
        name: "Recife",
        coordinates: Coordinates {
            lat: -8.0476,
            lng: -34.8770,
        },
    },
    CityPoint {
        name: "Porto Alegre",
        coordinates: Coordinates {
            lat: -30.0346,
            lng: -51.2177,
        },
    },
    CityPoint {
        name: "Manaus",
        coordinates: Coordinates {
            lat: -3.1190,
            lng: -60.0217,
        },
    },
    CityPoint {
        name: "Belém",
        coordinates: Coordinates {
            lat: -1.4558,
            lng: -48.5044,
        },
    },
    CityPoint {
        name: "Santos",
        coordinates: Coordinates {
            lat: -23.9618,
            lng: -46.3322,
        },
    },
];

/// Resolve a city name to approximate coordinates.
///
/// Unknown names fall back to [`DEFAULT_COORDINATES`].
#[must_use]
pub fn geocode_city(name: &str) -> Coordinates {
    if let Some(city) = CITY_COORDINATES.iter().find(|c| c.name == name) {
        city.coordinates
    } else {
        tracing::debug!(name, "locality not in coordinate table, using default");
        DEFAULT_COORDINATES
    }
}
