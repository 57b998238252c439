use axum::extract::{Query, State};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use peneiras_search::{filter_tryouts, Location, RankedTryout, TryoutFilters};

use super::{map_search_error, ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub(super) struct TryoutsQuery {
    /// Raw search text: a CEP or a locality name.
    q: Option<String>,
    categoria: Option<String>,
    max_distance: Option<f64>,
    clube: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct TryoutsData {
    location: Location,
    tryouts: Vec<RankedTryout>,
}

pub(super) async fn search_tryouts(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<TryoutsQuery>,
) -> Result<Json<ApiResponse<TryoutsData>>, ApiError> {
    let query = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| {
            ApiError::new(
                req_id.0.clone(),
                "validation_error",
                "query parameter q must not be empty",
            )
        })?;

    let outcome = state
        .search
        .search(query)
        .await
        .map_err(|e| map_search_error(req_id.0.clone(), &e))?;

    // Blank filter params mean "not supplied", matching how the search form
    // submits them.
    let filters = TryoutFilters {
        categoria: params.categoria.filter(|v| !v.is_empty()),
        max_distance: params.max_distance,
        clube: params.clube.filter(|v| !v.is_empty()),
    };
    let tryouts = filter_tryouts(&outcome.tryouts, &filters);

    Ok(Json(ApiResponse {
        data: TryoutsData {
            location: outcome.location,
            tryouts,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
