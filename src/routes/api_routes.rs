//! JSON API
//!
//! `GET /api/<table>` lists rows, `POST` inserts one, `DELETE` removes the
//! rows selected by the table's delete fields and `GET .../search` runs the
//! table's search fallback.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::added_message;
use crate::dto::api_response::{Created, Deleted};
use crate::dto::{ApiResponse, EntityRequests};
use crate::models::{Driver, Entity, MaintenanceTask, Trip, Vehicle};
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, not_found_error, AppResult};

pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(entity_router::<Vehicle>())
        .merge(entity_router::<Driver>())
        .merge(entity_router::<MaintenanceTask>())
        .merge(entity_router::<Trip>())
}

fn entity_router<E: EntityRequests>() -> Router<AppState> {
    let base = format!("/api/{}", <E as Entity>::TABLE.slug());

    Router::new()
        .route(
            &base,
            get(list_rows::<E>)
                .post(create_row::<E>)
                .delete(delete_rows::<E>),
        )
        .route(&format!("{}/search", base), get(search_rows::<E>))
}

async fn list_rows<E: EntityRequests>(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<E>>>> {
    let rows = state.controller().list::<E>().await?;
    Ok(Json(ApiResponse::success(rows)))
}

async fn create_row<E: EntityRequests>(
    State(state): State<AppState>,
    payload: Result<Json<E::Add>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<Created>>)> {
    let Json(request) = payload.map_err(|e| bad_request_error(&e.body_text()))?;
    let id = state.controller().add(request).await?;

    let message = added_message(<E as Entity>::TABLE);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(Created { id }, message)),
    ))
}

async fn delete_rows<E: EntityRequests>(
    State(state): State<AppState>,
    query: Result<Query<E::Delete>, QueryRejection>,
) -> AppResult<Json<ApiResponse<Deleted>>> {
    let Query(request) = query.map_err(|e| bad_request_error(&e.body_text()))?;
    let outcome = state.controller().delete(&request).await?;

    Ok(Json(ApiResponse::success_with_message(
        Deleted { deleted: outcome.deleted },
        outcome.message(),
    )))
}

async fn search_rows<E: EntityRequests>(
    State(state): State<AppState>,
    query: Result<Query<E::Search>, QueryRejection>,
) -> AppResult<Json<ApiResponse<Vec<E>>>> {
    let Query(request) = query.map_err(|e| bad_request_error(&e.body_text()))?;
    let rows = state.controller().search(&request).await?;

    if rows.is_empty() {
        return Err(not_found_error(<E as Entity>::TABLE.label()));
    }
    Ok(Json(ApiResponse::success(rows)))
}
