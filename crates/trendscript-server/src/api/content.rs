use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use trendscript_core::{GeneratedContentDocument, GenerationRequest, ANONYMOUS_USER_ID};

use crate::middleware::RequestId;

use super::{json_body, map_generator_error, normalize_limit, ApiError, ApiResponse, AppState};

#[derive(Debug, Serialize)]
pub(super) struct GeneratedData {
    id: String,
    content: GeneratedContentDocument,
}

#[derive(Debug, Deserialize)]
pub(super) struct HistoryQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(super) struct HistoryData {
    content_history: Vec<GeneratedContentDocument>,
    total: usize,
}

pub(super) async fn generate_content(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<GeneratedData>>, ApiError> {
    let request = json_body(&req_id.0, body)?;
    if request.trend_id.trim().is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "bad_request",
            "trend_id must not be empty",
        ));
    }

    let trend = state
        .trends
        .trend_by_id(&request.trend_id)
        .await
        .ok_or_else(|| ApiError::new(req_id.0.clone(), "not_found", "Trend not found"))?;

    let document = state
        .generator
        .generate_content_script(&trend, &request, ANONYMOUS_USER_ID)
        .await
        .map_err(|e| map_generator_error(req_id.0.clone(), &e))?;

    state.history.record(document.clone()).await;
    tracing::info!(
        request_id = %req_id.0,
        document_id = %document.id,
        trend_id = %document.trend_id,
        "content generated"
    );

    Ok(Json(ApiResponse::ok(
        req_id.0,
        GeneratedData {
            id: document.id.clone(),
            content: document,
        },
        "Content generated successfully",
    )))
}

pub(super) async fn content_history(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<HistoryQuery>,
) -> Json<ApiResponse<HistoryData>> {
    let (content_history, total) = state
        .history
        .for_user(ANONYMOUS_USER_ID, normalize_limit(query.limit))
        .await;
    Json(ApiResponse::ok(
        req_id.0,
        HistoryData {
            content_history,
            total,
        },
        "Content history retrieved successfully",
    ))
}
