use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use trendscript_core::{Platform, TrendRecord};
use trendscript_trends::{TrendFilter, TrendStats};

use crate::middleware::RequestId;

use super::{normalize_limit, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct TrendsQuery {
    pub category: Option<String>,
    pub platform: Option<String>,
    pub search: Option<String>,
    pub limit: Option<usize>,
    pub page: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(super) struct TrendsPage {
    trends: Vec<TrendRecord>,
    total: usize,
    page: usize,
    limit: usize,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub(super) async fn list_trends(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<TrendsQuery>,
) -> Result<Json<ApiResponse<TrendsPage>>, ApiError> {
    let platform = match non_blank(query.platform.as_deref()) {
        Some(id) => Some(Platform::from_id(id).ok_or_else(|| {
            ApiError::new(
                req_id.0.clone(),
                "bad_request",
                format!("unknown platform: {id}"),
            )
        })?),
        None => None,
    };

    let limit = normalize_limit(query.limit);
    let page = query.page.unwrap_or(1).max(1);
    let filter = TrendFilter {
        category: non_blank(query.category.as_deref()).map(String::from),
        platform,
        limit: limit.saturating_mul(page),
    };

    let matched = match non_blank(query.search.as_deref()) {
        Some(search) => state.trends.search(search, &filter).await,
        None => state.trends.trending_topics(&filter).await,
    };
    let trends: Vec<TrendRecord> = matched
        .into_iter()
        .skip((page - 1).saturating_mul(limit))
        .collect();

    Ok(Json(ApiResponse::ok(
        req_id.0,
        TrendsPage {
            total: trends.len(),
            trends,
            page,
            limit,
        },
        "Trends retrieved successfully",
    )))
}

pub(super) async fn get_trend(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(trend_id): Path<String>,
) -> Result<Json<ApiResponse<TrendRecord>>, ApiError> {
    let trend = state
        .trends
        .trend_by_id(&trend_id)
        .await
        .ok_or_else(|| ApiError::new(req_id.0.clone(), "not_found", "Trend not found"))?;

    Ok(Json(ApiResponse::ok(
        req_id.0,
        trend,
        "Trend retrieved successfully",
    )))
}

pub(super) async fn platform_stats(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<TrendStats>> {
    let stats = state.trends.stats().await;
    Json(ApiResponse::ok(
        req_id.0,
        stats,
        "Platform statistics retrieved successfully",
    ))
}
