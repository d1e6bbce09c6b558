use crate::export::postings_csv;
use crate::infra::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use intern_insights::error::AppError;
use intern_insights::postings::fields::{SkillTaxonomy, SkillTaxonomyEntry};
use intern_insights::postings::{EnrichedRecord, FilterOptions, FilterSpec, PostingSummary};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::Ordering;

const EXPORT_FILE_NAME: &str = "internship_postings.csv";

#[derive(Debug, Deserialize)]
pub(crate) struct QueryRequest {
    #[serde(flatten)]
    pub(crate) filter: FilterSpec,
    #[serde(default)]
    pub(crate) include_postings: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct SummaryResponse {
    pub(crate) loaded_at: DateTime<Utc>,
    pub(crate) summary: PostingSummary,
}

#[derive(Debug, Serialize)]
pub(crate) struct QueryResponse {
    pub(crate) filter: FilterSpec,
    pub(crate) summary: PostingSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) postings: Option<Vec<EnrichedRecord>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReloadResponse {
    pub(crate) generation: u64,
    pub(crate) postings: usize,
    pub(crate) loaded_at: DateTime<Utc>,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/postings/summary", get(summary_endpoint))
        .route("/api/v1/postings/query", post(query_endpoint))
        .route("/api/v1/postings/options", get(options_endpoint))
        .route("/api/v1/postings/export", post(export_endpoint))
        .route("/api/v1/postings/reload", post(reload_endpoint))
        .route("/api/v1/skills", get(skills_endpoint))
        .with_state(state)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn summary_endpoint(
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, AppError> {
    let catalog = state.postings.catalog()?;
    Ok(Json(SummaryResponse {
        loaded_at: catalog.loaded_at(),
        summary: catalog.summarize(&FilterSpec::default()),
    }))
}

pub(crate) async fn query_endpoint(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, AppError> {
    let QueryRequest {
        filter,
        include_postings,
    } = request;

    let catalog = state.postings.catalog()?;
    let matched = catalog.filter(&filter);
    let summary = intern_insights::postings::report::summarize(matched.iter().copied());
    let postings = if include_postings {
        Some(matched.into_iter().cloned().collect())
    } else {
        None
    };

    Ok(Json(QueryResponse {
        filter,
        summary,
        postings,
    }))
}

pub(crate) async fn options_endpoint(
    State(state): State<AppState>,
) -> Result<Json<FilterOptions>, AppError> {
    let catalog = state.postings.catalog()?;
    Ok(Json(catalog.options()))
}

pub(crate) async fn export_endpoint(
    State(state): State<AppState>,
    Json(filter): Json<FilterSpec>,
) -> Result<Response, AppError> {
    let catalog = state.postings.catalog()?;
    let matched = catalog.filter(&filter);
    let body = postings_csv(&matched)?;
    let disposition = format!("attachment; filename=\"{EXPORT_FILE_NAME}\"");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

pub(crate) async fn reload_endpoint(
    State(state): State<AppState>,
) -> Result<Json<ReloadResponse>, AppError> {
    let (catalog, generation) = state.postings.reload()?;
    Ok(Json(ReloadResponse {
        generation,
        postings: catalog.len(),
        loaded_at: catalog.loaded_at(),
    }))
}

pub(crate) async fn skills_endpoint() -> Json<Vec<SkillTaxonomyEntry>> {
    Json(SkillTaxonomy::standard().entries())
}
