//! Inbound HTTP surface: three read-only endpoints over the scraping core.

pub mod types;

use crate::core::fetch::JudgeFetcher;
use crate::core::judge::{JudgeService, DEFAULT_RECENT_COUNT, DEFAULT_TODAY_COUNT};
use crate::utils::error::TrackerError;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use types::{
    ErrorResponse, ProblemRef, RecentProblemsResponse, SolvedResponse, TodayProblemsResponse,
    UserQuery,
};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<JudgeService<JudgeFetcher>>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/recent-problems", get(recent_problems))
        .route("/api/solved-yesterday", get(solved_yesterday))
        .route("/api/today-problems", get(today_problems))
        .with_state(state)
}

type Rejection = (StatusCode, Json<ErrorResponse>);

fn require_user(query: &UserQuery) -> Result<String, Rejection> {
    match query.user.as_deref().map(str::trim) {
        Some(user) if !user.is_empty() => Ok(user.to_string()),
        _ => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "user query parameter is required".to_string(),
                detail: None,
            }),
        )),
    }
}

fn scrape_failure(err: &TrackerError) -> Rejection {
    tracing::error!(error = %err, "status page scrape failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "failed to scrape judge status page".to_string(),
            detail: Some(err.to_string()),
        }),
    )
}

async fn recent_problems(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<RecentProblemsResponse>, Rejection> {
    let user = require_user(&query)?;
    let count = query.count.unwrap_or(DEFAULT_RECENT_COUNT);

    let items = state
        .service
        .recent_problems(&user, count)
        .await
        .map_err(|e| scrape_failure(&e))?
        .into_iter()
        .map(|problem_id| ProblemRef { problem_id })
        .collect();

    Ok(Json(RecentProblemsResponse { items }))
}

async fn solved_yesterday(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<SolvedResponse>, Rejection> {
    let user = require_user(&query)?;

    let solved = state
        .service
        .solved_yesterday(&user)
        .await
        .map_err(|e| scrape_failure(&e))?;

    Ok(Json(SolvedResponse { solved }))
}

async fn today_problems(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<TodayProblemsResponse>, Rejection> {
    let user = require_user(&query)?;
    let count = query.count.unwrap_or(DEFAULT_TODAY_COUNT);

    let items = state
        .service
        .today_problems(&user, count)
        .await
        .map_err(|e| scrape_failure(&e))?;

    Ok(Json(TodayProblemsResponse { items }))
}
