//! Axum route handlers for the Impact API.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::impact::catalog::{AgentProfile, SkillProfile};
use crate::impact::classifier::TaskAnalysis;
use crate::impact::engine::ImpactReport;
use crate::impact::taxonomy::{Dimension, STRONG_WEIGHT, MODERATE_WEIGHT};
use crate::models::occupation::{OccupationProfile, Task};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub report: ImpactReport,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub statement: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub task: TaskAnalysis,
    pub scorer_backend: String,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub agents: Vec<AgentProfile>,
    pub skills: Vec<SkillProfile>,
}

#[derive(Debug, Serialize)]
pub struct DimensionResponse {
    pub dimension: Dimension,
    pub label: String,
    pub strong_weight: f64,
    pub moderate_weight: f64,
    pub strong: Vec<String>,
    pub moderate: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/impact/analyze
///
/// Full assessment for one occupation: per-task scores, aggregate, recommendations, narrative.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(profile): Json<OccupationProfile>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let limit = state.config.max_tasks_per_request;
    if profile.tasks.len() > limit {
        return Err(AppError::Validation(format!(
            "too many tasks: {} (limit {limit})",
            profile.tasks.len()
        )));
    }

    let report = state.analyzer.analyze(&profile);
    info!(
        code = %profile.summary.code,
        tasks = profile.tasks.len(),
        overall_score = report.assessment.overall_score,
        "Analyzed occupation"
    );

    Ok(Json(AnalyzeResponse {
        report,
        generated_at: Utc::now(),
    }))
}

/// POST /api/v1/impact/classify
///
/// Scores a single task statement. Handy for checking how the taxonomy reads a phrase.
pub async fn handle_classify(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    if request.statement.trim().is_empty() {
        return Err(AppError::Validation("statement cannot be empty".to_string()));
    }

    let task = state.analyzer.analyze_task(&Task::new(request.statement));
    Ok(Json(ClassifyResponse {
        task,
        scorer_backend: state.analyzer.backend().to_string(),
    }))
}

/// GET /api/v1/impact/catalog
pub async fn handle_catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        agents: state.analyzer.agent_catalog().to_vec(),
        skills: state.analyzer.skill_catalog().to_vec(),
    })
}

/// GET /api/v1/impact/dimensions/:dimension
pub async fn handle_dimension(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DimensionResponse>, AppError> {
    let dimension = Dimension::from_key(&key)
        .ok_or_else(|| AppError::NotFound(format!("Dimension '{key}' not found")))?;

    let patterns = state
        .analyzer
        .taxonomy()
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Backend '{}' has no keyword taxonomy",
                state.analyzer.backend()
            ))
        })?
        .patterns(dimension);
    Ok(Json(DimensionResponse {
        dimension: patterns.dimension,
        label: patterns.dimension.label().to_string(),
        strong_weight: STRONG_WEIGHT,
        moderate_weight: MODERATE_WEIGHT,
        strong: patterns.strong.iter().map(|p| p.as_str().to_string()).collect(),
        moderate: patterns.moderate.iter().map(|p| p.as_str().to_string()).collect(),
    }))
}
