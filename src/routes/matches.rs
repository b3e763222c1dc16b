use crate::core::{Catalog, Matcher};
use crate::models::{
    ErrorResponse, HealthResponse, MatchRequest, ProgramStats, ProgramType, TopMatchResponse,
    University,
};
use crate::services::CatalogStore;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub store: Arc<CatalogStore>,
    pub matcher: Matcher,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/universities", web::get().to(list_universities))
        .route("/match", web::post().to(match_universities))
        .route("/match/top", web::post().to(top_match));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List the full catalog
///
/// GET /api/universities
async fn list_universities(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.all())
}

/// Candidate programs for the requested type, or None when the type is
/// unknown or the catalog holds nothing for it. Both cases surface as
/// the documented error payload, not an HTTP error status.
fn candidates_for(catalog: &Catalog, program_type: &str) -> Option<Vec<University>> {
    let program = program_type.parse::<ProgramType>().ok()?;
    let universities = catalog.by_program(program);
    if universities.is_empty() {
        None
    } else {
        Some(universities)
    }
}

/// Rank all matching programs for a candidate
///
/// POST /api/match
///
/// Request body:
/// ```json
/// {
///   "gpa": 3.5,
///   "gmat_score": 710,
///   "gre_score": 320,
///   "work_experience": 2,
///   "program_type": "MBA"
/// }
/// ```
async fn match_universities(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let request = req.into_inner();

    let Some(universities) = candidates_for(&state.catalog, &request.program_type) else {
        tracing::info!("No universities for program type '{}'", request.program_type);
        return HttpResponse::Ok().json(serde_json::json!({
            "error": "No universities found for this program type"
        }));
    };

    let candidate_count = universities.len();
    let ranked = state.matcher.rank(&request, universities);

    tracing::info!(
        "Ranked {} universities for program type '{}'",
        candidate_count,
        request.program_type
    );

    HttpResponse::Ok().json(ranked)
}

/// Return the single best-fit program with its stats
///
/// POST /api/match/top
async fn top_match(state: web::Data<AppState>, req: web::Json<MatchRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for top match request: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let request = req.into_inner();

    let Some(universities) = candidates_for(&state.catalog, &request.program_type) else {
        tracing::info!("No universities for program type '{}'", request.program_type);
        return HttpResponse::Ok().json(serde_json::json!({
            "error": "No universities found"
        }));
    };

    // candidates_for never returns an empty list, so top() is Some here.
    let Some(best) = state.matcher.top(&request, universities) else {
        return HttpResponse::Ok().json(serde_json::json!({
            "error": "No universities found"
        }));
    };

    HttpResponse::Ok().json(TopMatchResponse {
        admission_chance: best.probability,
        defaulted: best.defaulted,
        program_stats: ProgramStats {
            acceptance_rate: best.acceptance_rate,
            avg_gmat: best.avg_gmat,
            avg_gpa: round_to_hundredth(best.avg_gpa),
        },
        university: best.name,
    })
}

#[inline]
fn round_to_hundredth(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
