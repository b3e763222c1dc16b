use serde::{Deserialize, Serialize};

/// Averages of the best-match program, echoed back to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramStats {
    pub acceptance_rate: f64,
    pub avg_gmat: i32,
    pub avg_gpa: f64,
}

/// Response for the best-match endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopMatchResponse {
    pub admission_chance: f64,
    pub defaulted: bool,
    pub program_stats: ProgramStats,
    pub university: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response for rejected requests (bad JSON, failed validation)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
