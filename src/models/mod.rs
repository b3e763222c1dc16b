// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    MatchWeights, ProgramType, ScoredUniversity, ScoringWeights, University, UnknownProgramType,
};
pub use requests::MatchRequest;
pub use responses::{ErrorResponse, HealthResponse, ProgramStats, TopMatchResponse};
