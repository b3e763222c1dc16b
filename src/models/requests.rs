use serde::{Deserialize, Serialize};
use validator::Validate;

/// A candidate's profile, submitted to the match endpoints.
///
/// Exam scores are optional: the scorer cross-converts whichever exam
/// was supplied to the metric the program expects. `program_type` stays
/// a free string here so an unknown type surfaces as the documented
/// "no universities found" payload rather than a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(range(min = 0.0, max = 4.0))]
    pub gpa: f64,
    #[serde(default)]
    #[validate(range(min = 200, max = 805))]
    pub gmat_score: Option<i32>,
    #[serde(default)]
    #[validate(range(min = 260, max = 340))]
    pub gre_score: Option<i32>,
    #[validate(range(min = 0, max = 50))]
    pub work_experience: i32,
    #[validate(length(min = 1))]
    pub program_type: String,
}
