use crate::models::{MatchWeights, MatchRequest, ProgramType, University};
use thiserror::Error;

/// Catalog-wide exam averages used when a program publishes none.
const DEFAULT_AVG_GMAT: f64 = 650.0;
const DEFAULT_AVG_GRE: f64 = 320.0;

/// Exam and GPA ratios are clamped to this band so a single outlier
/// metric cannot dominate the weighted sum.
const RATIO_MIN: f64 = 0.4;
const RATIO_MAX: f64 = 1.2;

/// Acceptance-rate factor bounds (rate is stored in percent).
const ACCEPTANCE_FACTOR_MIN: f64 = 0.05;
const ACCEPTANCE_FACTOR_MAX: f64 = 0.6;
const ACCEPTANCE_BASE: f64 = 0.4;

/// Visible probability band for every response.
pub const PROBABILITY_MIN: f64 = 20.0;
pub const PROBABILITY_MAX: f64 = 95.0;

/// Errors a single profile/program scoring can produce
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("candidate supplied neither a GMAT nor a GRE score")]
    MissingExamScore,

    #[error("non-finite value for {0}")]
    NonFiniteInput(&'static str),
}

/// Compute the admission probability (percent) for a candidate against
/// one program.
///
/// Formula:
/// 1. Pick the exam metric by program type (GMAT for MBA, GRE otherwise),
///    cross-converting via a fixed linear formula when the candidate
///    supplied only the other exam.
/// 2. Ratio of candidate exam and GPA to the program averages, each
///    clamped to [0.4, 1.2].
/// 3. Work-experience ratio min(candidate / required, 1.0), or 1.0 when
///    the program requires none.
/// 4. Weighted sum, scaled by 0.4 + acceptance factor, expressed as a
///    percentage and clamped to [20, 95].
pub fn admission_probability(
    request: &MatchRequest,
    university: &University,
    weights: &MatchWeights,
) -> Result<f64, ScoringError> {
    if !request.gpa.is_finite() {
        return Err(ScoringError::NonFiniteInput("gpa"));
    }

    let (exam_score, avg_exam) = exam_metric(request, university)?;
    let program_weights = weights.for_program(university.program_type);

    let exam_ratio = (exam_score / avg_exam.max(1.0)).clamp(RATIO_MIN, RATIO_MAX);
    let gpa_ratio = (request.gpa / university.avg_gpa.max(0.01)).clamp(RATIO_MIN, RATIO_MAX);
    let work_ratio = work_experience_ratio(request.work_experience, university.min_work_exp);

    let acceptance_factor = (university.acceptance_rate / 100.0)
        .clamp(ACCEPTANCE_FACTOR_MIN, ACCEPTANCE_FACTOR_MAX);

    let raw_score = exam_ratio * program_weights.exam
        + gpa_ratio * program_weights.gpa
        + work_ratio * program_weights.work;
    let adjusted = raw_score * (ACCEPTANCE_BASE + acceptance_factor);

    Ok(round_to_tenth(adjusted * 100.0).clamp(PROBABILITY_MIN, PROBABILITY_MAX))
}

/// Select the candidate's exam score and the program average for the
/// metric the program cares about. A score of 0 on either side counts
/// as "not supplied" / "not published".
fn exam_metric(
    request: &MatchRequest,
    university: &University,
) -> Result<(f64, f64), ScoringError> {
    let gmat = request.gmat_score.filter(|score| *score > 0);
    let gre = request.gre_score.filter(|score| *score > 0);

    match university.program_type {
        ProgramType::Mba => {
            let exam = match (gmat, gre) {
                (Some(gmat), _) => f64::from(gmat),
                (None, Some(gre)) => gre_to_gmat(f64::from(gre)),
                (None, None) => return Err(ScoringError::MissingExamScore),
            };
            let avg = if university.avg_gmat > 0 {
                f64::from(university.avg_gmat)
            } else {
                DEFAULT_AVG_GMAT
            };
            Ok((exam, avg))
        }
        ProgramType::Ms => {
            let exam = match (gre, gmat) {
                (Some(gre), _) => f64::from(gre),
                (None, Some(gmat)) => gmat_to_gre(f64::from(gmat)),
                (None, None) => return Err(ScoringError::MissingExamScore),
            };
            let avg = if university.avg_gre > 0 {
                f64::from(university.avg_gre)
            } else {
                DEFAULT_AVG_GRE
            };
            Ok((exam, avg))
        }
    }
}

/// Linear GRE -> GMAT equivalence.
#[inline]
fn gre_to_gmat(gre: f64) -> f64 {
    gre * 0.214 + 200.0
}

/// Linear GMAT -> GRE equivalence.
#[inline]
fn gmat_to_gre(gmat: f64) -> f64 {
    gmat * 3.1 - 620.0
}

/// Programs with no experience requirement treat every candidate as
/// fully qualified on this axis.
#[inline]
fn work_experience_ratio(work_experience: i32, min_work_exp: i32) -> f64 {
    if min_work_exp > 0 {
        (f64::from(work_experience) / f64::from(min_work_exp)).min(1.0)
    } else {
        1.0
    }
}

#[inline]
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
