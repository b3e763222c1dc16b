use crate::core::scoring::admission_probability;
use crate::models::{MatchRequest, MatchWeights, ScoredUniversity, University};

/// Probability substituted when scoring a single program fails. Rows
/// carrying it are flagged with `defaulted: true` rather than silently
/// blending in with computed results.
pub const FALLBACK_PROBABILITY: f64 = 50.0;

/// Ranks a candidate against catalog programs using configured weights.
///
/// Constructed once at startup from `Settings` and shared through the
/// application state; holds no mutable state of its own.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    weights: MatchWeights,
}

impl Matcher {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: MatchWeights::default(),
        }
    }

    /// Score every university and return them sorted by probability,
    /// highest first.
    ///
    /// The sort is stable, so programs with equal probability keep their
    /// catalog order. A per-program scoring failure is logged and the
    /// row falls back to [`FALLBACK_PROBABILITY`] with `defaulted` set.
    pub fn rank(&self, request: &MatchRequest, universities: Vec<University>) -> Vec<ScoredUniversity> {
        let mut scored: Vec<ScoredUniversity> = universities
            .into_iter()
            .map(|university| self.score_one(request, university))
            .collect();

        scored.sort_by(|a, b| {
            b.probability
                .partial_cmp(&a.probability)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        scored
    }

    /// The single best match: head of the ranked list, so ties resolve
    /// to the first catalog entry exactly as `rank` orders them.
    pub fn top(&self, request: &MatchRequest, universities: Vec<University>) -> Option<ScoredUniversity> {
        self.rank(request, universities).into_iter().next()
    }

    fn score_one(&self, request: &MatchRequest, university: University) -> ScoredUniversity {
        let (probability, defaulted) =
            match admission_probability(request, &university, &self.weights) {
                Ok(probability) => (probability, false),
                Err(error) => {
                    tracing::warn!(
                        "Scoring failed for {} ({}), using fallback: {}",
                        university.name,
                        university.program_type,
                        error
                    );
                    (FALLBACK_PROBABILITY, true)
                }
            };

        ScoredUniversity {
            name: university.name,
            country: university.country,
            probability,
            defaulted,
            avg_gmat: university.avg_gmat,
            avg_gpa: university.avg_gpa,
            acceptance_rate: university.acceptance_rate,
            program_type: university.program_type,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProgramType;

    fn university(name: &str, avg_gmat: i32, acceptance_rate: f64) -> University {
        University {
            name: name.to_string(),
            country: "USA".to_string(),
            avg_gpa: 3.6,
            avg_gmat,
            avg_gre: 320,
            min_work_exp: 2,
            acceptance_rate,
            program_type: ProgramType::Mba,
        }
    }

    fn request() -> MatchRequest {
        MatchRequest {
            gpa: 3.5,
            gmat_score: Some(710),
            gre_score: None,
            work_experience: 2,
            program_type: "MBA".to_string(),
        }
    }

    #[test]
    fn test_rank_sorted_descending() {
        let matcher = Matcher::with_default_weights();
        let universities = vec![
            university("Hard", 760, 8.0),
            university("Easy", 650, 30.0),
            university("Middle", 710, 15.0),
        ];

        let ranked = matcher.rank(&request(), universities);

        assert_eq!(ranked.len(), 3);
        for pair in ranked.windows(2) {
            assert!(pair[0].probability >= pair[1].probability);
        }
        assert_eq!(ranked[0].name, "Easy");
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let matcher = Matcher::with_default_weights();
        let universities = vec![
            university("First", 700, 12.0),
            university("Second", 700, 12.0),
        ];

        let ranked = matcher.rank(&request(), universities);

        assert_eq!(ranked[0].probability, ranked[1].probability);
        assert_eq!(ranked[0].name, "First");
        assert_eq!(ranked[1].name, "Second");
    }

    #[test]
    fn test_top_matches_head_of_rank() {
        let matcher = Matcher::with_default_weights();
        let universities = vec![
            university("Hard", 760, 8.0),
            university("Easy", 650, 30.0),
        ];

        let ranked = matcher.rank(&request(), universities.clone());
        let top = matcher.top(&request(), universities).unwrap();

        assert_eq!(top.name, ranked[0].name);
        assert_eq!(top.probability, ranked[0].probability);
    }

    #[test]
    fn test_top_empty_catalog() {
        let matcher = Matcher::with_default_weights();
        assert!(matcher.top(&request(), vec![]).is_none());
    }

    #[test]
    fn test_scoring_failure_uses_flagged_fallback() {
        let matcher = Matcher::with_default_weights();
        let mut req = request();
        req.gmat_score = None;
        req.gre_score = None;

        let ranked = matcher.rank(&req, vec![university("Any", 700, 12.0)]);

        assert_eq!(ranked.len(), 1);
        assert!(ranked[0].defaulted);
        assert_eq!(ranked[0].probability, FALLBACK_PROBABILITY);
    }
}
