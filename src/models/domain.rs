use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of graduate program. Determines which exam metric and
/// weight set the scorer applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProgramType {
    Mba,
    Ms,
}

impl ProgramType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgramType::Mba => "MBA",
            ProgramType::Ms => "MS",
        }
    }
}

impl fmt::Display for ProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a request names a program type the catalog
/// does not know about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownProgramType(pub String);

impl fmt::Display for UnknownProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown program type: {}", self.0)
    }
}

impl std::error::Error for UnknownProgramType {}

impl FromStr for ProgramType {
    type Err = UnknownProgramType;

    /// Case-insensitive: "mba" and "MBA" both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MBA" => Ok(ProgramType::Mba),
            "MS" => Ok(ProgramType::Ms),
            other => Err(UnknownProgramType(other.to_string())),
        }
    }
}

/// A graduate program in the reference catalog.
///
/// Immutable reference data: seeded into PostgreSQL at startup, loaded
/// once into memory, read-only thereafter. An `avg_gmat`/`avg_gre` of 0
/// means the program does not publish that average; the scorer falls
/// back to a catalog-wide default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct University {
    pub name: String,
    pub country: String,
    pub avg_gpa: f64,
    pub avg_gmat: i32,
    pub avg_gre: i32,
    pub min_work_exp: i32,
    /// Percent of applicants admitted (0-100).
    pub acceptance_rate: f64,
    pub program_type: ProgramType,
}

/// One ranked entry of a match response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredUniversity {
    pub name: String,
    pub country: String,
    /// Admission probability in percent, clamped to [20, 95].
    pub probability: f64,
    /// True when scoring failed and the fallback constant was used.
    pub defaulted: bool,
    pub avg_gmat: i32,
    pub avg_gpa: f64,
    pub acceptance_rate: f64,
    pub program_type: ProgramType,
}

/// Weights for one program type's scoring formula.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub exam: f64,
    pub gpa: f64,
    pub work: f64,
}

/// Per-program-type weight tables.
#[derive(Debug, Clone, Copy)]
pub struct MatchWeights {
    pub mba: ScoringWeights,
    pub ms: ScoringWeights,
}

impl MatchWeights {
    pub fn for_program(&self, program: ProgramType) -> ScoringWeights {
        match program {
            ProgramType::Mba => self.mba,
            ProgramType::Ms => self.ms,
        }
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            mba: ScoringWeights {
                exam: 0.5,
                gpa: 0.3,
                work: 0.2,
            },
            ms: ScoringWeights {
                exam: 0.45,
                gpa: 0.45,
                work: 0.1,
            },
        }
    }
}
