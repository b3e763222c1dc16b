// Core algorithm exports
pub mod catalog;
pub mod matcher;
pub mod scoring;

pub use catalog::Catalog;
pub use matcher::{Matcher, FALLBACK_PROBABILITY};
pub use scoring::{admission_probability, ScoringError, PROBABILITY_MAX, PROBABILITY_MIN};
