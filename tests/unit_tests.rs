// Unit tests for Orbit Match

use orbit_match::core::{admission_probability, ScoringError, PROBABILITY_MAX, PROBABILITY_MIN};
use orbit_match::models::{MatchRequest, MatchWeights, ProgramType, University};

fn university(
    name: &str,
    avg_gpa: f64,
    avg_gmat: i32,
    avg_gre: i32,
    min_work_exp: i32,
    acceptance_rate: f64,
    program_type: ProgramType,
) -> University {
    University {
        name: name.to_string(),
        country: "USA".to_string(),
        avg_gpa,
        avg_gmat,
        avg_gre,
        min_work_exp,
        acceptance_rate,
        program_type,
    }
}

fn mba_request(gpa: f64, gmat: Option<i32>, gre: Option<i32>, work: i32) -> MatchRequest {
    MatchRequest {
        gpa,
        gmat_score: gmat,
        gre_score: gre,
        work_experience: work,
        program_type: "MBA".to_string(),
    }
}

#[test]
fn test_harvard_reference_case() {
    // The documented example: {gpa 3.5, gmat 710, work 2} against
    // Harvard Business School (3.8 / 730 / 2 years / 10%).
    let harvard = university(
        "Harvard Business School",
        3.8,
        730,
        320,
        2,
        10.0,
        ProgramType::Mba,
    );
    let request = mba_request(3.5, Some(710), None, 2);

    let probability =
        admission_probability(&request, &harvard, &MatchWeights::default()).unwrap();

    assert!(probability >= PROBABILITY_MIN && probability <= PROBABILITY_MAX);
    assert!((probability - 48.1).abs() < 1e-9);
}

#[test]
fn test_probability_band_over_profile_grid() {
    // Sweep a grid of profiles against representative programs; every
    // computed probability must land inside the visible band.
    let programs = vec![
        university("Selective MBA", 3.8, 740, 325, 3, 8.0, ProgramType::Mba),
        university("Open MBA", 3.2, 650, 305, 0, 45.0, ProgramType::Mba),
        university("Selective MS", 3.8, 0, 332, 0, 6.0, ProgramType::Ms),
        university("Open MS", 3.3, 0, 310, 0, 35.0, ProgramType::Ms),
    ];
    let weights = MatchWeights::default();

    for gpa in [2.0, 3.0, 3.5, 4.0] {
        for gmat in [None, Some(550), Some(700), Some(790)] {
            for work in [0, 2, 8] {
                let mut request = mba_request(gpa, gmat, Some(315), work);
                for program in &programs {
                    request.program_type = program.program_type.to_string();
                    let probability =
                        admission_probability(&request, program, &weights).unwrap();
                    assert!(
                        (PROBABILITY_MIN..=PROBABILITY_MAX).contains(&probability),
                        "out of band: {} for {} (gpa {}, gmat {:?}, work {})",
                        probability,
                        program.name,
                        gpa,
                        gmat,
                        work
                    );
                }
            }
        }
    }
}

#[test]
fn test_exam_cross_conversion_both_directions() {
    let weights = MatchWeights::default();
    let mba = university("B-School", 3.6, 720, 318, 2, 12.0, ProgramType::Mba);
    let ms = university("Grad School", 3.6, 0, 325, 0, 12.0, ProgramType::Ms);

    // GRE-only candidate scored against an MBA program
    let gre_only = mba_request(3.6, None, Some(325), 2);
    assert!(admission_probability(&gre_only, &mba, &weights).is_ok());

    // GMAT-only candidate scored against an MS program
    let mut gmat_only = mba_request(3.6, Some(720), None, 2);
    gmat_only.program_type = "MS".to_string();
    assert!(admission_probability(&gmat_only, &ms, &weights).is_ok());
}

#[test]
fn test_missing_exam_scores() {
    let weights = MatchWeights::default();
    let mba = university("B-School", 3.6, 720, 318, 2, 12.0, ProgramType::Mba);

    let no_exams = mba_request(3.6, None, None, 2);
    assert_eq!(
        admission_probability(&no_exams, &mba, &weights),
        Err(ScoringError::MissingExamScore)
    );
}

#[test]
fn test_stronger_profile_never_scores_lower() {
    let weights = MatchWeights::default();
    let program = university("B-School", 3.7, 720, 318, 3, 15.0, ProgramType::Mba);

    let weak = mba_request(3.0, Some(640), None, 1);
    let strong = mba_request(3.8, Some(750), None, 5);

    let weak_probability = admission_probability(&weak, &program, &weights).unwrap();
    let strong_probability = admission_probability(&strong, &program, &weights).unwrap();
    assert!(strong_probability > weak_probability);
}

#[test]
fn test_higher_acceptance_rate_raises_probability() {
    let weights = MatchWeights::default();
    let request = mba_request(3.5, Some(700), None, 3);

    let selective = university("Selective", 3.6, 710, 318, 2, 8.0, ProgramType::Mba);
    let open = university("Open", 3.6, 710, 318, 2, 30.0, ProgramType::Mba);

    let selective_probability =
        admission_probability(&request, &selective, &weights).unwrap();
    let open_probability = admission_probability(&request, &open, &weights).unwrap();
    assert!(open_probability > selective_probability);
}

#[test]
fn test_probability_reported_in_tenths() {
    let weights = MatchWeights::default();
    let program = university("B-School", 3.8, 730, 320, 2, 10.0, ProgramType::Mba);
    let request = mba_request(3.5, Some(710), None, 2);

    let probability = admission_probability(&request, &program, &weights).unwrap();
    let scaled = probability * 10.0;
    assert!((scaled - scaled.round()).abs() < 1e-9);
}
