use crate::models::{ProgramType, University};

/// The built-in catalog: 10 MBA and 10 MS programs.
///
/// Acceptance rates are in percent. MS programs publish no GMAT average
/// (0), and none of them require prior work experience.
pub fn default_universities() -> Vec<University> {
    fn uni(
        name: &str,
        country: &str,
        avg_gpa: f64,
        avg_gmat: i32,
        avg_gre: i32,
        min_work_exp: i32,
        acceptance_rate: f64,
        program_type: ProgramType,
    ) -> University {
        University {
            name: name.to_string(),
            country: country.to_string(),
            avg_gpa,
            avg_gmat,
            avg_gre,
            min_work_exp,
            acceptance_rate,
            program_type,
        }
    }

    vec![
        // MBA programs
        uni("Harvard Business School", "USA", 3.8, 730, 320, 2, 10.0, ProgramType::Mba),
        uni("Stanford Graduate School of Business", "USA", 3.8, 733, 322, 2, 10.0, ProgramType::Mba),
        uni("Wharton School", "USA", 3.7, 725, 321, 2, 12.0, ProgramType::Mba),
        uni("INSEAD", "France", 3.6, 710, 315, 3, 20.0, ProgramType::Mba),
        uni("London Business School", "UK", 3.5, 700, 310, 3, 18.0, ProgramType::Mba),
        uni("MIT Sloan", "USA", 3.7, 728, 320, 2, 11.0, ProgramType::Mba),
        uni("Columbia Business School", "USA", 3.6, 720, 318, 2, 13.0, ProgramType::Mba),
        uni("Chicago Booth", "USA", 3.6, 725, 319, 2, 12.0, ProgramType::Mba),
        uni("Kellogg School of Management", "USA", 3.5, 720, 317, 2, 13.0, ProgramType::Mba),
        uni("IE Business School", "Spain", 3.4, 700, 310, 3, 20.0, ProgramType::Mba),
        // MS programs
        uni("MIT", "USA", 3.8, 0, 330, 0, 7.0, ProgramType::Ms),
        uni("Stanford University", "USA", 3.7, 0, 328, 0, 8.0, ProgramType::Ms),
        uni("UC Berkeley", "USA", 3.6, 0, 325, 0, 12.0, ProgramType::Ms),
        uni("Carnegie Mellon", "USA", 3.5, 0, 323, 0, 13.0, ProgramType::Ms),
        uni("University of Cambridge", "UK", 3.7, 0, 327, 0, 10.0, ProgramType::Ms),
        uni("University of Oxford", "UK", 3.6, 0, 326, 0, 10.0, ProgramType::Ms),
        uni("ETH Zurich", "Switzerland", 3.5, 0, 322, 0, 15.0, ProgramType::Ms),
        uni("National University of Singapore", "Singapore", 3.5, 0, 320, 0, 20.0, ProgramType::Ms),
        uni("Tsinghua University", "China", 3.4, 0, 318, 0, 18.0, ProgramType::Ms),
        uni("University of Toronto", "Canada", 3.5, 0, 320, 0, 15.0, ProgramType::Ms),
    ]
}
