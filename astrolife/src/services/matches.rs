use crate::domain::{CelebrityMatch, ProfileInput};
use rand::Rng;

/// Celebrity compatibility against a fixed catalog. The percentage is
/// randomized per request within each celebrity's band.
pub struct MatchService;

impl MatchService {
    pub fn new() -> Self {
        Self
    }

    pub fn matches_for(&self, _profile: &ProfileInput) -> Vec<CelebrityMatch> {
        let mut rng = rand::rng();

        vec![
            CelebrityMatch {
                name: "Shah Rukh Khan".to_string(),
                profession: "Actor".to_string(),
                match_percentage: rng.random_range(80..100),
                zodiac_sign: "Scorpio".to_string(),
                birth_date: "November 2, 1965".to_string(),
                common_traits: vec![
                    "Charismatic".to_string(),
                    "Ambitious".to_string(),
                    "Creative".to_string(),
                ],
            },
            CelebrityMatch {
                name: "Priyanka Chopra".to_string(),
                profession: "Actress".to_string(),
                match_percentage: rng.random_range(75..95),
                zodiac_sign: "Cancer".to_string(),
                birth_date: "July 18, 1982".to_string(),
                common_traits: vec![
                    "Determined".to_string(),
                    "Versatile".to_string(),
                    "Leadership".to_string(),
                ],
            },
        ]
    }
}

impl Default for MatchService {
    fn default() -> Self {
        Self::new()
    }
}
