use super::domain::{CategoryScore, LikertRating, ScoreCategory, ScoringError};

const LIKERT_STEP: f64 = 25.0;

/// Map a 1-5 rating onto 0, 25, 50, 75 or 100.
pub fn normalize_likert(rating: LikertRating) -> CategoryScore {
    normalize_mean(f64::from(rating.value()))
}

fn normalize_mean(mean: f64) -> CategoryScore {
    CategoryScore::from_unrounded((mean - f64::from(LikertRating::MIN)) * LIKERT_STEP)
}

/// Average the raw ratings, then normalize once so rounding happens a single time.
pub fn score_likert(
    category: ScoreCategory,
    ratings: &[LikertRating],
) -> Result<CategoryScore, ScoringError> {
    if ratings.is_empty() {
        return Err(ScoringError::EmptyCategory(category));
    }

    let total: u32 = ratings.iter().map(|rating| u32::from(rating.value())).sum();
    let mean = f64::from(total) / ratings.len() as f64;
    Ok(normalize_mean(mean))
}

/// Percentage of correct selections, rounded to the nearest whole point.
pub fn score_choices(
    category: ScoreCategory,
    correctness: &[bool],
) -> Result<CategoryScore, ScoringError> {
    if correctness.is_empty() {
        return Err(ScoringError::EmptyCategory(category));
    }

    let correct = correctness.iter().filter(|correct| **correct).count();
    Ok(CategoryScore::from_unrounded(
        100.0 * correct as f64 / correctness.len() as f64,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratings(values: &[u8]) -> Vec<LikertRating> {
        values
            .iter()
            .map(|value| LikertRating::new(*value).expect("valid rating"))
            .collect()
    }

    #[test]
    fn normalize_maps_scale_onto_quarter_steps() {
        let normalized: Vec<u8> = LikertRating::scale()
            .into_iter()
            .map(|rating| normalize_likert(rating).value())
            .collect();
        assert_eq!(normalized, vec![0, 25, 50, 75, 100]);
    }

    #[test]
    fn normalize_is_monotonic() {
        let scale = LikertRating::scale();
        for pair in scale.windows(2) {
            assert!(normalize_likert(pair[0]) <= normalize_likert(pair[1]));
        }
    }

    #[test]
    fn likert_mean_is_normalized_once() {
        let score = score_likert(ScoreCategory::PsychologicalFit, &ratings(&[3, 3, 4, 4, 3]))
            .expect("non-empty");
        assert_eq!(score.value(), 60);

        // mean 4.333 -> 83.33
        let score =
            score_likert(ScoreCategory::PsychologicalFit, &ratings(&[4, 4, 5])).expect("non-empty");
        assert_eq!(score.value(), 83);
    }

    #[test]
    fn likert_half_points_round_up() {
        // mean 1.5 -> 12.5 -> 13
        let score =
            score_likert(ScoreCategory::PsychologicalFit, &ratings(&[1, 2])).expect("non-empty");
        assert_eq!(score.value(), 13);
    }

    #[test]
    fn empty_categories_are_rejected() {
        assert_eq!(
            score_likert(ScoreCategory::PsychologicalFit, &[]),
            Err(ScoringError::EmptyCategory(ScoreCategory::PsychologicalFit))
        );
        assert_eq!(
            score_choices(ScoreCategory::TechnicalAptitude, &[]),
            Err(ScoringError::EmptyCategory(ScoreCategory::TechnicalAptitude))
        );
    }

    #[test]
    fn choice_score_is_rounded_percentage() {
        let category = ScoreCategory::TechnicalAptitude;
        assert_eq!(score_choices(category, &[true, false]).unwrap().value(), 50);
        assert_eq!(
            score_choices(category, &[true, false, false]).unwrap().value(),
            33
        );
        assert_eq!(
            score_choices(category, &[true, true, false]).unwrap().value(),
            67
        );
        assert_eq!(score_choices(category, &[false; 8]).unwrap().value(), 0);
        assert_eq!(score_choices(category, &[true; 8]).unwrap().value(), 100);
    }
}
