use super::domain::{SectionId, WiscarDimension};
use super::results::{LearningStage, RecommendationTier, ScoreBand};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ScoreEntry {
    pub label: &'static str,
    pub score: u8,
    pub band: ScoreBand,
}

#[derive(Debug, Clone, Serialize)]
pub struct DimensionScoreEntry {
    pub dimension: WiscarDimension,
    pub code: char,
    pub label: &'static str,
    pub description: &'static str,
    pub score: u8,
    pub band: ScoreBand,
}

#[derive(Debug, Clone, Serialize)]
pub struct CareerMatchEntry {
    pub role: &'static str,
    pub description: &'static str,
    pub match_percent: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultsSummary {
    pub overall_score: u8,
    pub tier: RecommendationTier,
    pub tier_label: &'static str,
    pub headline: &'static str,
    pub categories: Vec<ScoreEntry>,
    pub wiscar: Vec<DimensionScoreEntry>,
    pub career_matches: Vec<CareerMatchEntry>,
    pub learning_path: Vec<LearningStage>,
    pub next_steps: Vec<&'static str>,
}

/// Where the run stands, for progress bars and section tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssessmentProgress {
    pub percent: u8,
    pub section: SectionId,
    pub section_label: &'static str,
    pub answered: usize,
    pub total: usize,
}

impl AssessmentProgress {
    /// Share of the active section already answered, 0 outside questionnaires.
    pub fn section_percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.answered * 100) / self.total) as u8
    }
}
