mod catalog;
pub mod domain;
mod orchestrator;
mod results;
pub mod scoring;
mod sequencer;
pub mod views;

pub use catalog::{AssessmentBlueprint, SectionBlueprint};
pub use domain::{
    Answer, AssessmentError, CategoryScore, LikertRating, Question, QuestionKind, ScoreCategory,
    ScoringError, SectionId, WiscarDimension, WiscarProfile,
};
pub use orchestrator::{
    Assessment, AssessmentState, NullListener, RecordingListener, SectionListener,
};
pub use results::{
    synthesize, CareerMatch, CareerMatchRule, LearningStage, RecommendationResult,
    RecommendationTier, ScoreBand, CAREER_MATCH_RULES, LEARNING_PATH,
};
pub use sequencer::{Advance, SectionScores, SectionSequencer, SequencerState};
pub use views::{AssessmentProgress, ResultsSummary};
