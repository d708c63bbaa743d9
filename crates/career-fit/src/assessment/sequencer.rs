use super::catalog::SectionBlueprint;
use super::domain::{
    Answer, AssessmentError, CategoryScore, Question, QuestionKind, ScoreCategory, ScoringError,
    SectionId, WiscarProfile,
};
use super::scoring::{score_choices, score_likert};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SequencerState {
    AwaitingAnswer(usize),
    Advancing,
    SectionComplete,
}

/// Payload emitted when a section finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionScores {
    Category {
        category: ScoreCategory,
        score: CategoryScore,
    },
    Wiscar(WiscarProfile),
}

/// Outcome of a successful `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    NextQuestion(usize),
    Completed(SectionScores),
}

/// Walks one section's questions, holding a pending selection until it is
/// committed by `advance`.
#[derive(Debug, Clone)]
pub struct SectionSequencer {
    section: SectionId,
    questions: Vec<Question>,
    pending: Option<Answer>,
    committed: Vec<Answer>,
    state: SequencerState,
}

impl SectionSequencer {
    pub fn new(blueprint: &SectionBlueprint) -> Result<Self, AssessmentError> {
        if blueprint.questions.is_empty() {
            return Err(AssessmentError::EmptySection(blueprint.id));
        }
        ensure_scorable(blueprint)?;

        Ok(Self {
            section: blueprint.id,
            questions: blueprint.questions.clone(),
            pending: None,
            committed: Vec::with_capacity(blueprint.questions.len()),
            state: SequencerState::AwaitingAnswer(0),
        })
    }

    pub fn section(&self) -> SectionId {
        self.section
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == SequencerState::SectionComplete
    }

    pub fn question_index(&self) -> Option<usize> {
        match self.state {
            SequencerState::AwaitingAnswer(index) => Some(index),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.question_index()
            .and_then(|index| self.questions.get(index))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn pending(&self) -> Option<Answer> {
        self.pending
    }

    pub fn answers(&self) -> &[Answer] {
        &self.committed
    }

    /// `(answered, total)` for this section.
    pub fn progress(&self) -> (usize, usize) {
        (self.committed.len(), self.questions.len())
    }

    /// Place an answer in the pending slot, replacing any earlier selection.
    pub fn select(&mut self, answer: Answer) -> Result<(), AssessmentError> {
        let question = self
            .current_question()
            .ok_or(AssessmentError::SectionAlreadyComplete(self.section))?;
        question.validate(&answer)?;
        self.pending = Some(answer);
        Ok(())
    }

    /// Commit the pending answer and move on. Without a pending answer the
    /// transition is refused and nothing changes.
    pub fn advance(&mut self) -> Result<Advance, AssessmentError> {
        let index = match self.state {
            SequencerState::AwaitingAnswer(index) => index,
            SequencerState::Advancing | SequencerState::SectionComplete => {
                return Err(AssessmentError::SectionAlreadyComplete(self.section))
            }
        };

        let answer = self
            .pending
            .take()
            .ok_or(AssessmentError::NoAnswerSelected {
                section: self.section,
                question_index: index,
            })?;
        self.committed.push(answer);
        debug!(section = %self.section, question = index, ?answer, "answer committed");

        let next = index + 1;
        if next < self.questions.len() {
            self.state = SequencerState::AwaitingAnswer(next);
            return Ok(Advance::NextQuestion(next));
        }

        self.state = SequencerState::Advancing;
        match self.score() {
            Ok(scores) => {
                self.state = SequencerState::SectionComplete;
                info!(section = %self.section, ?scores, "section complete");
                Ok(Advance::Completed(scores))
            }
            Err(err) => {
                self.committed.pop();
                self.pending = Some(answer);
                self.state = SequencerState::AwaitingAnswer(index);
                Err(err)
            }
        }
    }

    fn score(&self) -> Result<SectionScores, AssessmentError> {
        let category = match self.section {
            SectionId::Psychological => ScoreCategory::PsychologicalFit,
            SectionId::Technical => ScoreCategory::TechnicalAptitude,
            SectionId::Wiscar => {
                let profile = WiscarProfile::try_from_fn(|dimension| {
                    self.score_category(ScoreCategory::Wiscar(dimension))
                })?;
                return Ok(SectionScores::Wiscar(profile));
            }
            SectionId::Intro | SectionId::Results => {
                return Err(AssessmentError::InconsistentSection(self.section))
            }
        };

        let score = self.score_category(category)?;
        Ok(SectionScores::Category { category, score })
    }

    /// Score only the answers whose question belongs to `category`.
    fn score_category(&self, category: ScoreCategory) -> Result<CategoryScore, ScoringError> {
        let mut ratings = Vec::new();
        let mut correctness = Vec::new();

        for (question, answer) in self.questions.iter().zip(&self.committed) {
            if question.category != category {
                continue;
            }
            match (&question.kind, answer) {
                (QuestionKind::Likert, Answer::Likert(rating)) => ratings.push(*rating),
                (QuestionKind::Choice { .. }, _) => correctness.push(question.is_correct(answer)),
                (QuestionKind::Likert, Answer::Choice(_)) => {}
            }
        }

        if correctness.is_empty() {
            score_likert(category, &ratings)
        } else {
            score_choices(category, &correctness)
        }
    }
}

/// Psychological and WISCAR sections hold only Likert statements of their own
/// categories; the technical section holds only multiple-choice questions.
fn ensure_scorable(blueprint: &SectionBlueprint) -> Result<(), AssessmentError> {
    let belongs = |question: &Question| match blueprint.id {
        SectionId::Psychological => {
            question.category == ScoreCategory::PsychologicalFit
                && question.kind == QuestionKind::Likert
        }
        SectionId::Technical => {
            question.category == ScoreCategory::TechnicalAptitude
                && matches!(question.kind, QuestionKind::Choice { .. })
        }
        SectionId::Wiscar => {
            matches!(question.category, ScoreCategory::Wiscar(_))
                && question.kind == QuestionKind::Likert
        }
        SectionId::Intro | SectionId::Results => false,
    };

    if blueprint.questions.iter().all(belongs) {
        Ok(())
    } else {
        Err(AssessmentError::InconsistentSection(blueprint.id))
    }
}
