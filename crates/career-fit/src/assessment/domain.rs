use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered sections of a single assessment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Intro,
    Psychological,
    Technical,
    Wiscar,
    Results,
}

impl SectionId {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Intro,
            Self::Psychological,
            Self::Technical,
            Self::Wiscar,
            Self::Results,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Intro => "Introduction",
            Self::Psychological => "Psychological Fit",
            Self::Technical => "Technical Aptitude",
            Self::Wiscar => "WISCAR Analysis",
            Self::Results => "Your Results",
        }
    }

    /// The section that follows this one, `None` once results are reached.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Intro => Some(Self::Psychological),
            Self::Psychological => Some(Self::Technical),
            Self::Technical => Some(Self::Wiscar),
            Self::Wiscar => Some(Self::Results),
            Self::Results => None,
        }
    }

    /// Sections that carry questions.
    pub const fn is_questionnaire(self) -> bool {
        matches!(self, Self::Psychological | Self::Technical | Self::Wiscar)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The six fixed readiness dimensions of the WISCAR framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WiscarDimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    Reality,
}

impl WiscarDimension {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Will,
            Self::Interest,
            Self::Skill,
            Self::Cognitive,
            Self::Ability,
            Self::Reality,
        ]
    }

    pub const fn code(self) -> char {
        match self {
            Self::Will => 'W',
            Self::Interest => 'I',
            Self::Skill => 'S',
            Self::Cognitive => 'C',
            Self::Ability => 'A',
            Self::Reality => 'R',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Will => "Will",
            Self::Interest => "Interest",
            Self::Skill => "Skill",
            Self::Cognitive => "Cognitive Readiness",
            Self::Ability => "Ability to Learn",
            Self::Reality => "Real-World Alignment",
        }
    }

    /// Label used on the results breakdown.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Will => "Will (Persistence)",
            Self::Interest => "Interest (Curiosity)",
            Self::Skill => "Skill (Current Ability)",
            Self::Cognitive => "Cognitive (Thinking)",
            Self::Ability => "Ability (Learning)",
            Self::Reality => "Reality (Alignment)",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Will => "Grit, perseverance, and consistency in learning",
            Self::Interest => "Curiosity and long-term relevance to your goals",
            Self::Skill => "Current match to BI tools' core requirements",
            Self::Cognitive => "Pattern thinking and comprehension speed",
            Self::Ability => "Openness, reflection, and feedback acceptance",
            Self::Reality => "Career expectations vs actual role duties",
        }
    }
}

/// Score bucket every question contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    PsychologicalFit,
    TechnicalAptitude,
    Wiscar(WiscarDimension),
}

impl ScoreCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PsychologicalFit => "Psychological Fit",
            Self::TechnicalAptitude => "Technical Aptitude",
            Self::Wiscar(dimension) => dimension.name(),
        }
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A 1-5 agreement rating. Values outside the scale cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LikertRating(u8);

impl LikertRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, AssessmentError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AssessmentError::RatingOutOfRange(value))
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn scale() -> [Self; 5] {
        [Self(1), Self(2), Self(3), Self(4), Self(5)]
    }

    pub const fn label(self) -> &'static str {
        match self.0 {
            1 => "Strongly Disagree",
            2 => "Disagree",
            3 => "Neutral",
            4 => "Agree",
            _ => "Strongly Agree",
        }
    }
}

impl TryFrom<u8> for LikertRating {
    type Error = AssessmentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LikertRating> for u8 {
    fn from(value: LikertRating) -> Self {
        value.0
    }
}

/// Percentage in [0, 100] summarizing one category's answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryScore(u8);

impl CategoryScore {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    /// Rounds half away from zero and clamps into the percentage range.
    pub(crate) fn from_unrounded(value: f64) -> Self {
        Self(value.round().clamp(0.0, f64::from(Self::MAX)) as u8)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for CategoryScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Scores for the six WISCAR dimensions; one field per dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiscarProfile {
    pub will: CategoryScore,
    pub interest: CategoryScore,
    pub skill: CategoryScore,
    pub cognitive: CategoryScore,
    pub ability: CategoryScore,
    pub reality: CategoryScore,
}

impl WiscarProfile {
    pub fn uniform(score: CategoryScore) -> Self {
        Self {
            will: score,
            interest: score,
            skill: score,
            cognitive: score,
            ability: score,
            reality: score,
        }
    }

    /// Build a profile by scoring each dimension independently.
    pub fn try_from_fn<E, F>(mut score: F) -> Result<Self, E>
    where
        F: FnMut(WiscarDimension) -> Result<CategoryScore, E>,
    {
        Ok(Self {
            will: score(WiscarDimension::Will)?,
            interest: score(WiscarDimension::Interest)?,
            skill: score(WiscarDimension::Skill)?,
            cognitive: score(WiscarDimension::Cognitive)?,
            ability: score(WiscarDimension::Ability)?,
            reality: score(WiscarDimension::Reality)?,
        })
    }

    pub const fn get(&self, dimension: WiscarDimension) -> CategoryScore {
        match dimension {
            WiscarDimension::Will => self.will,
            WiscarDimension::Interest => self.interest,
            WiscarDimension::Skill => self.skill,
            WiscarDimension::Cognitive => self.cognitive,
            WiscarDimension::Ability => self.ability,
            WiscarDimension::Reality => self.reality,
        }
    }

    pub fn entries(&self) -> [(WiscarDimension, CategoryScore); 6] {
        WiscarDimension::ordered().map(|dimension| (dimension, self.get(dimension)))
    }

    /// Plain arithmetic mean of the six scores, left unrounded.
    pub fn average(&self) -> f64 {
        let total: u32 = self
            .entries()
            .iter()
            .map(|(_, score)| u32::from(score.value()))
            .sum();
        f64::from(total) / WiscarDimension::ordered().len() as f64
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    Likert,
    Choice {
        options: Vec<&'static str>,
        correct_index: usize,
    },
}

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: &'static str,
    pub topic: &'static str,
    pub category: ScoreCategory,
    pub kind: QuestionKind,
}

impl Question {
    pub fn likert(text: &'static str, topic: &'static str, category: ScoreCategory) -> Self {
        Self {
            text,
            topic,
            category,
            kind: QuestionKind::Likert,
        }
    }

    pub fn choice(
        text: &'static str,
        topic: &'static str,
        options: Vec<&'static str>,
        correct_index: usize,
    ) -> Self {
        Self {
            text,
            topic,
            category: ScoreCategory::TechnicalAptitude,
            kind: QuestionKind::Choice {
                options,
                correct_index,
            },
        }
    }

    /// Reject answers of the wrong kind or pointing past the option list.
    pub fn validate(&self, answer: &Answer) -> Result<(), AssessmentError> {
        match (&self.kind, answer) {
            (QuestionKind::Likert, Answer::Likert(_)) => Ok(()),
            (QuestionKind::Choice { options, .. }, Answer::Choice(index)) => {
                if *index < options.len() {
                    Ok(())
                } else {
                    Err(AssessmentError::OptionOutOfRange {
                        index: *index,
                        options: options.len(),
                    })
                }
            }
            (QuestionKind::Likert, Answer::Choice(_)) => {
                Err(AssessmentError::AnswerKindMismatch { expected: "likert" })
            }
            (QuestionKind::Choice { .. }, Answer::Likert(_)) => {
                Err(AssessmentError::AnswerKindMismatch { expected: "choice" })
            }
        }
    }

    pub fn is_correct(&self, answer: &Answer) -> bool {
        match (&self.kind, answer) {
            (QuestionKind::Choice { correct_index, .. }, Answer::Choice(index)) => {
                index == correct_index
            }
            _ => false,
        }
    }
}

/// A committed response to one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Likert(LikertRating),
    Choice(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("category {0} has no answers to score")]
    EmptyCategory(ScoreCategory),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("rating {0} is outside the 1-5 agreement scale")]
    RatingOutOfRange(u8),
    #[error("no answer selected for question {question_index} of {section}")]
    NoAnswerSelected {
        section: SectionId,
        question_index: usize,
    },
    #[error("answer does not match a {expected} question")]
    AnswerKindMismatch { expected: &'static str },
    #[error("option {index} is out of range for a question with {options} options")]
    OptionOutOfRange { index: usize, options: usize },
    #[error("section {0} has no questions")]
    EmptySection(SectionId),
    #[error("section {0} mixes questions from categories it cannot score")]
    InconsistentSection(SectionId),
    #[error("section {0} is already complete")]
    SectionAlreadyComplete(SectionId),
    #[error("section {requested} is not active (current section: {active})")]
    SectionNotActive {
        requested: SectionId,
        active: SectionId,
    },
    #[error("expected an answer for question {expected}, received question {received}")]
    QuestionOutOfOrder { expected: usize, received: usize },
    #[error("cannot {action} while in section {from}")]
    InvalidTransition {
        from: SectionId,
        action: &'static str,
    },
    #[error("results are not available until the assessment is finished (current section: {0})")]
    ResultsNotReady(SectionId),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
