use super::catalog::AssessmentBlueprint;
use super::domain::{
    Answer, AssessmentError, CategoryScore, Question, ScoreCategory, SectionId, WiscarProfile,
};
use super::results::{synthesize, RecommendationResult};
use super::sequencer::{Advance, SectionScores, SectionSequencer};
use super::views::AssessmentProgress;
use serde::Serialize;
use tracing::info;

/// Overall progress shown while each section is active.
const SECTION_PROGRESS: [(SectionId, u8); 5] = [
    (SectionId::Intro, 20),
    (SectionId::Psychological, 20),
    (SectionId::Technical, 40),
    (SectionId::Wiscar, 60),
    (SectionId::Results, 100),
];

fn progress_for(section: SectionId) -> u8 {
    SECTION_PROGRESS
        .iter()
        .find(|(candidate, _)| *candidate == section)
        .map(|(_, percent)| *percent)
        .unwrap_or_default()
}

/// Receives each section's scores as it completes.
pub trait SectionListener {
    fn section_completed(&mut self, section: SectionId, scores: &SectionScores);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullListener;

impl SectionListener for NullListener {
    fn section_completed(&mut self, _section: SectionId, _scores: &SectionScores) {}
}

/// Keeps every completion event in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingListener {
    events: Vec<(SectionId, SectionScores)>,
}

impl RecordingListener {
    pub fn events(&self) -> &[(SectionId, SectionScores)] {
        &self.events
    }
}

impl SectionListener for RecordingListener {
    fn section_completed(&mut self, section: SectionId, scores: &SectionScores) {
        self.events.push((section, *scores));
    }
}

/// Root aggregate, mutated only when a section completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentState {
    pub section: SectionId,
    pub progress: u8,
    pub psychological: CategoryScore,
    pub technical: CategoryScore,
    pub wiscar: WiscarProfile,
}

impl Default for AssessmentState {
    fn default() -> Self {
        Self {
            section: SectionId::Intro,
            progress: progress_for(SectionId::Intro),
            psychological: CategoryScore::default(),
            technical: CategoryScore::default(),
            wiscar: WiscarProfile::default(),
        }
    }
}

/// Linear Intro -> Psychological -> Technical -> Wiscar -> Results run.
/// Completed sections are frozen; there is no backward navigation.
pub struct Assessment<L = NullListener> {
    state: AssessmentState,
    sequencers: Vec<SectionSequencer>,
    listener: L,
}

impl Assessment<NullListener> {
    pub fn new(blueprint: &AssessmentBlueprint) -> Result<Self, AssessmentError> {
        Self::with_listener(blueprint, NullListener)
    }
}

impl<L> Assessment<L>
where
    L: SectionListener,
{
    /// Every questionnaire section is validated up front so a run can never
    /// stall on a section that cannot be scored.
    pub fn with_listener(
        blueprint: &AssessmentBlueprint,
        listener: L,
    ) -> Result<Self, AssessmentError> {
        let sequencers = SectionId::ordered()
            .into_iter()
            .filter(|section| section.is_questionnaire())
            .map(|section| {
                blueprint
                    .section(section)
                    .ok_or(AssessmentError::EmptySection(section))
                    .and_then(SectionSequencer::new)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            state: AssessmentState::default(),
            sequencers,
            listener,
        })
    }

    pub fn state(&self) -> &AssessmentState {
        &self.state
    }

    pub fn active_section(&self) -> SectionId {
        self.state.section
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn sequencer(&self) -> Option<&SectionSequencer> {
        let section = self.state.section;
        self.sequencers
            .iter()
            .find(|sequencer| sequencer.section() == section)
    }

    fn sequencer_mut(
        &mut self,
        action: &'static str,
    ) -> Result<&mut SectionSequencer, AssessmentError> {
        let section = self.state.section;
        self.sequencers
            .iter_mut()
            .find(|sequencer| sequencer.section() == section)
            .ok_or(AssessmentError::InvalidTransition {
                from: section,
                action,
            })
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.sequencer().and_then(SectionSequencer::current_question)
    }

    pub fn progress(&self) -> AssessmentProgress {
        let (answered, total) = self
            .sequencer()
            .map(SectionSequencer::progress)
            .unwrap_or((0, 0));

        AssessmentProgress {
            percent: self.state.progress,
            section: self.state.section,
            section_label: self.state.section.label(),
            answered,
            total,
        }
    }

    /// Leave the introduction and open the first questionnaire.
    pub fn start(&mut self) -> Result<(), AssessmentError> {
        if self.state.section != SectionId::Intro {
            return Err(AssessmentError::InvalidTransition {
                from: self.state.section,
                action: "start",
            });
        }

        self.enter(SectionId::Psychological);
        info!("assessment started");
        Ok(())
    }

    /// Fill the pending slot of the active section.
    pub fn select_answer(&mut self, answer: Answer) -> Result<(), AssessmentError> {
        self.sequencer_mut("answer")?.select(answer)
    }

    /// Commit the pending answer of the active section.
    pub fn next(&mut self) -> Result<Advance, AssessmentError> {
        let section = self.state.section;
        let advance = self.sequencer_mut("advance")?.advance()?;
        if let Advance::Completed(scores) = advance {
            self.complete_section(section, scores)?;
        }
        Ok(advance)
    }

    /// Record an answer for `question_index` of `section` and advance.
    /// Returns `true` when that answer completed the section.
    pub fn submit_answer(
        &mut self,
        section: SectionId,
        question_index: usize,
        answer: Answer,
    ) -> Result<bool, AssessmentError> {
        let active = self.state.section;
        if section != active {
            return Err(AssessmentError::SectionNotActive {
                requested: section,
                active,
            });
        }

        let sequencer = self.sequencer_mut("answer")?;
        let expected = sequencer
            .question_index()
            .ok_or(AssessmentError::SectionAlreadyComplete(section))?;
        if expected != question_index {
            return Err(AssessmentError::QuestionOutOfOrder {
                expected,
                received: question_index,
            });
        }

        sequencer.select(answer)?;
        let advance = self.next()?;
        Ok(matches!(advance, Advance::Completed(_)))
    }

    /// Recommendation snapshot, available once the WISCAR section is done.
    pub fn results(&self) -> Result<RecommendationResult, AssessmentError> {
        if self.state.section != SectionId::Results {
            return Err(AssessmentError::ResultsNotReady(self.state.section));
        }

        Ok(synthesize(
            self.state.psychological,
            self.state.technical,
            &self.state.wiscar,
        ))
    }

    fn complete_section(
        &mut self,
        section: SectionId,
        scores: SectionScores,
    ) -> Result<(), AssessmentError> {
        match (section, scores) {
            (
                SectionId::Psychological,
                SectionScores::Category {
                    category: ScoreCategory::PsychologicalFit,
                    score,
                },
            ) => self.state.psychological = score,
            (
                SectionId::Technical,
                SectionScores::Category {
                    category: ScoreCategory::TechnicalAptitude,
                    score,
                },
            ) => self.state.technical = score,
            (SectionId::Wiscar, SectionScores::Wiscar(profile)) => self.state.wiscar = profile,
            (section, _) => return Err(AssessmentError::InconsistentSection(section)),
        }

        self.listener.section_completed(section, &scores);

        if let Some(next) = section.next() {
            self.enter(next);
        }

        if self.state.section == SectionId::Results {
            if let Ok(result) = self.results() {
                info!(
                    overall_score = result.overall_score,
                    tier = result.tier.label(),
                    "assessment finished"
                );
            }
        }
        Ok(())
    }

    fn enter(&mut self, section: SectionId) {
        self.state.section = section;
        self.state.progress = progress_for(section);
        info!(section = %section, progress = self.state.progress, "section opened");
    }
}
