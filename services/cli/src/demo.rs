use crate::cli::OutputArgs;
use crate::render::render_results;
use career_fit::assessment::{
    Answer, Assessment, AssessmentBlueprint, AssessmentError, LikertRating, Question, QuestionKind,
    RecommendationResult, RecordingListener, SectionId, SectionScores,
};
use career_fit::config::{AppConfig, OutputFormat};
use career_fit::error::AppError;
use clap::{Args, ValueEnum};
use std::io::{self, Write};

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Scripted answer profile to run
    #[arg(long, value_enum, default_value_t = DemoProfile::Strong)]
    pub(crate) profile: DemoProfile,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum DemoProfile {
    /// Strongly agrees everywhere and answers every technical question correctly
    Strong,
    /// Neutral on every statement and misses every technical question
    Neutral,
    /// Agrees on most statements and gets half of the technical questions right
    Mixed,
}

impl DemoProfile {
    fn answer(
        self,
        section: SectionId,
        index: usize,
        question: &Question,
    ) -> Result<Answer, AssessmentError> {
        let answer = match &question.kind {
            QuestionKind::Likert => Answer::Likert(self.rating(section, index)?),
            QuestionKind::Choice {
                options,
                correct_index,
            } => {
                let correct = match self {
                    Self::Strong => true,
                    Self::Neutral => false,
                    Self::Mixed => index % 2 == 0,
                };
                if correct {
                    Answer::Choice(*correct_index)
                } else {
                    Answer::Choice((correct_index + 1) % options.len())
                }
            }
        };
        Ok(answer)
    }

    fn rating(self, section: SectionId, index: usize) -> Result<LikertRating, AssessmentError> {
        let value = match (self, section) {
            (Self::Strong, _) => 5,
            (Self::Neutral, _) => 3,
            (Self::Mixed, SectionId::Wiscar) if index % 4 == 3 => 3,
            (Self::Mixed, _) => 4,
        };
        LikertRating::new(value)
    }
}

pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let format = args.output.format(config);
    let mut stdout = io::stdout();
    let (result, events) = run_profile(args.profile)?;

    if format == OutputFormat::Text {
        writeln!(stdout, "Career fit demo ({:?} profile)", args.profile)?;
        for (section, scores) in &events {
            match scores {
                SectionScores::Category { score, .. } => {
                    writeln!(stdout, "- {} complete: {}", section.label(), score)?;
                }
                SectionScores::Wiscar(profile) => {
                    writeln!(
                        stdout,
                        "- {} complete: average {:.1}%",
                        section.label(),
                        profile.average()
                    )?;
                }
            }
        }
    }

    render_results(&mut stdout, &result, format)
}

fn run_profile(
    profile: DemoProfile,
) -> Result<(RecommendationResult, Vec<(SectionId, SectionScores)>), AppError> {
    let blueprint = AssessmentBlueprint::standard();
    let mut assessment = Assessment::with_listener(&blueprint, RecordingListener::default())?;
    assessment.start()?;

    while let Some(question) = assessment.current_question().cloned() {
        let progress = assessment.progress();
        let answer = profile.answer(progress.section, progress.answered, &question)?;
        assessment.submit_answer(progress.section, progress.answered, answer)?;
    }

    let result = assessment.results()?;
    Ok((result, assessment.listener().events().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_fit::assessment::RecommendationTier;

    #[test]
    fn strong_profile_is_a_clear_yes() {
        let (result, events) = run_profile(DemoProfile::Strong).expect("demo runs");
        assert_eq!(result.overall_score, 100);
        assert_eq!(result.tier, RecommendationTier::Yes);
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn neutral_profile_is_a_no() {
        let (result, _) = run_profile(DemoProfile::Neutral).expect("demo runs");
        assert_eq!(result.overall_score, 33);
        assert_eq!(result.tier, RecommendationTier::No);
    }

    #[test]
    fn mixed_profile_lands_in_maybe() {
        let (result, events) = run_profile(DemoProfile::Mixed).expect("demo runs");
        // wiscar dimensions alternate 75 and 63, averaging 69
        assert_eq!(result.psychological.value(), 75);
        assert_eq!(result.technical.value(), 50);
        assert!((result.wiscar_average - 69.0).abs() < 1e-9);
        assert_eq!(result.overall_score, 65);
        assert_eq!(result.tier, RecommendationTier::Maybe);
        assert!(matches!(events[2], (SectionId::Wiscar, SectionScores::Wiscar(_))));
    }
}
