use career_fit::assessment::{
    Answer, Assessment, AssessmentBlueprint, AssessmentError, LikertRating, NullListener,
    QuestionKind, RecommendationTier, SectionId, SequencerState, WiscarDimension,
};

fn rating(value: u8) -> Answer {
    Answer::Likert(LikertRating::new(value).expect("valid rating"))
}

/// Answer every remaining question in the active section.
fn answer_section(
    assessment: &mut Assessment<NullListener>,
    section: SectionId,
    mut pick: impl FnMut(&QuestionKind) -> Answer,
) {
    let mut index = 0;
    loop {
        let kind = assessment
            .current_question()
            .expect("active question")
            .kind
            .clone();
        let completed = assessment
            .submit_answer(section, index, pick(&kind))
            .expect("answer accepted");
        index += 1;
        if completed {
            break;
        }
    }
}

fn correct_choice(kind: &QuestionKind) -> Answer {
    match kind {
        QuestionKind::Choice { correct_index, .. } => Answer::Choice(*correct_index),
        QuestionKind::Likert => panic!("expected a multiple choice question"),
    }
}

fn wrong_choice(kind: &QuestionKind) -> Answer {
    match kind {
        QuestionKind::Choice {
            options,
            correct_index,
        } => Answer::Choice((correct_index + 1) % options.len()),
        QuestionKind::Likert => panic!("expected a multiple choice question"),
    }
}

fn started() -> Assessment<NullListener> {
    let mut assessment =
        Assessment::new(&AssessmentBlueprint::standard()).expect("standard catalog builds");
    assessment.start().expect("assessment starts");
    assessment
}

#[test]
fn strongest_answers_everywhere_recommend_yes() {
    let mut assessment = started();

    answer_section(&mut assessment, SectionId::Psychological, |_| rating(5));
    answer_section(&mut assessment, SectionId::Technical, correct_choice);
    answer_section(&mut assessment, SectionId::Wiscar, |_| rating(5));

    let result = assessment.results().expect("results ready");
    assert_eq!(result.psychological.value(), 100);
    assert_eq!(result.technical.value(), 100);
    for dimension in WiscarDimension::ordered() {
        assert_eq!(result.wiscar.get(dimension).value(), 100);
    }
    assert!((result.wiscar_average - 100.0).abs() < f64::EPSILON);
    assert_eq!(result.overall_score, 100);
    assert_eq!(result.tier, RecommendationTier::Yes);
    assert_eq!(result.learning_path.len(), 3);
}

#[test]
fn neutral_answers_with_wrong_technical_recommend_no() {
    let mut assessment = started();

    answer_section(&mut assessment, SectionId::Psychological, |_| rating(3));
    answer_section(&mut assessment, SectionId::Technical, wrong_choice);
    answer_section(&mut assessment, SectionId::Wiscar, |_| rating(3));

    let result = assessment.results().expect("results ready");
    assert_eq!(result.psychological.value(), 50);
    assert_eq!(result.technical.value(), 0);
    assert!((result.wiscar_average - 50.0).abs() < f64::EPSILON);
    assert_eq!(result.overall_score, 33);
    assert_eq!(result.tier, RecommendationTier::No);
}

#[test]
fn results_are_idempotent() {
    let mut assessment = started();

    answer_section(&mut assessment, SectionId::Psychological, |_| rating(4));
    answer_section(&mut assessment, SectionId::Technical, correct_choice);
    answer_section(&mut assessment, SectionId::Wiscar, |_| rating(3));

    let first = assessment.results().expect("results ready");
    let second = assessment.results().expect("results ready again");
    assert_eq!(first, second);
    // (75 + 100 + 50) / 3 = 75
    assert_eq!(first.overall_score, 75);
    assert_eq!(first.tier, RecommendationTier::Yes);
}

#[test]
fn completed_sections_are_frozen() {
    let mut assessment = started();
    answer_section(&mut assessment, SectionId::Psychological, |_| rating(2));

    let err = assessment
        .submit_answer(SectionId::Psychological, 0, rating(5))
        .expect_err("psychological section is closed");
    assert_eq!(
        err,
        AssessmentError::SectionNotActive {
            requested: SectionId::Psychological,
            active: SectionId::Technical,
        }
    );
    assert_eq!(assessment.state().psychological.value(), 25);
}

#[test]
fn section_never_completes_with_missing_answers() {
    let mut assessment = started();

    for index in 0..5 {
        assessment
            .submit_answer(SectionId::Psychological, index, rating(4))
            .expect("answer accepted");
        let sequencer = assessment.sequencer().expect("psychological active");
        assert_ne!(sequencer.state(), SequencerState::SectionComplete);
    }

    assert!(assessment.next().is_err());
    let sequencer = assessment.sequencer().expect("still on psychological");
    assert_eq!(sequencer.progress(), (5, 6));
    assert_eq!(sequencer.state(), SequencerState::AwaitingAnswer(5));
}

#[test]
fn invalid_input_does_not_corrupt_progress() {
    let mut assessment = started();
    answer_section(&mut assessment, SectionId::Psychological, |_| rating(4));

    let err = assessment
        .submit_answer(SectionId::Technical, 0, Answer::Choice(9))
        .expect_err("option 9 does not exist");
    assert!(matches!(err, AssessmentError::OptionOutOfRange { index: 9, .. }));

    let progress = assessment.progress();
    assert_eq!(progress.section, SectionId::Technical);
    assert_eq!((progress.answered, progress.total), (0, 8));
    assert_eq!(progress.percent, 40);
}
