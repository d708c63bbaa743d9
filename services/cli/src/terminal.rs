use career_fit::assessment::{
    Answer, Assessment, AssessmentBlueprint, AssessmentError, LikertRating, Question,
    QuestionKind, RecommendationResult,
};
use career_fit::error::AppError;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Drive a full assessment from line-based input.
pub(crate) fn run_interactive<R, W>(
    mut input: R,
    output: &mut W,
) -> Result<RecommendationResult, AppError>
where
    R: BufRead,
    W: Write,
{
    let blueprint = AssessmentBlueprint::standard();
    let mut assessment = Assessment::new(&blueprint)?;

    writeln!(
        output,
        "Is Power BI & Tableau the Right Career Fit for You?\n\
         {} questions across psychological fit, technical aptitude, and the WISCAR framework.\n\
         Press Enter to begin.",
        blueprint.question_count()
    )?;
    read_line(&mut input)?;
    assessment.start()?;

    let mut announced = None;
    while let Some(question) = assessment.current_question().cloned() {
        let progress = assessment.progress();
        if announced != Some(progress.section) {
            if let Some(section) = blueprint.section(progress.section) {
                writeln!(output, "\n== {} ==\n{}", section.title, section.description)?;
            }
            announced = Some(progress.section);
        }

        writeln!(
            output,
            "\n[{}% complete, section {}%] Question {} of {} ({})",
            progress.percent,
            progress.section_percent(),
            progress.answered + 1,
            progress.total,
            question.topic
        )?;
        prompt(output, &question)?;

        loop {
            let line = read_line(&mut input)?;
            let outcome = match parse_answer(&question, &line) {
                Some(answer) => assessment
                    .select_answer(answer)
                    .and_then(|()| assessment.next()),
                None => Err(AssessmentError::NoAnswerSelected {
                    section: progress.section,
                    question_index: progress.answered,
                }),
            };
            match outcome {
                Ok(_) => break,
                Err(err) => {
                    debug!(%err, "answer rejected");
                    writeln!(output, "Please choose one of the listed options.")?;
                    write!(output, "> ")?;
                    output.flush()?;
                }
            }
        }
    }

    Ok(assessment.results()?)
}

fn prompt<W: Write>(output: &mut W, question: &Question) -> io::Result<()> {
    writeln!(output, "{}", question.text)?;
    match &question.kind {
        QuestionKind::Likert => {
            for rating in LikertRating::scale() {
                writeln!(output, "  {}) {}", rating.value(), rating.label())?;
            }
        }
        QuestionKind::Choice { options, .. } => {
            for (index, option) in options.iter().enumerate() {
                writeln!(output, "  {}) {}", index + 1, option)?;
            }
        }
    }
    write!(output, "> ")?;
    output.flush()
}

/// Options are shown 1-based for both question kinds.
fn parse_answer(question: &Question, line: &str) -> Option<Answer> {
    let value: usize = line.trim().parse().ok()?;
    match question.kind {
        QuestionKind::Likert => u8::try_from(value)
            .ok()
            .and_then(|rating| LikertRating::new(rating).ok())
            .map(Answer::Likert),
        QuestionKind::Choice { .. } => value.checked_sub(1).map(Answer::Choice),
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String, AppError> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before the assessment finished",
        )));
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_fit::assessment::RecommendationTier;
    use std::io::Cursor;

    fn script(lines: &[&str]) -> Cursor<Vec<u8>> {
        let mut text = lines.join("\n");
        text.push('\n');
        Cursor::new(text.into_bytes())
    }

    #[test]
    fn full_neutral_run_reaches_results() {
        let mut lines = vec![""];
        lines.extend(std::iter::repeat("3").take(6));
        lines.extend(std::iter::repeat("4").take(8));
        lines.extend(std::iter::repeat("3").take(12));

        let mut output = Vec::new();
        let result = run_interactive(script(&lines), &mut output).expect("run completes");

        assert_eq!(result.psychological.value(), 50);
        // option 4 is never the correct answer
        assert_eq!(result.technical.value(), 0);
        assert_eq!(result.tier, RecommendationTier::No);
        let text = String::from_utf8(output).expect("utf8");
        assert!(text.contains("WISCAR Framework Analysis"));
        assert!(text.contains("[40% complete, section 50%] Question 5 of 8"));
    }

    #[test]
    fn invalid_lines_are_reprompted() {
        let mut lines = vec!["", "", "seven", "9", "5"];
        lines.extend(std::iter::repeat("5").take(5));
        lines.extend(["1", "3", "1", "2", "3", "3", "2", "3"]);
        lines.extend(std::iter::repeat("5").take(12));

        let mut output = Vec::new();
        let result = run_interactive(script(&lines), &mut output).expect("run completes");

        assert_eq!(result.psychological.value(), 100);
        assert_eq!(result.technical.value(), 100);
        assert_eq!(result.overall_score, 100);
        let text = String::from_utf8(output).expect("utf8");
        assert_eq!(text.matches("Please choose one of the listed options").count(), 3);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut output = Vec::new();
        let err = run_interactive(script(&["", "4"]), &mut output).expect_err("input ends early");
        assert!(matches!(err, AppError::Io(ref io) if io.kind() == io::ErrorKind::UnexpectedEof));
    }
}
