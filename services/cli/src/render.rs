use career_fit::assessment::{RecommendationResult, ResultsSummary};
use career_fit::config::OutputFormat;
use career_fit::error::AppError;
use std::io::Write;

pub(crate) fn render_results<W: Write>(
    out: &mut W,
    result: &RecommendationResult,
    format: OutputFormat,
) -> Result<(), AppError> {
    let summary = result.summary();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &summary)?;
            writeln!(out)?;
        }
        OutputFormat::Text => render_text(out, &summary)?,
    }
    Ok(())
}

fn render_text<W: Write>(out: &mut W, summary: &ResultsSummary) -> Result<(), AppError> {
    writeln!(out, "\nYour Assessment Results")?;
    writeln!(out, "Confidence score: {}%", summary.overall_score)?;
    writeln!(
        out,
        "Recommendation: {} ({})",
        summary.tier_label, summary.headline
    )?;

    writeln!(out, "\nScore breakdown")?;
    for entry in &summary.categories {
        writeln!(
            out,
            "- {}: {}% [{}]",
            entry.label,
            entry.score,
            entry.band.label()
        )?;
    }

    writeln!(out, "\nWISCAR framework")?;
    for entry in &summary.wiscar {
        writeln!(
            out,
            "- {} {}: {}% [{}]\n    {}",
            entry.code,
            entry.label,
            entry.score,
            entry.band.label(),
            entry.description
        )?;
    }

    writeln!(out, "\nCareer matches")?;
    for career in &summary.career_matches {
        writeln!(
            out,
            "- {} ({}% match): {}",
            career.role, career.match_percent, career.description
        )?;
    }

    writeln!(out, "\nLearning path")?;
    for (position, stage) in summary.learning_path.iter().enumerate() {
        writeln!(
            out,
            "{}. {}: {} | resources: {}",
            position + 1,
            stage.level,
            stage.topics,
            stage.resources
        )?;
    }

    writeln!(out, "\nNext steps")?;
    for step in &summary.next_steps {
        writeln!(out, "- {step}")?;
    }

    Ok(())
}
