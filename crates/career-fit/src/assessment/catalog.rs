use super::domain::{Question, ScoreCategory, SectionId, WiscarDimension};

#[derive(Debug, Clone)]
pub struct SectionBlueprint {
    pub id: SectionId,
    pub title: &'static str,
    pub description: &'static str,
    pub questions: Vec<Question>,
}

/// Static question catalog for one assessment.
#[derive(Debug, Clone)]
pub struct AssessmentBlueprint {
    sections: Vec<SectionBlueprint>,
}

impl AssessmentBlueprint {
    pub fn standard() -> Self {
        Self {
            sections: vec![
                psychological_section(),
                technical_section(),
                wiscar_section(),
            ],
        }
    }

    /// Build a catalog from explicit sections. Questionnaire sections that are
    /// missing or empty are rejected when the orchestrator reaches them.
    pub fn new(sections: Vec<SectionBlueprint>) -> Self {
        Self { sections }
    }

    pub fn section(&self, id: SectionId) -> Option<&SectionBlueprint> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn questions_for(&self, category: ScoreCategory) -> Vec<&Question> {
        self.sections
            .iter()
            .flat_map(|section| section.questions.iter())
            .filter(|question| question.category == category)
            .collect()
    }

    pub fn question_count(&self) -> usize {
        self.sections
            .iter()
            .map(|section| section.questions.len())
            .sum()
    }
}

fn psychological_section() -> SectionBlueprint {
    let fit = ScoreCategory::PsychologicalFit;
    SectionBlueprint {
        id: SectionId::Psychological,
        title: "Psychological Fit Assessment",
        description: "Assess your intrinsic motivation, personality traits, and cognitive preferences for BI work",
        questions: vec![
            Question::likert(
                "I enjoy finding patterns and trends in data",
                "Interest Scale",
                fit,
            ),
            Question::likert(
                "I find satisfaction in creating visual representations of complex information",
                "Interest Scale",
                fit,
            ),
            Question::likert(
                "I am comfortable spending long periods focused on detailed analytical work",
                "Personality Compatibility",
                fit,
            ),
            Question::likert(
                "I enjoy helping others understand complex information through clear explanations",
                "Personality Compatibility",
                fit,
            ),
            Question::likert(
                "When solving problems, I prefer to break them down into smaller, logical steps",
                "Cognitive Style & Preferences",
                fit,
            ),
            Question::likert(
                "I'm motivated by the impact my analytical insights can have on business decisions",
                "Motivation Source",
                fit,
            ),
        ],
    }
}

fn technical_section() -> SectionBlueprint {
    SectionBlueprint {
        id: SectionId::Technical,
        title: "Technical Aptitude Assessment",
        description: "Evaluate your logical reasoning, numerical skills, and data literacy",
        questions: vec![
            Question::choice(
                "If Sales = 100 and Growth Rate = 15%, what would be the projected sales for next year?",
                "Logical Reasoning",
                vec!["115", "85", "150", "100.15"],
                0,
            ),
            Question::choice(
                "In a dashboard, if you want to show data for 'Current Month' vs 'Previous Month', which filter logic makes most sense?",
                "Logical Reasoning",
                vec![
                    "Date >= TODAY() AND Date < LAST_MONTH()",
                    "Date = MONTH(TODAY()) OR Date = MONTH(TODAY())-1",
                    "Date >= STARTOFMONTH(TODAY()) OR Date >= STARTOFMONTH(DATEADD(MONTH,-1,TODAY()))",
                    "Date BETWEEN CURRENT_MONTH AND PREVIOUS_MONTH",
                ],
                2,
            ),
            Question::choice(
                "A company's revenue increased from $500K to $650K. What is the percentage increase?",
                "Numerical Aptitude",
                vec!["30%", "25%", "20%", "35%"],
                0,
            ),
            Question::choice(
                "If you have 1000 customers and want to show the top 10% in a chart, how many customers would that be?",
                "Numerical Aptitude",
                vec!["10", "100", "50", "90"],
                1,
            ),
            Question::choice(
                "Which chart type is BEST for showing how a value changes over time?",
                "Data Literacy",
                vec!["Pie Chart", "Bar Chart", "Line Chart", "Scatter Plot"],
                2,
            ),
            Question::choice(
                "In a dataset with columns: CustomerID, OrderDate, Product, Quantity, Revenue - which would be the best 'primary key'?",
                "Data Literacy",
                vec![
                    "Product",
                    "OrderDate",
                    "CustomerID + OrderDate + Product",
                    "Revenue",
                ],
                2,
            ),
            Question::choice(
                "What is a 'slicer' in Power BI/Tableau used for?",
                "BI Tool Concepts",
                vec![
                    "To cut data into smaller files",
                    "To filter data interactively in dashboards",
                    "To slice charts into segments",
                    "To remove unwanted columns",
                ],
                1,
            ),
            Question::choice(
                "When creating a dashboard, what should you prioritize?",
                "BI Tool Concepts",
                vec![
                    "Using as many colors as possible",
                    "Including every available metric",
                    "Clear visual hierarchy and user experience",
                    "Complex animations and effects",
                ],
                2,
            ),
        ],
    }
}

fn wiscar_section() -> SectionBlueprint {
    let statements: [(WiscarDimension, [&'static str; 2]); 6] = [
        (
            WiscarDimension::Will,
            [
                "I stick with challenging projects even when they become difficult",
                "I'm willing to put in extra hours to master new tools and concepts",
            ],
        ),
        (
            WiscarDimension::Interest,
            [
                "I find myself naturally drawn to understanding how businesses use data",
                "I enjoy exploring new ways to visualize and present information",
            ],
        ),
        (
            WiscarDimension::Skill,
            [
                "I'm comfortable working with spreadsheets and basic formulas",
                "I can easily identify trends and patterns in data sets",
            ],
        ),
        (
            WiscarDimension::Cognitive,
            [
                "I can quickly understand complex business processes and requirements",
                "I enjoy breaking down complicated problems into smaller parts",
            ],
        ),
        (
            WiscarDimension::Ability,
            [
                "I actively seek feedback to improve my work",
                "I'm comfortable learning new software tools and technologies",
            ],
        ),
        (
            WiscarDimension::Reality,
            [
                "I understand that BI work involves both technical skills and business communication",
                "I'm interested in roles that bridge technology and business strategy",
            ],
        ),
    ];

    let questions = statements
        .into_iter()
        .flat_map(|(dimension, texts)| {
            texts.map(|text| {
                Question::likert(text, dimension.name(), ScoreCategory::Wiscar(dimension))
            })
        })
        .collect();

    SectionBlueprint {
        id: SectionId::Wiscar,
        title: "WISCAR Framework Analysis",
        description: "Comprehensive evaluation across six key dimensions for BI career success",
        questions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::QuestionKind;

    #[test]
    fn standard_catalog_has_expected_section_sizes() {
        let blueprint = AssessmentBlueprint::standard();
        let size = |id| {
            blueprint
                .section(id)
                .map(|section| section.questions.len())
                .unwrap_or_default()
        };
        assert_eq!(size(SectionId::Psychological), 6);
        assert_eq!(size(SectionId::Technical), 8);
        assert_eq!(size(SectionId::Wiscar), 12);
        assert_eq!(blueprint.question_count(), 26);
        assert!(blueprint.section(SectionId::Intro).is_none());
    }

    #[test]
    fn every_wiscar_dimension_has_two_statements() {
        let blueprint = AssessmentBlueprint::standard();
        for dimension in WiscarDimension::ordered() {
            let questions = blueprint.questions_for(ScoreCategory::Wiscar(dimension));
            assert_eq!(questions.len(), 2, "{dimension:?} should have two questions");
            assert!(questions
                .iter()
                .all(|question| question.kind == QuestionKind::Likert));
        }
    }

    #[test]
    fn technical_correct_indexes_point_at_real_options() {
        let blueprint = AssessmentBlueprint::standard();
        for question in blueprint.questions_for(ScoreCategory::TechnicalAptitude) {
            match &question.kind {
                QuestionKind::Choice {
                    options,
                    correct_index,
                } => assert!(*correct_index < options.len(), "{}", question.text),
                QuestionKind::Likert => panic!("technical questions are multiple choice"),
            }
        }
    }
}
