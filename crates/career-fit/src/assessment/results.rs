use super::domain::{CategoryScore, ScoreCategory, WiscarDimension, WiscarProfile};
use super::views::{CareerMatchEntry, DimensionScoreEntry, ResultsSummary, ScoreEntry};
use serde::Serialize;

/// Three-way answer to "is this career a fit?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RecommendationTier {
    Yes,
    Maybe,
    No,
}

impl RecommendationTier {
    pub const YES_THRESHOLD: u8 = 75;
    pub const MAYBE_THRESHOLD: u8 = 50;

    pub const fn from_score(overall_score: u8) -> Self {
        if overall_score >= Self::YES_THRESHOLD {
            Self::Yes
        } else if overall_score >= Self::MAYBE_THRESHOLD {
            Self::Maybe
        } else {
            Self::No
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::Maybe => "Maybe",
            Self::No => "No",
        }
    }

    pub const fn headline(self) -> &'static str {
        match self {
            Self::Yes => "Ready to Begin Your BI Journey",
            Self::Maybe => "Build Your Foundation First",
            Self::No => "Consider Alternative Paths",
        }
    }

    fn guidance(self) -> &'static TierGuidance {
        match self {
            Self::Yes => &TIER_GUIDANCE[0],
            Self::Maybe => &TIER_GUIDANCE[1],
            Self::No => &TIER_GUIDANCE[2],
        }
    }
}

/// Display bucket for an individual score, sharing the tier thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Developing,
    Low,
}

impl ScoreBand {
    pub fn classify(score: f64) -> Self {
        if score >= f64::from(RecommendationTier::YES_THRESHOLD) {
            Self::Strong
        } else if score >= f64::from(RecommendationTier::MAYBE_THRESHOLD) {
            Self::Developing
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Developing => "Developing",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareerMatchRule {
    pub role: &'static str,
    pub description: &'static str,
    pub floor: u8,
    pub offset: i16,
}

impl CareerMatchRule {
    pub fn match_for(&self, overall_score: u8) -> u8 {
        let shifted = (i16::from(overall_score) + self.offset).clamp(0, 100) as u8;
        shifted.max(self.floor)
    }
}

pub const CAREER_MATCH_RULES: [CareerMatchRule; 5] = [
    CareerMatchRule {
        role: "BI Analyst",
        description: "Builds dashboards, extracts KPIs, advises teams",
        floor: 60,
        offset: -10,
    },
    CareerMatchRule {
        role: "Data Analyst",
        description: "Analyzes trends, answers questions with data",
        floor: 55,
        offset: -15,
    },
    CareerMatchRule {
        role: "Data Visualization Specialist",
        description: "Designs compelling dashboards and reports",
        floor: 70,
        offset: 0,
    },
    CareerMatchRule {
        role: "Operations Analyst",
        description: "Uses BI to improve workflows and efficiencies",
        floor: 50,
        offset: -20,
    },
    CareerMatchRule {
        role: "Self-Service BI Developer",
        description: "Supports teams in creating their own reports",
        floor: 65,
        offset: -5,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LearningStage {
    pub level: &'static str,
    pub topics: &'static str,
    pub resources: &'static str,
}

pub const LEARNING_PATH: [LearningStage; 3] = [
    LearningStage {
        level: "Beginner",
        topics: "Power BI Desktop, Tableau Basics, KPIs",
        resources: "Microsoft Learn, Tableau Public",
    },
    LearningStage {
        level: "Intermediate",
        topics: "DAX, calculated fields, data blending",
        resources: "Coursera, Udemy, YouTube",
    },
    LearningStage {
        level: "Advanced",
        topics: "Advanced dashboards, certifications",
        resources: "DA-100, Tableau Desktop Specialist",
    },
];

struct TierGuidance {
    next_steps: [&'static str; 4],
}

static TIER_GUIDANCE: [TierGuidance; 3] = [
    TierGuidance {
        next_steps: [
            "Begin with Power BI Desktop and Microsoft Learn modules",
            "Join Makeover Monday for Tableau practice",
            "Start building a portfolio of data visualizations",
            "Consider pursuing Microsoft Power BI certification",
        ],
    },
    TierGuidance {
        next_steps: [
            "Strengthen Excel skills with advanced formulas and pivot tables",
            "Take an introductory data analysis course",
            "Practice with free BI tools and sample datasets",
            "Reassess after 3-6 months of preparation",
        ],
    },
    TierGuidance {
        next_steps: [
            "Consider Excel-based analytics roles first",
            "Explore Data Storytelling with simpler tools",
            "Look into operational reporting roles",
            "Build foundational analytical skills before BI tools",
        ],
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerMatch {
    pub role: &'static str,
    pub description: &'static str,
    pub match_percent: u8,
}

/// Snapshot derived from the three top-level scores. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub psychological: CategoryScore,
    pub technical: CategoryScore,
    pub wiscar: WiscarProfile,
    pub wiscar_average: f64,
    pub overall_score: u8,
    pub tier: RecommendationTier,
    pub career_matches: Vec<CareerMatch>,
    pub learning_path: Vec<LearningStage>,
    pub next_steps: Vec<&'static str>,
}

pub fn synthesize(
    psychological: CategoryScore,
    technical: CategoryScore,
    wiscar: &WiscarProfile,
) -> RecommendationResult {
    let wiscar_average = wiscar.average();
    let overall_score = CategoryScore::from_unrounded(
        (f64::from(psychological.value()) + f64::from(technical.value()) + wiscar_average) / 3.0,
    )
    .value();
    let tier = RecommendationTier::from_score(overall_score);

    let career_matches = CAREER_MATCH_RULES
        .iter()
        .map(|rule| CareerMatch {
            role: rule.role,
            description: rule.description,
            match_percent: rule.match_for(overall_score),
        })
        .collect();

    RecommendationResult {
        psychological,
        technical,
        wiscar: *wiscar,
        wiscar_average,
        overall_score,
        tier,
        career_matches,
        learning_path: LEARNING_PATH.to_vec(),
        next_steps: tier.guidance().next_steps.to_vec(),
    }
}

impl RecommendationResult {
    pub fn summary(&self) -> ResultsSummary {
        let category_entry = |category: ScoreCategory, score: CategoryScore| ScoreEntry {
            label: category.label(),
            score: score.value(),
            band: ScoreBand::classify(f64::from(score.value())),
        };

        let wiscar_band = ScoreBand::classify(self.wiscar_average);
        let categories = vec![
            category_entry(ScoreCategory::PsychologicalFit, self.psychological),
            category_entry(ScoreCategory::TechnicalAptitude, self.technical),
            ScoreEntry {
                label: "WISCAR Analysis",
                score: CategoryScore::from_unrounded(self.wiscar_average).value(),
                band: wiscar_band,
            },
        ];

        let wiscar = WiscarDimension::ordered()
            .into_iter()
            .map(|dimension| {
                let score = self.wiscar.get(dimension).value();
                DimensionScoreEntry {
                    dimension,
                    code: dimension.code(),
                    label: dimension.label(),
                    description: dimension.description(),
                    score,
                    band: ScoreBand::classify(f64::from(score)),
                }
            })
            .collect();

        let career_matches = self
            .career_matches
            .iter()
            .map(|career| CareerMatchEntry {
                role: career.role,
                description: career.description,
                match_percent: career.match_percent,
            })
            .collect();

        ResultsSummary {
            overall_score: self.overall_score,
            tier: self.tier,
            tier_label: self.tier.label(),
            headline: self.tier.headline(),
            categories,
            wiscar,
            career_matches,
            learning_path: self.learning_path.clone(),
            next_steps: self.next_steps.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(value: u8) -> CategoryScore {
        CategoryScore::new(value)
    }

    #[test]
    fn tier_boundaries_are_inclusive_lower_bounds() {
        assert_eq!(RecommendationTier::from_score(100), RecommendationTier::Yes);
        assert_eq!(RecommendationTier::from_score(75), RecommendationTier::Yes);
        assert_eq!(RecommendationTier::from_score(74), RecommendationTier::Maybe);
        assert_eq!(RecommendationTier::from_score(50), RecommendationTier::Maybe);
        assert_eq!(RecommendationTier::from_score(49), RecommendationTier::No);
        assert_eq!(RecommendationTier::from_score(0), RecommendationTier::No);
    }

    #[test]
    fn overall_score_rounds_once_over_unrounded_wiscar_average() {
        let mut wiscar = WiscarProfile::uniform(score(50));
        wiscar.will = score(75);
        // wiscar average 54.1667; (60 + 50 + 54.1667) / 3 = 54.72
        let result = synthesize(score(60), score(50), &wiscar);
        assert!((result.wiscar_average - 325.0 / 6.0).abs() < 1e-9);
        assert_eq!(result.overall_score, 55);
        assert_eq!(result.tier, RecommendationTier::Maybe);
    }

    #[test]
    fn neutral_profile_with_no_technical_marks_is_not_a_fit() {
        let result = synthesize(score(50), score(0), &WiscarProfile::uniform(score(50)));
        assert_eq!(result.overall_score, 33);
        assert_eq!(result.tier, RecommendationTier::No);
        assert_eq!(result.learning_path, LEARNING_PATH.to_vec());
        assert!(result.next_steps[0].contains("Excel-based"));
    }

    #[test]
    fn career_matches_respect_floors() {
        let low = synthesize(score(0), score(0), &WiscarProfile::uniform(score(0)));
        let floors: Vec<u8> = low
            .career_matches
            .iter()
            .map(|career| career.match_percent)
            .collect();
        assert_eq!(floors, vec![60, 55, 70, 50, 65]);

        let high = synthesize(score(100), score(100), &WiscarProfile::uniform(score(100)));
        let shifted: Vec<u8> = high
            .career_matches
            .iter()
            .map(|career| career.match_percent)
            .collect();
        assert_eq!(shifted, vec![90, 85, 100, 80, 95]);
        assert_eq!(high.tier, RecommendationTier::Yes);
        assert_eq!(high.learning_path.len(), 3);
    }

    #[test]
    fn summary_labels_every_score() {
        let mut wiscar = WiscarProfile::uniform(score(75));
        wiscar.skill = score(25);
        let summary = synthesize(score(80), score(50), &wiscar).summary();

        assert_eq!(summary.categories.len(), 3);
        assert_eq!(summary.categories[0].band, ScoreBand::Strong);
        assert_eq!(summary.categories[1].band, ScoreBand::Developing);
        assert_eq!(summary.wiscar.len(), 6);
        let skill = summary
            .wiscar
            .iter()
            .find(|entry| entry.dimension == WiscarDimension::Skill)
            .expect("skill entry");
        assert_eq!(skill.label, "Skill (Current Ability)");
        assert_eq!(skill.description, WiscarDimension::Skill.description());
        assert_eq!(skill.band, ScoreBand::Low);
        assert_eq!(summary.tier_label, summary.tier.label());
    }
}
