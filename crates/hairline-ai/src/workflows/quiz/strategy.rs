use serde::{Deserialize, Serialize};

use super::answers::{question, AnswerSheet};
use super::assessment::{assess, AssessmentView};
use super::styling::{
    generate_recommendations, normalize_protective_styles, normalize_scalp_areas,
    StylingRecommendation, StylingSelections,
};

/// The two classification pipelines, selectable by name. They overlap in
/// purpose and can disagree; callers pick one explicitly rather than the
/// engine merging their outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierStrategy {
    /// Condition hypotheses over the full answer sheet, plus severity,
    /// bundle, and treatment plan.
    #[default]
    RuleBasedDiagnosis,
    /// Tension profiles over the selected protective styles, plus the
    /// product shortlist and action plan.
    StyleRiskBased,
}

/// Output of whichever pipeline was selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "strategy", content = "result")]
pub enum ClassifierOutput {
    RuleBasedDiagnosis(AssessmentView),
    StyleRiskBased(StylingRecommendation),
}

/// Derive the styling-pipeline input from the raw answer sheet.
pub fn selections_from_answers(answers: &AnswerSheet) -> StylingSelections {
    StylingSelections {
        protective_styles: normalize_protective_styles(
            answers.multi(question::PROTECTIVE_STYLES),
        ),
        scalp_areas: normalize_scalp_areas(answers.multi(question::AFFECTED_AREAS)),
    }
}

/// Run the selected pipeline over one answer snapshot.
pub fn classify_with(strategy: ClassifierStrategy, answers: &AnswerSheet) -> ClassifierOutput {
    match strategy {
        ClassifierStrategy::RuleBasedDiagnosis => {
            ClassifierOutput::RuleBasedDiagnosis(assess(answers).view())
        }
        ClassifierStrategy::StyleRiskBased => {
            let selections = selections_from_answers(answers);
            ClassifierOutput::StyleRiskBased(generate_recommendations(&selections))
        }
    }
}
