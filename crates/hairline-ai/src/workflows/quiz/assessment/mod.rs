//! Rule-based diagnostic pipeline: condition classification, severity and
//! bundle selection, and the generated treatment plan.

pub mod diagnosis;
pub mod plan;
pub mod severity;

pub use diagnosis::{classify, Condition, Diagnosis, DiagnosisView, GENERAL_THINNING};
pub use plan::{build_plan, PlanPriority, TreatmentPlanStep};
pub use severity::{recommend, Bundle, SeverityRecommendation, UsageGuide};

use serde::Serialize;

use crate::workflows::quiz::answers::AnswerSheet;

/// Full output of the diagnostic pipeline for one answer snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub diagnosis: Diagnosis,
    pub severity: SeverityRecommendation,
    pub plan: Vec<TreatmentPlanStep>,
}

impl Assessment {
    /// One-paragraph expert summary led by the primary finding.
    pub fn summary(&self) -> String {
        let confidence = self
            .diagnosis
            .primary
            .map(|condition| self.diagnosis.confidence_for(condition));
        let confidence_pct = confidence.map(|value| (value * 100.0).round() as u32);
        match confidence_pct {
            Some(pct) if pct > 0 => format!(
                "Primary finding: {} ({pct}% confidence). We will focus on restoring scalp balance, protecting fragile areas, and stimulating follicles with a consistent routine tailored to your selections.",
                self.diagnosis.primary_name()
            ),
            _ => format!(
                "Primary finding: {}. We will focus on restoring scalp balance, protecting fragile areas, and stimulating follicles with a consistent routine tailored to your selections.",
                self.diagnosis.primary_name()
            ),
        }
    }

    /// Presentation payload handed to the rendering layer.
    pub fn view(&self) -> AssessmentView {
        AssessmentView {
            diagnosis: self.diagnosis.view(),
            severity: self.severity.clone(),
            plan: self.plan.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentView {
    pub diagnosis: DiagnosisView,
    pub severity: SeverityRecommendation,
    pub plan: Vec<TreatmentPlanStep>,
}

/// Run the whole diagnostic pipeline over one answer snapshot.
pub fn assess(answers: &AnswerSheet) -> Assessment {
    let diagnosis = classify(answers);
    let severity = recommend(&diagnosis, answers);
    let plan = build_plan(&diagnosis, answers);

    Assessment {
        diagnosis,
        severity,
        plan,
    }
}
