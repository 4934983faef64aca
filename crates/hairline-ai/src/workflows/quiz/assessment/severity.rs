use serde::{Deserialize, Serialize};

use super::diagnosis::{Condition, Diagnosis};
use crate::workflows::quiz::answers::{
    answer_matches, any_label_matches, question, AnswerSheet, LabelPattern,
};

use LabelPattern::Contains;

/// The two fixed product bundles the funnel can offer. Serialized as the
/// storefront bundle names the results page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bundle {
    #[serde(rename = "SELF LOVE PLUS")]
    SelfLovePlus,
    #[serde(rename = "SELF LOVE PLUS B2GOF")]
    SelfLovePlusB2gof,
}

impl Bundle {
    pub const fn label(self) -> &'static str {
        match self {
            Bundle::SelfLovePlus => "SELF LOVE PLUS",
            Bundle::SelfLovePlusB2gof => "SELF LOVE PLUS B2GOF",
        }
    }

    /// Treatment duration tied to the bundle.
    pub const fn months(self) -> u8 {
        match self {
            Bundle::SelfLovePlus => 1,
            Bundle::SelfLovePlusB2gof => 3,
        }
    }
}

/// Usage instructions for the three products in either bundle. Each line
/// can be replaced by an urgent variant by the overrides below.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageGuide {
    pub shampoo: String,
    pub pomade: String,
    pub conditioner: String,
}

/// Bundle recommendation derived fresh from a diagnosis and the raw
/// answer sheet; never persisted independently of its inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeverityRecommendation {
    pub severity_score: u8,
    pub bundle: Bundle,
    pub months: u8,
    pub reasoning: String,
    pub usage: UsageGuide,
}

const BUNDLE_THRESHOLD: u8 = 5;

const URGENT_SHAMPOO: &str =
    "CRITICAL: Wash 2-3x per week to clear scalp issues before pomade can work optimally";
const URGENT_CONDITIONER: &str =
    "CRITICAL: Use after EVERY wash. Your hair is breaking, not just shedding - moisture is essential.";
const POSTPARTUM_NOTE: &str =
    " Postpartum hair loss typically reverses within 6-9 months with proper treatment.";

/// Sum the independent severity contributions and pick the bundle.
pub fn recommend(diagnosis: &Diagnosis, answers: &AnswerSheet) -> SeverityRecommendation {
    let noticed_when = answers.single(question::NOTICED_WHEN);
    let affected_areas = answers.multi(question::AFFECTED_AREAS);
    let scalp_issues = answers.multi(question::SCALP_ISSUES);
    let life_events = answers.multi(question::LIFE_EVENTS);
    let hair_behavior = answers.single(question::SHEDDING_VS_BREAKAGE);
    let primary_concern = answers.single(question::PRIMARY_CONCERN);

    let mut severity_score: u8 = 0;

    // Duration: a single tier from the four-step lookup.
    if answer_matches(noticed_when, &[Contains("more than 2")]) {
        severity_score += 3;
    } else if answer_matches(noticed_when, &[Contains("1-2 years")]) {
        severity_score += 2;
    } else if answer_matches(noticed_when, &[Contains("6-12 months")]) {
        severity_score += 1;
    }

    // Area breadth by type, plus one point for wide spread.
    if any_label_matches(
        affected_areas,
        &[Contains("even thinning"), Contains("overall")],
    ) {
        severity_score += 3;
    } else if any_label_matches(affected_areas, &[Contains("crown")]) {
        severity_score += 2;
    } else if any_label_matches(affected_areas, &[Contains("patch")]) {
        severity_score += 2;
    }
    if affected_areas.len() >= 3 {
        severity_score += 1;
    }

    // Primary diagnosis weight.
    match diagnosis.primary {
        Some(Condition::CicatricialAlopecia) => severity_score += 3,
        Some(Condition::AndrogenicAlopecia)
        | Some(Condition::AlopeciaAreata)
        | Some(Condition::TractionAlopecia) => severity_score += 2,
        _ => {}
    }

    // Scalp health signals.
    if any_label_matches(scalp_issues, &[Contains("ringworm"), Contains("sores")]) {
        severity_score += 2;
    }
    if scalp_issues.len() >= 2 {
        severity_score += 1;
    }

    // Multiple accepted diagnoses.
    if diagnosis.secondary.len() >= 2 {
        severity_score += 2;
    } else if diagnosis.secondary.len() == 1 {
        severity_score += 1;
    }

    let (bundle, mut reasoning, mut usage) = if severity_score >= BUNDLE_THRESHOLD {
        (
            Bundle::SelfLovePlusB2gof,
            format!(
                "Your {} needs a complete 3-month protocol. The shampoo + pomade + conditioner system addresses both scalp health and breakage for sustained results.",
                diagnosis.primary_name()
            ),
            UsageGuide {
                shampoo: "Wash 2x per week to prep scalp".to_string(),
                pomade: "Apply to affected areas 2x daily (morning & night)".to_string(),
                conditioner: "Use after every wash to prevent breakage".to_string(),
            },
        )
    } else {
        (
            Bundle::SelfLovePlus,
            format!(
                "Start with our complete system for 1 month. Since you caught this early ({}), you may see results quickly.",
                noticed_when.unwrap_or("recently")
            ),
            UsageGuide {
                shampoo: "Wash 1-2x per week".to_string(),
                pomade: "Apply 1-2x daily to problem areas".to_string(),
                conditioner: "Use after washing to seal moisture".to_string(),
            },
        )
    };

    // Overrides apply regardless of which bundle was chosen.
    if any_label_matches(
        scalp_issues,
        &[Contains("ringworm"), Contains("sores"), Contains("dandruff")],
    ) {
        usage.shampoo = URGENT_SHAMPOO.to_string();
    }
    if any_label_matches(life_events, &[Contains("postpartum")]) {
        reasoning.push_str(POSTPARTUM_NOTE);
    }
    if answer_matches(hair_behavior, &[Contains("breaks")])
        || answer_matches(primary_concern, &[Contains("breakage")])
    {
        usage.conditioner = URGENT_CONDITIONER.to_string();
    }

    SeverityRecommendation {
        severity_score,
        bundle,
        months: bundle.months(),
        reasoning,
        usage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::quiz::answers::{AnswerValue, QuestionnaireAnswer};
    use crate::workflows::quiz::assessment::diagnosis::classify;

    fn sheet(entries: &[(&str, AnswerValue)]) -> AnswerSheet {
        let responses: Vec<QuestionnaireAnswer> = entries
            .iter()
            .map(|(id, answer)| QuestionnaireAnswer {
                question_id: id.to_string(),
                answer: answer.clone(),
            })
            .collect();
        AnswerSheet::from_responses(&responses)
    }

    fn multi(values: &[&str]) -> AnswerValue {
        AnswerValue::Multi(values.iter().map(|v| v.to_string()).collect())
    }

    fn single(value: &str) -> AnswerValue {
        AnswerValue::Single(value.to_string())
    }

    fn empty_diagnosis() -> Diagnosis {
        classify(&AnswerSheet::default())
    }

    #[test]
    fn mild_recent_case_gets_starter_bundle() {
        let answers = sheet(&[
            (question::NOTICED_WHEN, single("Less than 3 months ago")),
            (question::AFFECTED_AREAS, multi(&["Edges (front hairline)"])),
        ]);
        let recommendation = recommend(&empty_diagnosis(), &answers);

        assert!(recommendation.severity_score < BUNDLE_THRESHOLD);
        assert_eq!(recommendation.bundle, Bundle::SelfLovePlus);
        assert_eq!(recommendation.months, 1);
        assert!(recommendation
            .reasoning
            .contains("Less than 3 months ago"));
        assert!(!recommendation.usage.shampoo.contains("CRITICAL"));
        assert!(!recommendation.usage.conditioner.contains("CRITICAL"));
    }

    #[test]
    fn bundle_selection_is_a_pure_threshold() {
        // Score 4: 1-2 years (+2) and crown (+2).
        let four = sheet(&[
            (question::NOTICED_WHEN, single("1-2 years ago")),
            (
                question::AFFECTED_AREAS,
                multi(&["Crown (top/center of head)"]),
            ),
        ]);
        // Score 5: more than 2 years (+3) and crown (+2).
        let five = sheet(&[
            (question::NOTICED_WHEN, single("More than 2 years ago")),
            (
                question::AFFECTED_AREAS,
                multi(&["Crown (top/center of head)"]),
            ),
        ]);
        // Score 9: adds wide spread and scalp signals.
        let nine = sheet(&[
            (question::NOTICED_WHEN, single("More than 2 years ago")),
            (
                question::AFFECTED_AREAS,
                multi(&[
                    "Even thinning all over",
                    "Crown (top/center of head)",
                    "Edges (front hairline)",
                ]),
            ),
            (
                question::SCALP_ISSUES,
                multi(&["Ringworm or fungal infection"]),
            ),
        ]);

        let at_four = recommend(&empty_diagnosis(), &four);
        let at_five = recommend(&empty_diagnosis(), &five);
        let at_nine = recommend(&empty_diagnosis(), &nine);

        assert_eq!(at_four.severity_score, 4);
        assert_eq!(at_five.severity_score, 5);
        assert_eq!(at_nine.severity_score, 9);
        assert_eq!(at_four.bundle, Bundle::SelfLovePlus);
        assert_eq!(at_five.bundle, Bundle::SelfLovePlusB2gof);
        assert_eq!(at_nine.bundle, at_five.bundle);
        assert_eq!(at_five.months, 3);
    }

    #[test]
    fn widening_area_count_never_lowers_severity() {
        let narrow = sheet(&[
            (question::NOTICED_WHEN, single("6-12 months ago")),
            (
                question::AFFECTED_AREAS,
                multi(&["Crown (top/center of head)"]),
            ),
        ]);
        let wide = sheet(&[
            (question::NOTICED_WHEN, single("6-12 months ago")),
            (
                question::AFFECTED_AREAS,
                multi(&[
                    "Crown (top/center of head)",
                    "Edges (front hairline)",
                    "Nape (back of neck)",
                ]),
            ),
        ]);

        let narrow_score = recommend(&empty_diagnosis(), &narrow).severity_score;
        let wide_score = recommend(&empty_diagnosis(), &wide).severity_score;
        assert!(wide_score >= narrow_score);
    }

    #[test]
    fn scalp_infection_forces_urgent_shampoo() {
        let answers = sheet(&[(
            question::SCALP_ISSUES,
            multi(&["Ringworm or fungal infection"]),
        )]);
        let recommendation = recommend(&empty_diagnosis(), &answers);
        assert!(recommendation.usage.shampoo.starts_with("CRITICAL"));
    }

    #[test]
    fn breakage_forces_urgent_conditioner() {
        let answers = sheet(&[(
            question::SHEDDING_VS_BREAKAGE,
            single("Hair breaks off at different lengths (short pieces, no bulb, rough ends)"),
        )]);
        let recommendation = recommend(&empty_diagnosis(), &answers);
        assert!(recommendation.usage.conditioner.starts_with("CRITICAL"));
    }

    #[test]
    fn postpartum_appends_reassurance_to_reasoning() {
        let answers = sheet(&[
            (
                question::LIFE_EVENTS,
                multi(&["Postpartum (after giving birth)"]),
            ),
            (question::NOTICED_WHEN, single("Less than 3 months ago")),
        ]);
        let recommendation = recommend(&empty_diagnosis(), &answers);
        assert!(recommendation
            .reasoning
            .contains("Postpartum hair loss typically reverses within 6-9 months"));
        // The note is additive: the base narrative is still present.
        assert!(recommendation.reasoning.starts_with("Start with"));
    }

    #[test]
    fn diagnosis_weight_counts_toward_severity() {
        let answers = sheet(&[
            (
                question::AFFECTED_AREAS,
                multi(&["Edges (front hairline)"]),
            ),
            (
                question::PROTECTIVE_STYLES,
                multi(&["Cornrows (scalp braids/straight backs)"]),
            ),
        ]);
        let diagnosis = classify(&answers);
        assert_eq!(diagnosis.primary, Some(Condition::TractionAlopecia));
        let with_diagnosis = recommend(&diagnosis, &answers).severity_score;
        let without = recommend(&empty_diagnosis(), &answers).severity_score;
        assert_eq!(with_diagnosis, without + 2);
    }
}
