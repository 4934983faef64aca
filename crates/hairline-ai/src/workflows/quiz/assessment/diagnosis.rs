use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::workflows::quiz::answers::{
    answer_matches, any_label_matches, question, AnswerSheet, LabelPattern,
};

use LabelPattern::{Contains, Prefix, Sequence};

/// The six condition hypotheses the classifier can accept. Declaration
/// order is evaluation order and breaks confidence ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    TractionAlopecia,
    TelogenEffluvium,
    AndrogenicAlopecia,
    CicatricialAlopecia,
    NutritionalDeficiency,
    AlopeciaAreata,
}

impl Condition {
    pub const ALL: [Condition; 6] = [
        Condition::TractionAlopecia,
        Condition::TelogenEffluvium,
        Condition::AndrogenicAlopecia,
        Condition::CicatricialAlopecia,
        Condition::NutritionalDeficiency,
        Condition::AlopeciaAreata,
    ];

    /// Display name shown on results pages.
    pub const fn name(self) -> &'static str {
        match self {
            Condition::TractionAlopecia => "Traction Alopecia",
            Condition::TelogenEffluvium => "Telogen Effluvium",
            Condition::AndrogenicAlopecia => "Androgenic Alopecia",
            Condition::CicatricialAlopecia => "Cicatricial (Scarring) Alopecia",
            Condition::NutritionalDeficiency => "Nutritional Deficiency-Related Hair Loss",
            Condition::AlopeciaAreata => "Alopecia Areata",
        }
    }

    /// Stable key used for confidence maps on the wire. Explicit per
    /// condition rather than derived from the display name, so two
    /// conditions can never collide on a shared first word.
    pub const fn key(self) -> &'static str {
        match self {
            Condition::TractionAlopecia => "traction",
            Condition::TelogenEffluvium => "telogen",
            Condition::AndrogenicAlopecia => "androgenic",
            Condition::CicatricialAlopecia => "cicatricial",
            Condition::NutritionalDeficiency => "nutritional",
            Condition::AlopeciaAreata => "areata",
        }
    }

    /// Absolute number of true indicators required for acceptance.
    const fn acceptance_threshold(self) -> usize {
        match self {
            Condition::TractionAlopecia => 2,
            Condition::TelogenEffluvium => 3,
            Condition::AndrogenicAlopecia => 3,
            Condition::CicatricialAlopecia => 2,
            Condition::NutritionalDeficiency => 2,
            Condition::AlopeciaAreata => 2,
        }
    }

    /// Evaluate this condition's fixed indicator list against the sheet.
    /// A missing answer makes the indicator false, never an error.
    fn indicators(self, answers: &AnswerSheet) -> Vec<bool> {
        let affected_areas = answers.multi(question::AFFECTED_AREAS);
        let protective_styles = answers.multi(question::PROTECTIVE_STYLES);
        let scalp_issues = answers.multi(question::SCALP_ISSUES);
        let life_events = answers.multi(question::LIFE_EVENTS);
        let diagnosed = answers.multi(question::DIAGNOSED_CONDITIONS);
        let hair_behavior = answers.single(question::SHEDDING_VS_BREAKAGE);
        let primary_concern = answers.single(question::PRIMARY_CONCERN);
        let noticed_when = answers.single(question::NOTICED_WHEN);

        match self {
            Condition::TractionAlopecia => vec![
                any_label_matches(affected_areas, &[Contains("edge"), Contains("temple")]),
                any_label_matches(
                    protective_styles,
                    &[
                        Contains("box braids"),
                        Contains("cornrows"),
                        Contains("tight ponytails"),
                        Sequence("frontal", "uses glue"),
                        Sequence("full lace", "uses glue"),
                        Contains("ghana weaving"),
                        Contains("shuku"),
                    ],
                ),
                answer_matches(
                    answers.single(question::LENGTH_DISTRIBUTION),
                    &[Sequence("edges", "short")],
                ),
                answer_matches(hair_behavior, &[Contains("breaks"), Contains("both")]),
            ],
            Condition::TelogenEffluvium => vec![
                any_label_matches(
                    life_events,
                    &[Contains("postpartum"), Contains("breastfeeding")],
                ),
                any_label_matches(
                    life_events,
                    &[
                        Contains("stress"),
                        Contains("job change"),
                        Contains("relocation"),
                        Contains("loss"),
                        Contains("surgery"),
                        Contains("illness"),
                    ],
                ),
                answer_matches(
                    hair_behavior,
                    &[Contains("falls out"), Contains("shedding"), Contains("both")],
                ),
                answer_matches(noticed_when, &[Contains("less than 3"), Prefix("3-6")]),
                answer_matches(primary_concern, &[Contains("excessive shedding")]),
            ],
            Condition::AndrogenicAlopecia => vec![
                answer_matches(
                    answers.single(question::FAMILY_HISTORY),
                    &[Contains("mother"), Contains("both")],
                ),
                answer_matches(
                    answers.single(question::AGE_RANGE),
                    &[Contains("46-55"), Contains("56+")],
                ),
                any_label_matches(
                    life_events,
                    &[Contains("menopause"), Contains("perimenopause")],
                ),
                any_label_matches(
                    affected_areas,
                    &[
                        Contains("crown"),
                        Contains("even thinning"),
                        Contains("overall"),
                    ],
                ),
                answer_matches(
                    noticed_when,
                    &[Contains("1-2 years"), Contains("more than 2")],
                ),
                answer_matches(primary_concern, &[Contains("overall thinning")]),
            ],
            Condition::CicatricialAlopecia => vec![
                any_label_matches(
                    scalp_issues,
                    &[
                        Contains("ringworm"),
                        Contains("infection"),
                        Contains("sores"),
                        Contains("painful"),
                    ],
                ),
                answer_matches(primary_concern, &[Contains("bald patches")]),
                any_label_matches(affected_areas, &[Contains("patch")]),
            ],
            Condition::NutritionalDeficiency => vec![
                any_label_matches(
                    diagnosed,
                    &[Contains("anemia"), Contains("iron"), Contains("vitamin")],
                ),
                answer_matches(hair_behavior, &[Contains("breaks")]),
                answer_matches(primary_concern, &[Contains("breakage")]),
                any_label_matches(life_events, &[Contains("breastfeeding")]),
            ],
            Condition::AlopeciaAreata => vec![
                any_label_matches(diagnosed, &[Contains("autoimmune")]),
                answer_matches(primary_concern, &[Contains("bald patches")]),
                any_label_matches(affected_areas, &[Contains("patch")]),
                any_label_matches(life_events, &[Contains("stress")]),
            ],
        }
    }
}

/// Fallback label when no hypothesis clears its threshold.
pub const GENERAL_THINNING: &str = "General Hair Thinning";

/// Classifier output: one primary finding, ranked secondaries, and the
/// confidence recorded for each accepted condition. Confidence is only
/// meaningful for conditions present in `primary`/`secondary`.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnosis {
    pub primary: Option<Condition>,
    pub secondary: Vec<Condition>,
    pub confidence: BTreeMap<Condition, f64>,
}

impl Diagnosis {
    pub fn primary_name(&self) -> &'static str {
        self.primary.map_or(GENERAL_THINNING, Condition::name)
    }

    pub fn confidence_for(&self, condition: Condition) -> f64 {
        self.confidence.get(&condition).copied().unwrap_or(0.0)
    }

    /// Wire/presentation form with display names and explicit keys.
    pub fn view(&self) -> DiagnosisView {
        DiagnosisView {
            primary: self.primary_name().to_string(),
            secondary: self.secondary.iter().map(|c| c.name()).collect(),
            confidence: self
                .confidence
                .iter()
                .map(|(condition, value)| (condition.key(), *value))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisView {
    pub primary: String,
    pub secondary: Vec<&'static str>,
    pub confidence: BTreeMap<&'static str, f64>,
}

/// Score every hypothesis and rank the accepted ones by confidence.
pub fn classify(answers: &AnswerSheet) -> Diagnosis {
    let mut accepted: Vec<(Condition, f64)> = Vec::new();
    let mut confidence = BTreeMap::new();

    for condition in Condition::ALL {
        let indicators = condition.indicators(answers);
        let hits = indicators.iter().filter(|fired| **fired).count();
        if hits >= condition.acceptance_threshold() {
            let score = hits as f64 / indicators.len() as f64;
            confidence.insert(condition, score);
            accepted.push((condition, score));
        }
    }

    // Stable sort: equal confidence keeps declaration order.
    accepted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut ranked = accepted.into_iter().map(|(condition, _)| condition);
    let primary = ranked.next();
    let secondary = ranked.collect();

    Diagnosis {
        primary,
        secondary,
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::quiz::answers::{AnswerValue, QuestionnaireAnswer};

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

    #[test]
    fn traction_accepted_from_area_and_style_indicators() {
        let answers = sheet(&[
            (
                question::AFFECTED_AREAS,
                multi(&["Edges (front hairline)", "Temples (sides of hairline)"]),
            ),
            (
                question::PROTECTIVE_STYLES,
                multi(&["Box braids (individual plaits)"]),
            ),
            (
                question::LENGTH_DISTRIBUTION,
                single("Crown is longest, edges are shortest"),
            ),
            (
                question::SHEDDING_VS_BREAKAGE,
                single("Hair breaks off at different lengths (short pieces, no bulb, rough ends)"),
            ),
        ]);

        let diagnosis = classify(&answers);
        assert_eq!(diagnosis.primary, Some(Condition::TractionAlopecia));
        assert_eq!(diagnosis.confidence_for(Condition::TractionAlopecia), 1.0);
    }

    #[test]
    fn telogen_accepted_from_postpartum_cluster() {
        let answers = sheet(&[
            (
                question::LIFE_EVENTS,
                multi(&["Postpartum (after giving birth)"]),
            ),
            (question::NOTICED_WHEN, single("Less than 3 months ago")),
            (
                question::SHEDDING_VS_BREAKAGE,
                single("Hair falls out from the root (long strands with white bulb at the end)"),
            ),
            (
                question::PRIMARY_CONCERN,
                single("Excessive shedding (hair falls out in clumps)"),
            ),
        ]);

        let diagnosis = classify(&answers);
        assert_eq!(diagnosis.primary, Some(Condition::TelogenEffluvium));
        // 4 of 5 indicators fire: postpartum, shedding behavior, recency,
        // and the shedding concern.
        assert_eq!(diagnosis.confidence_for(Condition::TelogenEffluvium), 0.8);
    }

    #[test]
    fn no_acceptance_falls_back_to_general_thinning() {
        let answers = sheet(&[(question::AGE_RANGE, single("18-25 years"))]);
        let diagnosis = classify(&answers);
        assert_eq!(diagnosis.primary, None);
        assert_eq!(diagnosis.primary_name(), GENERAL_THINNING);
        assert!(diagnosis.secondary.is_empty());
        assert!(diagnosis.confidence.is_empty());

        let empty = classify(&AnswerSheet::default());
        assert_eq!(empty.primary_name(), GENERAL_THINNING);
    }

    #[test]
    fn secondary_conditions_rank_below_primary() {
        // Bald patches + patchy areas + stress + autoimmune: cicatricial
        // and areata both accept alongside traction signals.
        let answers = sheet(&[
            (
                question::AFFECTED_AREAS,
                multi(&["Patches throughout scalp", "Edges (front hairline)"]),
            ),
            (
                question::PRIMARY_CONCERN,
                single("Bald patches or areas with no hair growth"),
            ),
            (
                question::SCALP_ISSUES,
                multi(&["Ringworm or fungal infection", "Sores or scabs"]),
            ),
            (
                question::DIAGNOSED_CONDITIONS,
                multi(&["Autoimmune condition"]),
            ),
            (
                question::LIFE_EVENTS,
                multi(&["Significant stress or trauma"]),
            ),
        ]);

        let diagnosis = classify(&answers);
        let primary = diagnosis.primary.expect("a condition is accepted");
        let primary_confidence = diagnosis.confidence_for(primary);
        for condition in &diagnosis.secondary {
            assert!(diagnosis.confidence_for(*condition) <= primary_confidence);
        }
        // Full-confidence hypotheses: cicatricial (3/3) and areata (4/4).
        assert_eq!(diagnosis.primary, Some(Condition::CicatricialAlopecia));
        assert!(diagnosis.secondary.contains(&Condition::AlopeciaAreata));
    }

    #[test]
    fn accepted_confidence_is_at_least_threshold_fraction() {
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
        let confidence = diagnosis.confidence_for(Condition::TractionAlopecia);
        assert!((0.5..=1.0).contains(&confidence));
    }

    #[test]
    fn view_uses_explicit_condition_keys() {
        let answers = sheet(&[
            (
                question::DIAGNOSED_CONDITIONS,
                multi(&["Autoimmune condition"]),
            ),
            (
                question::PRIMARY_CONCERN,
                single("Bald patches or areas with no hair growth"),
            ),
        ]);
        let diagnosis = classify(&answers);
        assert_eq!(diagnosis.primary, Some(Condition::AlopeciaAreata));
        let view = diagnosis.view();
        assert_eq!(view.primary, "Alopecia Areata");
        assert!(view.confidence.contains_key("areata"));
    }
}
