use serde::{Deserialize, Serialize};

use super::diagnosis::{Condition, Diagnosis};
use crate::workflows::quiz::answers::{
    answer_matches, any_label_matches, question, AnswerSheet, LabelPattern,
};

use LabelPattern::{Contains, Prefix};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlanPriority {
    Urgent,
    High,
    Medium,
    Info,
}

impl PlanPriority {
    pub const fn label(self) -> &'static str {
        match self {
            PlanPriority::Urgent => "URGENT",
            PlanPriority::High => "HIGH",
            PlanPriority::Medium => "MEDIUM",
            PlanPriority::Info => "INFO",
        }
    }
}

/// One step of the generated care pathway. The emitted order is itself
/// the care-pathway order; callers must not re-sort by priority.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreatmentPlanStep {
    pub priority: PlanPriority,
    pub title: &'static str,
    pub action: String,
    pub product: &'static str,
}

/// Walk the fixed priority sequence and emit every step whose guard
/// holds. Blocks are independent; several can fire for one answer set,
/// and the closing timeline step always fires.
pub fn build_plan(diagnosis: &Diagnosis, answers: &AnswerSheet) -> Vec<TreatmentPlanStep> {
    let scalp_issues = answers.multi(question::SCALP_ISSUES);
    let protective_styles = answers.multi(question::PROTECTIVE_STYLES);
    let life_events = answers.multi(question::LIFE_EVENTS);
    let bonnet_use = answers.single(question::SLEEP_BONNET);
    let covered_hair = answers.single(question::COVERED_HAIR_EFFECTS);
    let wash_frequency = answers.single(question::WASH_FREQUENCY);
    let noticed_when = answers.single(question::NOTICED_WHEN);

    let mut plan = Vec::new();

    // Priority 1: scalp issues come before anything else.
    if !scalp_issues.is_empty() {
        if any_label_matches(
            scalp_issues,
            &[Contains("ringworm"), Contains("sores"), Contains("infection")],
        ) {
            plan.push(TreatmentPlanStep {
                priority: PlanPriority::Urgent,
                title: "Scalp Healing Protocol",
                action: "See a dermatologist for infection treatment. After clearance, begin Fulani Hair Gro to support follicle recovery.".to_string(),
                product: "Medical treatment first, then Fulani Hair Gro",
            });
        }
        if any_label_matches(scalp_issues, &[Contains("dandruff"), Contains("itch")]) {
            plan.push(TreatmentPlanStep {
                priority: PlanPriority::High,
                title: "Scalp Soothing Routine",
                action: "Apply Fulani Hair Gro to scalp 3x weekly. Use gentle sulfate-free shampoo to calm irritation and reduce flaking.".to_string(),
                product: "Fulani Hair Gro + gentle sulfate-free shampoo",
            });
        }
    }

    // Priority 2: the primary diagnosis drives its own protocol.
    if diagnosis.primary == Some(Condition::TractionAlopecia) {
        let action = if any_label_matches(
            protective_styles,
            &[Contains("tight ponytails"), Contains("frontal wigs")],
        ) {
            "Immediately stop tight ponytails and frontal wigs. Give edges a 3-month break."
        } else {
            "Loosen braids/cornrows and request low-tension styles from your stylist."
        };
        plan.push(TreatmentPlanStep {
            priority: PlanPriority::High,
            title: "Stop Further Damage",
            action: action.to_string(),
            product: "Edge-friendly styling products (non-alcohol)",
        });
        plan.push(TreatmentPlanStep {
            priority: PlanPriority::High,
            title: "Follicle Reactivation",
            action: "Massage Fulani Hair Gro into edges and affected areas 2x daily to boost circulation and block DHT locally.".to_string(),
            product: "Fulani Hair Gro (Edge Recovery Focus)",
        });
    }

    if diagnosis.primary == Some(Condition::TelogenEffluvium) {
        let action = if any_label_matches(life_events, &[Contains("postpartum")]) {
            "Use a postnatal multivitamin with iron. Apply Fulani Hair Gro to support recovery from postpartum shedding."
        } else {
            "Reduce stress (sleep, breathwork, light exercise). Use Fulani Hair Gro to help shift follicles back to growth."
        };
        plan.push(TreatmentPlanStep {
            priority: PlanPriority::High,
            title: "Nutrient Replenishment",
            action: action.to_string(),
            product: "Fulani Hair Gro + multivitamin with iron",
        });
    }

    if diagnosis.primary == Some(Condition::AndrogenicAlopecia) {
        plan.push(TreatmentPlanStep {
            priority: PlanPriority::High,
            title: "DHT Blocking Protocol",
            action: "Apply Fulani Hair Gro 2x daily to the scalp for natural DHT modulation and improved density.".to_string(),
            product: "Fulani Hair Gro (DHT Blocking Focus)",
        });
        if any_label_matches(
            life_events,
            &[Contains("menopause"), Contains("perimenopause")],
        ) {
            plan.push(TreatmentPlanStep {
                priority: PlanPriority::Medium,
                title: "Hormonal Support",
                action: "Discuss hormonal options with your doctor. Continue topical routine consistently.".to_string(),
                product: "Medical consultation + Fulani Hair Gro",
            });
        }
    }

    // Priority 3: night-time and covering habits.
    if answer_matches(bonnet_use, &[Contains("wig-on"), Contains("no-cotton")]) {
        let action = if answer_matches(bonnet_use, &[Contains("wig-on")]) {
            "Never sleep with a wig on. Switch to silk/satin bonnet or pillowcase immediately."
        } else {
            "Replace cotton pillowcases with silk/satin to minimize friction and breakage."
        };
        plan.push(TreatmentPlanStep {
            priority: PlanPriority::Medium,
            title: "Night-Time Protection",
            action: action.to_string(),
            product: "Silk bonnet + satin pillowcase",
        });
    }
    if covered_hair.is_some_and(|value| !value.is_empty() && value != "no-issues") {
        plan.push(TreatmentPlanStep {
            priority: PlanPriority::Medium,
            title: "Scalp Breathing Time",
            action: "Give your scalp daily breaks. Remove wigs/scarves 2-3 hours to reduce irritation and improve airflow.".to_string(),
            product: "Low-manipulation natural styles",
        });
    }

    // Priority 4: wash cadence.
    if answer_matches(
        wash_frequency,
        &[Contains("less-than-monthly"), Contains("only-takedown")],
    ) {
        plan.push(TreatmentPlanStep {
            priority: PlanPriority::Medium,
            title: "Scalp Cleansing Routine",
            action: "Wash at least every 2 weeks. Clean scalp prevents clogging and supports growth. Use sulfate-free shampoo.".to_string(),
            product: "Gentle sulfate-free shampoo",
        });
    }

    // Priority 5: the timeline note always closes the plan.
    let timeline = if answer_matches(noticed_when, &[Contains("less than 3"), Prefix("3-6")]) {
        "2-3 months of consistent use"
    } else if answer_matches(noticed_when, &[Contains("6-12")]) {
        "3-4 months of consistent use"
    } else {
        "4-6 months of consistent use (longer-term issues take longer to reverse)"
    };
    plan.push(TreatmentPlanStep {
        priority: PlanPriority::Info,
        title: "Expected Results Timeline",
        action: format!(
            "Based on how long you've had this issue ({}), expect visible results in {}.",
            noticed_when.unwrap_or("recently"),
            timeline
        ),
        product: "Consistency is key",
    });

    plan
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

    #[test]
    fn infection_always_leads_the_plan() {
        let answers = sheet(&[
            (
                question::SCALP_ISSUES,
                multi(&["Ringworm or fungal infection"]),
            ),
            (question::NOTICED_WHEN, single("More than 2 years ago")),
            (
                question::AFFECTED_AREAS,
                multi(&["Crown (top/center of head)"]),
            ),
        ]);
        let plan = build_plan(&classify(&answers), &answers);

        assert_eq!(plan[0].priority, PlanPriority::Urgent);
        assert_eq!(plan[0].title, "Scalp Healing Protocol");
        assert!(plan[0].action.contains("dermatologist"));
    }

    #[test]
    fn timeline_note_always_closes_the_plan() {
        let empty = AnswerSheet::default();
        let plan = build_plan(&classify(&empty), &empty);
        assert_eq!(plan.len(), 1);
        let last = plan.last().expect("plan never empty");
        assert_eq!(last.priority, PlanPriority::Info);
        assert!(last.action.contains("recently"));
        assert!(last.action.contains("4-6 months"));
    }

    #[test]
    fn traction_protocol_emits_two_high_steps() {
        let answers = sheet(&[
            (
                question::AFFECTED_AREAS,
                multi(&["Edges (front hairline)"]),
            ),
            (
                question::PROTECTIVE_STYLES,
                multi(&["Tight ponytails or high buns (\"puff\" or slicked edges)"]),
            ),
            (question::NOTICED_WHEN, single("3-6 months ago")),
        ]);
        let diagnosis = classify(&answers);
        assert_eq!(diagnosis.primary, Some(Condition::TractionAlopecia));

        let plan = build_plan(&diagnosis, &answers);
        assert_eq!(plan[0].title, "Stop Further Damage");
        assert!(plan[0].action.contains("Immediately stop tight ponytails"));
        assert_eq!(plan[1].title, "Follicle Reactivation");
        assert!(plan
            .last()
            .expect("timeline present")
            .action
            .contains("2-3 months"));
    }

    #[test]
    fn telogen_step_branches_on_postpartum() {
        let postpartum = sheet(&[
            (
                question::LIFE_EVENTS,
                multi(&["Postpartum (after giving birth)"]),
            ),
            (question::NOTICED_WHEN, single("Less than 3 months ago")),
            (
                question::SHEDDING_VS_BREAKAGE,
                single("Hair falls out from the root (long strands with white bulb at the end)"),
            ),
        ]);
        let diagnosis = classify(&postpartum);
        assert_eq!(diagnosis.primary, Some(Condition::TelogenEffluvium));

        let plan = build_plan(&diagnosis, &postpartum);
        let step = plan
            .iter()
            .find(|s| s.title == "Nutrient Replenishment")
            .expect("telogen step present");
        assert!(step.action.contains("postnatal multivitamin"));
    }

    #[test]
    fn habit_steps_fire_on_identifier_values() {
        let answers = sheet(&[
            (question::SLEEP_BONNET, single("wig-on")),
            (question::COVERED_HAIR_EFFECTS, single("scalp-sweats")),
            (question::WASH_FREQUENCY, single("less-than-monthly")),
        ]);
        let plan = build_plan(&classify(&answers), &answers);
        let titles: Vec<_> = plan.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            [
                "Night-Time Protection",
                "Scalp Breathing Time",
                "Scalp Cleansing Routine",
                "Expected Results Timeline",
            ]
        );
        assert!(plan[0].action.contains("Never sleep with a wig on"));
    }

    #[test]
    fn no_issues_suppresses_breathing_step() {
        let answers = sheet(&[(question::COVERED_HAIR_EFFECTS, single("no-issues"))]);
        let plan = build_plan(&classify(&answers), &answers);
        assert!(plan.iter().all(|s| s.title != "Scalp Breathing Time"));
    }

    #[test]
    fn rebuilding_from_identical_answers_is_deterministic() {
        let answers = sheet(&[
            (
                question::SCALP_ISSUES,
                multi(&["Dandruff (white flakes)", "Itchy scalp"]),
            ),
            (question::NOTICED_WHEN, single("6-12 months ago")),
        ]);
        let diagnosis = classify(&answers);
        let first = build_plan(&diagnosis, &answers);
        let second = build_plan(&diagnosis, &answers);
        assert_eq!(first, second);
    }
}
