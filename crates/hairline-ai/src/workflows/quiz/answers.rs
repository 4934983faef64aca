use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Question identifiers the rule engines consume by name.
pub mod question {
    pub const AGE_RANGE: &str = "age-range";
    pub const PRIMARY_CONCERN: &str = "primary-concern";
    pub const NOTICED_WHEN: &str = "noticed-when";
    pub const AFFECTED_AREAS: &str = "affected-areas";
    pub const SHEDDING_VS_BREAKAGE: &str = "shedding-vs-breakage";
    pub const LENGTH_DISTRIBUTION: &str = "length-distribution";
    pub const PROTECTIVE_STYLES: &str = "protective-styles-often";
    pub const COVERED_HAIR_EFFECTS: &str = "covered-hair-effects";
    pub const SLEEP_BONNET: &str = "sleep-bonnet";
    pub const SCALP_ISSUES: &str = "scalp-issues-detailed";
    pub const WASH_FREQUENCY: &str = "wash-frequency";
    pub const LIFE_EVENTS: &str = "life-events-2years";
    pub const FAMILY_HISTORY: &str = "family-history-detailed";
    pub const DIAGNOSED_CONDITIONS: &str = "diagnosed-conditions";
    pub const PRIMARY_GOAL: &str = "primary-goal";
}

/// Answer payload for one question. The questionnaire UI sends a bare
/// string for single-choice questions, an array for multi-choice, and
/// null/absent for skipped questions; the untagged representation keeps
/// that wire shape intact.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Multi(Vec<String>),
    #[default]
    Unanswered,
}

/// One captured answer, as submitted by the questionnaire UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireAnswer {
    #[serde(rename = "questionId")]
    pub question_id: String,
    #[serde(default)]
    pub answer: AnswerValue,
}

/// Immutable snapshot of collected answers, keyed by question id.
///
/// Accessors never fail: a missing, null, or differently-shaped answer
/// reads as unanswered so every downstream indicator check stays total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerSheet {
    answers: BTreeMap<String, AnswerValue>,
}

const NO_SELECTIONS: &[String] = &[];

impl AnswerSheet {
    pub fn from_responses(responses: &[QuestionnaireAnswer]) -> Self {
        let mut answers = BTreeMap::new();
        for response in responses {
            answers.insert(response.question_id.clone(), response.answer.clone());
        }
        Self { answers }
    }

    /// Single-choice answer text, if the question was answered that way.
    pub fn single(&self, question_id: &str) -> Option<&str> {
        match self.answers.get(question_id) {
            Some(AnswerValue::Single(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Multi-choice selections; empty when unanswered or single-valued.
    pub fn multi(&self, question_id: &str) -> &[String] {
        match self.answers.get(question_id) {
            Some(AnswerValue::Multi(values)) => values.as_slice(),
            _ => NO_SELECTIONS,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// Minimal pattern language for matching free-text option labels.
/// Matching is always over the lower-cased label; tables of these replace
/// the scattered regexes the option wording was originally coupled to.
#[derive(Debug, Clone, Copy)]
pub(crate) enum LabelPattern {
    /// Label contains the fragment.
    Contains(&'static str),
    /// Label starts with the fragment.
    Prefix(&'static str),
    /// Both fragments present, the second somewhere after the first.
    Sequence(&'static str, &'static str),
}

impl LabelPattern {
    pub(crate) fn matches(self, label: &str) -> bool {
        let label = label.to_ascii_lowercase();
        match self {
            LabelPattern::Contains(fragment) => label.contains(fragment),
            LabelPattern::Prefix(fragment) => label.starts_with(fragment),
            LabelPattern::Sequence(first, then) => label
                .find(first)
                .is_some_and(|at| label[at + first.len()..].contains(then)),
        }
    }
}

pub(crate) fn label_matches(label: &str, patterns: &[LabelPattern]) -> bool {
    patterns.iter().any(|pattern| pattern.matches(label))
}

pub(crate) fn any_label_matches(labels: &[String], patterns: &[LabelPattern]) -> bool {
    labels.iter().any(|label| label_matches(label, patterns))
}

/// Treats an optional single-choice answer as an empty label when missing.
pub(crate) fn answer_matches(answer: Option<&str>, patterns: &[LabelPattern]) -> bool {
    answer.is_some_and(|value| label_matches(value, patterns))
}
