//! Quiz funnel workflows.
//!
//! Two classification pipelines operate over the same questionnaire input:
//! the rule-based diagnostic assessment (condition hypotheses, severity,
//! treatment plan) and the styling-risk recommendation engine (tension
//! profiles, pattern detection, product shortlist). Both are pure functions
//! of an [`answers::AnswerSheet`] snapshot; the submissions module adds the
//! persistence surface around them.

pub mod answers;
pub mod assessment;
pub mod strategy;
pub mod styling;
pub mod submissions;
