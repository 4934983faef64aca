use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::quiz::answers::QuestionnaireAnswer;

/// Identifier for persisted quiz submissions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SubmissionId(pub u64);

/// Optional lead-capture fields collected alongside the answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadContact {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

/// Payload accepted by the create endpoint: the answer list plus an
/// optional client-computed recommendation blob and contact fields.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubmissionRequest {
    pub answers: Vec<QuestionnaireAnswer>,
    #[serde(default)]
    pub recommendation: Option<serde_json::Value>,
    #[serde(flatten)]
    pub contact: LeadContact,
}

/// Stored submission row. Serialized form matches the admin contract
/// (camelCase timestamps, flattened contact fields).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub id: SubmissionId,
    pub answers: Vec<QuestionnaireAnswer>,
    pub recommendation: serde_json::Value,
    #[serde(flatten)]
    pub contact: LeadContact,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing page handed back to the admin surface.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionView {
    pub items: Vec<SubmissionRecord>,
    pub limit: usize,
    pub offset: usize,
}
