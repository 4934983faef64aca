use crate::workflows::quiz::answers::{question, AnswerSheet};

use super::domain::SubmissionRecord;

/// Flatten submissions into the CSV layout the admin screen downloads:
/// identifiers, contact fields, the goal/concern highlights, and the
/// recommendation text.
pub fn export_submissions_csv(records: &[SubmissionRecord]) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "id",
        "createdAt",
        "name",
        "email",
        "phone",
        "state",
        "primaryGoal",
        "primaryConcern",
        "recommendation",
    ])?;

    for record in records {
        let sheet = AnswerSheet::from_responses(&record.answers);
        let recommendation_text = record
            .recommendation
            .get("text")
            .and_then(|value| value.as_str())
            .unwrap_or_default()
            .replace('\n', " ");

        writer.write_record([
            record.id.0.to_string().as_str(),
            record.created_at.to_rfc3339().as_str(),
            record.contact.name.as_deref().unwrap_or_default(),
            record.contact.email.as_deref().unwrap_or_default(),
            record.contact.phone.as_deref().unwrap_or_default(),
            record.contact.state.as_deref().unwrap_or_default(),
            sheet.single(question::PRIMARY_GOAL).unwrap_or_default(),
            sheet.single(question::PRIMARY_CONCERN).unwrap_or_default(),
            recommendation_text.as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
