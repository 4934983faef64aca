use crate::infra::InMemorySubmissionRepository;
use clap::Args;
use hairline_ai::error::AppError;
use hairline_ai::workflows::quiz::answers::{
    question, AnswerSheet, AnswerValue, QuestionnaireAnswer,
};
use hairline_ai::workflows::quiz::assessment::{assess, Assessment};
use hairline_ai::workflows::quiz::strategy::selections_from_answers;
use hairline_ai::workflows::quiz::styling::{generate_recommendations, StylingRecommendation};
use hairline_ai::workflows::quiz::submissions::{
    CreateSubmissionRequest, LeadContact, PageSettings, QuizSubmissionService, SubmissionOutcome,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file holding the questionnaire answers (array of
    /// {questionId, answer} objects)
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Also run the styling-risk pipeline over the same answers
    #[arg(long)]
    pub(crate) with_styling: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the submission intake portion of the demo.
    #[arg(long)]
    pub(crate) skip_intake: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        answers,
        with_styling,
    } = args;

    let raw = std::fs::read_to_string(answers)?;
    let responses: Vec<QuestionnaireAnswer> = serde_json::from_str(&raw)
        .map_err(|err| AppError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err)))?;
    let sheet = AnswerSheet::from_responses(&responses);

    let assessment = assess(&sheet);
    render_assessment(&assessment);

    if with_styling {
        let recommendation = generate_recommendations(&selections_from_answers(&sheet));
        render_styling(&recommendation);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Quiz funnel demo");

    let responses = demo_responses();
    let sheet = AnswerSheet::from_responses(&responses);

    let assessment = assess(&sheet);
    render_assessment(&assessment);

    let recommendation = generate_recommendations(&selections_from_answers(&sheet));
    render_styling(&recommendation);

    if args.skip_intake {
        return Ok(());
    }

    println!("\nSubmission intake demo");
    let repository = Arc::new(InMemorySubmissionRepository::default());
    let service = QuizSubmissionService::new(repository, PageSettings::default());

    let outcome = service.submit(CreateSubmissionRequest {
        answers: responses,
        recommendation: None,
        contact: LeadContact {
            name: Some("Demo Lead".to_string()),
            email: Some("demo@example.com".to_string()),
            phone: None,
            state: Some("Lagos".to_string()),
        },
    });

    match outcome {
        SubmissionOutcome::Persisted(record) => {
            println!("- Stored submission {} for {}", record.id.0, record.contact.name.as_deref().unwrap_or("anonymous"));
            let (items, limit, offset) = service.list(None, None)?;
            println!("- Listing returns {} item(s) (limit {limit}, offset {offset})", items.len());
        }
        SubmissionOutcome::AcceptedWithoutPersistence { .. } => {
            println!("- Accepted without persistence (store unavailable)");
        }
    }

    Ok(())
}

fn demo_responses() -> Vec<QuestionnaireAnswer> {
    vec![
        QuestionnaireAnswer {
            question_id: question::AFFECTED_AREAS.to_string(),
            answer: AnswerValue::Multi(vec![
                "Edges (front hairline)".to_string(),
                "Temples (sides of hairline)".to_string(),
            ]),
        },
        QuestionnaireAnswer {
            question_id: question::PROTECTIVE_STYLES.to_string(),
            answer: AnswerValue::Multi(vec![
                "Box braids (individual plaits)".to_string(),
                "Tight ponytails or high buns (\"puff\" or slicked edges)".to_string(),
            ]),
        },
        QuestionnaireAnswer {
            question_id: question::LENGTH_DISTRIBUTION.to_string(),
            answer: AnswerValue::Single("Crown is longest, edges are shortest".to_string()),
        },
        QuestionnaireAnswer {
            question_id: question::SHEDDING_VS_BREAKAGE.to_string(),
            answer: AnswerValue::Single(
                "Hair breaks off at different lengths (short pieces, no bulb, rough ends)"
                    .to_string(),
            ),
        },
        QuestionnaireAnswer {
            question_id: question::NOTICED_WHEN.to_string(),
            answer: AnswerValue::Single("3-6 months ago".to_string()),
        },
        QuestionnaireAnswer {
            question_id: question::PRIMARY_GOAL.to_string(),
            answer: AnswerValue::Single("Regrow my edges and hairline".to_string()),
        },
    ]
}

fn render_assessment(assessment: &Assessment) {
    println!("\nDiagnostic assessment");
    println!("- Primary finding: {}", assessment.diagnosis.primary_name());
    for condition in &assessment.diagnosis.secondary {
        println!(
            "- Secondary: {} ({:.0}% confidence)",
            condition.name(),
            assessment.diagnosis.confidence_for(*condition) * 100.0
        );
    }
    println!(
        "- Severity {} -> {} ({} month(s))",
        assessment.severity.severity_score,
        assessment.severity.bundle.label(),
        assessment.severity.months
    );
    println!("- Reasoning: {}", assessment.severity.reasoning);

    println!("\nTreatment plan");
    for step in &assessment.plan {
        println!("- [{}] {}: {}", step.priority.label(), step.title, step.action);
    }
}

fn render_styling(recommendation: &StylingRecommendation) {
    println!("\nStyling risk profile");
    println!(
        "- Risk {} ({}) | max {} | avg {}",
        recommendation.risk_score.total_score,
        recommendation.risk_score.risk_level.label(),
        recommendation.risk_score.max_individual_risk,
        recommendation.risk_score.average_risk
    );
    for pattern in &recommendation.patterns {
        println!("- Pattern {}: {}", pattern.kind.label(), pattern.message);
    }
    println!("- Area match insight: {}", recommendation.affected_area_match.insight);
    for product in &recommendation.products.essential {
        println!("- Essential: {} ({})", product.name, product.reason);
    }
    println!("- Summary: {}", recommendation.summary);
}
