use serde::{Deserialize, Serialize};

use super::profiles::{Concern, DamageType, TensionType};
use super::risk::{
    calculate_risk_score, detect_patterns, identify_primary_concerns, ConcernSummary,
    PatternKind, PatternSeverity, RiskLevel, RiskScore, StylingPattern,
};

/// Input to the styling-risk pipeline: normalized style and area ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylingSelections {
    #[serde(default)]
    pub protective_styles: Vec<String>,
    #[serde(default)]
    pub scalp_areas: Vec<String>,
}

/// Cross-check of predicted vs self-reported affected areas.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AffectedAreaMatch {
    pub matches: Vec<String>,
    pub match_rate: f64,
    pub unexpected: Vec<String>,
    pub insight: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSuggestion {
    pub category: &'static str,
    pub name: &'static str,
    pub reason: &'static str,
    pub priority: ProductPriority,
}

/// Product shortlist partitioned by how strongly the rules argue for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductShortlist {
    pub essential: Vec<ProductSuggestion>,
    pub recommended: Vec<ProductSuggestion>,
    pub optional: Vec<ProductSuggestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationTopic {
    pub title: &'static str,
    pub content: String,
    pub urgency: &'static str,
    pub read_time: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionItem {
    pub action: &'static str,
    pub why: &'static str,
    pub duration: &'static str,
}

/// Three-horizon action plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlan {
    pub immediate: Vec<ActionItem>,
    pub short_term: Vec<ActionItem>,
    pub long_term: Vec<ActionItem>,
}

/// Full output of the styling-risk pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StylingRecommendation {
    pub risk_score: RiskScore,
    pub concerns: ConcernSummary,
    pub patterns: Vec<StylingPattern>,
    pub affected_area_match: AffectedAreaMatch,
    pub products: ProductShortlist,
    pub education: Vec<EducationTopic>,
    pub action_plan: ActionPlan,
    pub summary: String,
}

const MATCH_RATE_REVERSIBLE: f64 = 0.7;

/// Run the styling-risk pipeline over normalized selections. The
/// diagnosis classifier plays no part here; everything derives from the
/// style profiles and the self-reported areas.
pub fn generate_recommendations(selections: &StylingSelections) -> StylingRecommendation {
    let risk_score = calculate_risk_score(&selections.protective_styles);
    let concerns = identify_primary_concerns(&selections.protective_styles);
    let patterns = detect_patterns(&selections.protective_styles);

    let affected_area_match = match_affected_areas(&concerns.affected_areas, &selections.scalp_areas);
    let products = recommend_products(&risk_score, &concerns);
    let education = generate_education(&patterns, &concerns);
    let action_plan = create_action_plan(&risk_score);
    let summary = generate_summary(&risk_score, &affected_area_match);

    StylingRecommendation {
        risk_score,
        concerns,
        patterns,
        affected_area_match,
        products,
        education,
        action_plan,
        summary,
    }
}

fn match_affected_areas(predicted: &[String], reported: &[String]) -> AffectedAreaMatch {
    let matches: Vec<String> = predicted
        .iter()
        .filter(|area| reported.contains(area))
        .cloned()
        .collect();
    let unexpected: Vec<String> = reported
        .iter()
        .filter(|area| !predicted.contains(area))
        .cloned()
        .collect();
    let match_rate = if reported.is_empty() {
        0.0
    } else {
        matches.len() as f64 / reported.len() as f64
    };
    let insight = if !matches.is_empty() && unexpected.is_empty() {
        "Your hair loss pattern matches your styling habits."
    } else if !unexpected.is_empty() {
        "Some affected areas are not explained by styling alone."
    } else {
        "Analysis complete"
    };

    AffectedAreaMatch {
        matches,
        match_rate,
        unexpected,
        insight,
    }
}

fn recommend_products(risk_score: &RiskScore, concerns: &ConcernSummary) -> ProductShortlist {
    let mut products = ProductShortlist::default();

    let area = |name: &str| concerns.affected_areas.iter().any(|a| a == name);
    if area("edges") || area("temples") {
        products.essential.push(ProductSuggestion {
            category: "edge_repair",
            name: "Fulani Edge Growth Serum",
            reason: "Repairs damage from tight styling and restores hairline",
            priority: ProductPriority::High,
        });
    }
    if matches!(risk_score.risk_level, RiskLevel::Critical | RiskLevel::High) {
        products.essential.push(ProductSuggestion {
            category: "scalp_treatment",
            name: "Fulani Scalp Recovery Oil",
            reason: "Reduces inflammation from tension and promotes blood flow",
            priority: ProductPriority::High,
        });
    }
    if concerns.damage_types.contains(&DamageType::AdhesiveDamage) {
        products.essential.push(ProductSuggestion {
            category: "chemical_repair",
            name: "Fulani Detox & Repair Treatment",
            reason: "Removes adhesive residue and repairs chemical damage",
            priority: ProductPriority::High,
        });
    }
    if concerns.tension_types.contains(&TensionType::Weight) {
        products.recommended.push(ProductSuggestion {
            category: "strengthening",
            name: "Fulani Root Strengthening Serum",
            reason: "Strengthens roots to handle weight of locs/braids",
            priority: ProductPriority::Medium,
        });
    }
    products.recommended.push(ProductSuggestion {
        category: "growth",
        name: "Fulani Hair Growth System",
        reason: "Promotes new growth and thicker hair density",
        priority: ProductPriority::Medium,
    });

    products
}

fn education_title_for_pattern(kind: PatternKind) -> &'static str {
    match kind {
        PatternKind::ExtremeEdgeStress => "Why Your Edges Are Disappearing (And How to Save Them)",
        PatternKind::ChemicalPlusTension => "The Hidden Danger of Glue + Tight Styles",
        _ => "Understanding Your Hair Loss",
    }
}

fn education_title_for_concern(concern: Concern) -> &'static str {
    match concern {
        Concern::EdgeDamage => "Understanding Traction Alopecia in Nigerian Women",
        Concern::TractionAlopecia => "Reversing Traction Alopecia: A Step-by-Step Guide",
        _ => "Understanding Your Hair Loss",
    }
}

fn generate_education(
    patterns: &[StylingPattern],
    concerns: &ConcernSummary,
) -> Vec<EducationTopic> {
    let mut lessons = Vec::new();
    for pattern in patterns
        .iter()
        .filter(|p| p.severity == PatternSeverity::Critical)
    {
        lessons.push(EducationTopic {
            title: education_title_for_pattern(pattern.kind),
            content: format!("Educational content for {}...", pattern.kind.label()),
            urgency: "high",
            read_time: "3 min",
        });
    }
    for entry in concerns.primary_concerns.iter().take(2) {
        lessons.push(EducationTopic {
            title: education_title_for_concern(entry.concern),
            content: format!("Educational content for {}...", entry.concern.label()),
            urgency: "medium",
            read_time: "4 min",
        });
    }
    lessons
}

fn create_action_plan(risk_score: &RiskScore) -> ActionPlan {
    let mut plan = ActionPlan::default();

    if risk_score.risk_level == RiskLevel::Critical {
        plan.immediate.push(ActionItem {
            action: "Stop all high-tension styles immediately",
            why: "Prevent further damage to hair follicles",
            duration: "Start today",
        });
        plan.immediate.push(ActionItem {
            action: "Begin using edge repair serum 2x daily",
            why: "Start repair process immediately",
            duration: "Ongoing",
        });
    }
    plan.short_term.push(ActionItem {
        action: "Switch to low-tension protective styles",
        why: "Give your hair time to recover",
        duration: "30-60 days",
    });
    plan.short_term.push(ActionItem {
        action: "Scalp massage 3x per week",
        why: "Increase blood flow to follicles",
        duration: "Ongoing",
    });
    plan.long_term.push(ActionItem {
        action: "Rotate protective styles every 6-8 weeks",
        why: "Prevent tension buildup",
        duration: "Permanent habit",
    });
    plan.long_term.push(ActionItem {
        action: "Take monthly progress photos",
        why: "Track regrowth and adjust treatment",
        duration: "Next 6 months",
    });

    plan
}

fn generate_summary(risk_score: &RiskScore, area: &AffectedAreaMatch) -> String {
    let opening = match risk_score.risk_level {
        RiskLevel::Critical => "Your styling habits are putting your hair at critical risk. ",
        RiskLevel::High => "Your hair is experiencing significant tension-related stress. ",
        RiskLevel::Moderate => {
            "You have some styling habits that could be improved for better hair health. "
        }
        _ => "Great news! Your styling habits are relatively hair-healthy. ",
    };
    let closing = if area.match_rate > MATCH_RATE_REVERSIBLE {
        "The good news: your hair loss pattern matches your styling habits, which means it's reversible with the right changes."
    } else {
        "Not all affected areas match your styling patterns - we should also look at hormonal or nutritional factors."
    };

    format!("{opening}{closing}")
}
