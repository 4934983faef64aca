use serde::{Deserialize, Serialize};

use super::profiles::{self, Concern, DamageType, TensionType};

/// Ordered classification of aggregate styling-tension risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Critical,
    High,
    Moderate,
    Low,
    Minimal,
    Unknown,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Critical => "critical",
            RiskLevel::High => "high",
            RiskLevel::Moderate => "moderate",
            RiskLevel::Low => "low",
            RiskLevel::Minimal => "minimal",
            RiskLevel::Unknown => "unknown",
        }
    }
}

/// Aggregate risk derived from the selected styles. Recomputed fresh on
/// every evaluation, never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskScore {
    pub total_score: f64,
    pub risk_level: RiskLevel,
    pub max_individual_risk: f64,
    pub average_risk: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConcernFrequency {
    pub concern: Concern,
    pub frequency: usize,
}

/// Concern tags, affected areas, and tension/damage types aggregated
/// across the selected styles.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcernSummary {
    pub primary_concerns: Vec<ConcernFrequency>,
    pub affected_areas: Vec<String>,
    pub tension_types: Vec<TensionType>,
    pub damage_types: Vec<DamageType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    MultipleHighTension,
    ExtremeEdgeStress,
    ChemicalPlusTension,
    BalancedApproach,
    LowRiskStyling,
    NaturalOnly,
}

impl PatternKind {
    pub const fn label(self) -> &'static str {
        match self {
            PatternKind::MultipleHighTension => "multiple_high_tension",
            PatternKind::ExtremeEdgeStress => "extreme_edge_stress",
            PatternKind::ChemicalPlusTension => "chemical_plus_tension",
            PatternKind::BalancedApproach => "balanced_approach",
            PatternKind::LowRiskStyling => "low_risk_styling",
            PatternKind::NaturalOnly => "natural_only",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternSeverity {
    Critical,
    Positive,
    Warning,
    Info,
}

/// Named multi-style interaction detected across a selection. A list, not
/// a set: several patterns can fire at once and all are reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StylingPattern {
    #[serde(rename = "type")]
    pub kind: PatternKind,
    pub severity: PatternSeverity,
    pub message: &'static str,
    pub recommendation: &'static str,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn risk_level_for(score: f64) -> RiskLevel {
    if score >= 8.0 {
        RiskLevel::Critical
    } else if score >= 6.0 {
        RiskLevel::High
    } else if score >= 4.0 {
        RiskLevel::Moderate
    } else if score >= 2.0 {
        RiskLevel::Low
    } else {
        RiskLevel::Minimal
    }
}

/// Weighted combination of the worst style and the selection average.
/// Unknown identifiers contribute a risk of zero rather than erroring.
pub fn calculate_risk_score(style_ids: &[String]) -> RiskScore {
    if style_ids.is_empty() {
        return RiskScore {
            total_score: 0.0,
            risk_level: RiskLevel::Unknown,
            max_individual_risk: 0.0,
            average_risk: 0.0,
        };
    }

    let scores: Vec<f64> = style_ids
        .iter()
        .map(|id| profiles::risk_score_for(id))
        .collect();
    let max_score = scores.iter().copied().fold(0.0_f64, f64::max);
    let avg_score = scores.iter().sum::<f64>() / scores.len() as f64;
    let total_score = max_score * 0.7 + avg_score * 0.3;

    RiskScore {
        total_score: round1(total_score),
        // Classified from the unrounded combination so 7.96 reads as high,
        // not critical.
        risk_level: risk_level_for(total_score),
        max_individual_risk: max_score,
        average_risk: round1(avg_score),
    }
}

/// Tally concern tags across the selection (a style counts once per tag it
/// carries) and union the areas and tension/damage types, all in stable
/// encounter order. Ties in frequency keep encounter order.
pub fn identify_primary_concerns(style_ids: &[String]) -> ConcernSummary {
    let mut concern_counts: Vec<(Concern, usize)> = Vec::new();
    let mut affected_areas: Vec<String> = Vec::new();
    let mut tension_types: Vec<TensionType> = Vec::new();
    let mut damage_types: Vec<DamageType> = Vec::new();

    for id in style_ids {
        let Some(profile) = profiles::lookup(id) else {
            continue;
        };
        for concern in profile.concerns {
            match concern_counts.iter_mut().find(|(c, _)| c == concern) {
                Some((_, count)) => *count += 1,
                None => concern_counts.push((*concern, 1)),
            }
        }
        for area in profile.affected_areas {
            if !affected_areas.iter().any(|known| known == area) {
                affected_areas.push((*area).to_string());
            }
        }
        if !tension_types.contains(&profile.tension_type) {
            tension_types.push(profile.tension_type);
        }
        if !damage_types.contains(&profile.damage_type) {
            damage_types.push(profile.damage_type);
        }
    }

    concern_counts.sort_by(|a, b| b.1.cmp(&a.1));
    let primary_concerns = concern_counts
        .into_iter()
        .map(|(concern, frequency)| ConcernFrequency { concern, frequency })
        .collect();

    ConcernSummary {
        primary_concerns,
        affected_areas,
        tension_types,
        damage_types,
    }
}

/// Evaluate the fixed pattern rules against the selection. Rules are
/// independent, not an else-chain; results come back in declaration order.
pub fn detect_patterns(style_ids: &[String]) -> Vec<StylingPattern> {
    let mut patterns = Vec::new();

    let selected = |id: &str| style_ids.iter().any(|s| s == id);
    let high_tension = style_ids
        .iter()
        .filter(|id| profiles::risk_score_for(id) >= 8.0)
        .count();

    if high_tension >= 2 {
        patterns.push(StylingPattern {
            kind: PatternKind::MultipleHighTension,
            severity: PatternSeverity::Critical,
            message: "You frequently wear multiple high-tension styles",
            recommendation: "Rotate with low-tension protective styles",
        });
    }

    if selected("micro_twists") && selected("tight_ponytails") {
        patterns.push(StylingPattern {
            kind: PatternKind::ExtremeEdgeStress,
            severity: PatternSeverity::Critical,
            message: "This combination puts extreme stress on your hairline",
            recommendation: "Give your edges a break for at least 3 months",
        });
    }

    if selected("wigs_glue") && selected("tight_ponytails") {
        patterns.push(StylingPattern {
            kind: PatternKind::ChemicalPlusTension,
            severity: PatternSeverity::Critical,
            message: "Chemical damage + physical tension = severe edge damage",
            recommendation: "Switch to glueless wigs and loose styles immediately",
        });
    }

    let weight_based = ["dreadlocs", "faux_locs", "box_braids"]
        .into_iter()
        .any(|id| selected(id));
    let low_tension = style_ids
        .iter()
        .any(|id| profiles::risk_score_for(id) <= 3.0);
    if weight_based && low_tension {
        patterns.push(StylingPattern {
            kind: PatternKind::BalancedApproach,
            severity: PatternSeverity::Positive,
            message: "Good! You balance protective styles with low-manipulation options",
            recommendation: "Continue this approach and focus on scalp massage",
        });
    }

    if !style_ids.is_empty()
        && style_ids
            .iter()
            .all(|id| profiles::risk_score_for(id) <= 3.0)
    {
        patterns.push(StylingPattern {
            kind: PatternKind::LowRiskStyling,
            severity: PatternSeverity::Positive,
            message: "Excellent! Your styling habits are hair-healthy",
            recommendation: "Maintain scalp health and nutrition",
        });
    }

    if style_ids.len() == 1 && selected("natural_hair") {
        patterns.push(StylingPattern {
            kind: PatternKind::NaturalOnly,
            severity: PatternSeverity::Positive,
            message: "You wear your natural hair - minimal tension risk",
            recommendation: "Focus on moisture retention and gentle handling",
        });
    }

    patterns
}
