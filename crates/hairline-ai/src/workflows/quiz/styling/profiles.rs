use serde::{Deserialize, Serialize};

/// How a style loads the follicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TensionType {
    Installation,
    Pulling,
    Chemical,
    Combined,
    Weight,
    Minimal,
    Protective,
    None,
}

impl TensionType {
    pub const fn label(self) -> &'static str {
        match self {
            TensionType::Installation => "installation",
            TensionType::Pulling => "pulling",
            TensionType::Chemical => "chemical",
            TensionType::Combined => "combined",
            TensionType::Weight => "weight",
            TensionType::Minimal => "minimal",
            TensionType::Protective => "protective",
            TensionType::None => "none",
        }
    }
}

/// Mechanism through which a style damages hair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    ExtremeTension,
    ConstantTension,
    AdhesiveDamage,
    TightBraiding,
    WeightPlusTension,
    ModerateTension,
    GravitationalPull,
    LowManipulation,
    NoTension,
}

impl DamageType {
    pub const fn label(self) -> &'static str {
        match self {
            DamageType::ExtremeTension => "extreme_tension",
            DamageType::ConstantTension => "constant_tension",
            DamageType::AdhesiveDamage => "adhesive_damage",
            DamageType::TightBraiding => "tight_braiding",
            DamageType::WeightPlusTension => "weight_plus_tension",
            DamageType::ModerateTension => "moderate_tension",
            DamageType::GravitationalPull => "gravitational_pull",
            DamageType::LowManipulation => "low_manipulation",
            DamageType::NoTension => "no_tension",
        }
    }
}

/// Concern tags a style contributes to the aggregate picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Concern {
    EdgeDamage,
    TractionAlopecia,
    Breakage,
    HairlineRecession,
    ChemicalDamage,
    ScalpIrritation,
    WeightStress,
    InstallationTension,
    RootWeakness,
    MinimalRisk,
}

impl Concern {
    pub const fn label(self) -> &'static str {
        match self {
            Concern::EdgeDamage => "edge_damage",
            Concern::TractionAlopecia => "traction_alopecia",
            Concern::Breakage => "breakage",
            Concern::HairlineRecession => "hairline_recession",
            Concern::ChemicalDamage => "chemical_damage",
            Concern::ScalpIrritation => "scalp_irritation",
            Concern::WeightStress => "weight_stress",
            Concern::InstallationTension => "installation_tension",
            Concern::RootWeakness => "root_weakness",
            Concern::MinimalRisk => "minimal_risk",
        }
    }
}

/// Static tension profile for one canonical protective style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StyleRiskProfile {
    pub risk_score: u8,
    pub tension_type: TensionType,
    pub affected_areas: &'static [&'static str],
    pub concerns: &'static [Concern],
    pub damage_type: DamageType,
}

/// Reference table of style tension profiles, hand-tuned; the scores and
/// sets are behavioral constants, not derived values.
static STYLE_RISK_PROFILES: &[(&str, StyleRiskProfile)] = &[
    // High tension (8-10)
    (
        "micro_twists",
        StyleRiskProfile {
            risk_score: 10,
            tension_type: TensionType::Installation,
            affected_areas: &["edges", "temples", "crown"],
            concerns: &[Concern::EdgeDamage, Concern::TractionAlopecia, Concern::Breakage],
            damage_type: DamageType::ExtremeTension,
        },
    ),
    (
        "tight_ponytails",
        StyleRiskProfile {
            risk_score: 9,
            tension_type: TensionType::Pulling,
            affected_areas: &["edges", "temples"],
            concerns: &[
                Concern::EdgeDamage,
                Concern::TractionAlopecia,
                Concern::HairlineRecession,
            ],
            damage_type: DamageType::ConstantTension,
        },
    ),
    (
        "wigs_glue",
        StyleRiskProfile {
            risk_score: 9,
            tension_type: TensionType::Chemical,
            affected_areas: &["edges", "temples", "hairline"],
            concerns: &[
                Concern::ChemicalDamage,
                Concern::EdgeDamage,
                Concern::ScalpIrritation,
            ],
            damage_type: DamageType::AdhesiveDamage,
        },
    ),
    (
        "allback_cornrows",
        StyleRiskProfile {
            risk_score: 8,
            tension_type: TensionType::Installation,
            affected_areas: &["edges", "temples", "crown"],
            concerns: &[Concern::TractionAlopecia, Concern::EdgeDamage],
            damage_type: DamageType::TightBraiding,
        },
    ),
    (
        "ghana_weaving",
        StyleRiskProfile {
            risk_score: 8,
            tension_type: TensionType::Installation,
            affected_areas: &["edges", "temples"],
            concerns: &[Concern::TractionAlopecia, Concern::EdgeDamage],
            damage_type: DamageType::TightBraiding,
        },
    ),
    // Medium tension (4-7)
    (
        "box_braids",
        StyleRiskProfile {
            risk_score: 6,
            tension_type: TensionType::Installation,
            affected_areas: &["crown", "nape"],
            concerns: &[Concern::WeightStress, Concern::Breakage],
            damage_type: DamageType::ModerateTension,
        },
    ),
    (
        "faux_locs",
        StyleRiskProfile {
            risk_score: 7,
            tension_type: TensionType::Combined,
            affected_areas: &["edges", "crown"],
            concerns: &[Concern::WeightStress, Concern::InstallationTension],
            damage_type: DamageType::WeightPlusTension,
        },
    ),
    (
        "weaves",
        StyleRiskProfile {
            risk_score: 6,
            tension_type: TensionType::Installation,
            affected_areas: &["crown", "perimeter"],
            concerns: &[Concern::WeightStress, Concern::Breakage],
            damage_type: DamageType::ModerateTension,
        },
    ),
    (
        "crochet",
        StyleRiskProfile {
            risk_score: 5,
            tension_type: TensionType::Installation,
            affected_areas: &["crown"],
            concerns: &[Concern::Breakage],
            damage_type: DamageType::ModerateTension,
        },
    ),
    (
        "dreadlocs",
        StyleRiskProfile {
            risk_score: 5,
            tension_type: TensionType::Weight,
            affected_areas: &["crown", "edges"],
            concerns: &[Concern::WeightStress, Concern::RootWeakness],
            damage_type: DamageType::GravitationalPull,
        },
    ),
    (
        "one_million_braids",
        StyleRiskProfile {
            risk_score: 7,
            tension_type: TensionType::Combined,
            affected_areas: &["edges", "crown"],
            concerns: &[
                Concern::WeightStress,
                Concern::InstallationTension,
                Concern::EdgeDamage,
            ],
            damage_type: DamageType::WeightPlusTension,
        },
    ),
    // Low tension (1-3)
    (
        "twists_senegalese",
        StyleRiskProfile {
            risk_score: 3,
            tension_type: TensionType::Minimal,
            affected_areas: &[],
            concerns: &[Concern::MinimalRisk],
            damage_type: DamageType::LowManipulation,
        },
    ),
    (
        "wigs_no_glue",
        StyleRiskProfile {
            risk_score: 2,
            tension_type: TensionType::Minimal,
            affected_areas: &[],
            concerns: &[Concern::MinimalRisk],
            damage_type: DamageType::LowManipulation,
        },
    ),
    (
        "threading_didi",
        StyleRiskProfile {
            risk_score: 3,
            tension_type: TensionType::Protective,
            affected_areas: &[],
            concerns: &[Concern::MinimalRisk],
            damage_type: DamageType::LowManipulation,
        },
    ),
    (
        "natural_hair",
        StyleRiskProfile {
            risk_score: 1,
            tension_type: TensionType::None,
            affected_areas: &[],
            concerns: &[Concern::MinimalRisk],
            damage_type: DamageType::NoTension,
        },
    ),
];

/// Profile for a normalized style identifier. Unknown identifiers return
/// `None`; consumers treat that as zero risk, zero concerns, zero areas,
/// since normalized labels are not guaranteed to hit the table.
pub fn lookup(style_id: &str) -> Option<&'static StyleRiskProfile> {
    STYLE_RISK_PROFILES
        .iter()
        .find(|(id, _)| *id == style_id)
        .map(|(_, profile)| profile)
}

/// Individual risk score for an identifier, zero when unknown.
pub(crate) fn risk_score_for(style_id: &str) -> f64 {
    lookup(style_id).map_or(0.0, |profile| f64::from(profile.risk_score))
}
