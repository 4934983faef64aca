//! Styling-risk pipeline: canonical style identifiers, static tension
//! profiles, the risk analyzer, and the recommendation engine built on top
//! of them.

pub mod normalizer;
pub mod profiles;
pub mod recommendation;
pub mod risk;

pub use normalizer::{normalize_protective_styles, normalize_scalp_areas};
pub use profiles::{Concern, DamageType, StyleRiskProfile, TensionType};
pub use recommendation::{generate_recommendations, StylingRecommendation, StylingSelections};
pub use risk::{
    calculate_risk_score, detect_patterns, identify_primary_concerns, ConcernSummary,
    PatternKind, PatternSeverity, RiskLevel, RiskScore, StylingPattern,
};
