//! Maps free-text questionnaire labels onto the stable identifiers the
//! engines key on. Rules are tried in declared order and the first match
//! wins; order is load-bearing because label text can satisfy several
//! rules (a label containing "weaving" resolves to `allback_cornrows`
//! before the `ghana_weaving` rule is consulted, and "locs" resolves to
//! `dreadlocs` ahead of `faux_locs`). Unmatched labels fall back to a
//! slug of the lower-cased text, so normalization is total.

use crate::workflows::quiz::answers::{label_matches, LabelPattern};

use LabelPattern::{Contains, Prefix, Sequence};

struct NormalizationRule {
    patterns: &'static [LabelPattern],
    id: &'static str,
}

static PROTECTIVE_STYLE_RULES: &[NormalizationRule] = &[
    NormalizationRule {
        patterns: &[
            Contains("all-back"),
            Contains("all back"),
            Contains("allback"),
            Contains("cornrows"),
            Contains("weaving"),
        ],
        id: "allback_cornrows",
    },
    NormalizationRule {
        patterns: &[Contains("box braids")],
        id: "box_braids",
    },
    NormalizationRule {
        patterns: &[Contains("million braids")],
        id: "one_million_braids",
    },
    NormalizationRule {
        patterns: &[Contains("micro twists")],
        id: "micro_twists",
    },
    NormalizationRule {
        patterns: &[Contains("ghana weaving"), Contains("shuku")],
        id: "ghana_weaving",
    },
    NormalizationRule {
        patterns: &[Sequence("weaves", "sewn"), Contains("fixing")],
        id: "weaves",
    },
    NormalizationRule {
        patterns: &[Sequence("wigs", "glue"), Contains("frontal"), Contains("lace")],
        id: "wigs_glue",
    },
    NormalizationRule {
        patterns: &[
            Sequence("wigs", "without"),
            Contains("closure"),
            Contains("headband"),
        ],
        id: "wigs_no_glue",
    },
    NormalizationRule {
        patterns: &[Contains("crochet")],
        id: "crochet",
    },
    NormalizationRule {
        patterns: &[
            Sequence("twists", "senegalese"),
            Contains("senegalese twists"),
            Prefix("twists"),
        ],
        id: "twists_senegalese",
    },
    NormalizationRule {
        patterns: &[Contains("dreadlocs"), Contains("locs")],
        id: "dreadlocs",
    },
    NormalizationRule {
        patterns: &[Contains("faux locs")],
        id: "faux_locs",
    },
    NormalizationRule {
        patterns: &[Contains("threading"), Contains("kiko"), Contains("didi")],
        id: "threading_didi",
    },
    NormalizationRule {
        patterns: &[Contains("tight ponytails"), Contains("packing gel")],
        id: "tight_ponytails",
    },
    NormalizationRule {
        patterns: &[Contains("natural hair")],
        id: "natural_hair",
    },
];

static SCALP_AREA_RULES: &[NormalizationRule] = &[
    NormalizationRule {
        patterns: &[Contains("edge")],
        id: "edges",
    },
    NormalizationRule {
        patterns: &[Contains("temple")],
        id: "temples",
    },
    NormalizationRule {
        patterns: &[Contains("crown"), Contains("top"), Contains("center")],
        id: "crown",
    },
    NormalizationRule {
        patterns: &[Contains("nape"), Contains("back of neck")],
        id: "nape",
    },
    NormalizationRule {
        patterns: &[Contains("patch")],
        id: "patches",
    },
    NormalizationRule {
        patterns: &[
            Contains("even thinning"),
            Contains("all over"),
            Contains("overall"),
        ],
        id: "overall",
    },
];

fn normalize_with(rules: &[NormalizationRule], label: &str) -> String {
    for rule in rules {
        if label_matches(label, rule.patterns) {
            return rule.id.to_string();
        }
    }
    slugify(label)
}

/// Lossy but stable fallback: lower-case, collapse every run of
/// characters outside `[a-z0-9_]` to a single underscore.
fn slugify(label: &str) -> String {
    let lowered = label.to_ascii_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_run = false;
    for ch in lowered.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' {
            slug.push(ch);
            in_run = false;
        } else if !in_run {
            slug.push('_');
            in_run = true;
        }
    }
    slug
}

/// Canonical style identifiers for the protective-style labels.
pub fn normalize_protective_styles(labels: &[String]) -> Vec<String> {
    labels
        .iter()
        .map(|label| normalize_with(PROTECTIVE_STYLE_RULES, label))
        .collect()
}

/// Canonical area identifiers for the scalp-area labels.
pub fn normalize_scalp_areas(labels: &[String]) -> Vec<String> {
    labels
        .iter()
        .map(|label| normalize_with(SCALP_AREA_RULES, label))
        .collect()
}
