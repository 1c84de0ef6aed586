//! The static question catalog.
//!
//! Questions are data keyed by dimension: adding a dimension means adding a
//! row here, not touching generator dispatch. Dimensions derived solely
//! from App-Mod evidence (runtime model, modernization depth, cloud-native
//! feasibility) have no question on purpose — asking a human cannot improve
//! them.

use crate::intent::Dimension;
use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionOptionDef {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionDef {
    pub id: &'static str,
    pub dimension: Dimension,
    pub text: &'static str,
    pub options: &'static [QuestionOptionDef],
    pub required: bool,
    pub affects_eligibility: bool,
    /// Generated on every run regardless of confidence.
    pub always_ask: bool,
    /// Generated only while the dimension is UNKNOWN.
    pub only_when_unknown: bool,
}

const NETWORK_EXPOSURE_OPTIONS: &[QuestionOptionDef] = &[
    QuestionOptionDef { value: "external", label: "Internet-facing" },
    QuestionOptionDef { value: "internal", label: "Internal network only" },
    QuestionOptionDef { value: "mixed", label: "Both internal and external endpoints" },
];

const TREATMENT_OPTIONS: &[QuestionOptionDef] = &[
    QuestionOptionDef { value: "retire", label: "Retire" },
    QuestionOptionDef { value: "tolerate", label: "Tolerate as-is" },
    QuestionOptionDef { value: "rehost", label: "Rehost (lift and shift)" },
    QuestionOptionDef { value: "replatform", label: "Replatform to managed services" },
    QuestionOptionDef { value: "refactor", label: "Refactor for cloud-native" },
    QuestionOptionDef { value: "replace", label: "Replace with SaaS" },
    QuestionOptionDef { value: "rebuild", label: "Rebuild from scratch" },
    QuestionOptionDef { value: "retain", label: "Retain on-premises" },
];

const TIME_CATEGORY_OPTIONS: &[QuestionOptionDef] = &[
    QuestionOptionDef { value: "tolerate", label: "Tolerate" },
    QuestionOptionDef { value: "migrate", label: "Migrate" },
    QuestionOptionDef { value: "invest", label: "Invest" },
    QuestionOptionDef { value: "eliminate", label: "Eliminate" },
];

const AVAILABILITY_OPTIONS: &[QuestionOptionDef] = &[
    QuestionOptionDef { value: "single_region", label: "Single region" },
    QuestionOptionDef { value: "single_region_ha", label: "Single region with HA" },
    QuestionOptionDef { value: "multi_region", label: "Multi-region" },
    QuestionOptionDef { value: "active_active", label: "Active-active across regions" },
];

const SECURITY_LEVEL_OPTIONS: &[QuestionOptionDef] = &[
    QuestionOptionDef { value: "basic", label: "Basic" },
    QuestionOptionDef { value: "enterprise", label: "Enterprise controls" },
    QuestionOptionDef { value: "regulated", label: "Regulated industry" },
    QuestionOptionDef { value: "highly_regulated", label: "Highly regulated (e.g. HIPAA, PCI)" },
];

const OPERATING_MODEL_OPTIONS: &[QuestionOptionDef] = &[
    QuestionOptionDef { value: "traditional_it", label: "Traditional IT operations" },
    QuestionOptionDef { value: "transitional", label: "Transitioning to DevOps" },
    QuestionOptionDef { value: "devops", label: "Established DevOps" },
    QuestionOptionDef { value: "sre", label: "SRE practice with SLOs" },
];

const COST_POSTURE_OPTIONS: &[QuestionOptionDef] = &[
    QuestionOptionDef { value: "cost_minimized", label: "Minimize cost" },
    QuestionOptionDef { value: "balanced", label: "Balance cost and capability" },
    QuestionOptionDef { value: "scale_optimized", label: "Optimize for scale" },
    QuestionOptionDef { value: "innovation_first", label: "Innovation first" },
];

pub static QUESTION_CATALOG: Lazy<Vec<QuestionDef>> = Lazy::new(|| {
    vec![
        QuestionDef {
            id: "network_exposure",
            dimension: Dimension::NetworkExposure,
            text: "How is the application exposed on the network?",
            options: NETWORK_EXPOSURE_OPTIONS,
            required: true,
            affects_eligibility: false,
            always_ask: true,
            only_when_unknown: false,
        },
        QuestionDef {
            id: "treatment",
            dimension: Dimension::Treatment,
            text: "Which migration treatment has been decided for this application?",
            options: TREATMENT_OPTIONS,
            required: false,
            affects_eligibility: true,
            always_ask: false,
            only_when_unknown: false,
        },
        QuestionDef {
            id: "time_category",
            dimension: Dimension::TimeCategory,
            text: "What is the strategic TIME posture for this application?",
            options: TIME_CATEGORY_OPTIONS,
            required: false,
            affects_eligibility: true,
            always_ask: false,
            only_when_unknown: true,
        },
        QuestionDef {
            id: "availability",
            dimension: Dimension::Availability,
            text: "What availability topology does the business require?",
            options: AVAILABILITY_OPTIONS,
            required: false,
            affects_eligibility: false,
            always_ask: false,
            only_when_unknown: false,
        },
        QuestionDef {
            id: "security_level",
            dimension: Dimension::SecurityLevel,
            text: "What security and compliance posture applies?",
            options: SECURITY_LEVEL_OPTIONS,
            required: false,
            affects_eligibility: true,
            always_ask: false,
            only_when_unknown: false,
        },
        QuestionDef {
            id: "operating_model",
            dimension: Dimension::OperationalMaturity,
            text: "How does the team operate its workloads today?",
            options: OPERATING_MODEL_OPTIONS,
            required: false,
            affects_eligibility: true,
            always_ask: false,
            only_when_unknown: false,
        },
        QuestionDef {
            id: "cost_posture",
            dimension: Dimension::CostPosture,
            text: "What is the cost posture for this migration?",
            options: COST_POSTURE_OPTIONS,
            required: false,
            affects_eligibility: false,
            always_ask: false,
            only_when_unknown: false,
        },
    ]
});

pub fn find_question(id: &str) -> Option<&'static QuestionDef> {
    QUESTION_CATALOG.iter().find(|q| q.id == id)
}
