use serde::{Deserialize, Serialize};

// Influence coefficients: log10 weight per counter, then a global damping.
pub const FOLLOWERS_WEIGHT: f64 = 12.0;
pub const ENGAGEMENT_WEIGHT: f64 = 18.0;
pub const SAVES_WEIGHT: f64 = 28.0;
pub const MONTHS_ACTIVE_WEIGHT: f64 = 8.0;
pub const INFLUENCE_DAMPING: f64 = 0.82;

/// Counters are raised to these floors before taking log10.
pub const COUNTER_FLOOR: f64 = 10.0;
pub const MONTHS_ACTIVE_FLOOR: f64 = 1.0;

/// Upper bound of a matrix dimension value.
pub const DIMENSION_MAX: f64 = 100.0;

/// Social engagement counters for the Influence Score.
///
/// Counters are plain numbers: negative, fractional and NaN values are all
/// accepted and raised to the floor before the logarithm.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScoreInput {
    pub followers: f64,
    pub engagement: f64,
    pub saves: f64,
    #[serde(alias = "monthsActive")]
    pub months_active: f64,
}

/// One influence term: input name, value, floor and weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfluenceTerm {
    pub name: &'static str,
    pub value: f64,
    pub floor: f64,
    pub weight: f64,
}

impl InfluenceTerm {
    /// Input after flooring; NaN becomes the floor.
    pub fn floored(&self) -> f64 {
        clamp_input(self.value, self.floor, f64::MAX)
    }

    /// `log10(max(value, floor))`. Floors keep the argument away from zero.
    pub fn log(&self) -> f64 {
        self.floored().log10()
    }

    pub fn contribution(&self) -> f64 {
        self.log() * self.weight
    }
}

impl ScoreInput {
    pub fn terms(&self) -> [InfluenceTerm; 4] {
        [
            InfluenceTerm {
                name: "followers",
                value: self.followers,
                floor: COUNTER_FLOOR,
                weight: FOLLOWERS_WEIGHT,
            },
            InfluenceTerm {
                name: "engagement",
                value: self.engagement,
                floor: COUNTER_FLOOR,
                weight: ENGAGEMENT_WEIGHT,
            },
            InfluenceTerm {
                name: "saves",
                value: self.saves,
                floor: COUNTER_FLOOR,
                weight: SAVES_WEIGHT,
            },
            InfluenceTerm {
                name: "months_active",
                value: self.months_active,
                floor: MONTHS_ACTIVE_FLOOR,
                weight: MONTHS_ACTIVE_WEIGHT,
            },
        ]
    }
}

/// Twin-matrix dimension values on a 0-100 scale.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MatrixDimensions {
    pub identity: f64,
    pub behavior: f64,
    pub social: f64,
    pub financial: f64,
    pub creative: f64,
    pub reputation: f64,
}

impl MatrixDimensions {
    /// Every dimension set to the same value.
    pub fn uniform(value: f64) -> Self {
        Self {
            identity: value,
            behavior: value,
            social: value,
            financial: value,
            creative: value,
            reputation: value,
        }
    }

    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("identity", self.identity),
            ("behavior", self.behavior),
            ("social", self.social),
            ("financial", self.financial),
            ("creative", self.creative),
            ("reputation", self.reputation),
        ]
    }
}

/// Verification completion ratios on a 0-1 scale.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HumanityComponents {
    #[serde(alias = "humanVerification")]
    pub human_verification: f64,
    #[serde(alias = "taskCompletion")]
    pub task_completion: f64,
    #[serde(alias = "socialBinding")]
    pub social_binding: f64,
    #[serde(alias = "walletBinding")]
    pub wallet_binding: f64,
    #[serde(alias = "communityEngagement")]
    pub community_engagement: f64,
}

impl HumanityComponents {
    /// All components fully complete.
    pub fn complete() -> Self {
        Self {
            human_verification: 1.0,
            task_completion: 1.0,
            social_binding: 1.0,
            wallet_binding: 1.0,
            community_engagement: 1.0,
        }
    }

    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("human_verification", self.human_verification),
            ("task_completion", self.task_completion),
            ("social_binding", self.social_binding),
            ("wallet_binding", self.wallet_binding),
            ("community_engagement", self.community_engagement),
        ]
    }
}

/// Clamp into `[min, max]`, mapping NaN to `min`.
pub fn clamp_input(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}
