use serde::{Deserialize, Serialize};

/// Scoring configuration.
///
/// Both weight tables are optional; a missing table falls back to the
/// built-in weights. Tables are validated at startup and then stay constant
/// for the rest of the run.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   matrix_weights:
///     identity: 0.25
///     behavior: 0.20
///     social: 0.20
///     financial: 0.15
///     creative: 0.10
///     reputation: 0.10
///   humanity_weights:
///     human_verification: 0.30
///     task_completion: 0.25
///     social_binding: 0.20
///     wallet_binding: 0.15
///     community_engagement: 0.10
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Weights for the six twin-matrix dimensions (must sum to 1.0)
    #[serde(default)]
    pub matrix_weights: Option<MatrixWeights>,

    /// Weights for the five humanity components (must sum to 1.0)
    #[serde(default)]
    pub humanity_weights: Option<HumanityWeights>,
}

impl ScoringConfig {
    /// Config with both tables spelled out, as written by `init`.
    pub fn with_defaults() -> Self {
        Self {
            matrix_weights: Some(MatrixWeights::default()),
            humanity_weights: Some(HumanityWeights::default()),
        }
    }

    pub fn matrix_weights(&self) -> MatrixWeights {
        self.matrix_weights.clone().unwrap_or_default()
    }

    pub fn humanity_weights(&self) -> HumanityWeights {
        self.humanity_weights.clone().unwrap_or_default()
    }
}

/// Weight table for the Matrix Score.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MatrixWeights {
    pub identity: f64,
    pub behavior: f64,
    pub social: f64,
    pub financial: f64,
    pub creative: f64,
    pub reputation: f64,
}

impl Default for MatrixWeights {
    fn default() -> Self {
        Self {
            identity: 0.25,
            behavior: 0.20,
            social: 0.20,
            financial: 0.15,
            creative: 0.10,
            reputation: 0.10,
        }
    }
}

impl MatrixWeights {
    /// Named weights, in the same order as `MatrixDimensions::entries`.
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

    pub fn total(&self) -> f64 {
        self.entries().iter().map(|(_, w)| w).sum()
    }
}

/// Weight table for the Humanity Index.
///
/// Each weight times 255 is the most that component can contribute.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HumanityWeights {
    pub human_verification: f64,
    pub task_completion: f64,
    pub social_binding: f64,
    pub wallet_binding: f64,
    pub community_engagement: f64,
}

impl Default for HumanityWeights {
    fn default() -> Self {
        Self {
            human_verification: 0.30,
            task_completion: 0.25,
            social_binding: 0.20,
            wallet_binding: 0.15,
            community_engagement: 0.10,
        }
    }
}

impl HumanityWeights {
    /// Named weights, in the same order as `HumanityComponents::entries`.
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("human_verification", self.human_verification),
            ("task_completion", self.task_completion),
            ("social_binding", self.social_binding),
            ("wallet_binding", self.wallet_binding),
            ("community_engagement", self.community_engagement),
        ]
    }

    pub fn total(&self) -> f64 {
        self.entries().iter().map(|(_, w)| w).sum()
    }
}
