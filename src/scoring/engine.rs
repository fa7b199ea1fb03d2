use serde::Serialize;

use super::config::{HumanityWeights, MatrixWeights, ScoringConfig};
use super::factors::{
    clamp_input, HumanityComponents, MatrixDimensions, ScoreInput, DIMENSION_MAX,
    INFLUENCE_DAMPING,
};
use super::score::{Score, MAX_SCORE};
use crate::profile::Profile;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorContribution {
    pub label: String,       // e.g. "followers", "identity"
    pub description: String, // e.g. "log10(1200) = 3.08 x 12"
    pub value: f64,          // Points this term adds to the raw score
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: Score,
    /// Formula output before rounding and clamping
    pub raw: f64,
    pub factors: Vec<FactorContribution>,
}

/// Scores for every section present in a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub influence: Option<ScoreResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<ScoreResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humanity: Option<ScoreResult>,
}

impl ScoreReport {
    /// Scored metrics in display order, with their labels.
    pub fn metrics(&self) -> Vec<(&'static str, &ScoreResult)> {
        [
            ("Influence", self.influence.as_ref()),
            ("Twin Matrix", self.matrix.as_ref()),
            ("Humanity Index", self.humanity.as_ref()),
        ]
        .into_iter()
        .filter_map(|(label, result)| result.map(|r| (label, r)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.influence.is_none() && self.matrix.is_none() && self.humanity.is_none()
    }
}

/// Influence Score from engagement counters.
pub fn calculate_influence_score(input: &ScoreInput) -> Score {
    influence_breakdown(input).score
}

/// Matrix Score using the built-in dimension weights.
pub fn calculate_matrix_score(dimensions: &MatrixDimensions) -> Score {
    calculate_matrix_score_with(dimensions, &MatrixWeights::default())
}

pub fn calculate_matrix_score_with(
    dimensions: &MatrixDimensions,
    weights: &MatrixWeights,
) -> Score {
    matrix_breakdown(dimensions, weights).score
}

/// Humanity Index using the built-in component weights.
pub fn calculate_humanity_index(components: &HumanityComponents) -> Score {
    calculate_humanity_index_with(components, &HumanityWeights::default())
}

pub fn calculate_humanity_index_with(
    components: &HumanityComponents,
    weights: &HumanityWeights,
) -> Score {
    humanity_breakdown(components, weights).score
}

/// Sum of weighted log10 terms, damped by 0.82.
pub fn influence_breakdown(input: &ScoreInput) -> ScoreResult {
    let mut factors = Vec::new();
    let mut sum = 0.0;

    for term in input.terms() {
        let value = term.contribution();
        sum += value;
        factors.push(FactorContribution {
            label: term.name.to_string(),
            description: format!(
                "log10({}) = {:.2} x {}",
                term.floored(),
                term.log(),
                term.weight
            ),
            value,
        });
    }

    let raw = sum * INFLUENCE_DAMPING;
    ScoreResult {
        score: Score::from_raw(raw),
        raw,
        factors,
    }
}

/// Weighted average of the six dimensions, rescaled from 0-100 to 0-255.
///
/// Weights sum to 1.0, so the weighted sum is the average.
pub fn matrix_breakdown(dimensions: &MatrixDimensions, weights: &MatrixWeights) -> ScoreResult {
    let rescale = |v: f64| v * MAX_SCORE as f64 / DIMENSION_MAX;
    let mut factors = Vec::new();
    let mut average = 0.0;

    for ((name, value), (_, weight)) in dimensions.entries().into_iter().zip(weights.entries()) {
        let value = clamp_input(value, 0.0, DIMENSION_MAX);
        average += value * weight;
        factors.push(FactorContribution {
            label: name.to_string(),
            description: format!("{:.1} x {}", value, weight),
            value: rescale(value * weight),
        });
    }

    let raw = rescale(average);
    ScoreResult {
        score: Score::from_raw(raw),
        raw,
        factors,
    }
}

/// Completion ratios against per-component maximums of `weight * 255`.
pub fn humanity_breakdown(
    components: &HumanityComponents,
    weights: &HumanityWeights,
) -> ScoreResult {
    let mut factors = Vec::new();
    let mut raw = 0.0;

    for ((name, ratio), (_, weight)) in components.entries().into_iter().zip(weights.entries()) {
        let ratio = clamp_input(ratio, 0.0, 1.0);
        let max_contribution = weight * MAX_SCORE as f64;
        let value = ratio * max_contribution;
        raw += value;
        factors.push(FactorContribution {
            label: name.to_string(),
            description: format!("{:.0}% of {:.2}", ratio * 100.0, max_contribution),
            value,
        });
    }

    ScoreResult {
        score: Score::from_raw(raw),
        raw,
        factors,
    }
}

/// Score every section present in the profile.
pub fn score_profile(profile: &Profile, config: &ScoringConfig) -> ScoreReport {
    ScoreReport {
        influence: profile.influence.as_ref().map(influence_breakdown),
        matrix: profile
            .dimensions
            .as_ref()
            .map(|d| matrix_breakdown(d, &config.matrix_weights())),
        humanity: profile
            .humanity
            .as_ref()
            .map(|c| humanity_breakdown(c, &config.humanity_weights())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_influence_at_floor() {
        // log10(10) = 1 for three counters, log10(1) = 0 for months:
        // 12 + 18 + 28 + 0 = 58, 58 * 0.82 = 47.56
        let input = ScoreInput {
            followers: 10.0,
            engagement: 10.0,
            saves: 10.0,
            months_active: 1.0,
        };
        assert_eq!(calculate_influence_score(&input).value(), 48);
    }

    #[test]
    fn test_influence_zero_inputs_floor_to_minimum() {
        let zero = ScoreInput::default();
        let floor = ScoreInput {
            followers: 10.0,
            engagement: 10.0,
            saves: 10.0,
            months_active: 1.0,
        };
        assert_eq!(calculate_influence_score(&zero), calculate_influence_score(&floor));
    }

    #[test]
    fn test_influence_negative_inputs_floor() {
        let negative = ScoreInput {
            followers: -5.0,
            engagement: -1e9,
            saves: 100.0,
            months_active: -3.0,
        };
        let floored = ScoreInput {
            followers: 10.0,
            engagement: 10.0,
            saves: 100.0,
            months_active: 1.0,
        };
        assert_eq!(
            calculate_influence_score(&negative),
            calculate_influence_score(&floored)
        );
    }

    #[test]
    fn test_influence_nan_input_floors() {
        let input = ScoreInput {
            followers: f64::NAN,
            engagement: 10.0,
            saves: 10.0,
            months_active: 1.0,
        };
        assert_eq!(calculate_influence_score(&input).value(), 48);
    }

    #[test]
    fn test_influence_fractional_input() {
        // 12*log10(1200.5) + 18 + 28 = 36.95 + 46 = 82.95, x0.82 = 68.02
        let input = ScoreInput {
            followers: 1200.5,
            ..Default::default()
        };
        assert_eq!(calculate_influence_score(&input).value(), 68);
    }

    #[test]
    fn test_influence_typical_profile() {
        // 12*3 + 18*2 + 28*2 + 8*log10(12) = 128 + 8.633 = 136.633, x0.82 = 112.04
        let input = ScoreInput {
            followers: 1000.0,
            engagement: 100.0,
            saves: 100.0,
            months_active: 12.0,
        };
        assert_eq!(calculate_influence_score(&input).value(), 112);
    }

    #[test]
    fn test_influence_clamps_huge_inputs() {
        let input = ScoreInput {
            followers: f64::MAX,
            engagement: f64::MAX,
            saves: f64::MAX,
            months_active: f64::MAX,
        };
        assert_eq!(calculate_influence_score(&input), Score::MAX);
    }

    #[test]
    fn test_influence_never_below_floor_score() {
        for exp in 0..19u32 {
            let n = 10f64.powi(exp as i32);
            let input = ScoreInput {
                followers: n,
                engagement: n / 3.0,
                saves: n / 7.0,
                months_active: exp as f64,
            };
            let score = calculate_influence_score(&input).value();
            assert!(score >= 48, "score {} below floor for 10^{}", score, exp);
        }
    }

    #[test]
    fn test_influence_breakdown_terms() {
        let input = ScoreInput {
            followers: 100.0,
            ..Default::default()
        };
        let result = influence_breakdown(&input);
        assert_eq!(result.factors.len(), 4);
        assert_eq!(result.factors[0].label, "followers");
        assert!((result.factors[0].value - 24.0).abs() < 1e-9);
        assert_eq!(result.factors[3].value, 0.0);
        let sum: f64 = result.factors.iter().map(|f| f.value).sum();
        assert!((result.raw - sum * INFLUENCE_DAMPING).abs() < 1e-9);
    }

    #[test]
    fn test_matrix_all_max() {
        let dims = MatrixDimensions::uniform(100.0);
        assert_eq!(calculate_matrix_score(&dims).value(), 255);
    }

    #[test]
    fn test_matrix_all_zero() {
        let dims = MatrixDimensions::uniform(0.0);
        assert_eq!(calculate_matrix_score(&dims).value(), 0);
    }

    #[test]
    fn test_matrix_half() {
        // 50/100 * 255 = 127.5 -> 128
        let dims = MatrixDimensions::uniform(50.0);
        assert_eq!(calculate_matrix_score(&dims).value(), 128);
    }

    #[test]
    fn test_matrix_weighted() {
        // Only identity at 100: 0.25 * 100 = 25, 25/100 * 255 = 63.75 -> 64
        let dims = MatrixDimensions {
            identity: 100.0,
            ..Default::default()
        };
        assert_eq!(calculate_matrix_score(&dims).value(), 64);
    }

    #[test]
    fn test_matrix_clamps_out_of_range_dimensions() {
        let over = MatrixDimensions::uniform(400.0);
        let under = MatrixDimensions::uniform(-50.0);
        assert_eq!(calculate_matrix_score(&over).value(), 255);
        assert_eq!(calculate_matrix_score(&under).value(), 0);
    }

    #[test]
    fn test_matrix_nan_dimension_is_zero() {
        let with_nan = MatrixDimensions {
            identity: f64::NAN,
            behavior: 100.0,
            ..Default::default()
        };
        let with_zero = MatrixDimensions {
            identity: 0.0,
            behavior: 100.0,
            ..Default::default()
        };
        // 0.20 * 100 = 20, 20/100 * 255 = 51
        assert_eq!(calculate_matrix_score(&with_nan).value(), 51);
        assert_eq!(calculate_matrix_score(&with_nan), calculate_matrix_score(&with_zero));
        assert_eq!(calculate_matrix_score(&MatrixDimensions::uniform(f64::NAN)), Score::MIN);
    }

    #[test]
    fn test_matrix_custom_weights() {
        let weights = MatrixWeights {
            identity: 1.0,
            behavior: 0.0,
            social: 0.0,
            financial: 0.0,
            creative: 0.0,
            reputation: 0.0,
        };
        let dims = MatrixDimensions {
            identity: 40.0,
            social: 100.0,
            ..Default::default()
        };
        // 40/100 * 255 = 102
        assert_eq!(calculate_matrix_score_with(&dims, &weights).value(), 102);
    }

    #[test]
    fn test_matrix_zero_weights_scores_zero() {
        let weights = MatrixWeights {
            identity: 0.0,
            behavior: 0.0,
            social: 0.0,
            financial: 0.0,
            creative: 0.0,
            reputation: 0.0,
        };
        let dims = MatrixDimensions::uniform(100.0);
        assert_eq!(calculate_matrix_score_with(&dims, &weights), Score::MIN);
    }

    #[test]
    fn test_humanity_complete() {
        let components = HumanityComponents::complete();
        assert_eq!(calculate_humanity_index(&components).value(), 255);
    }

    #[test]
    fn test_humanity_defaulted_is_zero() {
        let components = HumanityComponents {
            human_verification: 0.0,
            ..Default::default()
        };
        assert_eq!(calculate_humanity_index(&components).value(), 0);
    }

    #[test]
    fn test_humanity_verification_only() {
        // 0.30 * 255 = 76.5 -> 77
        let components = HumanityComponents {
            human_verification: 1.0,
            ..Default::default()
        };
        assert_eq!(calculate_humanity_index(&components).value(), 77);
    }

    #[test]
    fn test_humanity_partial_progress() {
        // 76.5 + 0.5 * 63.75 + 51 = 159.375 -> 159
        let components = HumanityComponents {
            human_verification: 1.0,
            task_completion: 0.5,
            social_binding: 1.0,
            ..Default::default()
        };
        assert_eq!(calculate_humanity_index(&components).value(), 159);
    }

    #[test]
    fn test_humanity_clamps_ratios() {
        let components = HumanityComponents {
            human_verification: 7.0,
            task_completion: -1.0,
            social_binding: f64::NAN,
            wallet_binding: 1.0,
            community_engagement: 1.0,
        };
        // 76.5 + 0 + 0 + 38.25 + 25.5 = 140.25 -> 140
        assert_eq!(calculate_humanity_index(&components).value(), 140);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let input = ScoreInput {
            followers: 4321.0,
            engagement: 87.0,
            saves: 13.0,
            months_active: 5.0,
        };
        let dims = MatrixDimensions {
            identity: 33.3,
            behavior: 71.0,
            ..Default::default()
        };
        let components = HumanityComponents {
            task_completion: 0.42,
            ..Default::default()
        };
        assert_eq!(influence_breakdown(&input), influence_breakdown(&input));
        assert_eq!(calculate_matrix_score(&dims), calculate_matrix_score(&dims));
        assert_eq!(
            calculate_humanity_index(&components),
            calculate_humanity_index(&components)
        );
    }

    #[test]
    fn test_score_profile_skips_missing_sections() {
        let profile = Profile {
            influence: None,
            dimensions: Some(MatrixDimensions::uniform(100.0)),
            humanity: None,
        };
        let report = score_profile(&profile, &ScoringConfig::default());
        assert!(report.influence.is_none());
        assert!(report.humanity.is_none());
        assert_eq!(report.matrix.as_ref().map(|r| r.score.value()), Some(255));

        let metrics = report.metrics();
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].0, "Twin Matrix");
    }

    #[test]
    fn test_score_profile_uses_configured_weights() {
        let config = ScoringConfig {
            matrix_weights: None,
            humanity_weights: Some(HumanityWeights {
                human_verification: 1.0,
                task_completion: 0.0,
                social_binding: 0.0,
                wallet_binding: 0.0,
                community_engagement: 0.0,
            }),
        };
        let profile = Profile {
            influence: None,
            dimensions: None,
            humanity: Some(HumanityComponents {
                human_verification: 1.0,
                ..Default::default()
            }),
        };
        let report = score_profile(&profile, &config);
        assert_eq!(report.humanity.map(|r| r.score), Some(Score::MAX));
    }

    #[test]
    fn test_empty_report() {
        let report = score_profile(&Profile::default(), &ScoringConfig::default());
        assert!(report.is_empty());
        assert!(report.metrics().is_empty());
    }
}
