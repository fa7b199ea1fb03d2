pub mod config;
pub mod engine;
pub mod factors;
pub mod score;
pub mod validation;

pub use config::*;
pub use engine::{
    calculate_humanity_index, calculate_humanity_index_with, calculate_influence_score,
    calculate_matrix_score, calculate_matrix_score_with, humanity_breakdown, influence_breakdown,
    matrix_breakdown, score_profile, FactorContribution, ScoreReport, ScoreResult,
};
pub use factors::{HumanityComponents, MatrixDimensions, ScoreInput};
pub use score::Score;
pub use validation::validate_scoring;
