use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::scoring::{HumanityComponents, MatrixDimensions, ScoreInput};

/// Inputs for one scoring run. Every section is optional; absent sections
/// are simply not scored.
///
/// Example YAML:
/// ```yaml
/// influence:
///   followers: 1200
///   engagement: 340
///   saves: 45
///   months_active: 8
/// dimensions:
///   identity: 80
///   social: 55
/// humanity:
///   human_verification: 1.0
///   task_completion: 0.5
/// ```
///
/// Fields also accept their camelCase spelling (`monthsActive`,
/// `humanVerification`). Give only one spelling per field: writing both is
/// reported as a duplicate of the snake_case name.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    #[serde(default)]
    pub influence: Option<ScoreInput>,

    #[serde(default)]
    pub dimensions: Option<MatrixDimensions>,

    #[serde(default)]
    pub humanity: Option<HumanityComponents>,
}

/// Load a scoring profile from a YAML file.
pub fn load_profile(path: &Path) -> Result<Profile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile at {}", path.display()))?;

    let profile: Profile = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse profile: invalid YAML in {}", path.display()))?;

    Ok(profile)
}
