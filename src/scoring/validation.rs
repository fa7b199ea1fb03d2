use super::config::ScoringConfig;

/// Allowed drift of a weight table's sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref weights) = config.matrix_weights {
        check_table("scoring.matrix_weights", &weights.entries(), &mut errors);
    }

    if let Some(ref weights) = config.humanity_weights {
        check_table("scoring.humanity_weights", &weights.entries(), &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_table(path: &str, entries: &[(&'static str, f64)], errors: &mut Vec<String>) {
    let mut table_ok = true;

    for (name, weight) in entries {
        if !weight.is_finite() {
            errors.push(format!("{}.{}: must be a finite number", path, name));
            table_ok = false;
        } else if *weight < 0.0 {
            errors.push(format!("{}.{}: must be non-negative", path, name));
            table_ok = false;
        }
    }

    // Sum is meaningless once an entry is already invalid
    if table_ok {
        let sum: f64 = entries.iter().map(|(_, w)| w).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            errors.push(format!("{}: weights must sum to 1.0 (got {})", path, sum));
        }
    }
}
