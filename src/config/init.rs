use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::Path;

use super::{ensure_parent_dir, Config};
use crate::scoring::ScoringConfig;

const HEADER: &str = "\
# twin-score configuration
# Each weight table must sum to 1.0. Delete a table to use the built-in weights.
";

/// Write a config file with the built-in weight tables spelled out.
///
/// Refuses to replace an existing file unless `force` is set. The write is
/// atomic, so a failed write never leaves a truncated config behind.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    ensure_parent_dir(path)?;

    let config = Config {
        scoring: Some(ScoringConfig::with_defaults()),
    };
    let yaml = serde_saphyr::to_string(&config).context("Failed to serialize default config")?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(HEADER.as_bytes())
        .context("Failed to write config")?;
    file.write_all(yaml.as_bytes())
        .context("Failed to write config")?;
    file.commit().context("Failed to save config")?;

    tracing::info!(path = %path.display(), "wrote default config");
    Ok(())
}
