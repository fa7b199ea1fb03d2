use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 4;
const EXIT_OUTPUT: i32 = 5;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a profile file
    Score {
        /// Path to the profile YAML (influence, dimensions, humanity sections)
        profile: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Show per-factor contributions under the score table
        #[arg(short, long)]
        breakdown: bool,
    },
    /// Print the weight tables in effect
    Weights,
    /// Write a config file with the built-in weights
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "twin-score")]
#[command(about = "Influence, twin-matrix and humanity-index scores on a 0-255 scale")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/twin-score/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Load and validate the scoring config, exiting on any error
fn load_scoring(config_path: Option<PathBuf>) -> twin_score::scoring::ScoringConfig {
    let config = match twin_score::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let effective_scoring = config.effective_scoring();
    if let Err(errors) = twin_score::scoring::validate_scoring(&effective_scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }
    effective_scoring
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.map(PathBuf::from);
    let use_colors = !cli.no_color && twin_score::output::should_use_colors();

    match cli.command {
        Commands::Init { force } => {
            let path = match config_path {
                Some(p) => p,
                None => match twin_score::config::get_config_path() {
                    Ok(p) => p,
                    Err(e) => {
                        eprintln!("Config error: {:#}", e);
                        std::process::exit(EXIT_CONFIG);
                    }
                },
            };
            if let Err(e) = twin_score::config::write_default_config(&path, force) {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
            println!("Wrote default config to {}", path.display());
        }
        Commands::Score {
            profile,
            format,
            breakdown,
        } => {
            let effective_scoring = load_scoring(config_path);
            let profile = match twin_score::profile::load_profile(&profile) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Profile error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };

            let report = twin_score::scoring::score_profile(&profile, &effective_scoring);
            for (label, result) in report.metrics() {
                tracing::debug!(metric = label, score = %result.score, raw = result.raw, "scored");
            }

            match format {
                OutputFormat::Table => {
                    println!("{}", twin_score::output::format_score_table(&report, use_colors));
                    if breakdown || cli.verbose {
                        for (label, result) in report.metrics() {
                            println!();
                            println!(
                                "{}",
                                twin_score::output::format_breakdown(label, result, use_colors)
                            );
                        }
                    }
                }
                OutputFormat::Json => match twin_score::output::format_json(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Output error: {:#}", e);
                        std::process::exit(EXIT_OUTPUT);
                    }
                },
            }
        }
        Commands::Weights => {
            let effective_scoring = load_scoring(config_path);
            println!(
                "{}",
                twin_score::output::format_weights(&effective_scoring, use_colors)
            );
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
