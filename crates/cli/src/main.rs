use anyhow::Result;
use clap::{Parser, Subcommand};

use hex_probe::commands;

/// Round-trip validation CLI for paired hex/unknown encodings.
///
/// This CLI is a thin wrapper around `probe-core` (exposed in code as
/// `probe_core`). All substantive logic lives in the library so it can be
/// tested thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "hex-probe",
    version,
    about = "Rule inference and round-trip validation for hex/unknown encoding pairs",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full pipeline over a corpus file.
    ///
    /// This will:
    /// - Infer the best-fitting rule from the sample pairs.
    /// - Validate every entry in both directions.
    /// - Write `report_<timestamp>.json` and `summary_<timestamp>.json` into
    ///   the output directory and record the run in the ledger.
    Run {
        /// Path to the input corpus JSON file.
        #[arg(long)]
        input: String,

        /// Directory for output files (created if missing).
        #[arg(long, default_value = "output")]
        output_dir: String,

        /// Optional probe config file (YAML or JSON by extension).
        #[arg(long)]
        config: Option<String>,

        /// Override the analysis confidence threshold.
        #[arg(long)]
        threshold: Option<f64>,

        /// Override the minimum usable sample count.
        #[arg(long)]
        min_samples: Option<usize>,

        /// Skip hashing the corpus file (stores no hash in the ledger).
        #[arg(long, default_value_t = false)]
        skip_hash: bool,

        /// Emit the full report JSON instead of the human-readable summary.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Score every candidate rule against a corpus without validating.
    ///
    /// Prints the full competition table. Exits non-zero when no candidate
    /// clears the confidence threshold.
    Analyze {
        /// Path to the input corpus JSON file.
        #[arg(long)]
        input: String,

        /// Optional probe config file (YAML or JSON by extension).
        #[arg(long)]
        config: Option<String>,

        /// Override the analysis confidence threshold.
        #[arg(long)]
        threshold: Option<f64>,

        /// Override the minimum usable sample count.
        #[arg(long)]
        min_samples: Option<usize>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Convert a single value with a named rule.
    Convert {
        /// The value to convert (hex or unknown-format, per --direction).
        #[arg(long)]
        value: String,

        /// Conversion direction: hex-to-unknown or unknown-to-hex.
        #[arg(long)]
        direction: String,

        /// Name of the rule to apply (see `rules`).
        #[arg(long)]
        rule: String,

        /// Optional probe config file (YAML or JSON by extension).
        #[arg(long)]
        config: Option<String>,
    },

    /// Validate a single hex/unknown pair against a named rule.
    Validate {
        /// Hex side of the pair.
        #[arg(long)]
        hex: String,

        /// Unknown-format side of the pair.
        #[arg(long)]
        unknown: String,

        /// Name of the rule to validate against (see `rules`).
        #[arg(long)]
        rule: String,

        /// Optional probe config file (YAML or JSON by extension).
        #[arg(long)]
        config: Option<String>,

        /// Emit the verdict as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print a positional XOR diff of a hex/unknown pair.
    Diff {
        /// Hex side of the pair.
        #[arg(long)]
        hex: String,

        /// Unknown-format side of the pair (must be hex-decodable).
        #[arg(long)]
        unknown: String,

        /// Maximum number of byte positions to print.
        #[arg(long, default_value_t = 32)]
        limit: usize,
    },

    /// List the candidate rules known to this binary.
    Rules {
        /// Optional probe config file (YAML or JSON by extension).
        #[arg(long)]
        config: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List recorded validation runs from an output directory's ledger.
    Runs {
        /// Output directory holding the run ledger.
        #[arg(long, default_value = "output")]
        output_dir: String,

        /// Only show runs for this corpus name.
        #[arg(long)]
        corpus: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run { input, output_dir, config, threshold, min_samples, skip_hash, json } => {
            commands::run_command(
                &input,
                &output_dir,
                config.as_deref(),
                threshold,
                min_samples,
                skip_hash,
                json,
            )?
        }
        Command::Analyze { input, config, threshold, min_samples, json } => {
            commands::analyze_command(&input, config.as_deref(), threshold, min_samples, json)?
        }
        Command::Convert { value, direction, rule, config } => {
            commands::convert_command(&value, &direction, &rule, config.as_deref())?
        }
        Command::Validate { hex, unknown, rule, config, json } => {
            commands::validate_command(&hex, &unknown, &rule, config.as_deref(), json)?
        }
        Command::Diff { hex, unknown, limit } => commands::diff_command(&hex, &unknown, limit)?,
        Command::Rules { config, json } => commands::list_rules_command(config.as_deref(), json)?,
        Command::Runs { output_dir, corpus, json } => {
            commands::list_runs_command(&output_dir, corpus.as_deref(), json)?
        }
    }

    Ok(())
}
