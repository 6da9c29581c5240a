use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use redos_guard::{logging, Engine, EngineConfig};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "redos-guard")]
#[command(version)]
#[command(about = "ReDoS analysis and auto-fix for WAF regex rules", long_about = None)]
struct Cli {
    /// JSON engine configuration (defaults apply to missing sections)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze patterns and print a batch report
    Scan {
        /// Patterns to analyze
        patterns: Vec<String>,

        /// File with one pattern per line (blank lines and `#` comments skipped)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Rewrite a flagged pattern
    Fix {
        pattern: String,

        /// Vulnerability label reported by `scan`
        vulnerability_type: String,
    },

    /// Time a pattern against sample strings
    Bench {
        pattern: String,

        /// Sample input; repeat for more
        #[arg(long = "sample", required = true)]
        samples: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.json_logs {
        logging::init_tracing_json();
    } else {
        logging::init_tracing();
    }

    let config = match &cli.config {
        Some(path) => EngineConfig::from_path(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let engine = Engine::new(config).context("building engine")?;

    let output = match cli.command {
        Commands::Scan { patterns, file } => {
            let mut all = patterns;
            if let Some(path) = file {
                all.extend(read_patterns(&path)?);
            }
            if all.is_empty() {
                bail!("no patterns given; pass them as arguments or with --file");
            }
            engine.analyze_batch(&all).to_json_string()?
        }
        Commands::Fix {
            pattern,
            vulnerability_type,
        } => engine.fix(&pattern, &vulnerability_type).to_json_string()?,
        Commands::Bench { pattern, samples } => engine
            .benchmark(&pattern, &samples)
            .with_context(|| format!("benchmarking {}", pattern))?
            .to_json_string()?,
    };

    println!("{}", output);
    Ok(())
}

fn read_patterns(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading patterns from {}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.trim().is_empty() && !l.trim_start().starts_with('#'))
        .map(str::to_string)
        .collect())
}
