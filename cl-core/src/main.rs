use anyhow::Result;
use clap::{Parser, Subcommand};
use exercise::{decompose, validate, ExerciseGenerator, Operation, TokenGroup};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use wheel::{month_angle, pick_month, plan_spin, Season, SpinAnimation};

#[derive(Parser)]
#[command(name = "cl-core")]
#[command(about = "CountingLab core CLI - exercise generation, decomposition, validation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an exercise for the given digit count
    Generate {
        /// Number of digits in the target (1-9)
        digits: u32,
        /// Operation: sum or difference
        #[arg(long, default_value = "sum")]
        operation: String,
        /// Fixed seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Split a token pool into place-value display groups
    Decompose {
        /// Total tokens in the pool
        total: u32,
        /// Number of digits shown on the board
        digits: u32,
    },
    /// Check a bin split against a target
    Validate {
        /// Tokens in bin A
        bin_a: u32,
        /// Tokens in bin B
        bin_b: u32,
        /// Target number
        target: u32,
        /// Operation: sum or difference
        #[arg(long, default_value = "sum")]
        operation: String,
        /// Token budget (defaults to unlimited)
        #[arg(long)]
        budget: Option<u32>,
    },
    /// Spin the season or month wheel and dump the frame angles
    Spin {
        /// Wheel mode: season or month
        #[arg(long, default_value = "season")]
        mode: String,
        /// Fixed seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Rotation the wheel currently rests at
        #[arg(long, default_value_t = 0.0)]
        current: f32,
    },
}

#[derive(Debug, Serialize)]
struct DecomposeResult {
    total: u32,
    digits: u32,
    groups: Vec<TokenGroup>,
}

#[derive(Debug, Serialize)]
struct ValidateResult {
    bin_a: u32,
    bin_b: u32,
    target: u32,
    operation: Operation,
    budget: u32,
    correct: bool,
}

#[derive(Debug, Serialize)]
struct SpinResult {
    mode: String,
    landed_on: String,
    target_rotation: f32,
    final_angle: f32,
    frames: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            digits,
            operation,
            seed,
        } => {
            let operation: Operation = operation
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;
            let mut generator = match seed {
                Some(seed) => ExerciseGenerator::new(seed),
                None => ExerciseGenerator::from_entropy(),
            };
            let exercise = generator.generate(digits, operation);
            println!("{}", serde_json::to_string_pretty(&exercise)?);
        }
        Commands::Decompose { total, digits } => {
            let result = DecomposeResult {
                total,
                digits,
                groups: decompose(total, digits),
            };
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Validate {
            bin_a,
            bin_b,
            target,
            operation,
            budget,
        } => {
            let operation: Operation = operation
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;
            let budget = budget.unwrap_or(u32::MAX);
            let result = ValidateResult {
                bin_a,
                bin_b,
                target,
                operation,
                budget,
                correct: validate(bin_a, bin_b, target, operation, budget),
            };
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Spin {
            mode,
            seed,
            current,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let (landed_on, sector_angle) = match mode.as_str() {
                "season" => {
                    let season = Season::pick(&mut rng);
                    (season.as_str().to_string(), season.angle())
                }
                "month" => {
                    let month = pick_month(&mut rng);
                    (format!("month-{}", month), month_angle(month))
                }
                other => anyhow::bail!("unknown wheel mode: {}", other),
            };

            let target_rotation = plan_spin(&mut rng, current, sector_angle);
            let animation = SpinAnimation::new(current, target_rotation);
            let final_angle = animation.final_angle();
            let frames = animation.count();

            let result = SpinResult {
                mode,
                landed_on,
                target_rotation,
                final_angle,
                frames,
            };
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
