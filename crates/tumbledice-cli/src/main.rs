// ABOUTME: Command-line interface for the tumbledice dice roller.
// ABOUTME: Provides roll and simulation commands with optional JSON output.

use clap::{Args, Parser, Subcommand};
use tumbledice::{
    format_dice_roll, format_drop_roll, simulate, simulate_seeded, Compare, DropKind, DropRule,
    ExplodeMode, FastRng, Notation, Outcome, RollConfig, SimResult, SuccessRule, Vantage,
};

#[derive(Parser)]
#[command(name = "tumbledice")]
#[command(about = "Dice mechanics roller for tabletop games")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll dice using the given notation
    Roll {
        /// Dice notation (e.g., "3d6", "d20")
        notation: String,

        #[command(flatten)]
        mechanics: Mechanics,

        /// Seed the RNG for a reproducible roll
        #[arg(long)]
        seed: Option<u64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Simulate rolling a configuration many times
    Sim {
        /// Dice notation (e.g., "2d6")
        notation: String,

        #[command(flatten)]
        mechanics: Mechanics,

        /// Number of trials to run
        #[arg(short, long, default_value = "10000")]
        n: usize,

        /// Seed the RNG for a reproducible simulation
        #[arg(long)]
        seed: Option<u64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Roll mechanics shared by both subcommands, mirroring the keys a front
/// end can put in a shareable configuration.
#[derive(Args)]
struct Mechanics {
    /// Exploding dice: keep rolling while the maximum face appears
    #[arg(long, conflicts_with = "exploding_once")]
    exploding: bool,

    /// Exploding dice, at most one extra roll per die
    #[arg(long)]
    exploding_once: bool,

    /// Drop the N lowest dice before summing
    #[arg(long, value_name = "N", conflicts_with = "drop_highest")]
    drop_lowest: Option<u32>,

    /// Drop the N highest dice before summing
    #[arg(long, value_name = "N")]
    drop_highest: Option<u32>,

    /// Count kept dice >= T as successes
    #[arg(long, value_name = "T", conflicts_with_all = ["count_exactly", "count_at_most"])]
    count_at_least: Option<i64>,

    /// Count kept dice == T as successes
    #[arg(long, value_name = "T", conflicts_with = "count_at_most")]
    count_exactly: Option<i64>,

    /// Count kept dice <= T as successes
    #[arg(long, value_name = "T")]
    count_at_most: Option<i64>,

    /// Roll the whole configuration twice and keep the better outcome
    #[arg(long, conflicts_with = "disadvantage")]
    advantage: bool,

    /// Roll the whole configuration twice and keep the worse outcome
    #[arg(long)]
    disadvantage: bool,
}

impl Mechanics {
    fn into_config(self, notation: &Notation) -> RollConfig {
        let explode = if self.exploding {
            Some(ExplodeMode::Unlimited)
        } else if self.exploding_once {
            Some(ExplodeMode::Once)
        } else {
            None
        };

        let drop = self
            .drop_lowest
            .map(|count| DropRule {
                kind: DropKind::Lowest,
                count,
            })
            .or(self.drop_highest.map(|count| DropRule {
                kind: DropKind::Highest,
                count,
            }));

        let success = self
            .count_at_least
            .map(|threshold| SuccessRule {
                compare: Compare::GreaterOrEqual,
                threshold,
            })
            .or(self.count_exactly.map(|threshold| SuccessRule {
                compare: Compare::Equal,
                threshold,
            }))
            .or(self.count_at_most.map(|threshold| SuccessRule {
                compare: Compare::LessOrEqual,
                threshold,
            }));

        let vantage = if self.advantage {
            Some(Vantage::Advantage)
        } else if self.disadvantage {
            Some(Vantage::Disadvantage)
        } else {
            None
        };

        RollConfig {
            explode,
            drop,
            success,
            vantage,
            ..RollConfig::new(notation.num_dice, notation.dice_type)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            notation,
            mechanics,
            seed,
            json,
        } => run_roll(&notation, mechanics, seed, json),
        Commands::Sim {
            notation,
            mechanics,
            n,
            seed,
            json,
        } => run_sim(&notation, mechanics, n, seed, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_roll(
    notation: &str,
    mechanics: Mechanics,
    seed: Option<u64>,
    json: bool,
) -> tumbledice::Result<()> {
    let parsed: Notation = notation.parse()?;
    let config = mechanics.into_config(&parsed);

    let mut rng = match seed {
        Some(seed) => FastRng::with_seed(seed),
        None => FastRng::new(),
    };
    let outcome = config.roll_with_rng(&mut rng)?;

    if json {
        print_roll_json(&parsed, &config, &outcome);
    } else {
        print_roll_text(&parsed, &config, &outcome);
    }
    Ok(())
}

fn run_sim(
    notation: &str,
    mechanics: Mechanics,
    n: usize,
    seed: Option<u64>,
    json: bool,
) -> tumbledice::Result<()> {
    let parsed: Notation = notation.parse()?;
    let config = mechanics.into_config(&parsed);

    let result = match seed {
        Some(seed) => simulate_seeded(&config, n, seed)?,
        None => simulate(&config, n)?,
    };

    if json {
        print_sim_json(&result);
    } else {
        print_sim_histogram(notation, &result);
    }
    Ok(())
}

fn print_roll_text(notation: &Notation, config: &RollConfig, outcome: &Outcome) {
    if let Some(rule) = &config.drop {
        println!(
            "{}",
            format_drop_roll(
                notation.num_dice,
                notation.dice_type,
                &rule.kind.to_string(),
                rule.count as usize,
                &outcome.rolls,
                &outcome.kept,
                outcome.total,
            )
        );
    } else if config.explode.is_some() {
        let chains: Vec<String> = outcome.breakdowns.iter().map(|b| b.display()).collect();
        println!(
            "Rolled {}d{}! ({}) = {}",
            notation.num_dice,
            notation.dice_type,
            chains.join(", "),
            outcome.total
        );
    } else {
        println!(
            "{}",
            format_dice_roll(
                notation.num_dice,
                notation.dice_type,
                &outcome.rolls,
                outcome.total,
            )
        );
    }

    if let Some(tally) = &outcome.tally {
        let word = if tally.success_count == 1 {
            "success"
        } else {
            "successes"
        };
        println!("{} {}", tally.success_count, word);
    }

    if let Some(discarded) = &outcome.discarded {
        println!(
            "(discarded {} roll: score {})",
            config.vantage.map(|v| v.to_string()).unwrap_or_default(),
            discarded.score()
        );
    }
}

fn print_roll_json(notation: &Notation, config: &RollConfig, outcome: &Outcome) {
    println!(
        "{}",
        serde_json::to_string_pretty(&roll_json(notation, config, outcome)).unwrap()
    );
}

fn roll_json(notation: &Notation, config: &RollConfig, outcome: &Outcome) -> serde_json::Value {
    use serde_json::json;

    let mut value = json!({
        "notation": notation.to_string(),
        "rolls": outcome.rolls,
        "total": outcome.total,
        "score": outcome.score(),
    });
    let map = value.as_object_mut().unwrap();

    if config.explode.is_some() {
        let chains: Vec<String> = outcome.breakdowns.iter().map(|b| b.display()).collect();
        map.insert("breakdowns".to_string(), json!(chains));
    }
    if config.drop.is_some() {
        map.insert("kept".to_string(), json!(outcome.kept));
        map.insert("dropped".to_string(), json!(outcome.dropped));
    }
    if let Some(tally) = &outcome.tally {
        map.insert("success_count".to_string(), json!(tally.success_count));
        map.insert("successes".to_string(), json!(tally.successes));
        map.insert("failures".to_string(), json!(tally.failures));
    }
    if let Some(discarded) = &outcome.discarded {
        map.insert(
            "discarded".to_string(),
            roll_json(notation, config, discarded),
        );
    }

    value
}

fn print_sim_json(result: &SimResult) {
    use serde_json::json;

    let output = json!({
        "n": result.n,
        "min": result.min,
        "max": result.max,
        "mean": result.mean,
        "std_dev": result.std_dev,
        "distribution": result.distribution,
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

fn print_sim_histogram(notation: &str, result: &SimResult) {
    println!("{} (n={})", notation, result.n);
    println!();

    let outcomes = result.sorted_outcomes();
    let max_count = outcomes.iter().map(|(_, c)| *c).max().unwrap_or(1);
    let max_bar_width = 40;

    for (value, count) in outcomes {
        let pct = (count as f64 / result.n as f64) * 100.0;
        let bar_width = (count as f64 / max_count as f64 * max_bar_width as f64) as usize;
        let bar: String = "█".repeat(bar_width);

        println!("{:>4}: {:40} {:5.1}%", value, bar, pct);
    }

    println!();
    println!("mean: {:.2}, std: {:.2}", result.mean, result.std_dev);
}
