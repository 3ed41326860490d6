use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};

use liftlog::classifier::classify;
use liftlog::domain::{ExerciseCategory, Set};
use liftlog::estimate::{EstimationResult, estimate_one_rm, project_weight_at_reps, rep_max_table};
use liftlog::formulas::Formula;
use liftlog::history::{HistoryFilter, build_history};
use liftlog::journal::Journal;

/// Highest rep count the calculator accepts.
const MAX_CALCULATOR_REPS: i64 = 30;

/// Personal strength log with 1RM estimation and personal-record tracking.
#[derive(Parser, Debug)]
#[command(name = "liftlog")]
#[command(about = "Estimate 1RMs, project rep maxes and track personal records")]
#[command(version)]
struct Args {
    /// Path to the JSON journal.
    /// Can also be set via LIFTLOG_JOURNAL environment variable.
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        env = "LIFTLOG_JOURNAL",
        default_value = "liftlog.json"
    )]
    journal: PathBuf,

    /// Unit label used when printing weights.
    /// Can also be set via LIFTLOG_UNIT environment variable.
    #[arg(long, global = true, env = "LIFTLOG_UNIT", default_value = "lbs")]
    unit: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate 1RM from a set and print a rep-max table.
    Estimate {
        weight: f64,
        #[arg(value_parser = clap::value_parser!(u32).range(1..=MAX_CALCULATOR_REPS))]
        reps: u32,
        /// Exercise category (compound, dumbbell, machine).
        #[arg(long, conflicts_with = "exercise")]
        category: Option<ExerciseCategory>,
        /// Exercise name to classify into a category.
        #[arg(long)]
        exercise: Option<String>,
    },
    /// Project the weight for each rep count from a known 1RM.
    Project {
        one_rm: f64,
        #[arg(required = true)]
        reps: Vec<u32>,
        /// Formula used for the projection.
        #[arg(long, default_value = "epley")]
        formula: Formula,
    },
    /// Print the category an exercise name falls into.
    Classify { name: String },
    /// Record a set in the journal.
    Log {
        exercise: String,
        weight: f64,
        reps: u32,
        /// Number of sets performed.
        #[arg(long)]
        sets: Option<u32>,
        /// Override the category derived from the exercise name.
        #[arg(long)]
        category: Option<ExerciseCategory>,
    },
    /// Show logged sets, newest first.
    History {
        /// Only show this exercise.
        #[arg(long)]
        exercise: Option<String>,
    },
    /// Manage the exercise list.
    Exercises {
        #[command(subcommand)]
        action: Option<ExerciseAction>,
    },
}

#[derive(Subcommand, Debug)]
enum ExerciseAction {
    /// List exercises.
    List,
    /// Add an exercise.
    Add { name: String },
    /// Remove an exercise. Logged sets are kept.
    Remove { name: String },
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    let unit = args.unit.as_str();

    match args.command {
        Command::Estimate {
            weight,
            reps,
            category,
            exercise,
        } => {
            let category = category.or_else(|| exercise.as_deref().map(classify));
            let result = estimate_one_rm(weight, reps, category)
                .with_context(|| format!("Cannot estimate 1RM for {} x {}", weight, reps))?;
            log::debug!(
                "selected {} / {} at {} reps",
                result.one_rm_formula,
                result.rep_max_formula,
                result.capped_reps
            );
            print_estimate(&result, unit)?;
        }
        Command::Project {
            one_rm,
            reps,
            formula,
        } => {
            println!("Rep maxes from {:.1} {} ({}):", one_rm, unit, formula);
            for target in reps {
                let weight = project_weight_at_reps(one_rm, target, formula)
                    .with_context(|| format!("Cannot project {} reps", target))?;
                println!("{:4} reps  {:8.1} {}", target, weight, unit);
            }
        }
        Command::Classify { name } => {
            println!("{}", classify(&name));
        }
        Command::Log {
            exercise,
            weight,
            reps,
            sets,
            category,
        } => {
            let mut journal = load_journal(&args.journal)?;
            let set = Set {
                weight,
                reps,
                category,
            };
            let recorded = journal
                .record(&exercise, set, sets, Utc::now())
                .with_context(|| format!("Failed to record {}", exercise))?;
            save_journal(&journal, &args.journal)?;

            println!(
                "{}: {} {} x {} reps -> 1RM {:.1} {} ({})",
                recorded.log.exercise,
                recorded.log.weight,
                unit,
                recorded.log.reps,
                recorded.log.calculated_one_rm,
                unit,
                recorded.estimate.description
            );
            if recorded.is_new_record {
                println!("New personal record!");
            }
        }
        Command::History { exercise } => {
            let journal = load_journal(&args.journal)?;
            let logs = journal.recent_logs();
            let entries = build_history(&logs, &HistoryFilter::from(exercise), Utc::now());

            if entries.is_empty() {
                println!("No workouts logged yet");
                return Ok(());
            }

            for entry in entries {
                let log = entry.log;
                let name = if entry.is_pr {
                    format!("{} 🏆", log.exercise)
                } else {
                    log.exercise.clone()
                };
                println!(
                    "{:24} {:>7} {} x {:<3} {:12} {:8.1} {}  {:3.0}% of PR",
                    name,
                    log.weight,
                    unit,
                    log.reps,
                    entry.when,
                    log.calculated_one_rm,
                    unit,
                    entry.percent_of_best
                );
            }
        }
        Command::Exercises { action } => {
            let mut journal = load_journal(&args.journal)?;
            match action.unwrap_or(ExerciseAction::List) {
                ExerciseAction::List => {
                    for name in journal.exercises.names() {
                        println!("{}", name);
                    }
                }
                ExerciseAction::Add { name } => {
                    let added = journal.exercises.add(&name)?.to_string();
                    save_journal(&journal, &args.journal)?;
                    println!("Added {}", added);
                }
                ExerciseAction::Remove { name } => {
                    if !journal.exercises.remove(&name) {
                        bail!("No exercise named {:?}", name);
                    }
                    save_journal(&journal, &args.journal)?;
                    println!("Removed {}", name);
                }
            }
        }
    }

    Ok(())
}

fn print_estimate(result: &EstimationResult, unit: &str) -> Result<()> {
    println!(
        "Estimated 1RM: {:.1} {} ({}, {} reps)",
        result.one_rm, unit, result.description, result.capped_reps
    );
    if let Some(category) = result.category {
        println!("Category: {}", category);
    }

    let table = rep_max_table(result, result.default_targets())?;
    println!();
    println!("Rep maxes ({}):", result.rep_max_formula);
    for row in table {
        println!("{:4} reps  {:8.1} {}", row.reps, row.weight, unit);
    }

    Ok(())
}

fn load_journal(path: &PathBuf) -> Result<Journal> {
    Journal::load(path).with_context(|| format!("Failed to load journal from {}", path.display()))
}

fn save_journal(journal: &Journal, path: &PathBuf) -> Result<()> {
    journal
        .save(path)
        .with_context(|| format!("Failed to save journal to {}", path.display()))?;
    log::info!("Journal saved to {}", path.display());
    Ok(())
}
