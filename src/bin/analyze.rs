//! Normal-form game analyzer.
//!
//! Reports dominance, equilibria, and security strategies for payoff files,
//! and plays iterated matches between strategy agents.
use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use normalform::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, global = true, help = "Log each analysis step")]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Analyze one or more payoff files", alias = "r")]
    Report {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[arg(long, default_value = "weak", value_parser = weak, help = "weak | proper")]
        weak: Dominance,
        #[arg(long, help = "Emit JSON instead of text")]
        json: bool,
    },
    #[command(about = "Play solution-concept agents on a payoff file", alias = "s")]
    Simulate {
        #[arg(required = true)]
        file: PathBuf,
        #[arg(long, default_value_t = SIMULATION_ROUNDS)]
        rounds: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    #[command(about = "Play two named agents on the prisoner's dilemma", alias = "d")]
    Duel {
        #[arg(required = true, help = "tft | grudge | cooperate | defect | random")]
        p1: String,
        #[arg(required = true)]
        p2: String,
        #[arg(long, default_value_t = SIMULATION_ROUNDS)]
        rounds: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Only the two weak relations; strict dominance is always reported.
fn weak(s: &str) -> Result<Dominance, String> {
    match s.parse::<Dominance>() {
        Ok(Dominance::Strict) => Err(String::from("strict is not a weak relation")),
        Ok(relation) => Ok(relation),
        Err(e) => Err(e.to_string()),
    }
}

fn rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

fn load(file: &PathBuf) -> anyhow::Result<PayoffMatrix> {
    PayoffMatrix::from_file(file).with_context(|| format!("loading {}", file.display()))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Warn,
    });
    match args.command {
        Command::Report { files, weak, json } => {
            for file in files {
                let matrix = load(&file)?;
                let report = Report::analyze(&matrix, weak)
                    .with_context(|| format!("analyzing {}", file.display()))?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    println!("{}", file.display());
                    println!("{}", matrix);
                    println!("{}", report);
                }
            }
        }
        Command::Simulate { file, rounds, seed } => {
            let matrix = load(&file)?;
            let ref mut rng = rng(seed);
            println!("Simulating games for {}", file.display());
            println!();
            for (p1, p2) in lineup(&matrix)? {
                println!("{}", Match::new(&matrix, p1, p2).play(rounds, rng)?);
            }
        }
        Command::Duel {
            p1,
            p2,
            rounds,
            seed,
        } => {
            let ref matrix = dilemma();
            let ref mut rng = rng(seed);
            let p1 = agent(&p1, matrix.rows())?;
            let p2 = agent(&p2, matrix.cols())?;
            println!("{}", Match::new(matrix, p1, p2).play(rounds, rng)?);
        }
    }
    Ok(())
}
