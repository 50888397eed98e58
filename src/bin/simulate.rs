//! Simulate Binary
//!
//! Plays an automated player against the computer and reports the score.
//!
//! Options: --rounds, --player, --seed, --json, --verbose

use clap::Parser;
use colored::Colorize;
use minusone::*;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Seat {
    /// random picks and keeps
    Fish,
    /// distinct picks, maximin keep
    Shark,
}

#[derive(Debug, Parser)]
#[command(about = "Play rock-paper-scissors minus one against the computer")]
struct Args {
    /// Rounds to play
    #[arg(short, long, default_value_t = ROUNDS)]
    rounds: usize,
    /// Who sits in the player's seat
    #[arg(short, long, value_enum, default_value_t = Seat::Shark)]
    player: Seat,
    /// Seed the table and player for a repeatable run
    #[arg(short, long)]
    seed: Option<u64>,
    /// Print the final score as JSON
    #[arg(long)]
    json: bool,
    /// Log every round
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    })?;
    let table = args.seed.map(Table::seeded).unwrap_or_default();
    let mut score = Score::default();
    match args.player {
        Seat::Fish => {
            let fish = args.seed.map(Fish::seeded).unwrap_or_default();
            Arena::new(table, fish).play(args.rounds, &mut score)?
        }
        Seat::Shark => {
            let shark = args.seed.map(Shark::seeded).unwrap_or_default();
            Arena::new(table, shark).play(args.rounds, &mut score)?
        }
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&score)?);
    } else {
        summarize(&score);
    }
    Ok(())
}

fn summarize(score: &Score) {
    let rounds = score.rounds().max(1) as f32;
    let rate = |n: u64| format!("{:>6.2}%", 100. * n as f32 / rounds);
    println!("{}", score.to_string().bold());
    println!("  {} {}", "player  ".green(), rate(score.player()));
    println!("  {} {}", "computer".red(), rate(score.computer()));
    println!("  {} {}", "draw    ".dimmed(), rate(score.draws()));
}
