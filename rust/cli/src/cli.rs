//! Command-line argument types.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "parlor",
    version,
    about = "Card and dice simulations: five-card poker rounds and Yahtzee"
)]
pub struct ParlorCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deal five-card rounds from one shuffled deck until it runs out
    Poker {
        #[arg(long)]
        seed: Option<u64>,
        /// Comma-separated player names
        #[arg(long, value_delimiter = ',')]
        players: Option<Vec<String>>,
        /// Write one JSONL record per round
        #[arg(long)]
        output: Option<String>,
    },
    /// Play a Yahtzee game with a reroll strategy
    Yahtzee {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_delimiter = ',')]
        players: Option<Vec<String>>,
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..=100))]
        rounds: Option<u64>,
        /// baseline, high or random
        #[arg(long)]
        strategy: Option<String>,
        #[arg(long)]
        output: Option<String>,
    },
    /// Deal and classify a single poker round
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_delimiter = ',')]
        players: Option<Vec<String>>,
    },
    /// Walk a deck through the transform pipeline, printing each step
    Deck {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print a sample from the seeded random generator
    Rng {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
