//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "holdem", about = "No-Limit Texas Hold'em against bot opponents")]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play an interactive session: one human seat, the rest bots
    Play {
        /// Number of bot opponents (1-8)
        #[arg(long)]
        bots: Option<usize>,
        /// Starting stack per seat
        #[arg(long)]
        chips: Option<u32>,
        /// Big-blind size
        #[arg(long)]
        blind: Option<u32>,
        /// RNG seed for reproducible deals
        #[arg(long)]
        seed: Option<u64>,
        /// Delay between bot actions in milliseconds (cosmetic)
        #[arg(long)]
        pace_ms: Option<u64>,
        /// Stop after this many hands
        #[arg(long)]
        hands: Option<u32>,
        /// Append JSONL hand records to this file
        #[arg(long)]
        log: Option<String>,
    },
    /// Deal one hand face-up and show every seat's best hand
    Deal {
        /// Number of seats (2-9)
        #[arg(long, default_value_t = 2)]
        seats: usize,
        /// RNG seed for deterministic dealing
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
