//! # holdem-engine: Texas Hold'em table engine core
//!
//! A No-Limit Texas Hold'em hand-to-hand engine for one human seat and
//! any number of automated opponents. Owns chip accounting, betting-round
//! progression, hand evaluation, and showdown settlement, with seeded RNG
//! for reproducible deals.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`hand`] - Best-5-of-7 hand evaluation with coarse integer scoring
//! - [`player`] - Seat state, actions, and chip accounting
//! - [`rules`] - Bet/raise clamping and minimum-raise arithmetic
//! - [`game`] - The betting state machine and read-only snapshots
//! - [`showdown`] - Pot settlement and per-player results
//! - [`lifecycle`] - Between-hands continuation and button rotation
//! - [`logger`] - JSONL hand-history records
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::game::{GameState, Phase};
//! use holdem_engine::player::{Player, PlayerAction, Role};
//!
//! let players = vec![
//!     Player::new(0, "You", Role::User, 1_000),
//!     Player::new(1, "Bot 1", Role::Bot, 1_000),
//!     Player::new(2, "Bot 2", Role::Bot, 1_000),
//! ];
//! let mut game = GameState::new(players, 20, 42);
//! game.start_hand().unwrap();
//!
//! // first to act folds; the machine advances the turn by itself
//! let seat = game.active_player_index().unwrap();
//! game.apply_action(seat, PlayerAction::Fold).unwrap();
//! assert_eq!(game.phase(), Phase::Preflop);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All deals are reproducible from the session seed:
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//!
//! let mut deck1 = Deck::new_with_seed(42);
//! let mut deck2 = Deck::new_with_seed(42);
//! deck1.shuffle();
//! deck2.shuffle();
//! assert_eq!(deck1.deal_card(), deck2.deal_card());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod lifecycle;
pub mod logger;
pub mod player;
pub mod rules;
pub mod showdown;
