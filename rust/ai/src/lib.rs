//! # holdem-ai: automated opponents for the hold'em engine
//!
//! Decision sources for bot seats. A source only ever sees a read-only
//! [`GameView`] snapshot, never the live game state, and may fail or
//! return something illegal; the session driver validates every returned
//! action and substitutes the deterministic [`fallback`] policy when a
//! source misbehaves, so a hand always progresses.
//!
//! ## Components
//!
//! - [`DecisionSource`] - the interface bot seats implement
//! - [`baseline`] - a rule-based bot built on hand strength and pot odds
//! - [`fallback`] - the engine's deterministic fallback policy
//! - [`create_source`] - factory for sources by name

use std::fmt;

use holdem_engine::game::GameView;
use holdem_engine::player::PlayerAction;

pub mod baseline;
pub mod fallback;

/// A decision source failed to produce an action. The driver treats this
/// the same as an illegal action: log it and fall back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionError(pub String);

impl fmt::Display for DecisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decision source error: {}", self.0)
    }
}

impl std::error::Error for DecisionError {}

/// Interface for automated seats.
///
/// `view` is the snapshot taken for the acting seat (its own hole cards
/// visible, everyone else's masked). Implementations must not assume the
/// returned action will be played verbatim: the engine clamps amounts
/// and the driver replaces illegal actions with the fallback policy.
pub trait DecisionSource: Send + Sync {
    /// Choose an action for `seat` given the current snapshot.
    fn decide(&mut self, view: &GameView, seat: usize) -> Result<PlayerAction, DecisionError>;

    /// Identifier for logs and the UI.
    fn name(&self) -> &str;
}

/// Create a decision source by name. `"baseline"` is the only built-in.
pub fn create_source(kind: &str) -> Result<Box<dyn DecisionSource>, DecisionError> {
    match kind {
        "baseline" => Ok(Box::new(baseline::BaselineBot::new())),
        other => Err(DecisionError(format!("unknown source kind: {}", other))),
    }
}
