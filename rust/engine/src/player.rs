use crate::cards::Card;
use serde::{Deserialize, Serialize};

/// Whether a seat is driven by the human player or by an automated source.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Role {
    /// The human seat
    User,
    /// An automated opponent
    Bot,
}

/// Per-hand standing of a seat.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// In the hand and still able to act
    Active,
    /// Folded this hand
    Folded,
    /// All chips committed, in the hand but no longer acting
    AllIn,
    /// Out of chips, skipped entirely
    Busted,
}

impl PlayerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerStatus::Active => "ACTIVE",
            PlayerStatus::Folded => "FOLDED",
            PlayerStatus::AllIn => "ALL_IN",
            PlayerStatus::Busted => "BUSTED",
        }
    }
}

/// Represents a player action during a betting round.
///
/// `Bet` and `Raise` carry the *total* amount the player wants committed
/// for the current round, not a delta on top of a previous bet.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (no bet, only valid if no bet to call)
    Check,
    /// Call the current bet
    Call,
    /// Open the betting to the given round total
    Bet(u32),
    /// Raise the round total to the given amount
    Raise(u32),
    /// Commit all remaining chips
    AllIn,
}

impl PlayerAction {
    pub fn label(&self) -> String {
        match self {
            PlayerAction::Fold => "Fold".to_string(),
            PlayerAction::Check => "Check".to_string(),
            PlayerAction::Call => "Call".to_string(),
            PlayerAction::Bet(n) => format!("Bet {}", n),
            PlayerAction::Raise(n) => format!("Raise {}", n),
            PlayerAction::AllIn => "All-in".to_string(),
        }
    }
}

/// A seat at the table: chip stack, hole cards, and per-hand betting state.
///
/// Invariants maintained by the state machine:
/// - `current_bet <= total_hand_bet` (current_bet resets each street,
///   total_hand_bet accumulates for the whole hand)
/// - `chips + total_hand_bet` is constant within a hand until payout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Seat identifier, fixed for the session
    pub id: usize,
    /// Display name
    pub name: String,
    /// Human or bot seat
    pub role: Role,
    /// Current chip stack
    pub chips: u32,
    /// Hole cards: empty between hands, exactly 2 during a hand
    pub hole: Vec<Card>,
    /// Standing within the current hand
    pub status: PlayerStatus,
    /// Chips committed in the current betting round
    pub current_bet: u32,
    /// Chips committed across the whole hand
    pub total_hand_bet: u32,
    /// Most recent action this round, cleared on each street
    pub last_action: Option<PlayerAction>,
}

impl Player {
    pub fn new(id: usize, name: impl Into<String>, role: Role, chips: u32) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            chips,
            hole: Vec::with_capacity(2),
            status: if chips > 0 {
                PlayerStatus::Active
            } else {
                PlayerStatus::Busted
            },
            current_bet: 0,
            total_hand_bet: 0,
            last_action: None,
        }
    }

    /// Clear all per-hand state and re-derive status from the stack.
    pub fn reset_for_hand(&mut self) {
        self.hole.clear();
        self.current_bet = 0;
        self.total_hand_bet = 0;
        self.last_action = None;
        self.status = if self.chips > 0 {
            PlayerStatus::Active
        } else {
            PlayerStatus::Busted
        };
    }

    /// Clear per-street state at a phase boundary.
    pub fn reset_for_street(&mut self) {
        self.current_bet = 0;
        self.last_action = None;
    }

    pub fn give_card(&mut self, c: Card) {
        debug_assert!(self.hole.len() < 2, "hole cards already full");
        self.hole.push(c);
    }

    /// Move `amount` chips (capped at the stack) into the current round's
    /// bet. Returns the amount actually committed. Marks the seat all-in
    /// when the stack empties.
    pub fn commit(&mut self, amount: u32) -> u32 {
        let amount = amount.min(self.chips);
        self.chips -= amount;
        self.current_bet += amount;
        self.total_hand_bet += amount;
        if self.chips == 0 && self.status == PlayerStatus::Active {
            self.status = PlayerStatus::AllIn;
        }
        amount
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    /// The largest round total this seat can reach: stack plus what is
    /// already in front of it this round.
    pub fn max_round_total(&self) -> u32 {
        self.chips + self.current_bet
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}
