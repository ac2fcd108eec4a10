use crate::game::{GameState, Phase};
use crate::player::PlayerStatus;

/// Whether the session continues after the hand that just finished.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SessionOutcome {
    /// Another hand can be dealt
    Continue,
    /// The human seat is out of chips
    Defeat,
    /// Every bot seat is out of chips
    Victory,
}

/// Between-hands settlement: re-derive every seat's status from its
/// stack, detect session end, and otherwise advance the dealer button one
/// live seat.
///
/// On `Defeat` or `Victory` the state moves to `GameOver` and no further
/// hand may start.
pub fn settle_between_hands(state: &mut GameState) -> SessionOutcome {
    for p in &mut state.players {
        p.status = if p.chips > 0 {
            PlayerStatus::Active
        } else {
            PlayerStatus::Busted
        };
    }

    let human_busted = state
        .players
        .iter()
        .any(|p| p.is_user() && p.status == PlayerStatus::Busted);
    let bots_standing = state
        .players
        .iter()
        .any(|p| !p.is_user() && p.status != PlayerStatus::Busted);

    if human_busted {
        state.phase = Phase::GameOver;
        state.message = "You're out of chips. Game over.".to_string();
        return SessionOutcome::Defeat;
    }
    if !bots_standing {
        state.phase = Phase::GameOver;
        state.message = "All opponents are busted. You win!".to_string();
        return SessionOutcome::Victory;
    }

    let n = state.players.len();
    state.dealer_index = (1..=n)
        .map(|k| (state.dealer_index + k) % n)
        .find(|&i| state.players[i].status == PlayerStatus::Active)
        .unwrap_or(state.dealer_index);
    SessionOutcome::Continue
}
