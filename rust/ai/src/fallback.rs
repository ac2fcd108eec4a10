//! Deterministic fallback policy.
//!
//! Used whenever a decision source fails, times out, or returns an
//! illegal action. Randomized but driven entirely by the caller's RNG,
//! so a seeded run replays the same substitutions.
//!
//! Policy:
//! - free to act: 20% open the minimum bet (if affordable), else check
//! - cannot afford the call: 60% all-in, else fold
//! - facing a bet over half the stack: 10% all-in, else fold
//! - otherwise: 40% fold, 50% call, 10% minimum raise (call when the
//!   stack cannot reach the raise)

use rand::Rng;

use holdem_engine::game::GameView;
use holdem_engine::player::PlayerAction;
use holdem_engine::rules::min_raise_target;

pub fn fallback_action(view: &GameView, seat: usize, rng: &mut impl Rng) -> PlayerAction {
    let me = &view.players[seat];
    let to_call = view.to_call(seat);
    let roll: u32 = rng.random_range(0..100);

    if to_call == 0 {
        return if roll < 20 && me.chips >= view.min_bet {
            PlayerAction::Bet(view.min_bet)
        } else {
            PlayerAction::Check
        };
    }

    // a full call is out of reach; the affordable half-stack test below
    // would otherwise shadow this branch
    if to_call >= me.chips {
        return if roll < 60 {
            PlayerAction::AllIn
        } else {
            PlayerAction::Fold
        };
    }

    if to_call > me.chips / 2 {
        return if roll < 10 {
            PlayerAction::AllIn
        } else {
            PlayerAction::Fold
        };
    }

    if roll < 40 {
        PlayerAction::Fold
    } else if roll < 90 {
        PlayerAction::Call
    } else {
        let target = min_raise_target(view.current_high_bet, view.min_bet);
        if me.chips + me.current_bet >= target {
            PlayerAction::Raise(target)
        } else {
            PlayerAction::Call
        }
    }
}
