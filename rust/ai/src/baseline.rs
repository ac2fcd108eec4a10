//! Rule-based baseline bot.
//!
//! Preflop it plays a static strength chart over its hole cards;
//! postflop it evaluates its made hand against the board and weighs the
//! cost to call against the pot. Fully deterministic so simulated
//! sessions are reproducible.

use holdem_engine::cards::Card;
use holdem_engine::game::GameView;
use holdem_engine::hand;
use holdem_engine::player::PlayerAction;
use holdem_engine::rules::min_raise_target;

use crate::{DecisionError, DecisionSource};

#[derive(Debug, Clone, Default)]
pub struct BaselineBot;

impl BaselineBot {
    pub fn new() -> Self {
        Self
    }

    /// Static preflop strength on a 0-10 scale.
    ///
    /// - 9-10: premium (AA, KK, QQ, JJ, AKs)
    /// - 7-8: strong (TT-99, AK, AQ)
    /// - 5-6: medium (88-77, broadway, good suited connectors)
    /// - 3-4: marginal (small pairs, Ax, low suited connectors)
    /// - 0-2: weak offsuit hands
    fn preflop_strength(hole: &[Card]) -> u8 {
        let (c1, c2) = (hole[0], hole[1]);
        let r1 = c1.rank as u8;
        let r2 = c2.rank as u8;
        let (high, low) = if r1 > r2 { (r1, r2) } else { (r2, r1) };
        let suited = c1.suit == c2.suit;

        if r1 == r2 {
            return match high {
                14 | 13 => 10,
                12 | 11 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }

        match (high, low) {
            (14, 13) => {
                if suited {
                    10
                } else {
                    8
                }
            }
            (14, 12) => {
                if suited {
                    8
                } else {
                    7
                }
            }
            (14, 11) => {
                if suited {
                    7
                } else {
                    6
                }
            }
            (14, 10) => {
                if suited {
                    6
                } else {
                    5
                }
            }
            (14, _) => {
                if suited {
                    5
                } else {
                    4
                }
            }
            (13, 12) => {
                if suited {
                    7
                } else {
                    6
                }
            }
            (13, 11) | (12, 11) => {
                if suited {
                    6
                } else {
                    5
                }
            }
            (13, 10) | (12, 10) => {
                if suited {
                    5
                } else {
                    4
                }
            }
            _ => {
                if suited && high - low <= 2 {
                    if high >= 9 {
                        5
                    } else {
                        4
                    }
                } else if high >= 11 && low >= 9 {
                    4
                } else {
                    2
                }
            }
        }
    }

    fn preflop_action(view: &GameView, seat: usize, hole: &[Card]) -> PlayerAction {
        let strength = Self::preflop_strength(hole);
        let to_call = view.to_call(seat);
        let me = &view.players[seat];

        if strength >= 8 {
            // open or re-raise; the engine clamps the target
            return PlayerAction::Raise(min_raise_target(view.current_high_bet, view.min_bet));
        }
        if strength >= 5 {
            // worth seeing a flop unless it costs a large slice of the stack
            return if to_call <= me.chips / 4 {
                PlayerAction::Call
            } else {
                PlayerAction::Fold
            };
        }
        if to_call == 0 {
            PlayerAction::Check
        } else if strength >= 3 && to_call <= view.min_bet {
            PlayerAction::Call
        } else {
            PlayerAction::Fold
        }
    }

    fn postflop_action(view: &GameView, seat: usize, hole: &[Card]) -> PlayerAction {
        let rank = hand::evaluate(hole, &view.community_cards);
        let to_call = view.to_call(seat);

        if rank.score >= 300 {
            // trips or better: build the pot
            let target = if view.current_high_bet == 0 {
                (view.pot / 2).max(view.min_bet)
            } else {
                min_raise_target(view.current_high_bet, view.min_bet)
            };
            return if view.current_high_bet == 0 {
                PlayerAction::Bet(target)
            } else {
                PlayerAction::Raise(target)
            };
        }
        if rank.score >= 100 {
            // made pair: call small bets, fold to pressure
            return if to_call == 0 {
                PlayerAction::Check
            } else if to_call <= view.pot / 2 {
                PlayerAction::Call
            } else {
                PlayerAction::Fold
            };
        }
        if to_call == 0 {
            PlayerAction::Check
        } else {
            PlayerAction::Fold
        }
    }
}

impl DecisionSource for BaselineBot {
    fn decide(&mut self, view: &GameView, seat: usize) -> Result<PlayerAction, DecisionError> {
        let hole = view.players[seat]
            .hole
            .clone()
            .ok_or_else(|| DecisionError(format!("hole cards for seat {} are masked", seat)))?;
        if hole.len() != 2 {
            return Err(DecisionError(format!(
                "expected 2 hole cards, got {}",
                hole.len()
            )));
        }
        Ok(if view.community_cards.is_empty() {
            Self::preflop_action(view, seat, &hole)
        } else {
            Self::postflop_action(view, seat, &hole)
        })
    }

    fn name(&self) -> &str {
        "BaselineBot"
    }
}
