use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::{GameState, Phase};
use crate::hand::{self, HandRank};
use crate::player::{PlayerStatus, Role};

/// Sentinel score recorded when a hand ends with every opponent folded:
/// above any real hand, and no cards are revealed.
pub const UNCONTESTED_SCORE: u32 = 1000;

/// Per-player outcome snapshot produced once per hand at showdown and
/// discarded when the next hand starts.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownResult {
    pub player_id: usize,
    pub name: String,
    pub role: Role,
    /// Rank description, e.g. `"Two Pair (K's and 3's)"`
    pub hand_description: String,
    pub hole_cards: Vec<Card>,
    /// The best-5 cards; empty for folded players and uncontested wins
    pub winning_cards: Vec<Card>,
    /// Chips awarded from the pot
    pub amount: u32,
    pub is_winner: bool,
    pub score: u32,
}

/// Resolve the hand: award the pot, fill `showdown_results`, and move the
/// machine to `Showdown`.
///
/// With a single non-folded survivor the whole pot goes to them sight
/// unseen. Otherwise every survivor's best hand is evaluated and the pot
/// is split evenly among the top scores; the floor-division remainder
/// goes to the first winner in seat order after the dealer so that the
/// total awarded always equals the pot.
pub fn resolve(state: &mut GameState) {
    let qualifiers: Vec<usize> = state
        .players
        .iter()
        .filter(|p| !matches!(p.status, PlayerStatus::Folded | PlayerStatus::Busted))
        .map(|p| p.id)
        .collect();

    state.showdown_results.clear();

    if let [survivor] = qualifiers[..] {
        let pot = state.pot;
        state.players[survivor].add_chips(pot);
        state.pot = 0;
        let p = &state.players[survivor];
        state.showdown_results.push(ShowdownResult {
            player_id: p.id,
            name: p.name.clone(),
            role: p.role,
            hand_description: "Wins uncontested".to_string(),
            hole_cards: p.hole.clone(),
            winning_cards: Vec::new(),
            amount: pot,
            is_winner: true,
            score: UNCONTESTED_SCORE,
        });
        state.message = format!("{} wins {} (everyone else folded)", p.name, pot);
    } else {
        let ranked: Vec<(usize, HandRank)> = qualifiers
            .iter()
            .map(|&i| {
                (
                    i,
                    hand::evaluate(&state.players[i].hole, &state.community_cards),
                )
            })
            .collect();
        let best = ranked.iter().map(|(_, r)| r.score).max().unwrap_or(0);
        let winners: Vec<usize> = seats_after_dealer(state)
            .into_iter()
            .filter(|i| ranked.iter().any(|(j, r)| j == i && r.score == best))
            .collect();

        let pot = state.pot;
        let share = pot / winners.len() as u32;
        let remainder = pot % winners.len() as u32;

        for (k, &w) in winners.iter().enumerate() {
            let award = if k == 0 { share + remainder } else { share };
            state.players[w].add_chips(award);
        }
        state.pot = 0;

        let mut results = Vec::new();
        for (i, rank) in &ranked {
            let p = &state.players[*i];
            let position = winners.iter().position(|w| w == i);
            results.push(ShowdownResult {
                player_id: p.id,
                name: p.name.clone(),
                role: p.role,
                hand_description: rank.name.clone(),
                hole_cards: p.hole.clone(),
                winning_cards: rank.cards.clone(),
                amount: match position {
                    Some(0) => share + remainder,
                    Some(_) => share,
                    None => 0,
                },
                is_winner: position.is_some(),
                score: rank.score,
            });
        }
        // folded seats still get an entry for the result screen
        for p in &state.players {
            if p.status == PlayerStatus::Folded {
                results.push(ShowdownResult {
                    player_id: p.id,
                    name: p.name.clone(),
                    role: p.role,
                    hand_description: "Folded".to_string(),
                    hole_cards: p.hole.clone(),
                    winning_cards: Vec::new(),
                    amount: 0,
                    is_winner: false,
                    score: 0,
                });
            }
        }
        results.sort_unstable_by(|a, b| b.score.cmp(&a.score));
        state.showdown_results = results;

        let names: Vec<&str> = winners
            .iter()
            .map(|&w| state.players[w].name.as_str())
            .collect();
        state.message = if winners.len() == 1 {
            format!("{} wins {}", names[0], pot)
        } else {
            format!("Split pot: {} share {}", names.join(", "), pot)
        };
    }

    state.phase = Phase::Showdown;
    state.active_player_index = None;
}

/// Seat indices in table order starting one past the dealer button.
fn seats_after_dealer(state: &GameState) -> Vec<usize> {
    let n = state.players.len();
    (1..=n).map(|k| (state.dealer_index + k) % n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::game::GameState;
    use crate::player::Player;

    fn c(suit: Suit, rank: Rank) -> Card {
        Card { suit, rank }
    }

    fn rigged_state() -> GameState {
        let players = vec![
            Player::new(0, "You", Role::User, 975),
            Player::new(1, "Bot 1", Role::Bot, 975),
            Player::new(2, "Bot 2", Role::Bot, 975),
        ];
        let mut state = GameState::new(players, 20, 1);
        state.community_cards = vec![
            c(Suit::Hearts, Rank::King),
            c(Suit::Clubs, Rank::Queen),
            c(Suit::Diamonds, Rank::Jack),
            c(Suit::Spades, Rank::Nine),
            c(Suit::Hearts, Rank::Two),
        ];
        state.players[0].hole = vec![c(Suit::Spades, Rank::Ace), c(Suit::Clubs, Rank::Ace)];
        state.players[1].hole = vec![c(Suit::Diamonds, Rank::Ace), c(Suit::Hearts, Rank::Ace)];
        state.players[2].hole = vec![c(Suit::Clubs, Rank::Three), c(Suit::Diamonds, Rank::Four)];
        state.pot = 25;
        state
    }

    #[test]
    fn split_pot_remainder_goes_to_the_first_winner_after_the_dealer() {
        let mut state = rigged_state();
        state.players[2].status = PlayerStatus::Folded;
        resolve(&mut state);

        // both live seats hold a pair of aces; seat 1 sits first after
        // the dealer and takes the odd chip
        assert_eq!(state.players[1].chips, 975 + 13);
        assert_eq!(state.players[0].chips, 975 + 12);
        assert_eq!(state.pot, 0);
        assert_eq!(state.phase, Phase::Showdown);
        assert_eq!(state.active_player_index, None);

        let awarded: u32 = state.showdown_results.iter().map(|r| r.amount).sum();
        assert_eq!(awarded, 25);
    }

    #[test]
    fn folded_seats_get_a_zero_score_entry() {
        let mut state = rigged_state();
        state.players[2].status = PlayerStatus::Folded;
        resolve(&mut state);

        assert_eq!(state.showdown_results.len(), 3);
        let folded = state
            .showdown_results
            .iter()
            .find(|r| r.player_id == 2)
            .unwrap();
        assert_eq!(folded.hand_description, "Folded");
        assert_eq!(folded.score, 0);
        assert_eq!(folded.amount, 0);
        assert!(!folded.is_winner);
        assert!(folded.winning_cards.is_empty());
        // results come out sorted best hand first
        let scores: Vec<u32> = state.showdown_results.iter().map(|r| r.score).collect();
        let mut sorted = scores.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(scores, sorted);
    }

    #[test]
    fn lone_high_score_takes_the_whole_pot() {
        let mut state = rigged_state();
        // give seat 2 a straight so it beats the paired aces outright
        state.players[2].hole = vec![c(Suit::Clubs, Rank::Ten), c(Suit::Diamonds, Rank::Four)];
        resolve(&mut state);

        assert_eq!(state.players[2].chips, 975 + 25);
        assert_eq!(state.players[0].chips, 975);
        assert_eq!(state.players[1].chips, 975);
        let winner = state
            .showdown_results
            .iter()
            .find(|r| r.player_id == 2)
            .unwrap();
        assert!(winner.is_winner);
        assert_eq!(winner.hand_description, "Straight");
        assert_eq!(winner.winning_cards.len(), 5);
    }

    #[test]
    fn single_survivor_wins_uncontested_without_revealing_cards() {
        let mut state = rigged_state();
        state.players[1].status = PlayerStatus::Folded;
        state.players[2].status = PlayerStatus::Folded;
        resolve(&mut state);

        assert_eq!(state.players[0].chips, 975 + 25);
        assert_eq!(state.showdown_results.len(), 1);
        let r = &state.showdown_results[0];
        assert_eq!(r.player_id, 0);
        assert_eq!(r.hand_description, "Wins uncontested");
        assert_eq!(r.score, UNCONTESTED_SCORE);
        assert!(r.winning_cards.is_empty());
        assert!(state.message.contains("everyone else folded"));
    }
}
