use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::player::{Player, PlayerAction, PlayerStatus, Role};
use crate::rules::{clamp_wager, cost_to_call};
use crate::showdown::{self, ShowdownResult};

/// Betting phase of the current hand. `Showdown` and `GameOver` are
/// terminal for the hand and the session respectively.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
    GameOver,
}

impl Phase {
    pub fn is_betting(&self) -> bool {
        matches!(
            self,
            Phase::Preflop | Phase::Flop | Phase::Turn | Phase::River
        )
    }
}

/// The single state container for a table session.
///
/// Seat order is fixed for the session; all mutation flows through the
/// action and phase methods below, and external collaborators only ever
/// see read-only [`GameView`] snapshots. The pot always equals the sum
/// of every player's `total_hand_bet` until showdown payout.
#[derive(Debug)]
pub struct GameState {
    pub(crate) players: Vec<Player>,
    pub(crate) pot: u32,
    deck: Deck,
    pub(crate) community_cards: Vec<Card>,
    pub(crate) dealer_index: usize,
    pub(crate) active_player_index: Option<usize>,
    pub(crate) current_high_bet: u32,
    pub(crate) phase: Phase,
    /// Big-blind size, constant for the session
    pub(crate) min_bet: u32,
    pub(crate) small_blind_index: usize,
    pub(crate) big_blind_index: usize,
    pub(crate) showdown_results: Vec<ShowdownResult>,
    pub(crate) message: String,
    pub(crate) hand_no: u32,
}

impl GameState {
    pub fn new(players: Vec<Player>, min_bet: u32, seed: u64) -> Self {
        assert!(players.len() >= 2, "a table needs at least 2 seats");
        assert!(min_bet >= 2, "big blind must cover a half small blind");
        Self {
            players,
            pot: 0,
            deck: Deck::new_with_seed(seed),
            community_cards: Vec::with_capacity(5),
            dealer_index: 0,
            active_player_index: None,
            current_high_bet: 0,
            phase: Phase::Showdown,
            min_bet,
            small_blind_index: 0,
            big_blind_index: 0,
            showdown_results: Vec::new(),
            message: String::new(),
            hand_no: 0,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn community_cards(&self) -> &[Card] {
        &self.community_cards
    }
    pub fn dealer_index(&self) -> usize {
        self.dealer_index
    }
    pub fn active_player_index(&self) -> Option<usize> {
        self.active_player_index
    }
    pub fn current_high_bet(&self) -> u32 {
        self.current_high_bet
    }
    pub fn min_bet(&self) -> u32 {
        self.min_bet
    }
    pub fn small_blind_index(&self) -> usize {
        self.small_blind_index
    }
    pub fn big_blind_index(&self) -> usize {
        self.big_blind_index
    }
    pub fn showdown_results(&self) -> &[ShowdownResult] {
        &self.showdown_results
    }
    pub fn message(&self) -> &str {
        &self.message
    }
    pub fn hand_no(&self) -> u32 {
        self.hand_no
    }

    /// Begin a new hand: statuses from stacks, fresh shuffle, hole cards,
    /// blinds, and first-to-act after the big blind.
    pub fn start_hand(&mut self) -> Result<(), GameError> {
        if self.phase == Phase::GameOver {
            return Err(GameError::HandAlreadyComplete);
        }
        for p in &mut self.players {
            p.reset_for_hand();
        }
        if self.count_where(|p| p.status == PlayerStatus::Active) < 2 {
            return Err(GameError::TooFewPlayers);
        }

        self.pot = 0;
        self.community_cards.clear();
        self.showdown_results.clear();
        self.current_high_bet = 0;
        self.hand_no += 1;
        self.deck.shuffle();

        // two hole cards to every live seat
        for _ in 0..2 {
            for i in 0..self.players.len() {
                if self.players[i].status == PlayerStatus::Active {
                    let c = self.deck.deal_card().ok_or(GameError::DeckExhausted)?;
                    self.players[i].give_card(c);
                }
            }
        }

        // blinds: next two live seats after the dealer; a short stack
        // posts what it has and is all-in
        self.small_blind_index = self
            .next_seat_where(self.dealer_index, |p| p.status == PlayerStatus::Active)
            .ok_or(GameError::TooFewPlayers)?;
        self.big_blind_index = self
            .next_seat_where(self.small_blind_index, |p| p.status == PlayerStatus::Active)
            .ok_or(GameError::TooFewPlayers)?;
        let small_blind = self.min_bet / 2;
        self.commit(self.small_blind_index, small_blind);
        self.commit(self.big_blind_index, self.min_bet);
        self.current_high_bet = self.min_bet;

        self.phase = Phase::Preflop;
        self.active_player_index =
            self.next_seat_where(self.big_blind_index, |p| p.status == PlayerStatus::Active);
        self.message = format!("Hand #{}: blinds posted", self.hand_no);

        // blinds can leave nobody able to act (everyone short-stacked)
        if self.active_player_index.is_none() {
            self.advance_phase()?;
        }
        Ok(())
    }

    /// Apply one player action and advance the machine: next seat to act,
    /// next phase, or straight to showdown resolution.
    ///
    /// Bet/raise amounts are round totals and are clamped, never
    /// rejected: short requests are pulled up to the minimum raise, and
    /// requests beyond the stack (or a stack too short for the minimum)
    /// become an all-in.
    pub fn apply_action(&mut self, seat: usize, action: PlayerAction) -> Result<(), GameError> {
        if !self.phase.is_betting() {
            return Err(GameError::NoHandInProgress);
        }
        if self.active_player_index != Some(seat) {
            return Err(GameError::NotPlayersTurn {
                expected: self.active_player_index,
                actual: seat,
            });
        }
        if self.players[seat].status != PlayerStatus::Active {
            return Err(GameError::PlayerNotActionable {
                seat,
                status: self.players[seat].status.as_str(),
            });
        }

        let recorded = match action {
            PlayerAction::Fold => {
                self.players[seat].status = PlayerStatus::Folded;
                PlayerAction::Fold
            }
            PlayerAction::Check => {
                let to_call = cost_to_call(self.current_high_bet, self.players[seat].current_bet);
                if to_call > 0 {
                    return Err(GameError::CheckFacingBet { to_call });
                }
                PlayerAction::Check
            }
            PlayerAction::Call => {
                let to_call = cost_to_call(self.current_high_bet, self.players[seat].current_bet);
                self.commit(seat, to_call);
                PlayerAction::Call
            }
            PlayerAction::Bet(requested) | PlayerAction::Raise(requested) => {
                let target = clamp_wager(
                    requested,
                    self.current_high_bet,
                    self.min_bet,
                    self.players[seat].max_round_total(),
                );
                self.commit(seat, target - self.players[seat].current_bet);
                let total = self.players[seat].current_bet;
                if total > self.current_high_bet {
                    self.current_high_bet = total;
                }
                if self.players[seat].status == PlayerStatus::AllIn {
                    PlayerAction::AllIn
                } else if matches!(action, PlayerAction::Bet(_)) {
                    PlayerAction::Bet(total)
                } else {
                    PlayerAction::Raise(total)
                }
            }
            PlayerAction::AllIn => {
                self.commit(seat, self.players[seat].chips);
                let total = self.players[seat].current_bet;
                if total > self.current_high_bet {
                    self.current_high_bet = total;
                }
                PlayerAction::AllIn
            }
        };

        self.players[seat].last_action = Some(recorded);
        self.message = format!("{}: {}", self.players[seat].name, recorded.label());
        debug_assert_eq!(
            self.pot,
            self.players.iter().map(|p| p.total_hand_bet).sum::<u32>()
        );

        self.advance_turn()
    }

    /// Read-only snapshot for presentation and decision sources. Hole
    /// cards of other seats are masked until showdown; folded hands stay
    /// hidden even then.
    pub fn view_for(&self, viewer: Option<usize>) -> GameView {
        let players = self
            .players
            .iter()
            .map(|p| {
                let visible = viewer == Some(p.id)
                    || (self.phase == Phase::Showdown
                        && !matches!(p.status, PlayerStatus::Folded | PlayerStatus::Busted));
                PlayerView {
                    id: p.id,
                    name: p.name.clone(),
                    role: p.role,
                    chips: p.chips,
                    status: p.status,
                    current_bet: p.current_bet,
                    total_hand_bet: p.total_hand_bet,
                    last_action: p.last_action,
                    hole: if visible { Some(p.hole.clone()) } else { None },
                }
            })
            .collect();
        GameView {
            players,
            pot: self.pot,
            community_cards: self.community_cards.clone(),
            dealer_index: self.dealer_index,
            active_player_index: self.active_player_index,
            current_high_bet: self.current_high_bet,
            phase: self.phase,
            min_bet: self.min_bet,
            small_blind_index: self.small_blind_index,
            big_blind_index: self.big_blind_index,
            showdown_results: self.showdown_results.clone(),
            message: self.message.clone(),
            hand_no: self.hand_no,
        }
    }

    /// Move chips (capped at the stack) into the pot for `seat`.
    fn commit(&mut self, seat: usize, amount: u32) -> u32 {
        let moved = self.players[seat].commit(amount);
        self.pot += moved;
        moved
    }

    /// First seat after `start` (wrapping) matching the predicate.
    fn next_seat_where<F>(&self, start: usize, pred: F) -> Option<usize>
    where
        F: Fn(&Player) -> bool,
    {
        let n = self.players.len();
        (1..=n).map(|k| (start + k) % n).find(|&i| pred(&self.players[i]))
    }

    fn count_where<F>(&self, pred: F) -> usize
    where
        F: Fn(&Player) -> bool,
    {
        self.players.iter().filter(|p| pred(p)).count()
    }

    /// Single-survivor short circuit, round-completion test, or pass the
    /// turn to the next live seat.
    fn advance_turn(&mut self) -> Result<(), GameError> {
        let survivors = self.count_where(|p| {
            !matches!(p.status, PlayerStatus::Folded | PlayerStatus::Busted)
        });
        if survivors <= 1 {
            showdown::resolve(self);
            return Ok(());
        }

        let current = self.active_player_index.unwrap_or(self.dealer_index);
        let round_complete = self
            .players
            .iter()
            .filter(|p| p.status == PlayerStatus::Active)
            .all(|p| p.current_bet == self.current_high_bet && p.last_action.is_some());
        if round_complete {
            return self.advance_phase();
        }

        match self.next_seat_where(current, |p| {
            p.status == PlayerStatus::Active
                && (p.current_bet < self.current_high_bet || p.last_action.is_none())
        }) {
            Some(next) => {
                self.active_player_index = Some(next);
                Ok(())
            }
            // everyone left is all-in or folded: run out the board
            None => self.advance_phase(),
        }
    }

    /// Close the betting round: reset per-street state, deal the next
    /// street (flop 3, turn 1, river 1), and either hand the turn to the
    /// first live seat after the dealer or run straight through to
    /// showdown when no betting remains possible.
    fn advance_phase(&mut self) -> Result<(), GameError> {
        loop {
            for p in &mut self.players {
                p.reset_for_street();
            }
            self.current_high_bet = 0;

            self.phase = match self.phase {
                Phase::Preflop => {
                    self.deal_community(3)?;
                    Phase::Flop
                }
                Phase::Flop => {
                    self.deal_community(1)?;
                    Phase::Turn
                }
                Phase::Turn => {
                    self.deal_community(1)?;
                    Phase::River
                }
                Phase::River => {
                    showdown::resolve(self);
                    return Ok(());
                }
                Phase::Showdown | Phase::GameOver => return Err(GameError::HandAlreadyComplete),
            };

            // betting only continues with two or more seats able to act
            if self.count_where(|p| p.status == PlayerStatus::Active) >= 2 {
                self.active_player_index =
                    self.next_seat_where(self.dealer_index, |p| p.status == PlayerStatus::Active);
                return Ok(());
            }
            self.active_player_index = None;
        }
    }

    fn deal_community(&mut self, n: usize) -> Result<(), GameError> {
        for _ in 0..n {
            let c = self.deck.deal_card().ok_or(GameError::DeckExhausted)?;
            self.community_cards.push(c);
        }
        Ok(())
    }
}

/// Read-only snapshot of the table handed to the presentation layer and
/// to automated decision sources after every transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameView {
    pub players: Vec<PlayerView>,
    pub pot: u32,
    pub community_cards: Vec<Card>,
    pub dealer_index: usize,
    pub active_player_index: Option<usize>,
    pub current_high_bet: u32,
    pub phase: Phase,
    pub min_bet: u32,
    pub small_blind_index: usize,
    pub big_blind_index: usize,
    pub showdown_results: Vec<ShowdownResult>,
    pub message: String,
    pub hand_no: u32,
}

/// One seat as seen by a particular viewer. `hole` is `None` when the
/// cards are hidden from that viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: usize,
    pub name: String,
    pub role: Role,
    pub chips: u32,
    pub status: PlayerStatus,
    pub current_bet: u32,
    pub total_hand_bet: u32,
    pub last_action: Option<PlayerAction>,
    pub hole: Option<Vec<Card>>,
}

impl GameView {
    /// Chips the given seat still owes to match the current high bet.
    pub fn to_call(&self, seat: usize) -> u32 {
        self.current_high_bet
            .saturating_sub(self.players[seat].current_bet)
    }
}
