use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("It's not player {actual}'s turn (expected player {expected:?})")]
    NotPlayersTurn {
        expected: Option<usize>,
        actual: usize,
    },
    #[error("Cannot check while facing a bet of {to_call}")]
    CheckFacingBet { to_call: u32 },
    #[error("Player {seat} cannot act (status {status})")]
    PlayerNotActionable { seat: usize, status: &'static str },
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("Hand already complete")]
    HandAlreadyComplete,
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error("Not enough players with chips to start a hand")]
    TooFewPlayers,
}
