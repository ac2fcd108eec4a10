//! Deal command handler: one face-up hand for inspection.
//!
//! Deals hole cards to every seat plus a full board, then shows each
//! seat's best five-card hand with its score. Seeded dealing makes the
//! output reproducible.

use crate::error::CliError;
use crate::formatters::{format_board, format_card};
use holdem_engine::deck::Deck;
use holdem_engine::hand;
use std::io::Write;

pub fn handle_deal_command(
    seats: usize,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if !(2..=9).contains(&seats) {
        return Err(CliError::InvalidInput("seats must be 2-9".to_string()));
    }
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();

    let mut holes = vec![Vec::with_capacity(2); seats];
    for _ in 0..2 {
        for hole in holes.iter_mut() {
            hole.push(deck.deal_card().ok_or_else(|| {
                CliError::Engine("deck exhausted while dealing".to_string())
            })?);
        }
    }
    let mut board = Vec::with_capacity(5);
    for _ in 0..5 {
        board.push(deck.deal_card().ok_or_else(|| {
            CliError::Engine("deck exhausted while dealing".to_string())
        })?);
    }

    writeln!(out, "Board: {}", format_board(&board))?;
    for (i, hole) in holes.iter().enumerate() {
        let rank = hand::evaluate(hole, &board);
        let cards: Vec<String> = hole.iter().map(format_card).collect();
        writeln!(
            out,
            "Seat {}: {}  {} (score {})",
            i + 1,
            cards.join(" "),
            rank.name,
            rank.score
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_is_deterministic_for_a_seed() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        handle_deal_command(3, Some(12345), &mut out1).unwrap();
        handle_deal_command(3, Some(12345), &mut out2).unwrap();
        assert_eq!(out1, out2);
    }

    #[test]
    fn deal_prints_board_and_every_seat() {
        let mut out = Vec::new();
        handle_deal_command(4, Some(7), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Board:"));
        for i in 1..=4 {
            assert!(output.contains(&format!("Seat {}:", i)));
        }
    }

    #[test]
    fn seat_count_is_validated() {
        let mut out = Vec::new();
        assert!(handle_deal_command(1, Some(7), &mut out).is_err());
        assert!(handle_deal_command(10, Some(7), &mut out).is_err());
    }
}
