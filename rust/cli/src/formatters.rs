//! Card, board, and action formatters for terminal display.
//!
//! Pure functions formatting game elements for terminal output, with
//! Unicode suit symbols and an ASCII fallback for terminals that cannot
//! render them.

use holdem_engine::cards::{Card, Rank, Suit};
use holdem_engine::player::PlayerAction;
use holdem_engine::showdown::ShowdownResult;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). On Unix-like systems,
/// assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit as `♥ ♦ ♣ ♠` or `h d c s` in ASCII mode.
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Rank as 2-10, J, Q, K, A.
pub fn format_rank(rank: &Rank) -> String {
    rank.label().to_string()
}

/// Format a card like `A♠` (Unicode) or `As` (ASCII).
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Format a list of cards in bracket notation, e.g. `[A♠ K♥ Q♦]`.
pub fn format_board(cards: &[Card]) -> String {
    if cards.is_empty() {
        "[]".to_string()
    } else {
        let formatted: Vec<String> = cards.iter().map(format_card).collect();
        format!("[{}]", formatted.join(" "))
    }
}

/// Format a PlayerAction for display, e.g. `raise to 80`.
pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Fold => "fold".to_string(),
        PlayerAction::Check => "check".to_string(),
        PlayerAction::Call => "call".to_string(),
        PlayerAction::Bet(n) => format!("bet {}", n),
        PlayerAction::Raise(n) => format!("raise to {}", n),
        PlayerAction::AllIn => "all-in".to_string(),
    }
}

/// One result line of the showdown screen.
pub fn format_showdown_line(r: &ShowdownResult) -> String {
    let cards = if r.winning_cards.is_empty() {
        String::new()
    } else {
        format!(" {}", format_board(&r.winning_cards))
    };
    if r.is_winner {
        format!("{}: {}{} (wins {})", r.name, r.hand_description, cards, r.amount)
    } else {
        format!("{}: {}{}", r.name, r.hand_description, cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::cards::{Card, Rank, Suit};

    #[test]
    fn card_and_board_formatting() {
        let ace = Card {
            rank: Rank::Ace,
            suit: Suit::Spades,
        };
        let ten = Card {
            rank: Rank::Ten,
            suit: Suit::Hearts,
        };
        assert!(format_card(&ace) == "A♠" || format_card(&ace) == "As");
        let board = format_board(&[ace, ten]);
        assert!(board.starts_with("[A"));
        assert!(board.ends_with("]"));
        assert_eq!(format_board(&[]), "[]");
    }

    #[test]
    fn action_formatting() {
        assert_eq!(format_action(&PlayerAction::Fold), "fold");
        assert_eq!(format_action(&PlayerAction::Bet(100)), "bet 100");
        assert_eq!(format_action(&PlayerAction::Raise(80)), "raise to 80");
        assert_eq!(format_action(&PlayerAction::AllIn), "all-in");
    }
}
