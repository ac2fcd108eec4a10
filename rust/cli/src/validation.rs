//! Input parsing for interactive gameplay.

use holdem_engine::player::PlayerAction;

/// Result of parsing user input into a player action.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid player action parsed from input
    Action(PlayerAction),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input string into a PlayerAction or special commands.
///
/// Accepts (case-insensitive):
/// - `f` / `fold`
/// - `k` / `check`
/// - `c` / `call`
/// - `bet X`, `raise X` where X is the round total to reach
/// - `allin` / `all-in`
/// - `q` / `quit`
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    if parts[0] == "q" || parts[0] == "quit" {
        return ParseResult::Quit;
    }

    match parts[0] {
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "k" => ParseResult::Action(PlayerAction::Check),
        "call" | "c" => ParseResult::Action(PlayerAction::Call),
        "allin" | "all-in" => ParseResult::Action(PlayerAction::AllIn),
        "bet" | "raise" => {
            if parts.len() < 2 {
                return ParseResult::Invalid(format!(
                    "{} requires an amount (e.g., '{} 100')",
                    parts[0], parts[0]
                ));
            }
            match parts[1].parse::<u32>() {
                Ok(amount) if amount > 0 => ParseResult::Action(if parts[0] == "bet" {
                    PlayerAction::Bet(amount)
                } else {
                    PlayerAction::Raise(amount)
                }),
                Ok(_) => ParseResult::Invalid("Amount must be positive".to_string()),
                Err(_) => ParseResult::Invalid("Invalid amount".to_string()),
            }
        }
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Try: fold, check, call, bet N, raise N, allin, q",
            other
        )),
    }
}
