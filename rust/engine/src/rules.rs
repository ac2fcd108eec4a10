//! Wager arithmetic for the betting rounds.
//!
//! Out-of-range bet and raise amounts are clamped rather than rejected:
//! a request below the minimum raise is pulled up to it, a request above
//! the player's reach is capped at their stack, and a capped target that
//! still falls short of the minimum raise goes through as an all-in.

/// Minimum legal round total for an opening bet or a raise: double the
/// current high bet, or the big blind when the round is unopened.
pub fn min_raise_target(current_high_bet: u32, big_blind: u32) -> u32 {
    if current_high_bet > 0 {
        current_high_bet * 2
    } else {
        big_blind
    }
}

/// Resolve a requested bet/raise round total into the amount actually
/// played. `max_total` is the player's stack plus their chips already in
/// front of them this round.
pub fn clamp_wager(requested: u32, current_high_bet: u32, big_blind: u32, max_total: u32) -> u32 {
    requested
        .max(min_raise_target(current_high_bet, big_blind))
        .min(max_total)
}

/// Chips a player still owes to match the current high bet.
pub fn cost_to_call(current_high_bet: u32, current_bet: u32) -> u32 {
    current_high_bet.saturating_sub(current_bet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unopened_round_minimum_is_big_blind() {
        assert_eq!(min_raise_target(0, 20), 20);
        assert_eq!(min_raise_target(40, 20), 80);
    }

    #[test]
    fn short_request_is_pulled_up_to_minimum() {
        // facing 40, asking 50 -> pulled up to 80
        assert_eq!(clamp_wager(50, 40, 20, 1_000), 80);
    }

    #[test]
    fn capped_by_stack_means_allin_target() {
        // player can only reach 65 in total
        assert_eq!(clamp_wager(50, 40, 20, 65), 65);
    }
}
