use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Result of evaluating a player's best five-card hand.
///
/// `score` fully encodes the comparison: each category occupies a band of
/// 100 (high card < 100, pair 100+, two pair 200+, trips 300+, straight
/// 400+, flush 500+, full house 600+, quads 700+, straight flush 800+)
/// with the category's primary rank added on top. Kicker-level differences
/// within the same band and primary rank are deliberately not encoded, so
/// such hands compare equal and split the pot.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRank {
    /// Category band plus primary rank
    pub score: u32,
    /// Human-readable description, e.g. `"Full House (2's over 9's)"`
    pub name: String,
    /// Exactly the 5 cards substantiating the category, rank-descending
    /// (the wheel is ordered 5-4-3-2-A)
    pub cards: Vec<Card>,
}

/// Evaluate the best 5-card hand from hole cards plus community cards.
///
/// Callers must supply at least 5 cards in total; the betting state
/// machine only invokes this at or after the flop.
pub fn evaluate(hole: &[Card], community: &[Card]) -> HandRank {
    let mut cards: Vec<Card> = hole.iter().chain(community.iter()).copied().collect();
    debug_assert!(cards.len() >= 5, "evaluator needs at least 5 cards");
    cards.sort_unstable_by(|a, b| b.rank.cmp(&a.rank));

    let mut rank_counts = [0u8; 15]; // 2..14 used
    let mut suit_counts = [0u8; 4];
    for &c in &cards {
        rank_counts[c.rank as usize] += 1;
        suit_counts[suit_index(c)] += 1;
    }

    let flush_suit = suit_counts.iter().position(|&n| n >= 5);

    // Straight flush (wheel included, scored as 5-high)
    if let Some(s) = flush_suit {
        let suited: Vec<Card> = cards.iter().copied().filter(|&c| suit_index(c) == s).collect();
        let ranks: Vec<u8> = suited.iter().map(|c| c.rank as u8).collect();
        if let Some(high) = detect_straight_high(&ranks) {
            return HandRank {
                score: 800 + high as u32,
                name: "Straight Flush".to_string(),
                cards: straight_cards(&suited, high),
            };
        }
    }

    // Four of kind
    if let Some(quad) = highest_with_count(&rank_counts, 4) {
        let mut best = take_of_rank(&cards, quad, 4);
        if let Some(kicker) = cards.iter().find(|c| c.rank as u8 != quad) {
            best.push(*kicker);
        }
        return HandRank {
            score: 700 + quad as u32,
            name: format!("Four of a Kind ({}'s)", label(quad)),
            cards: best,
        };
    }

    // Full house: highest triple plus best remaining pair or second triple
    if let Some((trip, pair)) = detect_full_house(&rank_counts) {
        let mut best = take_of_rank(&cards, trip, 3);
        best.extend(take_of_rank(&cards, pair, 2));
        return HandRank {
            score: 600 + trip as u32,
            name: format!("Full House ({}'s over {}'s)", label(trip), label(pair)),
            cards: best,
        };
    }

    // Flush: 5 best of the suit
    if let Some(s) = flush_suit {
        let best: Vec<Card> = cards
            .iter()
            .copied()
            .filter(|&c| suit_index(c) == s)
            .take(5)
            .collect();
        return HandRank {
            score: 500 + best[0].rank as u32,
            name: "Flush".to_string(),
            cards: best,
        };
    }

    // Straight across suits
    let ranks: Vec<u8> = cards.iter().map(|c| c.rank as u8).collect();
    if let Some(high) = detect_straight_high(&ranks) {
        return HandRank {
            score: 400 + high as u32,
            name: "Straight".to_string(),
            cards: straight_cards(&cards, high),
        };
    }

    // Three of a kind
    if let Some(trip) = highest_with_count(&rank_counts, 3) {
        let mut best = take_of_rank(&cards, trip, 3);
        best.extend(cards.iter().filter(|c| c.rank as u8 != trip).take(2));
        return HandRank {
            score: 300 + trip as u32,
            name: format!("Three of a Kind ({}'s)", label(trip)),
            cards: best,
        };
    }

    // Two pair
    let pairs = ranks_with_count(&rank_counts, 2);
    if pairs.len() >= 2 {
        let (high, low) = (pairs[0], pairs[1]);
        let mut best = take_of_rank(&cards, high, 2);
        best.extend(take_of_rank(&cards, low, 2));
        if let Some(kicker) = cards
            .iter()
            .find(|c| c.rank as u8 != high && c.rank as u8 != low)
        {
            best.push(*kicker);
        }
        return HandRank {
            score: 200 + high as u32,
            name: format!("Two Pair ({}'s and {}'s)", label(high), label(low)),
            cards: best,
        };
    }

    // One pair
    if let Some(&pair) = pairs.first() {
        let mut best = take_of_rank(&cards, pair, 2);
        best.extend(cards.iter().filter(|c| c.rank as u8 != pair).take(3));
        return HandRank {
            score: 100 + pair as u32,
            name: format!("Pair of {}'s", label(pair)),
            cards: best,
        };
    }

    // High card: top 5
    let best: Vec<Card> = cards.iter().copied().take(5).collect();
    HandRank {
        score: best[0].rank as u32,
        name: format!("High Card ({})", best[0].rank.label()),
        cards: best,
    }
}

fn suit_index(c: Card) -> usize {
    c.suit as usize
}

fn label(rank: u8) -> &'static str {
    Rank::from_u8(rank).label()
}

/// Highest rank run of 5 consecutive values, ace counting high and low.
/// Returns the run's high rank (5 for the wheel).
fn detect_straight_high(ranks: &[u8]) -> Option<u8> {
    let mut v = ranks.to_vec();
    v.sort_unstable();
    v.dedup();
    // Ace-low straight support: treat Ace as 1 additionally
    if v.binary_search(&14).is_ok() {
        v.insert(0, 1);
    }

    let mut run = 1;
    let mut best_high = 0u8;
    for i in 1..v.len() {
        if v[i] == v[i - 1] + 1 {
            run += 1;
            if run >= 5 {
                best_high = v[i];
            }
        } else {
            run = 1;
        }
    }
    if best_high == 0 {
        None
    } else {
        Some(best_high)
    }
}

/// Pick one card per rank for the straight topped by `high`, descending.
/// The wheel comes out as 5-4-3-2-A.
fn straight_cards(pool: &[Card], high: u8) -> Vec<Card> {
    let mut out = Vec::with_capacity(5);
    for step in 0..5u8 {
        let want = match high - step {
            1 => 14, // wheel ace
            r => r,
        };
        if let Some(&c) = pool.iter().find(|c| c.rank as u8 == want) {
            out.push(c);
        }
    }
    out
}

fn take_of_rank(pool: &[Card], rank: u8, n: usize) -> Vec<Card> {
    pool.iter()
        .copied()
        .filter(|c| c.rank as u8 == rank)
        .take(n)
        .collect()
}

fn highest_with_count(rank_counts: &[u8; 15], count: u8) -> Option<u8> {
    (2..=14u8).rev().find(|&r| rank_counts[r as usize] == count)
}

fn ranks_with_count(rank_counts: &[u8; 15], count: u8) -> Vec<u8> {
    (2..=14u8)
        .rev()
        .filter(|&r| rank_counts[r as usize] == count)
        .collect()
}

fn detect_full_house(rank_counts: &[u8; 15]) -> Option<(u8, u8)> {
    let trips = ranks_with_count(rank_counts, 3);
    let trip = *trips.first()?;
    // Second triple counts as the pair half when no plain pair outranks it
    let mut candidates = ranks_with_count(rank_counts, 2);
    candidates.extend(trips.iter().skip(1).copied());
    candidates.sort_unstable_by(|a, b| b.cmp(a));
    candidates.first().map(|&pair| (trip, pair))
}
