use holdem_ai::baseline::BaselineBot;
use holdem_ai::{create_source, DecisionSource};
use holdem_engine::cards::{Card, Rank, Suit};
use holdem_engine::game::{GameState, GameView, Phase, PlayerView};
use holdem_engine::player::{Player, PlayerAction, PlayerStatus, Role};

fn c(suit: Suit, rank: Rank) -> Card {
    Card { suit, rank }
}

fn seat(id: usize, chips: u32, current_bet: u32, hole: Option<Vec<Card>>) -> PlayerView {
    PlayerView {
        id,
        name: format!("Bot {}", id),
        role: Role::Bot,
        chips,
        status: PlayerStatus::Active,
        current_bet,
        total_hand_bet: current_bet,
        last_action: None,
        hole,
    }
}

fn view(players: Vec<PlayerView>, board: Vec<Card>, current_high_bet: u32) -> GameView {
    let pot = players.iter().map(|p| p.total_hand_bet).sum();
    GameView {
        players,
        pot,
        community_cards: board,
        dealer_index: 0,
        active_player_index: Some(0),
        current_high_bet,
        phase: if current_high_bet > 0 || pot > 0 {
            Phase::Preflop
        } else {
            Phase::Flop
        },
        min_bet: 20,
        small_blind_index: 1,
        big_blind_index: 2,
        showdown_results: Vec::new(),
        message: String::new(),
        hand_no: 1,
    }
}

#[test]
fn premium_pair_raises_preflop() {
    let hole = vec![c(Suit::Spades, Rank::Ace), c(Suit::Hearts, Rank::Ace)];
    let v = view(
        vec![seat(0, 1000, 0, Some(hole)), seat(1, 1000, 20, None)],
        Vec::new(),
        20,
    );
    let mut bot = BaselineBot::new();
    assert_eq!(bot.decide(&v, 0).unwrap(), PlayerAction::Raise(40));
}

#[test]
fn medium_hand_calls_small_but_folds_to_a_big_bet() {
    let hole = vec![c(Suit::Spades, Rank::Eight), c(Suit::Hearts, Rank::Eight)];
    let cheap = view(
        vec![seat(0, 1000, 0, Some(hole.clone())), seat(1, 1000, 20, None)],
        Vec::new(),
        20,
    );
    let mut bot = BaselineBot::new();
    assert_eq!(bot.decide(&cheap, 0).unwrap(), PlayerAction::Call);

    let expensive = view(
        vec![seat(0, 1000, 0, Some(hole)), seat(1, 600, 400, None)],
        Vec::new(),
        400,
    );
    assert_eq!(bot.decide(&expensive, 0).unwrap(), PlayerAction::Fold);
}

#[test]
fn weak_offsuit_hand_checks_for_free_and_folds_under_pressure() {
    let hole = vec![c(Suit::Spades, Rank::Seven), c(Suit::Hearts, Rank::Two)];
    let mut free = view(
        vec![seat(0, 1000, 20, Some(hole.clone())), seat(1, 1000, 20, None)],
        Vec::new(),
        20,
    );
    // big blind with the betting unopened beyond the blind itself
    free.big_blind_index = 0;
    let mut bot = BaselineBot::new();
    assert_eq!(bot.decide(&free, 0).unwrap(), PlayerAction::Check);

    let pressured = view(
        vec![seat(0, 1000, 0, Some(hole)), seat(1, 900, 100, None)],
        Vec::new(),
        100,
    );
    assert_eq!(bot.decide(&pressured, 0).unwrap(), PlayerAction::Fold);
}

#[test]
fn made_trips_bets_half_the_pot_on_the_flop() {
    let hole = vec![c(Suit::Spades, Rank::Nine), c(Suit::Hearts, Rank::Nine)];
    let board = vec![
        c(Suit::Clubs, Rank::Nine),
        c(Suit::Diamonds, Rank::King),
        c(Suit::Hearts, Rank::Four),
    ];
    let mut v = view(
        vec![seat(0, 1000, 0, Some(hole)), seat(1, 1000, 0, None)],
        board,
        0,
    );
    v.pot = 120;
    let mut bot = BaselineBot::new();
    assert_eq!(bot.decide(&v, 0).unwrap(), PlayerAction::Bet(60));
}

#[test]
fn unimproved_hand_gives_up_to_a_flop_bet() {
    let hole = vec![c(Suit::Spades, Rank::Seven), c(Suit::Hearts, Rank::Two)];
    let board = vec![
        c(Suit::Clubs, Rank::Ace),
        c(Suit::Diamonds, Rank::King),
        c(Suit::Hearts, Rank::Ten),
    ];
    let v = view(
        vec![seat(0, 1000, 0, Some(hole)), seat(1, 950, 50, None)],
        board,
        50,
    );
    let mut bot = BaselineBot::new();
    assert_eq!(bot.decide(&v, 0).unwrap(), PlayerAction::Fold);
}

#[test]
fn masked_hole_cards_are_an_error() {
    let v = view(
        vec![seat(0, 1000, 0, None), seat(1, 1000, 20, None)],
        Vec::new(),
        20,
    );
    let mut bot = BaselineBot::new();
    assert!(bot.decide(&v, 0).is_err());
}

#[test]
fn factory_knows_baseline_and_rejects_the_rest() {
    let source = create_source("baseline").unwrap();
    assert_eq!(source.name(), "BaselineBot");
    assert!(create_source("gto-solver").is_err());
}

#[test]
fn bot_versus_bot_hands_always_complete_legally() {
    for seed in 0..20u64 {
        let players = (0..3)
            .map(|i| Player::new(i, format!("Bot {}", i), Role::Bot, 1000))
            .collect();
        let mut game = GameState::new(players, 20, seed);
        game.start_hand().unwrap();

        let mut bot = BaselineBot::new();
        let mut steps = 0;
        while game.phase().is_betting() {
            let seat = game.active_player_index().unwrap();
            let action = bot.decide(&game.view_for(Some(seat)), seat).unwrap();
            game.apply_action(seat, action)
                .unwrap_or_else(|e| panic!("seed {}: illegal action {:?}: {}", seed, action, e));
            steps += 1;
            assert!(steps < 200, "seed {}: hand did not terminate", seed);
        }

        assert_eq!(game.phase(), Phase::Showdown);
        let total: u32 = game.players().iter().map(|p| p.chips).sum();
        assert_eq!(total + game.pot(), 3000);
        assert_eq!(game.pot(), 0);
        assert!(game.showdown_results().iter().any(|r| r.is_winner));
    }
}
