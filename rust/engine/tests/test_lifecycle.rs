use holdem_engine::game::{GameState, Phase};
use holdem_engine::lifecycle::{settle_between_hands, SessionOutcome};
use holdem_engine::player::{Player, PlayerStatus, Role};

fn table(stacks: &[(Role, u32)]) -> GameState {
    let players = stacks
        .iter()
        .enumerate()
        .map(|(i, &(role, chips))| Player::new(i, format!("Seat {}", i), role, chips))
        .collect();
    GameState::new(players, 20, 5)
}

#[test]
fn human_out_of_chips_ends_the_session_in_defeat() {
    let mut game = table(&[(Role::User, 0), (Role::Bot, 1500), (Role::Bot, 1500)]);
    let outcome = settle_between_hands(&mut game);

    assert_eq!(outcome, SessionOutcome::Defeat);
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.players()[0].status, PlayerStatus::Busted);
    assert!(game.message().contains("Game over"));
    // no further hand may start
    assert!(game.start_hand().is_err());
}

#[test]
fn all_bots_busted_ends_the_session_in_victory() {
    let mut game = table(&[(Role::User, 3000), (Role::Bot, 0), (Role::Bot, 0)]);
    let outcome = settle_between_hands(&mut game);

    assert_eq!(outcome, SessionOutcome::Victory);
    assert_eq!(game.phase(), Phase::GameOver);
    assert!(game.message().contains("You win"));
    assert!(game.start_hand().is_err());
}

#[test]
fn dealer_button_moves_to_the_next_live_seat() {
    let mut game = table(&[(Role::User, 1000), (Role::Bot, 1000), (Role::Bot, 1000)]);
    assert_eq!(game.dealer_index(), 0);

    assert_eq!(settle_between_hands(&mut game), SessionOutcome::Continue);
    assert_eq!(game.dealer_index(), 1);
    assert_eq!(settle_between_hands(&mut game), SessionOutcome::Continue);
    assert_eq!(game.dealer_index(), 2);
    assert_eq!(settle_between_hands(&mut game), SessionOutcome::Continue);
    assert_eq!(game.dealer_index(), 0);
}

#[test]
fn dealer_rotation_skips_busted_seats() {
    let mut game = table(&[
        (Role::User, 1000),
        (Role::Bot, 0),
        (Role::Bot, 1000),
        (Role::Bot, 0),
    ]);
    assert_eq!(settle_between_hands(&mut game), SessionOutcome::Continue);
    assert_eq!(game.dealer_index(), 2);
    assert_eq!(settle_between_hands(&mut game), SessionOutcome::Continue);
    assert_eq!(game.dealer_index(), 0);
}

#[test]
fn busted_seats_are_skipped_when_the_next_hand_deals() {
    let mut game = table(&[
        (Role::User, 1000),
        (Role::Bot, 0),
        (Role::Bot, 1000),
    ]);
    assert_eq!(settle_between_hands(&mut game), SessionOutcome::Continue);
    assert_eq!(game.dealer_index(), 2);

    game.start_hand().unwrap();
    assert_eq!(game.players()[1].status, PlayerStatus::Busted);
    assert!(game.players()[1].hole.is_empty());
    assert_eq!(game.players()[0].hole.len(), 2);
    assert_eq!(game.players()[2].hole.len(), 2);
    // blinds come from the two live seats after the dealer
    assert_eq!(game.small_blind_index(), 0);
    assert_eq!(game.big_blind_index(), 2);
}
