//! Interactive session against bot opponents.
//!
//! Drives the engine one action at a time: the human seat reads from
//! stdin, bot seats ask their decision source for an action against a
//! read-only snapshot. A failing or misbehaving source never stalls the
//! hand; its action is replaced by the deterministic fallback policy.

use crate::error::CliError;
use crate::formatters::{format_action, format_board, format_card, format_showdown_line};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_player_action, ParseResult};
use holdem_ai::fallback::fallback_action;
use holdem_ai::DecisionSource;
use holdem_engine::game::GameState;
use holdem_engine::lifecycle::{settle_between_hands, SessionOutcome};
use holdem_engine::logger::{ActionRecord, HandLogger, HandRecord};
use holdem_engine::player::{Player, PlayerAction, Role};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::{BufRead, Write};

/// Seat index of the human player, fixed for the session.
const HUMAN_SEAT: usize = 0;

/// Handle the play command: an interactive session of hands.
///
/// `source` drives every bot seat; it is a parameter rather than a
/// fixed choice so sessions can run against any `DecisionSource`.
/// `pace_ms` is a cosmetic delay between bot actions; tests pass 0 and
/// the whole session runs synchronously. `hands` limits the session
/// length; without it the human is prompted between hands.
#[allow(clippy::too_many_arguments)]
pub fn handle_play_command(
    bots: usize,
    chips: u32,
    blind: u32,
    seed: Option<u64>,
    pace_ms: u64,
    hands: Option<u32>,
    log: Option<&str>,
    source: &mut dyn DecisionSource,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if !(1..=8).contains(&bots) {
        return Err(CliError::InvalidInput("bots must be 1-8".to_string()));
    }
    let seed = seed.unwrap_or_else(rand::random);

    let mut players = vec![Player::new(HUMAN_SEAT, "You", Role::User, chips)];
    for i in 1..=bots {
        players.push(Player::new(i, format!("Bot {}", i), Role::Bot, chips));
    }
    let mut state = GameState::new(players, blind, seed);
    // separate stream so deals are not perturbed by fallback substitutions
    let mut fallback_rng = ChaCha20Rng::seed_from_u64(seed.wrapping_add(1));
    let mut logger = log.map(HandLogger::create).transpose()?;

    writeln!(
        out,
        "play: bots={} chips={} blind={} seed={}",
        bots, chips, blind, seed
    )?;

    let mut played = 0u32;
    loop {
        state.start_hand()?;
        writeln!(
            out,
            "--- Hand #{} (dealer: {}) ---",
            state.hand_no(),
            state.players()[state.dealer_index()].name
        )?;
        let mut actions: Vec<ActionRecord> = Vec::new();

        while state.phase().is_betting() {
            let Some(seat) = state.active_player_index() else {
                break;
            };
            let phase = state.phase();
            if state.players()[seat].is_user() {
                let action = match prompt_human(&mut state, out, err, stdin)? {
                    Some(action) => action,
                    None => {
                        writeln!(out, "Quitting session.")?;
                        return Ok(());
                    }
                };
                actions.push(ActionRecord { seat, phase, action });
            } else {
                let view = state.view_for(Some(seat));
                let name = view.players[seat].name.clone();
                let chosen = match source.decide(&view, seat) {
                    Ok(action) => action,
                    Err(e) => {
                        ui::display_warning(err, &format!("{}; using fallback", e))?;
                        fallback_action(&view, seat, &mut fallback_rng)
                    }
                };
                let action = match state.apply_action(seat, chosen) {
                    Ok(()) => chosen,
                    Err(e) => {
                        ui::display_warning(
                            err,
                            &format!("{} returned an illegal action ({}); using fallback", name, e),
                        )?;
                        let fb = fallback_action(&view, seat, &mut fallback_rng);
                        state.apply_action(seat, fb)?;
                        fb
                    }
                };
                writeln!(out, "{}: {}", name, format_action(&action))?;
                actions.push(ActionRecord { seat, phase, action });
                if pace_ms > 0 {
                    std::thread::sleep(std::time::Duration::from_millis(pace_ms));
                }
            }
        }

        writeln!(out, "Board: {}", format_board(state.community_cards()))?;
        for r in state.showdown_results() {
            writeln!(out, "{}", format_showdown_line(r))?;
        }
        for p in state.players() {
            writeln!(out, "{}: {} chips", p.name, p.chips)?;
        }

        if let Some(lg) = logger.as_mut() {
            let record = HandRecord {
                hand_id: lg.next_id(),
                seed: Some(seed),
                actions: std::mem::take(&mut actions),
                board: state.community_cards().to_vec(),
                results: state.showdown_results().to_vec(),
                ts: None,
            };
            lg.write(&record)?;
        }

        played += 1;
        if let Some(limit) = hands {
            if played >= limit {
                writeln!(out, "Played {} hands.", played)?;
                return Ok(());
            }
        }

        match settle_between_hands(&mut state) {
            SessionOutcome::Continue => {
                if hands.is_none() {
                    writeln!(out, "Press Enter for the next hand, or q to quit.")?;
                    match read_stdin_line(stdin) {
                        None => return Ok(()),
                        Some(line) if line == "q" || line == "quit" => return Ok(()),
                        Some(_) => {}
                    }
                }
            }
            SessionOutcome::Defeat | SessionOutcome::Victory => {
                writeln!(out, "{}", state.message())?;
                return Ok(());
            }
        }
    }
}

/// Show the table from the human's perspective and read one legal
/// action. Returns `None` when the player quits (or stdin closes).
fn prompt_human(
    state: &mut GameState,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<PlayerAction>, CliError> {
    let seat = state
        .active_player_index()
        .expect("prompt_human called with no seat to act");
    let view = state.view_for(Some(seat));
    let me = &view.players[seat];
    let hole = me.hole.as_deref().unwrap_or(&[]);
    let cards: Vec<String> = hole.iter().map(format_card).collect();

    writeln!(out, "Board: {}  Pot: {}", format_board(&view.community_cards), view.pot)?;
    writeln!(
        out,
        "Your cards: {}  Chips: {}  To call: {}",
        cards.join(" "),
        me.chips,
        view.to_call(seat)
    )?;

    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = read_stdin_line(stdin) else {
            return Ok(None);
        };
        match parse_player_action(&line) {
            ParseResult::Quit => return Ok(None),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            ParseResult::Action(action) => match state.apply_action(seat, action) {
                Ok(()) => return Ok(Some(action)),
                Err(e) => ui::write_error(err, &e.to_string())?,
            },
        }
    }
}
