//! Tests for the game session state machine.

use versus_core::{
    BotReply, Difficulty, GameSession, IgnoreReason, Outcome, PendingBotMove, Phase,
    PlayerRegistry, SelectOutcome, SessionConfig, Symbol, available_cells,
};

fn session(difficulty: Difficulty, seed: u64) -> GameSession {
    GameSession::new(
        SessionConfig {
            difficulty,
            seed: Some(seed),
            ..SessionConfig::default()
        },
        PlayerRegistry::default(),
    )
}

fn expect_scheduled(outcome: SelectOutcome) -> PendingBotMove {
    match outcome {
        SelectOutcome::BotScheduled { pending, .. } => pending,
        other => panic!("expected a scheduled bot move, got {other:?}"),
    }
}

/// The derived board holds exactly one mark per recorded move.
fn assert_board_matches_history(session: &GameSession) {
    assert_eq!(session.board().occupied(), session.history().len());
}

/// Human always takes the first free cell; returns the final outcome.
fn play_out(session: &mut GameSession) -> Outcome {
    loop {
        let first_free = available_cells(&session.board(), None)[0];
        let selection = session.select_cell(first_free.row(), first_free.col());
        assert_board_matches_history(session);
        match selection {
            SelectOutcome::Finished { outcome, .. } => return outcome,
            SelectOutcome::BotScheduled { pending, .. } => {
                let reply = session.complete_bot_move(pending);
                assert_board_matches_history(session);
                if let BotReply::Applied { outcome, .. } = reply
                    && outcome.is_over()
                {
                    return outcome;
                }
            }
            other => panic!("unexpected selection result {other:?}"),
        }
    }
}

#[test]
fn test_human_move_lands_before_bot_reply() {
    let mut session = session(Difficulty::Hard, 1);

    let pending = expect_scheduled(session.select_cell(1, 1));
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.phase(), Phase::BotThinking);
    assert!(session.snapshot().thinking);
    assert_ne!(pending.cell(), pending_center());

    let reply = session.complete_bot_move(pending);
    assert!(matches!(reply, BotReply::Applied { mv, .. } if mv.symbol == Symbol::O));
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.phase(), Phase::AwaitingHumanMove);
    assert!(!session.snapshot().thinking);
}

fn pending_center() -> versus_core::Cell {
    versus_core::Cell::new(1, 1).unwrap()
}

#[test]
fn test_click_while_thinking_is_ignored() {
    let mut session = session(Difficulty::Hard, 2);
    let pending = expect_scheduled(session.select_cell(0, 0));
    let free = available_cells(&session.board(), Some(pending.cell()))[0];

    assert_eq!(
        session.select_cell(free.row(), free.col()),
        SelectOutcome::Ignored(IgnoreReason::BotThinking)
    );
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_click_on_occupied_cell_is_ignored() {
    let mut session = session(Difficulty::Hard, 3);
    let pending = expect_scheduled(session.select_cell(2, 2));
    session.complete_bot_move(pending);

    assert_eq!(
        session.select_cell(2, 2),
        SelectOutcome::Ignored(IgnoreReason::CellOccupied)
    );
    let bot_cell = pending.cell();
    assert_eq!(
        session.select_cell(bot_cell.row(), bot_cell.col()),
        SelectOutcome::Ignored(IgnoreReason::CellOccupied)
    );
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_click_off_board_is_ignored() {
    let mut session = session(Difficulty::Easy, 4);
    assert_eq!(
        session.select_cell(3, 1),
        SelectOutcome::Ignored(IgnoreReason::OutOfBounds)
    );
    assert!(session.history().is_empty());
}

#[test]
fn test_restart_discards_pending_reply() {
    let mut session = session(Difficulty::Hard, 5);
    let pending = expect_scheduled(session.select_cell(1, 1));

    session.restart();
    assert_eq!(session.complete_bot_move(pending), BotReply::Stale);
    assert!(session.history().is_empty());
    assert_eq!(session.phase(), Phase::AwaitingHumanMove);

    // The fresh game still works, and the old reply stays stale.
    let fresh = expect_scheduled(session.select_cell(0, 0));
    assert_eq!(session.complete_bot_move(pending), BotReply::Stale);
    assert!(matches!(session.complete_bot_move(fresh), BotReply::Applied { .. }));
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_reply_is_not_applied_twice() {
    let mut session = session(Difficulty::Hard, 6);
    let pending = expect_scheduled(session.select_cell(0, 1));

    assert!(matches!(session.complete_bot_move(pending), BotReply::Applied { .. }));
    assert_eq!(session.complete_bot_move(pending), BotReply::Stale);
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_games_alternate_and_end_properly() {
    for seed in 0..50 {
        let mut session = session(Difficulty::Medium, seed);
        let outcome = play_out(&mut session);
        let history = session.history();

        assert_eq!(session.phase(), Phase::Terminal(outcome));
        let symbols: Vec<Symbol> = history.iter().rev().map(|m| m.symbol).collect();
        for (i, symbol) in symbols.iter().enumerate() {
            let expected = if i % 2 == 0 { Symbol::X } else { Symbol::O };
            assert_eq!(*symbol, expected, "seed {seed} move {i}");
        }
        if history.len() == 9 {
            // X always places the ninth mark.
            assert_eq!(history.latest().map(|m| m.symbol), Some(Symbol::X));
        }
        if outcome == Outcome::Draw {
            assert_eq!(history.len(), 9);
            assert!(session.snapshot().is_draw);
        }
    }
}

#[test]
fn test_human_win_gets_no_reply() {
    let mut human_wins = 0;
    for seed in 0..200 {
        let mut session = session(Difficulty::Easy, seed);
        if let Outcome::Winner(Symbol::X) = play_out(&mut session) {
            human_wins += 1;
            assert_eq!(session.history().latest().map(|m| m.symbol), Some(Symbol::X));
            assert_eq!(session.history().len() % 2, 1);
        }
    }
    assert!(human_wins > 0);
}

#[test]
fn test_terminal_ignores_clicks_until_restart() {
    let mut session = session(Difficulty::Hard, 9);
    play_out(&mut session);
    let len = session.history().len();

    let free = available_cells(&session.board(), None);
    if let Some(cell) = free.first() {
        assert_eq!(
            session.select_cell(cell.row(), cell.col()),
            SelectOutcome::Ignored(IgnoreReason::GameOver)
        );
    }
    assert_eq!(session.history().len(), len);

    session.restart();
    assert!(matches!(session.select_cell(1, 1), SelectOutcome::BotScheduled { .. }));
}

#[test]
fn test_restart_returns_to_initial_snapshot() {
    let mut session = session(Difficulty::Hard, 10);
    let initial = session.snapshot();
    play_out(&mut session);
    assert!(session.snapshot().is_over());

    session.restart();
    let snapshot = session.snapshot();
    assert_eq!(snapshot, initial);
    assert_eq!(session.history().len(), 0);
    assert_eq!(snapshot.winner, None);
    assert!(!snapshot.is_draw);
}

#[test]
fn test_names_and_difficulty_survive_restart() {
    let mut session = session(Difficulty::Easy, 11);
    assert!(session.rename_player(Symbol::X, "Ada"));
    session.set_difficulty(Difficulty::Hard);
    session.select_cell(0, 0);

    session.restart();
    let snapshot = session.snapshot();
    assert_eq!(snapshot.players.name(Symbol::X), "Ada");
    assert_eq!(snapshot.difficulty, Difficulty::Hard);
}
