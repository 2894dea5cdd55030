use hangman_shared::constants::PLACEHOLDER;
use hangman_shared::{
    start_round, Clue, ClueOutcome, Difficulty, Effect, GuessOutcome, IgnoreReason, RoundState,
    Session, StoredProgress, TimerRequest, WordBanks,
};

fn filled(round: &RoundState) -> usize {
    round.revealed().iter().filter(|&&c| c != PLACEHOLDER).count()
}

fn scheduled(effects: &[Effect]) -> Option<TimerRequest> {
    effects.iter().find_map(|effect| match effect {
        Effect::Schedule(request) => Some(*request),
        _ => None,
    })
}

fn session_for(answer: &str, max_strikes: u32) -> Session {
    let clues = vec![Clue::new("clue", answer)];
    let mut session = Session::with_max_strikes(Difficulty::Normal, StoredProgress::default(), max_strikes);
    session.next_round(&clues).unwrap();
    session
}

#[test]
fn test_cat_scenario_scores() {
    let mut session = session_for("CAT", 7);

    session.apply_guess('A');
    assert_eq!(filled(session.round().unwrap()), 1);
    assert_eq!(session.score(), 1);

    session.apply_guess('C');
    assert_eq!(filled(session.round().unwrap()), 2);
    assert_eq!(session.score(), 2);

    let update = session.apply_guess('T');
    assert!(matches!(update.outcome, Some(GuessOutcome::Won { bonus: 25, .. })));
    assert_eq!(session.score(), 28);
    assert_eq!(session.high_score(), 28);
    assert!(session.round().unwrap().is_locked());
    assert!(update.effects.contains(&Effect::SaveHighScore(28)));
}

#[test]
fn test_dog_scenario_game_over() {
    let mut session = session_for("DOG", 3);

    session.apply_guess('X');
    session.apply_guess('Y');
    let update = session.apply_guess('Z');

    let round = session.round().unwrap();
    assert_eq!(update.outcome, Some(GuessOutcome::GameOver { strikes: 3 }));
    assert!(round.is_locked());
    assert_eq!(round.revealed().iter().collect::<String>(), "DOG");
    assert_eq!(round.strike_count(), 3);
    assert!(update.frame.input_locked);
}

#[test]
fn test_wrong_guess_never_touches_revealed() {
    let mut session = session_for("BANANA", 7);
    let before = session.round().unwrap().revealed().to_vec();
    session.apply_guess('Q');
    let round = session.round().unwrap();
    assert_eq!(round.revealed(), before.as_slice());
    assert_eq!(round.strike_count(), 1);
}

#[test]
fn test_repeated_guesses_are_idempotent() {
    let mut session = session_for("BANANA", 7);

    session.apply_guess('A');
    let snapshot = session.round().unwrap().clone();
    let score = session.score();
    let update = session.apply_guess('A');
    assert_eq!(update.outcome, Some(GuessOutcome::Ignored(IgnoreReason::AlreadyRevealed)));
    assert_eq!(session.round().unwrap(), &snapshot);
    assert_eq!(session.score(), score);

    session.apply_guess('Z');
    let snapshot = session.round().unwrap().clone();
    let update = session.apply_guess('Z');
    assert_eq!(update.outcome, Some(GuessOutcome::Ignored(IgnoreReason::AlreadyWrong)));
    assert_eq!(session.round().unwrap(), &snapshot);
}

#[test]
fn test_any_order_wins_exactly_once() {
    let orders = ["ROWLINGJK", "KJGNILWOR", "GLINKJORW", "WJKROLNGI"];
    for order in orders {
        let mut session = session_for("J.K. ROWLING", 7);
        let mut wins = 0;
        for (index, letter) in order.chars().enumerate() {
            let update = session.apply_guess(letter);
            if let Some(GuessOutcome::Won { .. }) = update.outcome {
                wins += 1;
                assert_eq!(index, order.len() - 1, "won early for order {}", order);
            }
        }
        assert_eq!(wins, 1);
        assert_eq!(session.apply_guess('Q').outcome, Some(GuessOutcome::Ignored(IgnoreReason::Locked)));
    }
}

#[test]
fn test_exhausted_source_returns_no_clues() {
    let clues = vec![Clue::new("Feline", "CAT")];
    let seen = vec!["CAT".to_string()];
    let err = start_round(Difficulty::Hard, &seen, &clues).unwrap_err();
    assert_eq!(err.difficulty, Difficulty::Hard);

    let stored = StoredProgress { seen_answers: seen, high_score: 0 };
    let mut session = Session::new(Difficulty::Hard, stored);
    assert!(session.next_round(&clues).is_err());
    assert!(session.round().is_none());
}

#[test]
fn test_builtin_banks_run_dry() {
    let banks = WordBanks::builtin();
    let mut session = Session::new(Difficulty::Drunk, StoredProgress::default());
    let total = banks.get(Difficulty::Drunk).len();
    for _ in 0..total {
        session.next_round(banks).unwrap();
    }
    assert_eq!(session.seen_answers().len(), total);
    assert!(session.next_round(banks).is_err());
}

#[test]
fn test_stale_timer_ignored_after_new_round() {
    let clues = vec![Clue::new("one", "AB"), Clue::new("two", "CD")];
    let mut session = Session::new(Difficulty::Normal, StoredProgress::default());
    session.next_round(&clues).unwrap();
    session.apply_guess('A');
    let update = session.apply_guess('B');
    let stale = scheduled(&update.effects).unwrap();

    session.request_clue();
    session.receive_clue(ClueOutcome::Served(clues[1].clone())).unwrap();
    let update = session.fire(stale.token);
    assert!(update.effects.is_empty());
    assert_eq!(session.round().unwrap().answer(), "CD");
    assert!(!session.is_awaiting_clue());
}

#[test]
fn test_countdown_resets_score_and_requests_clue() {
    let mut session = session_for("DOG", 1);
    session.apply_guess('O');
    let mut update = session.apply_guess('X');
    assert_eq!(session.score(), 1);

    let mut ticks = 0;
    while let Some(request) = scheduled(&update.effects) {
        update = session.fire(request.token);
        ticks += 1;
    }

    assert_eq!(ticks, 3);
    assert_eq!(session.score(), 0);
    assert_eq!(session.high_score(), 1);
    assert!(update.effects.iter().any(|e| matches!(e, Effect::RequestClue(_))));
}
