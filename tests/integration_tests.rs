//! Integration tests for the round engine through the facade crate

use fast_kitchen::core::{CoreEvent, GameConfig, GameState};
use fast_kitchen::types::{ActionKind, GameAction, GamePhase, SoundCue};

fn playing(seed: u32) -> GameState {
    let mut state = GameState::with_config(GameConfig::instant(), seed).unwrap();
    assert!(state.apply_action(GameAction::Start));
    state.drain_events().for_each(drop);
    state
}

fn wrong_for(state: &GameState) -> ActionKind {
    let expected = state.order()[state.progress().len()];
    ActionKind::ALL
        .into_iter()
        .find(|&a| a != expected)
        .unwrap()
}

fn complete_order(state: &mut GameState) {
    let order = state.order().to_vec();
    for step in order {
        assert!(state.apply_action(GameAction::Submit(step)));
    }
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::with_config(GameConfig::instant(), 12345).unwrap();
    assert_eq!(state.phase(), GamePhase::Menu);
    assert!(!state.apply_action(GameAction::Submit(ActionKind::Chop)));

    assert!(state.apply_action(GameAction::Start));
    assert_eq!(state.phase(), GamePhase::Playing);
    assert!(!state.order().is_empty());
    assert!(state.progress().is_empty());
    assert_eq!(state.lives(), 3);

    // Start is ignored mid-run.
    assert!(!state.apply_action(GameAction::Start));
}

#[test]
fn test_completing_an_order_scores_and_replaces_it() {
    let mut state = playing(7);
    let round = state.round_id();

    complete_order(&mut state);

    assert_eq!(state.score(), 10);
    assert_eq!(state.lives(), 3);
    assert_eq!(state.round_id(), round + 1);
    assert!(state.progress().is_empty());
    assert_eq!(state.time_left_ms(), state.time_limit_ms());
}

#[test]
fn test_wrong_step_costs_a_life_and_keeps_the_order() {
    let mut state = playing(11);
    let order = state.order().to_vec();

    assert!(state.apply_action(GameAction::Submit(order[0])));
    let wrong = wrong_for(&state);
    assert!(state.apply_action(GameAction::Submit(wrong)));

    assert_eq!(state.lives(), 2);
    assert!(state.progress().is_empty());
    assert_eq!(state.order(), order.as_slice());

    let cues: Vec<SoundCue> = state
        .drain_events()
        .filter_map(|e| match e {
            CoreEvent::Sound(cue) => Some(cue),
            _ => None,
        })
        .collect();
    assert_eq!(cues, vec![SoundCue::Correct, SoundCue::Error]);
}

#[test]
fn test_timeout_costs_a_life_and_generates_a_new_order() {
    let mut state = playing(3);
    let round = state.round_id();
    let limit = state.time_limit_ms();

    assert!(!state.tick(limit - 1));
    assert_eq!(state.lives(), 3);

    assert!(state.tick(1));
    assert_eq!(state.lives(), 2);
    assert_eq!(state.round_id(), round + 1);
    assert_eq!(state.time_left_ms(), limit);
}

#[test]
fn test_stale_timeout_is_ignored() {
    let mut state = playing(5);
    let old = state.timer().unwrap();

    complete_order(&mut state);
    assert_ne!(state.timer(), Some(old));

    assert!(!state.on_timeout(old));
    assert_eq!(state.lives(), 3);
}

#[test]
fn test_last_life_lost_to_timeout_ends_the_game() {
    let mut state = playing(9);
    state.set_high_score(0);
    complete_order(&mut state);

    while state.lives() > 0 {
        let limit = state.time_limit_ms();
        state.tick(limit);
    }

    assert_eq!(state.phase(), GamePhase::GameOver);
    assert_eq!(state.high_score(), 10);
    assert!(state.snapshot().new_high_score);
    assert_eq!(state.timer(), None);

    // Terminal: input and time are ignored.
    assert!(!state.apply_action(GameAction::Submit(ActionKind::Boil)));
    assert!(!state.tick(10_000));
    assert_eq!(state.score(), 10);
}

#[test]
fn test_restart_from_game_over() {
    let mut state = playing(13);
    for _ in 0..3 {
        let wrong = wrong_for(&state);
        state.apply_action(GameAction::Submit(wrong));
    }
    assert_eq!(state.phase(), GamePhase::GameOver);
    let episode = state.episode_id();

    assert!(state.apply_action(GameAction::Restart));
    assert_eq!(state.phase(), GamePhase::Playing);
    assert_eq!(state.lives(), 3);
    assert_eq!(state.score(), 0);
    assert_eq!(state.level(), 1);
    assert_eq!(state.episode_id(), episode + 1);
}

#[test]
fn test_intermission_holds_the_next_order() {
    let mut state = GameState::with_config(GameConfig::default(), 21).unwrap();
    state.apply_action(GameAction::Start);
    complete_order(&mut state);

    assert!(state.in_intermission());
    assert!(!state.apply_action(GameAction::Submit(ActionKind::Chop)));
    assert_eq!(state.timer(), None);

    let round = state.round_id();
    assert!(!state.tick(499));
    assert!(state.tick(1));
    assert!(!state.in_intermission());
    assert_eq!(state.round_id(), round + 1);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = playing(99);
    let mut b = playing(99);
    for _ in 0..5 {
        assert_eq!(a.order(), b.order());
        complete_order(&mut a);
        complete_order(&mut b);
    }
    assert_eq!(a.snapshot(), b.snapshot());
}
