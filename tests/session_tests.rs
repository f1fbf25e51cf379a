//! Session tests.
//!
//! These tests drive a session the way a page would:
//! - Key presses and clicks
//! - Timeline ticks between them
//! - Reset back to a fresh board

use magic_cards::cards::CardId;
use magic_cards::display::{CardClass, LoadingModal};
use magic_cards::input::Command;
use magic_cards::scoring::compute_delta;
use magic_cards::core::{SessionConfig, TimingConfig};
use magic_cards::session::{Session, Theme};

fn started(config: SessionConfig) -> Session {
    let mut session = Session::new(config).expect("valid config");
    session.initialize();
    session.run_until_idle();
    session
}

/// Clicking scores the power the card was generated with.
#[test]
fn test_click_uses_bound_power() {
    let mut session = started(SessionConfig::new(21));
    let (element, _) = session.board().elements().next().unwrap();
    let power = session.board().card_for(element).unwrap().power;

    let delta = session.click(element).unwrap();

    assert_eq!(delta, compute_delta(power, 2));
    assert_eq!(session.score(), delta);
    assert_eq!(session.board().element(element).unwrap().power_label, format!("Power: {}", power));
}

/// Repeated clicks accumulate.
#[test]
fn test_score_accumulates() {
    let mut session = started(SessionConfig::new(22));
    let elements: Vec<_> = session.board().elements().map(|(id, _)| id).collect();

    let mut expected = 0;
    for &element in &elements {
        expected += session.click(element).unwrap();
    }
    expected += session.click(elements[0]).unwrap();

    assert_eq!(session.score(), expected);
    assert_eq!(session.scoreboard().interactions(), 5);
}

/// `reset_score` zeroes the score and the next card gets id 1.
#[test]
fn test_reset_score_then_generate() {
    let mut session = started(SessionConfig::new(23));
    let (element, _) = session.board().elements().next().unwrap();
    session.click(element);

    session.reset_score();
    assert_eq!(session.score(), 0);
    assert_eq!(session.board().score().value, 0);

    session.handle_key('c');
    session.run_until_idle();

    let (_, newest) = session.board().elements().last().unwrap();
    assert_eq!(newest.card_id, CardId::new(1));
}

/// Full reset through the keyboard ends with a fresh board.
#[test]
fn test_reset_all_via_key() {
    let mut session = started(SessionConfig::new(24).with_initial_cards(3));
    session.handle_key('c');
    session.run_until_idle();
    assert_eq!(session.board().len(), 4);

    let elements: Vec<_> = session.board().elements().map(|(id, _)| id).collect();
    for element in elements {
        session.click(element);
    }
    assert!(session.score() > 0);

    assert_eq!(session.handle_key('r'), Some(Command::ResetAll));
    session.run_until_idle();

    assert_eq!(session.score(), 0);
    assert_eq!(session.board().len(), 3);
    let ids: Vec<_> = session.board().elements().map(|(_, el)| el.card_id.raw()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(session.board().elements().all(|(_, el)| el.is_visible()));
}

/// Clicks on elements removed by a reset are ignored.
#[test]
fn test_click_after_reset_is_noop() {
    let mut session = started(SessionConfig::new(25));
    let (old, _) = session.board().elements().next().unwrap();

    session.reset();
    session.run_until_idle();

    assert_eq!(session.click(old), None);
    assert_eq!(session.score(), 0);
}

/// The loading modal walks through its phases around a card request.
#[test]
fn test_loading_modal_phases() {
    let mut session = started(SessionConfig::new(26));
    let start = session.now();

    session.create_random_card();
    let mut phases = vec![session.board().modal()];
    for offset in [10, 1500, 2000] {
        session.tick(start + offset);
        phases.push(session.board().modal());
    }

    assert_eq!(
        phases,
        vec![
            LoadingModal::Displayed,
            LoadingModal::Shown,
            LoadingModal::FadingOut,
            LoadingModal::Hidden,
        ]
    );
}

/// Animate-all bounces every card and clears the class afterwards.
#[test]
fn test_animate_all_via_key() {
    let mut session = started(SessionConfig::new(27));
    let start = session.now();

    session.handle_key('a');
    session.tick(start + 600);
    assert!(session.board().elements().all(|(_, el)| el.has_class(CardClass::AnimateBounce)));

    session.run_until_idle();
    assert!(session.board().elements().all(|(_, el)| !el.has_class(CardClass::AnimateBounce)));
}

/// Theme toggles independently of score and cards.
#[test]
fn test_theme_toggle_leaves_board_alone() {
    let mut session = started(SessionConfig::new(28));
    let before: Vec<_> = session.board().elements().map(|(_, el)| el.card_id).collect();

    session.handle_key('t');
    assert_eq!(session.theme(), Theme::Light);
    assert_eq!(session.theme().body_class(), Some("light-theme"));

    let after: Vec<_> = session.board().elements().map(|(_, el)| el.card_id).collect();
    assert_eq!(before, after);
    assert_eq!(session.pending_tasks(), 0);
}

/// Same seed, same keys, same board.
#[test]
fn test_sessions_are_reproducible() {
    let config = SessionConfig::new(99).with_timing(TimingConfig::instant());
    let mut a = started(config.clone());
    let mut b = started(config);

    for key in "cccarc".chars() {
        a.handle_key(key);
        b.handle_key(key);
        a.run_until_idle();
        b.run_until_idle();
    }

    let titles_a: Vec<_> = a.board().elements().map(|(_, el)| el.title.clone()).collect();
    let titles_b: Vec<_> = b.board().elements().map(|(_, el)| el.title.clone()).collect();
    assert_eq!(titles_a, titles_b);
    assert_eq!(a.board().len(), 5);
}

/// Config loaded from JSON drives the session.
#[test]
fn test_session_from_json_config() {
    let config = SessionConfig::from_json(r#"{"seed": 3, "initial_cards": 6, "interaction_multiplier": 3}"#).unwrap();
    let mut session = started(config);

    assert_eq!(session.board().len(), 6);
    let (element, _) = session.board().elements().next().unwrap();
    let power = session.board().card_for(element).unwrap().power;
    assert_eq!(session.click(element), Some(compute_delta(power, 3)));
}
