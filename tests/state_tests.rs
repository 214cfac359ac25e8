mod common;

use clavier::bundle::ResourceBundle;
use clavier::dispatch::{DispatchOutcome, TextBuffer, TransitionDirection};
use clavier::error::LoadError;
use clavier::layouts::{collection_of, KnownLayout};
use clavier::model::{KeyAction, KeyboardCollection};
use clavier::state::KeyboardState;
use clavier::LoadErrorKind;
use common::{TestBundle, CONFLICTING_ACTION, TWO_LAYOUTS};
use std::time::{Duration, Instant};

fn ready_state(collection: KeyboardCollection) -> KeyboardState {
    let mut state = KeyboardState::new();
    assert!(state.install(Ok(collection)));
    state
}

fn poll_until_published(state: &mut KeyboardState) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while !state.poll() {
        assert!(Instant::now() < deadline, "load never published");
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn test_background_load_publishes_once() {
    let tb = TestBundle::with_asset(TWO_LAYOUTS);
    let mut state = KeyboardState::new();

    assert!(state.request_load(&tb.bundle, "keyboards"));
    assert!(state.is_loading() || state.is_ready());
    assert!(!state.request_load(&tb.bundle, "keyboards"));

    poll_until_published(&mut state);
    assert!(state.is_ready());
    assert_eq!(state.active_index(), Some(0));
    assert_eq!(state.layout_count(), 2);

    // Later polls and requests change nothing.
    assert!(!state.poll());
    assert!(!state.request_load(&tb.bundle, "keyboards"));
    assert_eq!(state.layout_count(), 2);
}

#[test]
fn test_end_to_end_two_layouts_wrap_forward() {
    let tb = TestBundle::with_asset(TWO_LAYOUTS);
    let mut state = KeyboardState::new();
    state.request_load(&tb.bundle, "keyboards");
    assert!(state.wait());

    let mut field = TextBuffer::new();
    let switch = state.active_layout().unwrap().rows[1].keys[0].action.clone();
    assert_eq!(switch, KeyAction::SwitchToNextLayout);

    state.dispatch(&switch, &mut field);
    assert_eq!(state.active_index(), Some(1));
    assert_eq!(state.direction(), Some(TransitionDirection::Forward));

    let outcome = state.dispatch(&KeyAction::SwitchToNextLayout, &mut field);
    assert_eq!(
        outcome,
        Some(DispatchOutcome::Switched {
            from: 1,
            to: 0,
            direction: TransitionDirection::Forward
        })
    );
    assert_eq!(state.active_index(), Some(0));
    assert_eq!(state.direction(), Some(TransitionDirection::Forward));
    assert_eq!(field.as_str(), "");
}

#[test]
fn test_end_to_end_conflicting_action_leaves_keyboard_unavailable() {
    let tb = TestBundle::with_asset(CONFLICTING_ACTION);
    let mut state = KeyboardState::new();
    state.request_load(&tb.bundle, "keyboards");
    state.wait();

    assert!(!state.is_ready());
    assert!(state.active_layout().is_none());
    assert_eq!(state.active_index(), None);
    assert_eq!(state.error().unwrap().kind(), LoadErrorKind::SchemaViolation);
    assert!(state.status_line().starts_with("keyboard unavailable"));

    let mut field = TextBuffer::new();
    assert_eq!(
        state.dispatch(&KeyAction::InsertText("a".into()), &mut field),
        None
    );
    assert_eq!(field.as_str(), "");
}

#[test]
fn test_missing_asset_is_terminal() {
    let mut state = KeyboardState::new();
    state.request_load(&ResourceBundle::new("/nonexistent/clavier"), "keyboards");
    state.wait();
    assert_eq!(state.error().unwrap().kind(), LoadErrorKind::ResourceNotFound);

    // No way back to loading, and later results are dropped.
    let tb = TestBundle::with_asset(TWO_LAYOUTS);
    assert!(!state.request_load(&tb.bundle, "keyboards"));
    assert!(!state.install(Ok(collection_of(&[KnownLayout::Azerty]))));
    assert!(!state.is_ready());
}

#[test]
fn test_install_rejects_empty_collection() {
    let mut state = KeyboardState::new();
    state.install(Ok(KeyboardCollection::default()));
    assert!(matches!(state.error(), Some(LoadError::EmptyCollection)));
}

#[test]
fn test_dispatch_before_load_is_ignored() {
    let mut state = KeyboardState::new();
    let mut field = TextBuffer::new();
    assert_eq!(state.dispatch(&KeyAction::Space, &mut field), None);
    assert_eq!(state.status_line(), "keyboard idle");
}

#[test]
fn test_typing_and_switching() {
    let mut state = ready_state(collection_of(&[
        KnownLayout::Azerty,
        KnownLayout::Digits,
        KnownLayout::Qwerty,
    ]));
    let mut field = TextBuffer::new();

    for action in [
        KeyAction::InsertText("s".into()),
        KeyAction::InsertText("a".into()),
        KeyAction::Space,
        KeyAction::Backspace,
        KeyAction::SwitchToPreviousLayout,
    ] {
        state.dispatch(&action, &mut field);
    }

    assert_eq!(field.as_str(), "sa");
    assert_eq!(state.active_index(), Some(2));
    assert_eq!(state.direction(), Some(TransitionDirection::Backward));
    assert_eq!(state.status_line(), "layout 3 of 3");
    assert_eq!(state.active_layout().unwrap().rows[0].keys[1].visual.label(), "W");
}
