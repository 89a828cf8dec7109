mod common;

use catview_core::{update, AppState, Effect, LoadState, Msg, SENTINEL_TAG};
use common::{base, init_logging, ready_state, tags};
use pretty_assertions::assert_eq;

#[test]
fn boot_starts_tag_fetch_with_controls_disabled() {
    init_logging();
    let (mut state, effects) = AppState::boot(base());

    assert_eq!(effects, vec![Effect::FetchTags]);
    assert_eq!(state.load_state(), &LoadState::LoadingTags);
    let view = state.view();
    assert!(!view.controls.tag_input);
    assert!(!view.controls.fetch_button);
    assert!(view.controls.close_button);
    assert_eq!(view.status, "Fetching tag list...");
    assert!(state.consume_dirty());
}

#[test]
fn tags_loaded_moves_to_ready_and_selects_sentinel() {
    init_logging();
    let state = ready_state();
    let view = state.view();

    assert_eq!(view.load_state, LoadState::Ready);
    assert_eq!(view.tag_input, SENTINEL_TAG);
    assert_eq!(view.selection.tag.as_deref(), Some(SENTINEL_TAG));
    assert_eq!(view.visible_tags, tags(&["Any", "funny", "fluffy", "cute"]));
    assert!(view.controls.tag_input && view.controls.fetch_button);
    assert_eq!(view.status, "Ready! Customize your cat and press the button.");
}

#[test]
fn tags_failure_leaves_tag_input_disabled() {
    init_logging();
    let (state, _) = AppState::boot(base());
    let (state, effects) = update(state, Msg::TagsFailed("tags request timed out".to_string()));
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(
        view.load_state,
        LoadState::Error("tags request timed out".to_string())
    );
    assert!(!view.controls.tag_input);
    assert!(!view.controls.fetch_button);
    assert_eq!(view.tag_input, "Failed to load");
    assert_eq!(view.status, "Failed to load tags: tags request timed out");

    let (state, effects) = update(state, Msg::FetchImageClicked);
    assert!(effects.is_empty());
    assert!(matches!(state.load_state(), LoadState::Error(_)));
}

#[test]
fn tag_list_is_applied_only_once() {
    init_logging();
    let state = ready_state();
    let (mut state, _) = update(state, Msg::TagInputChanged("fl".to_string()));
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::TagsLoaded(tags(&["other"])));
    assert!(effects.is_empty());
    assert_eq!(state.catalog().tags(), tags(&["Any", "funny", "fluffy", "cute"]));
    assert_eq!(state.view().tag_input, "fl");
    assert!(!state.consume_dirty());
}

#[test]
fn typing_filters_suggestions_and_sets_tag() {
    init_logging();
    let state = ready_state();

    let (state, _) = update(state, Msg::TagInputChanged("FL".to_string()));
    let view = state.view();
    assert_eq!(view.visible_tags, tags(&["fluffy"]));
    assert_eq!(view.selection.tag.as_deref(), Some("FL"));

    let (state, _) = update(state, Msg::TagInputChanged(String::new()));
    let view = state.view();
    assert_eq!(view.visible_tags, tags(&["Any", "funny", "fluffy", "cute"]));
    assert_eq!(view.selection.tag, None);
    assert_eq!(state.catalog().len(), 4);
}

#[test]
fn selecting_a_suggestion_sets_tag() {
    init_logging();
    let state = ready_state();
    let (state, _) = update(state, Msg::TagInputChanged("f".to_string()));
    let (state, _) = update(state, Msg::TagSelected("funny".to_string()));
    let view = state.view();

    assert_eq!(view.tag_input, "funny");
    assert_eq!(view.selection.tag.as_deref(), Some("funny"));
    assert_eq!(view.visible_tags, tags(&["funny"]));
}

#[test]
fn close_emits_quit_in_any_state() {
    init_logging();
    let (state, _) = AppState::boot(base());
    let (_, effects) = update(state, Msg::CloseClicked);
    assert_eq!(effects, vec![Effect::Quit]);

    let (_, effects) = update(ready_state(), Msg::CloseClicked);
    assert_eq!(effects, vec![Effect::Quit]);
}
