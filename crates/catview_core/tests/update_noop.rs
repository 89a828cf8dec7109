mod common;

use catview_core::{update, AppState, LoadState, Msg};
use common::image_bytes;

#[test]
fn idle_state_ignores_edits() {
    let state = AppState::new(common::base());
    let (mut next, effects) = update(state.clone(), Msg::OverlayTextChanged("hi".to_string()));

    assert_eq!(next.load_state(), &LoadState::Idle);
    assert_eq!(next.selection(), state.selection());
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn unsolicited_results_leave_state_untouched() {
    let state = AppState::new(common::base());

    for msg in [
        Msg::TagsLoaded(common::tags(&["cute"])),
        Msg::TagsFailed("late".to_string()),
        Msg::ImageLoaded {
            request_id: 1,
            bytes: image_bytes(b"stray"),
        },
        Msg::ImageFailed {
            request_id: 1,
            message: "stray".to_string(),
        },
        Msg::FetchImageClicked,
    ] {
        let (next, effects) = update(state.clone(), msg.clone());
        assert_eq!(next, state, "{msg:?}");
        assert!(effects.is_empty(), "{msg:?}");
    }
}
