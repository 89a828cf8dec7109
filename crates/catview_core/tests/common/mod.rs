#![allow(dead_code)]

use std::sync::{Arc, Once};

use catview_core::{update, AppState, Effect, Msg, RequestId, DEFAULT_API_BASE};
use url::Url;

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(catview_logging::initialize_for_tests);
}

pub fn base() -> Url {
    Url::parse(DEFAULT_API_BASE).unwrap()
}

pub fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|tag| tag.to_string()).collect()
}

/// A booted state whose tag list has arrived.
pub fn ready_state() -> AppState {
    let (state, _) = AppState::boot(base());
    let (state, _) = update(state, Msg::TagsLoaded(tags(&["Any", "funny", "fluffy", "cute"])));
    state
}

/// Clicks "fetch" and returns the request id carried by the effect.
pub fn request_image(state: AppState) -> (AppState, RequestId, String) {
    let (state, effects) = update(state, Msg::FetchImageClicked);
    match effects.as_slice() {
        [Effect::FetchImage { request_id, url }] => (state, *request_id, url.clone()),
        other => panic!("expected a single FetchImage effect, got {other:?}"),
    }
}

pub fn image_bytes(raw: &[u8]) -> Arc<[u8]> {
    Arc::from(raw)
}
