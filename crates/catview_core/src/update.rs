use catview_logging::{catview_debug, catview_info, catview_warn};

use crate::{build_image_url, AppState, Effect, ImagePayload, LoadState, Msg, TagCatalog};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let controls = state.controls();
    let effects = match msg {
        Msg::TagInputChanged(text) => {
            if controls.tag_input {
                state.set_tag_input(text);
            }
            Vec::new()
        }
        Msg::TagSelected(tag) => {
            if controls.tag_input {
                state.set_tag_input(tag);
            }
            Vec::new()
        }
        Msg::OverlayTextChanged(text) => {
            if controls.text_input {
                state.selection_mut().overlay_text = text;
            }
            Vec::new()
        }
        Msg::FontSizeSelected(size) => {
            if controls.font_size {
                state.selection_mut().font_size = Some(size);
            }
            Vec::new()
        }
        Msg::FontColorSelected(color) => {
            if controls.font_color {
                state.selection_mut().font_color = Some(color);
            }
            Vec::new()
        }
        Msg::FetchImageClicked => {
            // At most one image request in flight.
            if *state.load_state() != LoadState::Ready {
                catview_debug!(
                    "Ignoring image request while {:?}",
                    state.load_state()
                );
                return (state, Vec::new());
            }
            let url = build_image_url(state.api_base(), state.selection());
            let request_id = state.begin_image_request();
            catview_info!("Image request #{} -> {}", request_id, url);
            vec![Effect::FetchImage { request_id, url }]
        }
        Msg::CloseClicked => vec![Effect::Quit],
        Msg::TagsLoaded(tags) => {
            if *state.load_state() != LoadState::LoadingTags {
                catview_warn!("Ignoring tag list delivered while {:?}", state.load_state());
                return (state, Vec::new());
            }
            let catalog = TagCatalog::new(tags);
            catview_info!("Loaded {} tags", catalog.len());
            state.install_catalog(catalog);
            Vec::new()
        }
        Msg::TagsFailed(message) => {
            if *state.load_state() != LoadState::LoadingTags {
                return (state, Vec::new());
            }
            catview_warn!("Tag list unavailable: {}", message);
            state.fail_tags(message);
            Vec::new()
        }
        Msg::ImageLoaded { request_id, bytes } => {
            if !state.finish_image_request(request_id) {
                catview_warn!("Dropping stale image result #{}", request_id);
                return (state, Vec::new());
            }
            let payload = ImagePayload { request_id, bytes };
            state.show_image(payload.clone());
            vec![Effect::PresentImage(payload)]
        }
        Msg::ImageFailed {
            request_id,
            message,
        } => {
            if !state.finish_image_request(request_id) {
                catview_warn!("Dropping stale image failure #{}", request_id);
                return (state, Vec::new());
            }
            catview_warn!("Image request #{} failed: {}", request_id, message);
            state.show_image_error(message);
            vec![Effect::ClearImage]
        }
    };

    (state, effects)
}
