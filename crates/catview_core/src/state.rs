use std::sync::Arc;

use url::Url;

use crate::view_model::{AppViewModel, ControlAvailability};
use crate::{Effect, FilterSelection, TagCatalog, SENTINEL_TAG};

pub type RequestId = u64;

const TAG_FAILURE_INDICATOR: &str = "Failed to load";

/// Which phase the viewer is in. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    LoadingTags,
    Ready,
    LoadingImage,
    Error(String),
}

/// Encoded image bytes together with the request that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub request_id: RequestId,
    pub bytes: Arc<[u8]>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Notice {
    None,
    LoadingTags,
    Prompt,
    BuildingImage,
    TagsFailed(String),
    ImageFailed(String),
}

impl Notice {
    fn text(&self) -> String {
        match self {
            Notice::None => String::new(),
            Notice::LoadingTags => "Fetching tag list...".to_string(),
            Notice::Prompt => "Ready! Customize your cat and press the button.".to_string(),
            Notice::BuildingImage => "Building your cat image...".to_string(),
            Notice::TagsFailed(message) => format!("Failed to load tags: {message}"),
            Notice::ImageFailed(message) => format!("Failed to fetch image: {message}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    api_base: Url,
    load: LoadState,
    catalog: TagCatalog,
    tag_input: String,
    visible_tags: Vec<String>,
    selection: FilterSelection,
    notice: Notice,
    image: Option<ImagePayload>,
    in_flight: Option<RequestId>,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    /// Creates an idle state; nothing is fetched until [`AppState::boot`].
    pub fn new(api_base: Url) -> Self {
        Self {
            api_base,
            load: LoadState::Idle,
            catalog: TagCatalog::default(),
            tag_input: String::new(),
            visible_tags: Vec::new(),
            selection: FilterSelection::default(),
            notice: Notice::None,
            image: None,
            in_flight: None,
            next_request_id: 1,
            dirty: false,
        }
    }

    /// Creates the state the viewer starts in: tags loading, one fetch queued.
    pub fn boot(api_base: Url) -> (Self, Vec<Effect>) {
        let mut state = Self::new(api_base);
        state.load = LoadState::LoadingTags;
        state.notice = Notice::LoadingTags;
        state.tag_input = "Loading tags...".to_string();
        state.mark_dirty();
        (state, vec![Effect::FetchTags])
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            load_state: self.load.clone(),
            controls: self.controls(),
            tag_input: self.tag_input.clone(),
            visible_tags: self.visible_tags.clone(),
            selection: self.selection.clone(),
            status: self.notice.text(),
            image: self.image.clone(),
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn catalog(&self) -> &TagCatalog {
        &self.catalog
    }

    pub fn controls(&self) -> ControlAvailability {
        ControlAvailability::for_state(&self.load)
    }

    /// The image request currently awaiting a result, if any.
    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn api_base(&self) -> &Url {
        &self.api_base
    }

    pub(crate) fn install_catalog(&mut self, catalog: TagCatalog) {
        self.visible_tags = catalog.tags().to_vec();
        self.catalog = catalog;
        self.tag_input = SENTINEL_TAG.to_string();
        self.selection.tag = Some(SENTINEL_TAG.to_string());
        self.load = LoadState::Ready;
        self.notice = Notice::Prompt;
        self.mark_dirty();
    }

    pub(crate) fn fail_tags(&mut self, message: String) {
        self.tag_input = TAG_FAILURE_INDICATOR.to_string();
        self.visible_tags.clear();
        self.notice = Notice::TagsFailed(message.clone());
        self.load = LoadState::Error(message);
        self.mark_dirty();
    }

    /// The typed text is the tag that goes into the next request.
    pub(crate) fn set_tag_input(&mut self, text: String) {
        self.visible_tags = self.catalog.filter(&text);
        let trimmed = text.trim();
        self.selection.tag = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self.tag_input = text;
        self.mark_dirty();
    }

    pub(crate) fn selection_mut(&mut self) -> &mut FilterSelection {
        self.mark_dirty();
        &mut self.selection
    }

    pub(crate) fn begin_image_request(&mut self) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight = Some(request_id);
        self.load = LoadState::LoadingImage;
        self.notice = Notice::BuildingImage;
        self.mark_dirty();
        request_id
    }

    /// Closes the in-flight request if `request_id` is the one awaited.
    pub(crate) fn finish_image_request(&mut self, request_id: RequestId) -> bool {
        if self.in_flight != Some(request_id) {
            return false;
        }
        self.in_flight = None;
        self.load = LoadState::Ready;
        self.mark_dirty();
        true
    }

    pub(crate) fn show_image(&mut self, payload: ImagePayload) {
        self.image = Some(payload);
        self.notice = Notice::None;
    }

    pub(crate) fn show_image_error(&mut self, message: String) {
        self.image = None;
        self.notice = Notice::ImageFailed(message);
    }
}
