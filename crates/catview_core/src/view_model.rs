use crate::{FilterSelection, ImagePayload, LoadState};

/// Which controls accept input. A pure function of [`LoadState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlAvailability {
    pub tag_input: bool,
    pub text_input: bool,
    pub font_size: bool,
    pub font_color: bool,
    pub fetch_button: bool,
    pub close_button: bool,
}

impl ControlAvailability {
    pub fn for_state(state: &LoadState) -> Self {
        let ready = matches!(state, LoadState::Ready);
        Self {
            tag_input: ready,
            text_input: ready,
            font_size: ready,
            font_color: ready,
            fetch_button: ready,
            close_button: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub load_state: LoadState,
    pub controls: ControlAvailability,
    pub tag_input: String,
    pub visible_tags: Vec<String>,
    pub selection: FilterSelection,
    pub status: String,
    pub image: Option<ImagePayload>,
}
