use std::sync::Arc;

use crate::{FontColor, FontSize, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the tag field (every keystroke).
    TagInputChanged(String),
    /// User picked one of the suggested tags.
    TagSelected(String),
    /// User edited the overlay text.
    OverlayTextChanged(String),
    FontSizeSelected(FontSize),
    FontColorSelected(FontColor),
    /// User asked for the next cat image.
    FetchImageClicked,
    CloseClicked,
    /// Tag fetch succeeded; the list already carries the sentinel entry.
    TagsLoaded(Vec<String>),
    /// Tag fetch failed with a user-readable message.
    TagsFailed(String),
    /// Image fetch completed.
    ImageLoaded {
        request_id: RequestId,
        bytes: Arc<[u8]>,
    },
    /// Image fetch failed with a user-readable message.
    ImageFailed {
        request_id: RequestId,
        message: String,
    },
}
