use crate::{ImagePayload, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the tag list once, at startup.
    FetchTags,
    /// Fetch the image bytes for a fully built request URL.
    FetchImage { request_id: RequestId, url: String },
    /// Hand a freshly fetched image over to the view.
    PresentImage(ImagePayload),
    /// Drop whatever image the view currently shows.
    ClearImage,
    Quit,
}
