use std::sync::Arc;

use catview_core::{Effect, ImagePayload, Msg, RequestId};
use catview_engine::{RemoteClient, RemoteFetchError};
use catview_logging::{catview_error, catview_warn};
use iced::widget::image::Handle;
use iced::Task;

use super::app::Message;
use super::preview::decode_preview;
use super::ui::constants::MAX_IMAGE_WIDTH;

/// Turns core effects into background tasks. Every task reports back with a
/// single message, which iced delivers to `update` on the UI thread.
pub struct EffectRunner {
    client: Arc<dyn RemoteClient>,
}

impl EffectRunner {
    pub fn new(client: Arc<dyn RemoteClient>) -> Self {
        Self { client }
    }

    pub fn spawn(&self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::FetchTags => {
                let client = Arc::clone(&self.client);
                Task::perform(async move { client.fetch_tag_list().await }, |result| {
                    Message::Core(tags_message(result))
                })
            }
            Effect::FetchImage { request_id, url } => {
                let client = Arc::clone(&self.client);
                Task::perform(
                    async move { client.fetch_image_bytes(&url).await },
                    move |result| Message::Core(image_message(request_id, result)),
                )
            }
            Effect::PresentImage(payload) => present(payload),
            // Handled synchronously by the application.
            Effect::ClearImage | Effect::Quit => Task::none(),
        }
    }
}

/// Maps a finished tag fetch to the message the core expects.
fn tags_message(result: Result<Vec<String>, RemoteFetchError>) -> Msg {
    match result {
        Ok(tags) => Msg::TagsLoaded(tags),
        Err(err) => {
            catview_warn!("Tag fetch failed: {}", err);
            Msg::TagsFailed(err.to_string())
        }
    }
}

fn image_message(request_id: RequestId, result: Result<Vec<u8>, RemoteFetchError>) -> Msg {
    match result {
        Ok(bytes) => Msg::ImageLoaded {
            request_id,
            bytes: bytes.into(),
        },
        Err(err) => {
            catview_warn!("Image #{} fetch failed: {}", request_id, err);
            Msg::ImageFailed {
                request_id,
                message: err.to_string(),
            }
        }
    }
}

fn present(payload: ImagePayload) -> Task<Message> {
    let ImagePayload { request_id, bytes } = payload;
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || decode_preview(&bytes, MAX_IMAGE_WIDTH))
                .await
                .map_err(|err| err.to_string())
                .and_then(|decoded| decoded.map_err(|err| err.to_string()))
        },
        move |result| match result {
            Ok(preview) => Message::PreviewReady {
                request_id,
                handle: Handle::from_rgba(preview.width, preview.height, preview.pixels),
            },
            Err(message) => {
                catview_error!("Image #{} could not be decoded: {}", request_id, message);
                Message::PreviewFailed {
                    request_id,
                    message,
                }
            }
        },
    )
}
