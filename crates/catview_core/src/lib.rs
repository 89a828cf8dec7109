//! Catview core: pure state machine, URL building and tag filtering.
mod effect;
mod filter;
mod msg;
mod state;
mod tags;
mod update;
mod url_builder;
mod view_model;

pub use effect::Effect;
pub use filter::{FilterSelection, FontColor, FontSize};
pub use msg::Msg;
pub use state::{AppState, ImagePayload, LoadState, RequestId};
pub use tags::{filter_tags, TagCatalog, SENTINEL_TAG};
pub use update::update;
pub use url_builder::{build_image_url, image_url};
pub use view_model::{AppViewModel, ControlAvailability};

/// Base address of the public cat image service.
pub const DEFAULT_API_BASE: &str = "https://cataas.com";
