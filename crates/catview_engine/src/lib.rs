//! Catview engine: HTTP access to the cat image service.
mod client;
mod types;

pub use client::{ClientSettings, RemoteClient, ReqwestClient};
pub use types::{Endpoint, FailureKind, RemoteFetchError};
