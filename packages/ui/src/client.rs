//! Platform client constructor.
//!
//! Returns an [`api::ApiClient`] backed by the appropriate
//! [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): browser cookies via [`store::CookieStore`]
//! - **Everything else**: [`store::MemoryStore`], which lasts for the process

use api::{ApiClient, ReqwestTransport};
use dioxus::prelude::*;
use store::DevConnectorConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::CookieStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// The client every page uses.
pub type Client = ApiClient<PlatformStore, ReqwestTransport>;

fn platform_store() -> PlatformStore {
    PlatformStore::new()
}

/// Build a client for `config` with no login redirect attached.
pub fn make_client(config: &DevConnectorConfig) -> Client {
    let transport = ReqwestTransport::new(config.api.base_url.clone());
    ApiClient::from_config(platform_store(), transport, &config.session)
}

/// The client provided by the nearest [`SessionProvider`](crate::SessionProvider).
pub fn use_client() -> Client {
    use_context::<Client>()
}
