pub mod config;
pub mod cookie;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use cookie::CookieStore;

pub use config::{ApiConfig, DevConnectorConfig, SessionConfig};
pub use session::{KeyValueStore, Session};
