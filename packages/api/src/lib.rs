//! # API crate: the DevConnector client
//!
//! Every page of the web app reaches the DevConnector API through
//! [`ApiClient`]. The client bundles the browser [`Session`](store::Session)
//! with an [`HttpTransport`] so that token lookup, header attachment, login
//! redirects and the post-ownership gate live in one place.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: session guard, request building, response classification |
//! | [`error`] | [`ApiError`] and the user-facing message rules |
//! | [`transport`] | [`HttpTransport`] seam, [`ReqwestTransport`] |
//! | [`models`] | Request and response bodies (`Profile`, `Post`, ...) |
//! | `account`, `profile`, `posts` | One `ApiClient` method per endpoint |
//!
//! ## Endpoints
//!
//! - **Account**: `login`, `register`, `logout` (local), `current_user`
//! - **Profile**: `create_profile`, `save_profile`, `current_profile`, `profiles`, `profile_by_user`,
//!   `add_experience`, `add_education`, `delete_experience`, `delete_education`,
//!   `delete_account`
//! - **Posts**: `posts`, `post`, `create_post`, `delete_post`, `like_post`,
//!   `unlike_post`, `add_comment`, `delete_comment`
//!
//! Calls marked private in the API need a session token; without one they
//! fail with [`ApiError::MissingSession`] before anything is sent.

mod account;
pub mod client;
pub mod error;
pub mod models;
mod posts;
mod profile;
mod recording;
pub mod transport;

pub use client::{ApiClient, AUTH_HEADER};
pub use error::{ApiError, LOGIN_REQUIRED_MESSAGE, NO_PERMISSION_MESSAGE};
pub use models::{
    Comment, Education, EducationRequest, Experience, ExperienceRequest, Like, Post, Profile,
    ProfileOwner, ProfileRequest, ProfileUser, SocialLinks, User,
};
pub use recording::RecordingTransport;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, ReqwestTransport, TransportError};

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    use store::{MemoryStore, Session};

    use crate::{ApiClient, RecordingTransport};

    pub const WEEK: Duration = Duration::from_secs(7 * 24 * 60 * 60);

    /// Client over an in-memory session and recording transport, plus a
    /// counter of login redirects.
    pub fn client() -> (
        ApiClient<MemoryStore, RecordingTransport>,
        MemoryStore,
        RecordingTransport,
        Rc<Cell<usize>>,
    ) {
        let store = MemoryStore::new();
        let transport = RecordingTransport::new();
        let redirects = Rc::new(Cell::new(0));
        let counter = redirects.clone();
        let client = ApiClient::new(Session::new(store.clone()), transport.clone())
            .with_login_redirect(move || counter.set(counter.get() + 1));
        (client, store, transport, redirects)
    }
}
