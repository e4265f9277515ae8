//! A single post with its comments.

use api::{ApiClient, ApiError, HttpTransport, Post};
use dioxus::prelude::*;
use store::KeyValueStore;
use ui::{use_client, CommentList, ErrorAlert, Loading, PostCard};

use crate::Route;

/// The post, plus the reader's account id when `known_user` is not set.
///
/// Stops at the first failure, so a missing session redirects only once.
async fn load_discussion<S: KeyValueStore, T: HttpTransport>(
    client: &ApiClient<S, T>,
    post_id: &str,
    known_user: Option<String>,
) -> Result<(Post, Option<String>), ApiError> {
    let post = client.post(post_id).await?;
    let user_id = match known_user {
        Some(id) => Some(id),
        None => match client.current_user().await {
            Ok(user) => Some(user.id),
            Err(e) => {
                tracing::debug!("Could not load account: {}", e);
                None
            }
        },
    };
    Ok((post, user_id))
}

#[component]
pub fn Discussion(post_id: String) -> Element {
    let mut id_signal = use_signal(|| post_id.clone());
    if *id_signal.peek() != post_id {
        id_signal.set(post_id.clone());
    }

    let client = use_client();
    let nav = use_navigator();
    let mut post = use_signal(|| Option::<Post>::None);
    let mut current_user_id = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(String::new);
    let mut text = use_signal(String::new);

    let mut loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let id = id_signal();
            async move {
                let known_user = current_user_id.peek().clone();
                match load_discussion(&client, &id, known_user).await {
                    Ok((found, user_id)) => {
                        error.set(String::new());
                        post.set(Some(found));
                        current_user_id.set(user_id);
                    }
                    Err(e) => {
                        post.set(None);
                        error.set(e.user_message("Error loading post"));
                    }
                }
                loading.set(false);
            }
        }
    });

    let handle_comment = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            spawn(async move {
                error.set(String::new());
                match client.add_comment(&id_signal(), &text()).await {
                    Ok(_) => {
                        text.set(String::new());
                        loader.restart();
                    }
                    Err(e) => error.set(e.user_message("Error adding comment")),
                }
            });
        }
    };

    let delete_comment = {
        let client = client.clone();
        move |comment_id: String| {
            let client = client.clone();
            spawn(async move {
                match client.delete_comment(&id_signal(), &comment_id).await {
                    Ok(()) => loader.restart(),
                    Err(e) => error.set(e.user_message("Error deleting comment")),
                }
            });
        }
    };

    let on_like = {
        let client = client.clone();
        move |id: String| {
            let client = client.clone();
            spawn(async move {
                match client.like_post(&id).await {
                    Ok(()) => loader.restart(),
                    Err(e) => error.set(e.user_message("Error liking post")),
                }
            });
        }
    };

    let on_unlike = {
        let client = client.clone();
        move |id: String| {
            let client = client.clone();
            spawn(async move {
                match client.unlike_post(&id).await {
                    Ok(()) => loader.restart(),
                    Err(e) => error.set(e.user_message("Error unliking post")),
                }
            });
        }
    };

    let on_delete = {
        let client = client.clone();
        move |id: String| {
            let client = client.clone();
            spawn(async move {
                match client.delete_post(&id).await {
                    Ok(()) => {
                        nav.replace(Route::Posts {});
                    }
                    Err(e) => error.set(e.user_message("Error deleting post")),
                }
            });
        }
    };

    if loading() {
        return rsx! { Loading {} };
    }

    let Some(post) = post() else {
        return rsx! {
            Link { class: "btn btn-light", to: Route::Posts {}, "Back To Posts" }
            ErrorAlert { message: error() }
        };
    };

    rsx! {
        Link { class: "btn btn-light", to: Route::Posts {}, "Back To Posts" }

        ErrorAlert { message: error() }

        PostCard {
            owned: client.owns_post(&post.id),
            post: post.clone(),
            on_like,
            on_unlike,
            on_delete,
        }

        div {
            class: "post-form",
            div { class: "bg-primary p", h3 { "Leave A Comment" } }
            form {
                class: "form",
                onsubmit: handle_comment,
                textarea {
                    placeholder: "Comment on this post",
                    required: true,
                    value: text(),
                    oninput: move |evt: FormEvent| text.set(evt.value()),
                }
                button { class: "btn btn-dark", r#type: "submit", "Submit" }
            }
        }

        CommentList {
            comments: post.comments.clone(),
            current_user_id: current_user_id(),
            on_delete: delete_comment,
        }
    }
}
