//! Post feed with the new-post form.
//!
//! Every mutation refetches the feed; counts are never patched locally.

use api::Post;
use dioxus::prelude::*;
use ui::{use_client, ErrorAlert, Loading, PostCard};

use crate::Route;

#[component]
pub fn Posts() -> Element {
    let client = use_client();
    let nav = use_navigator();
    let mut posts = use_signal(Vec::<Post>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(String::new);
    let mut text = use_signal(String::new);

    let mut loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match client.posts().await {
                    Ok(list) => {
                        error.set(String::new());
                        posts.set(list);
                    }
                    Err(e) => error.set(e.user_message("Error fetching posts")),
                }
                loading.set(false);
            }
        }
    });

    let handle_submit = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            spawn(async move {
                error.set(String::new());
                match client.create_post(&text()).await {
                    Ok(_) => {
                        text.set(String::new());
                        loader.restart();
                    }
                    Err(e) => error.set(e.user_message("Error creating post")),
                }
            });
        }
    };

    let on_like = {
        let client = client.clone();
        move |post_id: String| {
            let client = client.clone();
            spawn(async move {
                match client.like_post(&post_id).await {
                    Ok(()) => loader.restart(),
                    Err(e) => error.set(e.user_message("Error liking post")),
                }
            });
        }
    };

    let on_unlike = {
        let client = client.clone();
        move |post_id: String| {
            let client = client.clone();
            spawn(async move {
                match client.unlike_post(&post_id).await {
                    Ok(()) => loader.restart(),
                    Err(e) => error.set(e.user_message("Error unliking post")),
                }
            });
        }
    };

    let on_delete = {
        let client = client.clone();
        move |post_id: String| {
            let client = client.clone();
            spawn(async move {
                match client.delete_post(&post_id).await {
                    Ok(()) => loader.restart(),
                    Err(e) => error.set(e.user_message("Error deleting post")),
                }
            });
        }
    };

    let on_discuss = move |post_id: String| {
        nav.push(Route::Discussion { post_id });
    };

    if loading() {
        return rsx! { Loading {} };
    }

    rsx! {
        section {
            h1 { class: "large text-primary", "Posts" }
            p { class: "lead", "Welcome to the community!" }

            ErrorAlert { message: error() }

            div {
                class: "post-form",
                div { class: "bg-primary p", h3 { "Say Something..." } }
                form {
                    class: "form",
                    onsubmit: handle_submit,
                    textarea {
                        placeholder: "Create a post",
                        required: true,
                        value: text(),
                        oninput: move |evt: FormEvent| text.set(evt.value()),
                    }
                    button { class: "btn btn-dark", r#type: "submit", "Submit" }
                }
            }

            div {
                class: "posts",
                for post in posts() {
                    PostCard {
                        key: "{post.id}",
                        owned: client.owns_post(&post.id),
                        post: post.clone(),
                        on_like: on_like.clone(),
                        on_unlike: on_unlike.clone(),
                        on_delete: on_delete.clone(),
                        on_discuss,
                    }
                }
            }
        }
    }
}
