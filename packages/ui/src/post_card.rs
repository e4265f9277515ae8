use api::{Comment, Post};
use dioxus::prelude::*;

use crate::format::{avatar_url, date};
use crate::icons::{FaThumbsDown, FaThumbsUp, FaTrashCan};
use crate::Icon;

/// One post in the feed.
///
/// The delete control is shown only when `owned` is set. Like and unlike are
/// independent actions; the card never adjusts its own counts.
#[component]
pub fn PostCard(
    post: Post,
    #[props(default)] owned: bool,
    on_like: EventHandler<String>,
    on_unlike: EventHandler<String>,
    on_delete: EventHandler<String>,
    /// Opens the discussion page. Hidden when not set.
    #[props(default)]
    on_discuss: Option<EventHandler<String>>,
) -> Element {
    let avatar = avatar_url(&post.avatar);
    let posted = date(&post.date).to_string();
    let likes = post.like_count();
    let comments = post.comment_count();
    let like_id = post.id.clone();
    let unlike_id = post.id.clone();
    let delete_id = post.id.clone();
    let discuss_id = post.id.clone();

    rsx! {
        div {
            class: "post",
            div {
                class: "post-author",
                if !avatar.is_empty() {
                    img { class: "avatar", src: "{avatar}", alt: "{post.name}" }
                }
                h4 { "{post.name}" }
            }
            div {
                class: "post-body",
                p { "{post.text}" }
                if !posted.is_empty() {
                    p { class: "post-date", "Posted on {posted}" }
                }
                button {
                    class: "btn btn-light",
                    title: "Like",
                    onclick: move |_| on_like.call(like_id.clone()),
                    Icon { icon: FaThumbsUp, width: 14, height: 14 }
                    if likes > 0 {
                        span { " {likes}" }
                    }
                }
                button {
                    class: "btn btn-light",
                    title: "Unlike",
                    onclick: move |_| on_unlike.call(unlike_id.clone()),
                    Icon { icon: FaThumbsDown, width: 14, height: 14 }
                }
                if let Some(on_discuss) = on_discuss {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_discuss.call(discuss_id.clone()),
                        "Discussion"
                        if comments > 0 {
                            span { class: "comment-count", " {comments}" }
                        }
                    }
                }
                if owned {
                    button {
                        class: "btn btn-danger",
                        title: "Delete post",
                        onclick: move |_| on_delete.call(delete_id.clone()),
                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}

/// Comments under a post. Delete is offered on comments written by
/// `current_user_id`.
#[component]
pub fn CommentList(
    comments: Vec<Comment>,
    #[props(default)] current_user_id: Option<String>,
    on_delete: EventHandler<String>,
) -> Element {
    if comments.is_empty() {
        return rsx! {
            p { class: "muted", "No comments yet" }
        };
    }

    rsx! {
        div {
            class: "comments",
            for comment in comments {
                CommentItem {
                    key: "{comment.id}",
                    deletable: current_user_id.as_deref() == Some(comment.user.as_str()),
                    comment: comment.clone(),
                    on_delete,
                }
            }
        }
    }
}

#[component]
fn CommentItem(comment: Comment, deletable: bool, on_delete: EventHandler<String>) -> Element {
    let avatar = avatar_url(&comment.avatar);
    let posted = date(&comment.date).to_string();
    let comment_id = comment.id.clone();

    rsx! {
        div {
            class: "post comment",
            div {
                class: "post-author",
                if !avatar.is_empty() {
                    img { class: "avatar", src: "{avatar}", alt: "{comment.name}" }
                }
                h4 { "{comment.name}" }
            }
            div {
                class: "post-body",
                p { "{comment.text}" }
                if !posted.is_empty() {
                    p { class: "post-date", "Posted on {posted}" }
                }
                if deletable {
                    button {
                        class: "btn btn-danger",
                        title: "Delete comment",
                        onclick: move |_| on_delete.call(comment_id.clone()),
                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}
