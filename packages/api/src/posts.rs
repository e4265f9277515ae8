//! # Post endpoints and the ownership gate
//!
//! Creating a post records its id in the session's owned-post list; deleting
//! it removes the id again. [`ApiClient::delete_post`] refuses locally, with
//! no request, when the id is not in that list.
//!
//! The list only mirrors what this browser created. It can be lost (cleared
//! storage, another browser) or edited by hand, so it hides controls rather
//! than protecting anything: the API still decides whether a delete is
//! allowed and its answer is what the caller gets.

use store::KeyValueStore;

use crate::client::{json_body, Access, ApiClient};
use crate::error::ApiError;
use crate::models::{Comment, Post, PostText};
use crate::transport::{HttpTransport, Method};

impl<S: KeyValueStore, T: HttpTransport> ApiClient<S, T> {
    /// `GET /api/posts`, newest first as ordered by the API.
    pub async fn posts(&self) -> Result<Vec<Post>, ApiError> {
        self.fetch(Method::Get, "/api/posts", None, Access::Private)
            .await
    }

    /// `GET /api/posts/:id`.
    pub async fn post(&self, post_id: &str) -> Result<Post, ApiError> {
        self.fetch(
            Method::Get,
            &format!("/api/posts/{post_id}"),
            None,
            Access::Private,
        )
        .await
    }

    /// `POST /api/posts`, then record the new post as owned by this session.
    pub async fn create_post(&self, text: &str) -> Result<Post, ApiError> {
        let body = json_body(&PostText {
            text: text.to_string(),
        })?;
        let post: Post = self
            .fetch(Method::Post, "/api/posts", Some(body), Access::Private)
            .await?;
        if post.id.is_empty() {
            tracing::warn!("Created post has no id, not recording ownership");
        } else {
            self.session.record_ownership(&post.id);
        }
        Ok(post)
    }

    /// Whether the delete control should be offered for `post_id`.
    pub fn owns_post(&self, post_id: &str) -> bool {
        self.session.is_owned(post_id)
    }

    /// Delete a post created from this browser.
    ///
    /// Fails with [`ApiError::PermissionDenied`] and sends nothing when the
    /// post is not in the owned-post list.
    pub async fn delete_post(&self, post_id: &str) -> Result<(), ApiError> {
        self.guard()?;
        if !self.session.is_owned(post_id) {
            tracing::warn!(post_id, "Refusing to delete a post not created in this session");
            return Err(ApiError::PermissionDenied {
                post_id: post_id.to_string(),
            });
        }
        self.execute(
            Method::Delete,
            &format!("/api/posts/{post_id}"),
            None,
            Access::Private,
        )
        .await?;
        self.session.release_ownership(post_id);
        Ok(())
    }

    /// `PUT /api/posts/like/:id`. Counts are not adjusted locally; refetch.
    pub async fn like_post(&self, post_id: &str) -> Result<(), ApiError> {
        self.execute(
            Method::Put,
            &format!("/api/posts/like/{post_id}"),
            None,
            Access::Private,
        )
        .await
    }

    /// `PUT /api/posts/unlike/:id`.
    pub async fn unlike_post(&self, post_id: &str) -> Result<(), ApiError> {
        self.execute(
            Method::Put,
            &format!("/api/posts/unlike/{post_id}"),
            None,
            Access::Private,
        )
        .await
    }

    /// `POST /api/posts/comment/:id`. Returns the post's updated comments.
    pub async fn add_comment(&self, post_id: &str, text: &str) -> Result<Vec<Comment>, ApiError> {
        let body = json_body(&PostText {
            text: text.to_string(),
        })?;
        self.fetch(
            Method::Post,
            &format!("/api/posts/comment/{post_id}"),
            Some(body),
            Access::Private,
        )
        .await
    }

    /// `DELETE /api/posts/comment/:id/:comment_id`.
    pub async fn delete_comment(&self, post_id: &str, comment_id: &str) -> Result<(), ApiError> {
        self.execute(
            Method::Delete,
            &format!("/api/posts/comment/{post_id}/{comment_id}"),
            None,
            Access::Private,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::test_support::{client, WEEK};
    use crate::transport::Method;
    use crate::ApiError;

    fn post_json(id: &str, text: &str) -> serde_json::Value {
        json!({"_id": id, "user": "u1", "text": text, "name": "Ada", "likes": [], "comments": []})
    }

    #[tokio::test]
    async fn created_post_becomes_owned() {
        let (client, _store, transport, _redirects) = client();
        client.session().set_session("abc", WEEK);
        transport.respond(200, post_json("p1", "hello"));

        let post = client.create_post("hello").await.unwrap();

        assert_eq!(post.id, "p1");
        assert!(client.owns_post("p1"));
        assert_eq!(client.session().owned_post_ids(), vec!["p1"]);
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.body, Some(json!({"text": "hello"})));
        assert_eq!(sent.header("content-type"), Some("application/json"));
    }

    #[tokio::test]
    async fn failed_create_records_nothing() {
        let (client, _store, transport, _redirects) = client();
        client.session().set_session("abc", WEEK);
        transport.respond(400, json!({"errors": [{"msg": "Text is required"}]}));

        let err = client.create_post("").await.unwrap_err();
        assert_eq!(err.user_message("Error creating post"), "Text is required");
        assert!(client.session().owned_post_ids().is_empty());
    }

    #[tokio::test]
    async fn ownership_round_trip_through_create_and_delete() {
        let (client, _store, transport, _redirects) = client();
        client.session().set_session("abc", WEEK);
        transport.respond(200, post_json("p1", "hello"));
        transport.respond(200, json!({"msg": "Post removed"}));

        assert!(!client.owns_post("p1"));
        client.create_post("hello").await.unwrap();
        assert!(client.owns_post("p1"));

        client.delete_post("p1").await.unwrap();
        assert!(!client.owns_post("p1"));

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Delete);
        assert_eq!(sent.path, "/api/posts/p1");
        assert_eq!(sent.header("x-auth-token"), Some("abc"));
    }

    #[tokio::test]
    async fn deleting_unowned_post_sends_nothing() {
        let (client, _store, transport, redirects) = client();
        client.session().set_session("abc", WEEK);
        client.session().record_ownership("p1");

        let err = client.delete_post("p2").await.unwrap_err();

        assert_eq!(
            err,
            ApiError::PermissionDenied {
                post_id: "p2".to_string()
            }
        );
        assert_eq!(
            err.user_message("Error deleting post"),
            crate::error::NO_PERMISSION_MESSAGE
        );
        assert_eq!(transport.request_count(), 0);
        assert_eq!(redirects.get(), 0);
        assert!(client.owns_post("p1"));
    }

    #[tokio::test]
    async fn malformed_owned_list_denies_delete_without_crashing() {
        let (client, kv, transport, _redirects) = client();
        client.session().set_session("abc", WEEK);
        store::KeyValueStore::set(&kv, "userPosts", "[\"p1\"", None);

        assert!(!client.owns_post("p1"));
        assert!(matches!(
            client.delete_post("p1").await,
            Err(ApiError::PermissionDenied { .. })
        ));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn server_refusal_keeps_ownership() {
        let (client, _store, transport, _redirects) = client();
        client.session().set_session("abc", WEEK);
        client.session().record_ownership("p1");
        transport.respond(401, json!({"msg": "User not authorized"}));

        let err = client.delete_post("p1").await.unwrap_err();
        assert_eq!(err.user_message("Error deleting post"), "User not authorized");
        assert!(client.owns_post("p1"));
    }

    #[tokio::test]
    async fn delete_without_session_redirects_before_ownership_check() {
        let (client, _store, transport, redirects) = client();
        assert_eq!(client.delete_post("p1").await, Err(ApiError::MissingSession));
        assert_eq!(redirects.get(), 1);
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn like_then_unlike_are_two_independent_puts() {
        let (client, _store, transport, _redirects) = client();
        client.session().set_session("abc", WEEK);
        transport.respond(200, json!([{"user": "u1"}]));
        transport.respond(200, json!([]));

        client.like_post("p1").await.unwrap();
        client.unlike_post("p1").await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(requests[0].path, "/api/posts/like/p1");
        assert_eq!(requests[1].method, Method::Put);
        assert_eq!(requests[1].path, "/api/posts/unlike/p1");
        assert!(requests.iter().all(|r| r.body.is_none()));
    }

    #[tokio::test]
    async fn post_feed_requires_session() {
        let (client, _store, transport, redirects) = client();
        assert_eq!(client.posts().await, Err(ApiError::MissingSession));
        assert_eq!(client.post("p1").await, Err(ApiError::MissingSession));
        assert_eq!(client.create_post("hello").await, Err(ApiError::MissingSession));
        assert_eq!(client.like_post("p1").await, Err(ApiError::MissingSession));
        assert_eq!(client.unlike_post("p1").await, Err(ApiError::MissingSession));
        assert_eq!(client.add_comment("p1", "hi").await, Err(ApiError::MissingSession));
        assert_eq!(client.delete_comment("p1", "c1").await, Err(ApiError::MissingSession));
        assert_eq!(transport.request_count(), 0);
        assert_eq!(redirects.get(), 7);
    }

    #[tokio::test]
    async fn comments_are_added_and_removed() {
        let (client, _store, transport, _redirects) = client();
        client.session().set_session("abc", WEEK);
        transport.respond(
            200,
            json!([{"_id": "c1", "user": "u1", "text": "nice", "name": "Ada"}]),
        );
        transport.respond(200, json!([]));

        let comments = client.add_comment("p1", "nice").await.unwrap();
        assert_eq!(comments[0].id, "c1");
        client.delete_comment("p1", "c1").await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].path, "/api/posts/comment/p1");
        assert_eq!(requests[0].body, Some(json!({"text": "nice"})));
        assert_eq!(requests[1].method, Method::Delete);
        assert_eq!(requests[1].path, "/api/posts/comment/p1/c1");
    }
}
