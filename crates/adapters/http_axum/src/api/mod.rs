//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod posts;
pub mod root;

use axum::Router;
use axum::routing::get;

use postboard_app::ports::{IdGenerator, PostRepository};

use crate::state::AppState;

/// Build the API router.
pub fn routes<R, G>() -> Router<AppState<R, G>>
where
    R: PostRepository + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(root::greet))
        .route("/login", get(root::login))
        // Posts
        .route(
            "/posts",
            get(posts::list::<R, G>).post(posts::create::<R, G>),
        )
        .route(
            "/posts/{id}",
            get(posts::get::<R, G>)
                .put(posts::update::<R, G>)
                .delete(posts::delete::<R, G>),
        )
}
