//! Shared application state for axum handlers.

use std::sync::Arc;

use postboard_app::ports::{IdGenerator, PostRepository};
use postboard_app::services::post_service::PostService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository and id generator to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R, G> {
    /// Post registry use-cases.
    pub post_service: Arc<PostService<R, G>>,
}

impl<R, G> Clone for AppState<R, G> {
    fn clone(&self) -> Self {
        Self {
            post_service: Arc::clone(&self.post_service),
        }
    }
}

impl<R, G> AppState<R, G>
where
    R: PostRepository + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(post_service: PostService<R, G>) -> Self {
        Self {
            post_service: Arc::new(post_service),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service was already shared, e.g. for seeding
    /// before the router is built.
    pub fn from_arc(post_service: Arc<PostService<R, G>>) -> Self {
        Self { post_service }
    }
}
