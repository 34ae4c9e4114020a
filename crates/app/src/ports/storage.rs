//! Storage port — repository trait for posts.

use std::future::Future;

use postboard_domain::error::PostboardError;
use postboard_domain::id::PostId;
use postboard_domain::post::Post;

/// Insertion-ordered post storage.
///
/// Every method is a single atomic step: implementations that can be
/// reached from several tasks must hold one lock across the whole
/// scan-and-mutate sequence.
pub trait PostRepository {
    /// Append a post.
    ///
    /// Fails with [`PostboardError::DuplicateId`] when `post.id` is stored
    /// or has been handed out before, even if that post was deleted since.
    fn create(&self, post: Post) -> impl Future<Output = Result<Post, PostboardError>> + Send;

    fn get_by_id(
        &self,
        id: PostId,
    ) -> impl Future<Output = Result<Option<Post>, PostboardError>> + Send;

    /// All posts, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Post>, PostboardError>> + Send;

    /// Replace the stored post that has `post.id`, keeping its position.
    ///
    /// Returns `None` when no such post exists.
    fn update(
        &self,
        post: Post,
    ) -> impl Future<Output = Result<Option<Post>, PostboardError>> + Send;

    /// Remove a post, returning it, or `None` when absent.
    fn delete(
        &self,
        id: PostId,
    ) -> impl Future<Output = Result<Option<Post>, PostboardError>> + Send;
}
