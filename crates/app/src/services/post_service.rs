//! Post service — use-cases for the post registry.

use postboard_domain::error::{NotFoundError, PostboardError};
use postboard_domain::id::PostId;
use postboard_domain::post::{Post, PostDraft};

use crate::ports::{IdGenerator, PostRepository};

/// How many fresh ids `create_post` draws before giving up.
pub const MAX_ID_ATTEMPTS: usize = 16;

/// Application service for post CRUD operations.
pub struct PostService<R, G> {
    repo: R,
    ids: G,
}

impl<R, G> PostService<R, G>
where
    R: PostRepository + Sync,
    G: IdGenerator + Sync,
{
    /// Create a new service backed by the given repository and id source.
    pub fn new(repo: R, ids: G) -> Self {
        Self { repo, ids }
    }

    /// List all posts in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_posts(&self) -> Result<Vec<Post>, PostboardError> {
        self.repo.get_all().await
    }

    /// Store a new post under a freshly generated id.
    ///
    /// Ids already in use, or used before, are rejected by the repository
    /// and a new one is drawn.
    ///
    /// # Errors
    ///
    /// Returns [`PostboardError::IdSpaceExhausted`] after
    /// [`MAX_ID_ATTEMPTS`] collisions, or a storage error from the repository.
    pub async fn create_post(&self, draft: PostDraft) -> Result<Post, PostboardError> {
        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            match self.repo.create(draft.clone().into_post(id)).await {
                Ok(post) => {
                    tracing::debug!(post_id = %post.id, "post created");
                    return Ok(post);
                }
                Err(PostboardError::DuplicateId(err)) => {
                    tracing::warn!(post_id = %err.id, attempt, "post id collision, drawing another");
                }
                Err(err) => return Err(err),
            }
        }
        Err(PostboardError::IdSpaceExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    /// Look up a post by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`PostboardError::NotFound`] when no post with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_post(&self, id: PostId) -> Result<Post, PostboardError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::post(id).into())
    }

    /// Replace every field of an existing post except its id.
    ///
    /// # Errors
    ///
    /// Returns [`PostboardError::NotFound`] when no post with `id` exists,
    /// or a storage error from the repository.
    pub async fn update_post(&self, id: PostId, draft: PostDraft) -> Result<Post, PostboardError> {
        let updated = self
            .repo
            .update(draft.into_post(id))
            .await?
            .ok_or_else(|| PostboardError::from(NotFoundError::post(id)))?;
        tracing::debug!(post_id = %id, "post updated");
        Ok(updated)
    }

    /// Delete a post by id.
    ///
    /// # Errors
    ///
    /// Returns [`PostboardError::NotFound`] when no post with `id` exists,
    /// or a storage error from the repository.
    pub async fn delete_post(&self, id: PostId) -> Result<(), PostboardError> {
        match self.repo.delete(id).await? {
            Some(_) => {
                tracing::debug!(post_id = %id, "post deleted");
                Ok(())
            }
            None => Err(NotFoundError::post(id).into()),
        }
    }

    /// Insert posts that already carry their ids, returning how many were stored.
    ///
    /// # Errors
    ///
    /// Returns [`PostboardError::DuplicateId`] if a seed id is taken, or a
    /// storage error from the repository.
    pub async fn seed(&self, posts: Vec<Post>) -> Result<usize, PostboardError> {
        let mut count = 0;
        for post in posts {
            self.repo.create(post).await?;
            count += 1;
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postboard_domain::error::DuplicateIdError;
    use postboard_domain::post::sample_posts;
    use std::collections::{HashSet, VecDeque};
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryPostRepo {
        store: Mutex<(Vec<Post>, HashSet<PostId>)>,
    }

    impl PostRepository for InMemoryPostRepo {
        fn create(&self, post: Post) -> impl Future<Output = Result<Post, PostboardError>> + Send {
            let mut guard = self.store.lock().unwrap();
            let (posts, issued) = &mut *guard;
            let result = if issued.insert(post.id) {
                posts.push(post.clone());
                Ok(post)
            } else {
                Err(DuplicateIdError { id: post.id }.into())
            };
            async { result }
        }

        fn get_by_id(
            &self,
            id: PostId,
        ) -> impl Future<Output = Result<Option<Post>, PostboardError>> + Send {
            let guard = self.store.lock().unwrap();
            let result = guard.0.iter().find(|p| p.id == id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Post>, PostboardError>> + Send {
            let result = self.store.lock().unwrap().0.clone();
            async { Ok(result) }
        }

        fn update(
            &self,
            post: Post,
        ) -> impl Future<Output = Result<Option<Post>, PostboardError>> + Send {
            let id = post.id;
            let mut guard = self.store.lock().unwrap();
            let result = guard.0.iter_mut().find(|p| p.id == id).map(|slot| {
                *slot = post;
                slot.clone()
            });
            async { Ok(result) }
        }

        fn delete(
            &self,
            id: PostId,
        ) -> impl Future<Output = Result<Option<Post>, PostboardError>> + Send {
            let mut guard = self.store.lock().unwrap();
            let result = guard
                .0
                .iter()
                .position(|p| p.id == id)
                .map(|idx| guard.0.remove(idx));
            async { Ok(result) }
        }
    }

    /// Hands out a fixed list of ids, then repeats the last one.
    struct ScriptedIds(Mutex<VecDeque<i64>>);

    impl ScriptedIds {
        fn new(ids: &[i64]) -> Self {
            Self(Mutex::new(ids.iter().copied().collect()))
        }
    }

    impl IdGenerator for ScriptedIds {
        fn next_id(&self) -> PostId {
            let mut ids = self.0.lock().unwrap();
            let id = if ids.len() > 1 {
                ids.pop_front().unwrap()
            } else {
                ids[0]
            };
            PostId::new(id)
        }
    }

    fn make_service(ids: &[i64]) -> PostService<InMemoryPostRepo, ScriptedIds> {
        PostService::new(InMemoryPostRepo::default(), ScriptedIds::new(ids))
    }

    #[tokio::test]
    async fn should_create_post_with_generated_id() {
        let svc = make_service(&[10]);
        let created = svc.create_post(PostDraft::new("a", "b")).await.unwrap();
        assert_eq!(created.id, PostId::new(10));

        let fetched = svc.get_post(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_draw_another_id_when_candidate_collides() {
        let svc = make_service(&[1, 1, 5]);
        svc.seed(sample_posts()).await.unwrap();

        let created = svc.create_post(PostDraft::new("a", "b")).await.unwrap();
        assert_eq!(created.id, PostId::new(5));
    }

    #[tokio::test]
    async fn should_give_up_when_every_candidate_collides() {
        let svc = make_service(&[1]);
        svc.seed(sample_posts()).await.unwrap();

        let result = svc.create_post(PostDraft::new("a", "b")).await;
        assert!(matches!(
            result,
            Err(PostboardError::IdSpaceExhausted {
                attempts: MAX_ID_ATTEMPTS
            })
        ));
        assert_eq!(svc.list_posts().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_not_reuse_id_of_deleted_post() {
        let svc = make_service(&[7, 7, 8]);
        let first = svc.create_post(PostDraft::new("a", "b")).await.unwrap();
        svc.delete_post(first.id).await.unwrap();

        let second = svc.create_post(PostDraft::new("c", "d")).await.unwrap();
        assert_eq!(second.id, PostId::new(8));
    }

    #[tokio::test]
    async fn should_return_not_found_when_post_missing() {
        let svc = make_service(&[1]);
        let result = svc.get_post(PostId::new(9999)).await;
        match result {
            Err(PostboardError::NotFound(err)) => {
                assert_eq!(err.to_string(), "Post with ID 9999 was not found");
            }
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_list_posts_in_insertion_order() {
        let svc = make_service(&[30, 20]);
        svc.seed(sample_posts()).await.unwrap();
        svc.create_post(PostDraft::new("x", "y")).await.unwrap();
        svc.create_post(PostDraft::new("z", "w")).await.unwrap();

        let ids: Vec<_> = svc
            .list_posts()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id.as_i64())
            .collect();
        assert_eq!(ids, vec![1, 2, 30, 20]);
    }

    #[tokio::test]
    async fn should_update_post_and_keep_its_id() {
        let svc = make_service(&[1]);
        svc.seed(sample_posts()).await.unwrap();

        let updated = svc
            .update_post(PostId::new(2), PostDraft::new("new", "body").rating(3))
            .await
            .unwrap();
        assert_eq!(updated.id, PostId::new(2));
        assert_eq!(updated.title, "new");
        assert_eq!(updated.rating, Some(3));

        let all = svc.list_posts().await.unwrap();
        assert_eq!(all[1], updated);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_post() {
        let svc = make_service(&[1]);
        let result = svc
            .update_post(PostId::new(3), PostDraft::new("a", "b"))
            .await;
        assert!(matches!(result, Err(PostboardError::NotFound(_))));
        assert!(svc.list_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_delete_post() {
        let svc = make_service(&[1]);
        svc.seed(sample_posts()).await.unwrap();

        svc.delete_post(PostId::new(1)).await.unwrap();

        let result = svc.get_post(PostId::new(1)).await;
        assert!(matches!(result, Err(PostboardError::NotFound(_))));
        assert_eq!(svc.list_posts().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_twice() {
        let svc = make_service(&[1]);
        svc.seed(sample_posts()).await.unwrap();

        svc.delete_post(PostId::new(1)).await.unwrap();
        let result = svc.delete_post(PostId::new(1)).await;
        assert!(matches!(result, Err(PostboardError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_reject_seed_with_taken_id() {
        let svc = make_service(&[1]);
        svc.seed(sample_posts()).await.unwrap();

        let result = svc.seed(sample_posts()).await;
        assert!(matches!(result, Err(PostboardError::DuplicateId(_))));
    }
}
