//! In-memory implementation of [`PostRepository`].

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;

use postboard_app::ports::PostRepository;
use postboard_domain::error::{DuplicateIdError, PostboardError};
use postboard_domain::id::PostId;
use postboard_domain::post::Post;

#[derive(Debug, Default)]
struct Store {
    posts: Vec<Post>,
    /// Every id ever inserted, including deleted ones.
    issued: HashSet<PostId>,
}

impl Store {
    fn position(&self, id: PostId) -> Option<usize> {
        self.posts.iter().position(|post| post.id == id)
    }
}

/// Vector-backed post repository.
///
/// Cloning is cheap and every clone shares the same storage.
#[derive(Debug, Default, Clone)]
pub struct InMemoryPostRepository {
    store: Arc<Mutex<Store>>,
}

impl InMemoryPostRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PostRepository for InMemoryPostRepository {
    fn create(&self, post: Post) -> impl Future<Output = Result<Post, PostboardError>> + Send {
        let store = Arc::clone(&self.store);
        async move {
            let mut store = store.lock().await;
            if !store.issued.insert(post.id) {
                return Err(DuplicateIdError { id: post.id }.into());
            }
            store.posts.push(post.clone());
            Ok(post)
        }
    }

    fn get_by_id(
        &self,
        id: PostId,
    ) -> impl Future<Output = Result<Option<Post>, PostboardError>> + Send {
        let store = Arc::clone(&self.store);
        async move {
            let store = store.lock().await;
            Ok(store.posts.iter().find(|post| post.id == id).cloned())
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Post>, PostboardError>> + Send {
        let store = Arc::clone(&self.store);
        async move {
            let posts = store.lock().await.posts.clone();
            Ok(posts)
        }
    }

    fn update(
        &self,
        post: Post,
    ) -> impl Future<Output = Result<Option<Post>, PostboardError>> + Send {
        let store = Arc::clone(&self.store);
        async move {
            let mut store = store.lock().await;
            let Some(idx) = store.position(post.id) else {
                return Ok(None);
            };
            store.posts[idx] = post.clone();
            Ok(Some(post))
        }
    }

    fn delete(
        &self,
        id: PostId,
    ) -> impl Future<Output = Result<Option<Post>, PostboardError>> + Send {
        let store = Arc::clone(&self.store);
        async move {
            let mut store = store.lock().await;
            Ok(store.position(id).map(|idx| store.posts.remove(idx)))
        }
    }
}
