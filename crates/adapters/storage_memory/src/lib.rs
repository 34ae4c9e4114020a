//! # postboard-adapter-storage-memory
//!
//! Process-lifetime, in-memory persistence adapter.
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `postboard-app::ports::storage`
//! - Keep posts in insertion order behind a single async mutex
//! - Remember every id ever stored so deleted ids are never handed out again
//!
//! ## Dependency rule
//! Depends on `postboard-app` (for port traits) and `postboard-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod post_repo;

pub use post_repo::InMemoryPostRepository;
