//! Random post id generator backed by `rand`.

use rand::Rng;

use postboard_domain::id::PostId;

use crate::ports::IdGenerator;

/// Draws ids uniformly from `0..=i64::MAX`.
///
/// Uniqueness is not guaranteed here; see [`PostRepository::create`](crate::ports::PostRepository::create).
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> PostId {
        PostId::new(rand::thread_rng().gen_range(0..=i64::MAX))
    }
}
