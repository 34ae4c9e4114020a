//! Id generation port.

use postboard_domain::id::PostId;

/// Produces candidate ids for new posts.
///
/// Candidates are not required to be unique; the repository rejects ids
/// that are already taken and the service asks for another one.
pub trait IdGenerator {
    fn next_id(&self) -> PostId;
}
