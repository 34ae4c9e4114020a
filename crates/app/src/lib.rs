//! # postboard-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PostRepository` — ordered storage of posts with id uniqueness
//!   - `IdGenerator` — source of candidate post ids
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `PostService` — list, create, get, update, delete, seed
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (`RandomIdGenerator`)
//!
//! ## Dependency rule
//! Depends on `postboard-domain` only (plus `rand` for id generation).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod id_generator;
pub mod ports;
pub mod services;
