//! # postboard-domain
//!
//! Pure domain model for the postboard API.
//!
//! ## Responsibilities
//! - Foundational types: the typed [`PostId`](id::PostId), error conventions
//! - Define the **Post** record and its client-supplied half, the **draft**
//! - Own the explicit validation step that turns an untyped JSON body into
//!   a typed [`PostDraft`](post::PostDraft) or a list of field errors
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod post;
