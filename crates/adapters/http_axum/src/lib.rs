//! # postboard-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** (`/`, `/login`, `/posts`, `/posts/{id}`)
//! - Map HTTP requests into application service calls (driving adapter),
//!   running the explicit validation step on path ids and JSON bodies
//! - Map application results and errors into HTTP responses with the
//!   `{"data": ..}`, `{"post_detail": ..}` and `{"detail": ..}` envelopes
//!
//! ## Dependency rule
//! Depends on `postboard-app` (for port traits and services) and `postboard-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
