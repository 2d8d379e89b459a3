//! HTTP surface.
//!
//! - `GET  /api/health`
//! - `POST /api/tournaments`, `GET /api/tournaments` (signed in)
//! - `GET  /api/tournaments/:id`, `GET /api/tournaments/:id/standings`
//! - `POST /api/tournaments/:id/results` (JSON) and `/results/form` (owner only)
//! - `GET  /api/join/:link`
//!
//! The signed-in user is read from the identity header configured in
//! [`crate::config::settings::AuthSettings`].

pub mod handlers;
pub mod models;
pub mod parsers;
pub mod routes;
