//! Middleware and extractors for the request authentication gate.
//!
//! - [`extract`]: pulls a token out of a request for one channel
//! - [`auth`]: the gate layers that verify and bind
//! - [`identity`]: the per-request [`IdentityContext`](identity::IdentityContext) and its extractors
//! - [`classify`]: failure kind to status/message mapping
//! - [`role`]: role checks for header-channel routes
//!
//! # Authentication Flow
//!
//! 1. Client sends the `token` cookie (end users) or a raw `Authorization`
//!    header (admins and sellers)
//! 2. The gate layer extracts and verifies the token
//! 3. On success the identity is bound to the request; on failure the
//!    classified error is returned and the handler never runs
//! 4. Handlers read the identity with `UserIdentity` or `AdminIdentity`

pub mod auth;
pub mod classify;
pub mod extract;
pub mod identity;
pub mod role;
