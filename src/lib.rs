//! # Marketplace API
//!
//! The request authentication gate of the Marketplace backend, served with
//! Axum.
//!
//! ## Trust models
//!
//! | Actor | Channel | Credential |
//! |-------|---------|------------|
//! | End user (storefront) | cookie | `token` cookie |
//! | Seller (dashboard) | header | raw `Authorization` value, role `seller` |
//! | Admin | header | raw `Authorization` value, role `admin` |
//!
//! The channels are never merged. An end-user route does not read
//! `Authorization`, and a staff route does not read cookies.
//!
//! ## Failure responses
//!
//! Every rejection is `{ "success": false, "message": ... }`. The messages are
//! listed in [`middleware::classify`].
//!
//! ## Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key   # required
//! JWT_ACCESS_EXPIRY=3600
//! ALLOWED_ORIGINS=http://localhost:5173,http://localhost:5174
//! HOST=0.0.0.0
//! PORT=3000
//! LOG_LEVEL=info
//! ```
//!
//! ## Modules
//!
//! - [`logging`]: tracing setup and request logging
//! - [`middleware`]: the gate, identity binding and error classification
//! - [`modules`]: feature modules
//! - [`router`]: main application router
//! - [`state`]: shared application state

pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use marketplace_auth;
pub use marketplace_config;
pub use marketplace_core;
