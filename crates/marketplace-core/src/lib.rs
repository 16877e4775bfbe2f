//! # Marketplace Core
//!
//! Foundational types shared by every Marketplace crate.
//!
//! - [`errors`]: the HTTP-facing [`AppError`] and its JSON body
//!
//! Every failure the API emits has the same wire shape:
//!
//! ```json
//! { "success": false, "message": "Access Denied" }
//! ```

pub mod errors;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorBody};
