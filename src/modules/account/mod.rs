//! "Who am I" endpoints for each actor class.
//!
//! Storefront, seller dashboard and admin screens call these to learn which
//! subject their credential resolves to. They do nothing beyond echoing the
//! bound identity.

pub mod controller;
pub mod model;
pub mod router;
