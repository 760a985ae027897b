//! Client state: stored records and the transient UI state around them.

pub mod auth;
pub mod preferences;
pub mod session;
pub mod ui;
