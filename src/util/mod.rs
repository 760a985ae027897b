//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, timers, navigation,
//! media queries, the document itself) behind small traits so the flows
//! built on them run unchanged in unit tests.

pub mod auth_flow;
pub mod clock;
pub mod entrance;
pub mod form;
pub mod gate;
pub mod media;
pub mod navigate;
pub mod paint;
pub mod preference_sync;
pub mod schedule;
pub mod storage;
