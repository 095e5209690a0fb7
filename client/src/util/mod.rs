//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-facing helpers (object URLs, window drag listeners, file intake)
//! sit next to the pure formatting helpers they share with native tests.

pub mod drag_listeners;
pub mod format;
pub mod intake;
pub mod markdown;
pub mod object_url;
pub mod time;
