//! Pan/zoom engine for the document preview surface.
//!
//! This crate is compiled into the browser client but has no DOM
//! dependencies of its own. The host component reads pointer and wheel events,
//! hands them to [`transform::PreviewTransform`], and writes the resulting CSS
//! `transform` / `transition` strings back onto the preview element.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`transform`] | Transform state, drag tracking, zoom clamping, CSS output |
//! | [`input`] | Pointer position, modifier keys, wheel deltas |
//! | [`consts`] | Scale limits, zoom step, transition timing |

pub mod consts;
pub mod input;
pub mod transform;
