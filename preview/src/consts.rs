//! Shared numeric constants for the preview crate.

// ── Scale ───────────────────────────────────────────────────────

/// Smallest allowed zoom factor.
pub const MIN_SCALE: f64 = 0.5;

/// Largest allowed zoom factor.
pub const MAX_SCALE: f64 = 3.0;

/// Zoom factor at mount and after reset.
pub const DEFAULT_SCALE: f64 = 1.0;

/// Increment applied by the zoom buttons and by one wheel notch.
pub const ZOOM_STEP: f64 = 0.1;

// ── Presentation ────────────────────────────────────────────────

/// CSS transition used when the surface is not being dragged.
pub const TRANSITION: &str = "transform 0.1s";
