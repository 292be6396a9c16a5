//! HSV tolerance band indicator.
//!
//! Renders a hue/saturation wheel with a value bar beside it, dimming every
//! color outside a configured min/max hue, saturation and value band. The
//! renderer is a pure function producing an RGBA buffer; [`HsvIndicator`]
//! wraps it as a component that talks to its host through the [`Surface`]
//! trait, and [`IndicatorWindow`] hosts it in a native winit window.

// ============================================================================
// CRATE CONFIGURATION & IMPORTS
// ============================================================================

pub mod color;
pub mod config;
pub mod error;
pub mod indicator;
pub mod render;
pub mod surface;
pub mod window;

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

pub use color::{hsv_to_rgba, Color, Rgba};
pub use config::IndicatorConfig;
pub use error::IndicatorError;
pub use indicator::{HsvIndicator, IndicatorCommand, MIN_PREFERRED_SIZE};
pub use render::{render_indicator, render_into, Canvas, HsvRange, IndicatorImage};
pub use surface::{Size, Surface};
pub use window::{IndicatorWindow, PixelsSurface};
