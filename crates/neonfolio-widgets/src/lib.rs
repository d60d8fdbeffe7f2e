//! Neonfolio Widget State Machines
//!
//! Pure interaction logic for the portfolio's two engineered widgets:
//!
//! - [`carousel`] - geometry and drag/snap gesture classification for the
//!   projects carousel
//! - [`proximity`] - pointer-proximity weight and font-variation
//!   interpolation for the "magnetic ink" text effect
//!
//! Nothing in this crate touches the UI framework. The Dioxus layer feeds
//! in pointer positions and measured layout, and renders whatever these
//! state machines report. That split keeps every invariant testable
//! without a window.

pub mod carousel;
pub mod proximity;

pub use carousel::{CardPose, CardRelation, CarouselMetrics, CarouselState, DRAG_THRESHOLD_DIVISOR};
pub use proximity::{Falloff, ParseFalloffError, VariationAxes};
