//! Component contract shared by every widget on the display.
//!
//! Components are driven from outside, never by each other:
//!
//! - [`Component::update`] folds new telemetry into component state and never
//!   touches the surface.
//! - [`Component::paint`] renders the current state into the component's own
//!   frame. It takes `&self`, so painting cannot change state.
//!
//! Keeping the two apart lets telemetry arrive at a different cadence than
//! display refreshes.

use crate::surface::RenderSurface;
use crate::telemetry::Telemetry;

/// A widget owning one frame of the display.
pub trait Component {
    /// Fold a new telemetry sample into component state.
    fn update(
        &mut self,
        telemetry: &Telemetry,
    );

    /// Redraw the component's frame through the full page loop.
    fn paint<S: RenderSurface>(
        &self,
        surface: &mut S,
    );
}
