pub mod location_viewmodel;
pub mod map_viewmodel;

pub use location_viewmodel::{LocationAction, LocationSession};
pub use map_viewmodel::{MapView, MapViewModel, Viewport, ViewportProjector};
