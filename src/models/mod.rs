pub mod location;
pub mod region;
pub mod marker;

pub use location::{AccuracyTier, Coordinate, PermissionStatus};
pub use region::{LatLng, Region};
pub use marker::{MapAnnotation, MarkerDescriptor};
